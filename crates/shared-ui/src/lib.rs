//! Hirewire component library.
//!
//! Small, unopinionated building blocks styled by per-component stylesheets.
//! Components accept global HTML attributes and merge them over their own.

pub mod components;

pub use components::*;
