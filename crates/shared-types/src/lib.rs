pub mod error;
pub mod feature_flags;

pub mod guard;
pub mod job;
pub mod placeholder;
pub mod requisition;
pub mod resume;
pub mod session;

pub use error::*;
pub use feature_flags::*;

pub use guard::*;
pub use job::*;
pub use requisition::*;
pub use resume::*;
pub use session::*;
// placeholder types are NOT glob re-exported: call sites name
// `shared_types::placeholder::*` so mock figures stay visibly mock.
