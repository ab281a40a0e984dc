pub mod badge;
pub mod button;
pub mod card;
pub mod empty_state;
pub mod metric;
pub mod page_header;
pub mod skeleton;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use empty_state::*;
pub use metric::*;
pub use page_header::*;
pub use skeleton::*;

#[cfg(test)]
pub(crate) fn render(element: dioxus::prelude::Element) -> String {
    dioxus_ssr::render_element(element)
}
