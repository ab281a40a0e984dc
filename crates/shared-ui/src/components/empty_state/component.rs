use dioxus::prelude::*;

/// Centered message shown where a list would be when it has no items.
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "empty-state",
            p { "{message}" }
        }
    }
}
