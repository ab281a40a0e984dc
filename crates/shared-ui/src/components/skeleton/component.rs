use dioxus::prelude::*;

/// Pulsing placeholder block shown while data loads.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            aria_hidden: "true",
            ..merged,
        }
    }
}

/// A loading message over a few skeleton rows.
#[component]
pub fn LoadingPlaceholder(message: String, #[props(default = 3)] rows: usize) -> Element {
    rsx! {
        div { class: "loading-placeholder", role: "status",
            p { class: "loading-message", "{message}" }
            for i in 0..rows {
                Skeleton { key: "{i}" }
            }
        }
    }
}
