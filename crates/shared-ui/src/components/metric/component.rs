use dioxus::prelude::*;

/// Row of metric tiles.
#[component]
pub fn MetricGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "metric-grid", {children} }
    }
}

/// A single labelled figure. `caption` is a small note under the value,
/// e.g. flagging sample data.
#[component]
pub fn MetricCard(label: String, value: String, caption: Option<String>) -> Element {
    rsx! {
        div { class: "metric-card",
            span { class: "metric-label", "{label}" }
            span { class: "metric-value", "{value}" }
            if let Some(caption) = caption {
                span { class: "metric-caption", "{caption}" }
            }
        }
    }
}
