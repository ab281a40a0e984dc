use dioxus::prelude::*;

/// Colour tone for badges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BadgeTone {
    Success,
    Warning,
    Muted,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
            BadgeTone::Muted => "muted",
        }
    }
}

/// Inline pill for short labels such as a requisition status.
#[component]
pub fn Badge(
    tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}
