use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertKind {
    #[default]
    Error,
    Success,
    Warning,
    Info,
}

impl AlertKind {
    fn as_str(self) -> &'static str {
        match self {
            AlertKind::Error => "error",
            AlertKind::Success => "success",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        }
    }
}

/// Inline banner for a panel-level message. Renders nothing for an empty message.
#[component]
pub fn Alert(#[props(default)] kind: AlertKind, message: String) -> Element {
    if message.is_empty() {
        return rsx! {};
    }
    rsx! {
        div { class: "alert", role: "alert", "data-kind": kind.as_str(), "{message}" }
    }
}
