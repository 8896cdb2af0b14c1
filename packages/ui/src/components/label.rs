use dioxus::prelude::*;

#[component]
pub fn Label(#[props(default)] html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: html_for, {children} }
    }
}

/// Validation message under a field. Renders nothing when empty.
#[component]
pub fn FieldError(message: String) -> Element {
    if message.is_empty() {
        return rsx! {};
    }
    rsx! {
        p { class: "field-error", "{message}" }
    }
}
