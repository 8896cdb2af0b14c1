use dioxus::prelude::*;

/// Text-like `<input>`. `invalid` flags the field red.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] class: String,
    #[props(default)] disabled: bool,
    #[props(default)] invalid: bool,
    maxlength: Option<u32>,
    min: Option<String>,
    max: Option<String>,
    oninput: Option<EventHandler<FormEvent>>,
    onblur: Option<EventHandler<FocusEvent>>,
) -> Element {
    let kind = r#type;
    rsx! {
        input {
            id,
            class: "input {class}",
            r#type: kind,
            placeholder,
            value,
            disabled,
            maxlength: maxlength.map(|n| n.to_string()),
            min,
            max,
            "aria-invalid": if invalid { "true" } else { "false" },
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
            onblur: move |evt| {
                if let Some(handler) = onblur {
                    handler.call(evt);
                }
            },
        }
    }
}
