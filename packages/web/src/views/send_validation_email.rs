use std::time::Duration;

use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Button, FieldError, Input, Label};
use ui::forms::auth::{validate_resend_email, ResendGate, SENT_NOTICE_SECS};
use ui::forms::ValidationErrors;
use ui::{sleep, use_api};

const SENT_NOTICE: &str = "Confirmation email sent. Check your inbox.";

/// Resend the confirmation link, at most once per cooldown.
#[component]
pub fn SendValidationEmail() -> Element {
    let client = use_api();
    let mut email = use_signal(String::new);
    let mut errors = use_signal(ValidationErrors::new);
    let mut gate = use_signal(ResendGate::default);
    let mut notice = use_signal(|| false);
    let mut failure = use_signal(String::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let address = email().trim().to_string();
            if let Err(invalid) = validate_resend_email(&address) {
                errors.set(invalid);
                return;
            }
            errors.set(ValidationErrors::new());
            if !gate.write().begin() {
                return;
            }
            failure.set(String::new());

            match client.resend_confirmation_email(&address).await {
                Ok(_) => {
                    gate.write().sent();
                    notice.set(true);
                    spawn(async move {
                        sleep(Duration::from_secs(SENT_NOTICE_SECS)).await;
                        notice.set(false);
                    });
                    while !gate.peek().can_send() {
                        sleep(Duration::from_secs(1)).await;
                        gate.write().tick();
                    }
                }
                Err(e) => {
                    gate.write().failed();
                    failure.set(e.to_string());
                }
            }
        });
    };

    let current = gate();
    let label = if current.can_send() {
        "Send confirmation email".to_string()
    } else if current.seconds_left() > 0 {
        format!("Resend in {} s", current.seconds_left())
    } else {
        "Sending...".to_string()
    };

    rsx! {
        div {
            class: "card form-card",
            h1 { class: "view-title", "Confirm your email" }
            p { class: "view-muted", "Enter the address you registered with and we will send a new link." }
            Alert { message: failure() }
            if notice() {
                Alert { kind: AlertKind::Success, message: SENT_NOTICE.to_string() }
            }
            form {
                onsubmit: onsubmit,
                div {
                    class: "form-row",
                    Label { html_for: "resend-email", "Email" }
                    Input {
                        id: "resend-email",
                        r#type: "email",
                        value: email(),
                        invalid: errors().has("email"),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    FieldError { message: errors().message("email") }
                }
                Button {
                    r#type: "submit",
                    disabled: !current.can_send(),
                    "{label}"
                }
            }
        }
    }
}
