use std::time::Duration;

use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Button, FieldError, Input, Label};
use ui::forms::auth::{RegisterForm, REGISTER_SUCCESS};
use ui::forms::{strength_label, FormPhase, ValidationErrors, REDIRECT_DELAY_SECS};
use ui::{sleep, use_api};

use crate::Route;

const STRENGTH_COLORS: [&str; 5] = ["#e2e8f0", "#dc2626", "#f97316", "#eab308", "#16a34a"];

#[component]
pub fn Register() -> Element {
    let client = use_api();
    let nav = use_navigator();
    let mut form = use_signal(RegisterForm::default);
    let mut errors = use_signal(ValidationErrors::new);
    let mut phase = use_signal(|| FormPhase::Idle);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            phase.set(FormPhase::Validating);
            let current = form();
            if let Err(invalid) = current.validate() {
                errors.set(invalid);
                phase.set(FormPhase::Idle);
                return;
            }
            errors.set(ValidationErrors::new());
            phase.set(FormPhase::Submitting);

            let result = client
                .register(current.username.trim(), current.email.trim(), &current.password)
                .await;
            match result {
                Ok(ack) => {
                    phase.set(FormPhase::Success(ack.message_or(REGISTER_SUCCESS)));
                    sleep(Duration::from_secs(REDIRECT_DELAY_SECS)).await;
                    nav.replace(Route::Login {});
                }
                Err(e) => phase.set(FormPhase::Error(e.to_string())),
            }
        });
    };

    let current = form();
    let submitting = phase().is_submitting();
    let strength = current.strength();
    let meter_width = format!("{}%", u32::from(strength) * 25);
    let meter_color = STRENGTH_COLORS[usize::from(strength.min(4))];

    rsx! {
        div {
            class: "card form-card",
            h1 { class: "view-title", "Create an account" }
            Alert { message: phase().error().unwrap_or_default().to_string() }
            Alert { kind: AlertKind::Success, message: phase().success().unwrap_or_default().to_string() }
            form {
                onsubmit: onsubmit,
                div {
                    class: "form-row",
                    Label { html_for: "register-username", "Username" }
                    Input {
                        id: "register-username",
                        value: current.username.clone(),
                        invalid: errors().has("username"),
                        oninput: move |evt: FormEvent| form.write().username = evt.value(),
                    }
                    FieldError { message: errors().message("username") }
                }
                div {
                    class: "form-row",
                    Label { html_for: "register-email", "Email" }
                    Input {
                        id: "register-email",
                        r#type: "email",
                        value: current.email.clone(),
                        invalid: errors().has("email"),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                    FieldError { message: errors().message("email") }
                }
                div {
                    class: "form-row",
                    Label { html_for: "register-password", "Password" }
                    Input {
                        id: "register-password",
                        r#type: "password",
                        value: current.password.clone(),
                        invalid: errors().has("password"),
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                    if !current.password.is_empty() {
                        div {
                            style: "height: 4px; background: #e2e8f0; border-radius: 2px; margin-top: 0.4rem;",
                            div {
                                style: "height: 100%; border-radius: 2px; width: {meter_width}; background: {meter_color};",
                            }
                        }
                        p { class: "view-muted", "{strength_label(strength)}" }
                    }
                    FieldError { message: errors().message("password") }
                }
                div {
                    class: "form-row",
                    Label { html_for: "register-confirm", "Confirm password" }
                    Input {
                        id: "register-confirm",
                        r#type: "password",
                        value: current.confirm_password.clone(),
                        invalid: errors().has("confirm_password"),
                        oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                    }
                    FieldError { message: errors().message("confirm_password") }
                }
                Button {
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Creating account..." } else { "Register" }
                }
            }
            p {
                class: "view-muted",
                "Already registered? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
