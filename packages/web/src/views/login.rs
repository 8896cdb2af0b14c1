//! Login page.

use std::time::Duration;

use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Button, FieldError, Input, Label};
use ui::forms::auth::{submit_login, LoginForm};
use ui::forms::{FormPhase, ValidationErrors, REDIRECT_DELAY_SECS};
use ui::{sleep, use_api};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let client = use_api();
    let nav = use_navigator();
    let mut form = use_signal(LoginForm::default);
    let mut errors = use_signal(ValidationErrors::new);
    let mut phase = use_signal(|| FormPhase::Idle);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            errors.set(ValidationErrors::new());
            let redirect = async move {
                sleep(Duration::from_secs(REDIRECT_DELAY_SECS)).await;
                nav.replace(Route::Home {});
            };
            let invalid = submit_login(&client, &form(), |next| phase.set(next), redirect).await;
            errors.set(invalid);
        });
    };

    let current = form();
    let submitting = phase().is_submitting();

    rsx! {
        div {
            class: "card form-card",
            h1 { class: "view-title", "Sign in" }
            Alert { message: phase().error().unwrap_or_default().to_string() }
            Alert { kind: AlertKind::Success, message: phase().success().unwrap_or_default().to_string() }
            form {
                onsubmit: onsubmit,
                div {
                    class: "form-row",
                    Label { html_for: "login-email", "Email" }
                    Input {
                        id: "login-email",
                        r#type: "email",
                        value: current.email.clone(),
                        invalid: errors().has("email"),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                    FieldError { message: errors().message("email") }
                }
                div {
                    class: "form-row",
                    Label { html_for: "login-password", "Password" }
                    Input {
                        id: "login-password",
                        r#type: "password",
                        value: current.password.clone(),
                        invalid: errors().has("password"),
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                    FieldError { message: errors().message("password") }
                }
                Button {
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Signing in..." } else { "Sign in" }
                }
            }
            p {
                class: "view-muted",
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
            p {
                class: "view-muted",
                "Email not confirmed? "
                Link { to: Route::SendValidationEmail {}, "Send the link again" }
            }
        }
    }
}
