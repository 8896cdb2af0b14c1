use dioxus::prelude::*;
use store::Role;

use super::LookupBar;
use crate::components::{Alert, AlertKind, Button, Input, Label};
use crate::forms::admin::{
    user_lookup_error, user_update_error, validate_user_id, UserEditForm, PROMOTION_WARNING,
};
use crate::forms::FormPhase;
use crate::use_api;

/// Loads one user, edits it, and sends only the changed fields.
#[component]
pub(super) fn UpdateUserPanel() -> Element {
    let client = use_api();
    let query = use_signal(String::new);
    let mut form = use_signal(|| None::<UserEditForm>);
    let mut phase = use_signal(|| FormPhase::Idle);

    let on_lookup = {
        let client = client.clone();
        move |user_id: String| {
            if let Err(message) = validate_user_id(&user_id) {
                phase.set(FormPhase::Error(message));
                return;
            }
            let client = client.clone();
            spawn(async move {
                phase.set(FormPhase::Submitting);
                match client.get_user(&user_id).await {
                    Ok(user) => {
                        form.set(Some(UserEditForm::new(user_id, (&user).into())));
                        phase.set(FormPhase::Idle);
                    }
                    Err(e) => {
                        form.set(None);
                        phase.set(FormPhase::Error(user_lookup_error(&e)));
                    }
                }
            });
        }
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(current) = form() else {
            return;
        };
        if current.locked || !current.is_dirty() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            phase.set(FormPhase::Submitting);
            let update = current.fields.diff(&current.original);
            match client.update_user_by_id(&current.user_id, &update).await {
                Ok(_) => {
                    let message = form
                        .write()
                        .as_mut()
                        .map(UserEditForm::saved)
                        .unwrap_or_default();
                    tracing::info!(user_id = %current.user_id, "user updated");
                    phase.set(FormPhase::Success(message.to_string()));
                }
                Err(e) => phase.set(FormPhase::Error(user_update_error(&e))),
            }
        });
    };

    let submitting = phase().is_submitting();

    rsx! {
        LookupBar {
            id: "update-user-id",
            placeholder: "User ID",
            value: query,
            action: "Load",
            busy: submitting,
            on_submit: on_lookup,
        }
        Alert { message: phase().error().unwrap_or_default().to_string() }
        Alert { kind: AlertKind::Success, message: phase().success().unwrap_or_default().to_string() }

        if let Some(current) = form() {
            form {
                class: "card",
                onsubmit: onsubmit,
                div {
                    class: "form-grid",
                    div {
                        class: "form-row",
                        Label { html_for: "edit-username", "Username" }
                        Input {
                            id: "edit-username",
                            value: current.fields.username.clone(),
                            disabled: current.locked,
                            oninput: move |evt: FormEvent| {
                                if let Some(f) = form.write().as_mut() {
                                    f.fields.username = evt.value();
                                }
                            },
                        }
                    }
                    div {
                        class: "form-row",
                        Label { html_for: "edit-email", "Email" }
                        Input {
                            id: "edit-email",
                            r#type: "email",
                            value: current.fields.email.clone(),
                            disabled: current.locked,
                            oninput: move |evt: FormEvent| {
                                if let Some(f) = form.write().as_mut() {
                                    f.fields.email = evt.value();
                                }
                            },
                        }
                    }
                    div {
                        class: "form-row",
                        Label { html_for: "edit-image", "Profile image URL" }
                        Input {
                            id: "edit-image",
                            value: current.fields.profile_image_url.clone(),
                            disabled: current.locked,
                            oninput: move |evt: FormEvent| {
                                if let Some(f) = form.write().as_mut() {
                                    f.fields.profile_image_url = evt.value();
                                }
                            },
                        }
                    }
                    div {
                        class: "form-row",
                        Label { html_for: "edit-role", "Role" }
                        select {
                            id: "edit-role",
                            class: "input",
                            disabled: current.locked,
                            onchange: move |evt: FormEvent| {
                                if let Some(f) = form.write().as_mut() {
                                    f.fields.role = Role::parse(&evt.value());
                                }
                            },
                            for role in [Role::User, Role::Admin] {
                                option {
                                    key: "{role}",
                                    value: role.as_str(),
                                    selected: current.fields.role == role,
                                    "{role}"
                                }
                            }
                        }
                    }
                }
                label {
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: current.fields.is_valid_email,
                        disabled: current.locked,
                        onchange: move |evt: FormEvent| {
                            if let Some(f) = form.write().as_mut() {
                                f.fields.is_valid_email = evt.checked();
                            }
                        },
                    }
                    "Email verified"
                }
                if current.shows_promotion_warning() {
                    Alert { kind: AlertKind::Warning, message: PROMOTION_WARNING.to_string() }
                }
                div {
                    style: "display: flex; justify-content: flex-end; margin-top: 1rem;",
                    Button {
                        r#type: "submit",
                        disabled: submitting || current.locked || !current.is_dirty(),
                        if submitting { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
