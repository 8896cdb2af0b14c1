use std::time::Duration;

use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Button, ButtonVariant, FieldError, Input, Label};
use crate::forms::account::{
    AccountForm, ERROR_BANNER_SECS, IMAGE_FAILED, NOTHING_TO_UPDATE, SUCCESS_BANNER_SECS,
    UPDATE_FAILED, UPDATE_SUCCESS,
};
use crate::forms::{FormPhase, ValidationErrors};
use crate::icons::{FaPen, FaTrash};
use crate::views::ModalOverlay;
use crate::{read_uploads, sleep, use_api, Icon};

/// Account page body. `on_deleted` runs after the account is gone and the
/// session cleared.
#[component]
pub fn AccountView(on_deleted: EventHandler<()>) -> Element {
    let client = use_api();
    let mut form = use_signal(AccountForm::default);
    let mut errors = use_signal(ValidationErrors::new);
    let mut phase = use_signal(|| FormPhase::Idle);
    let mut show_delete = use_signal(|| false);

    let profile = {
        let client = client.clone();
        use_resource(move || {
            let client = client.clone();
            async move { client.get_user_data().await }
        })
    };

    use_effect(move || {
        if let Some(Ok(outcome)) = &*profile.read() {
            if let Some(data) = outcome.clone().data() {
                form.set(AccountForm::from_profile(&data));
            }
        }
    });

    // Clears a banner after `secs` unless something newer replaced it.
    let flash = move |next: FormPhase, secs: u64| {
        let mut phase = phase;
        phase.set(next.clone());
        spawn(async move {
            sleep(Duration::from_secs(secs)).await;
            if *phase.peek() == next {
                phase.set(FormPhase::Idle);
            }
        });
    };

    let onsubmit = {
        let client = client.clone();
        move |evt: FormEvent| {
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
                let update = current.to_update();
                if update.is_empty() {
                    flash(FormPhase::Success(NOTHING_TO_UPDATE.to_string()), SUCCESS_BANNER_SECS);
                    return;
                }
                phase.set(FormPhase::Submitting);
                match client.update_user(&update).await {
                    Ok(_) => {
                        form.write().saved();
                        flash(FormPhase::Success(UPDATE_SUCCESS.to_string()), SUCCESS_BANNER_SECS);
                    }
                    Err(e) => {
                        tracing::warn!("account update failed: {e}");
                        form.write().clear_passwords();
                        flash(FormPhase::Error(UPDATE_FAILED.to_string()), ERROR_BANNER_SECS);
                    }
                }
            });
        }
    };

    let on_image = {
        let client = client.clone();
        move |evt: FormEvent| {
            let client = client.clone();
            spawn(async move {
                let Some(image) = read_uploads(evt).await.into_iter().next() else {
                    return;
                };
                match client.update_profile_image(image).await {
                    Ok(Some(url)) => form.write().profile_image_url = url,
                    Ok(None) => {}
                    Err(e) => {
                        tracing::warn!("profile image upload failed: {e}");
                        flash(FormPhase::Error(IMAGE_FAILED.to_string()), ERROR_BANNER_SECS);
                    }
                }
            });
        }
    };

    let on_delete = move |_| {
        let client = client.clone();
        spawn(async move {
            match client.delete_user().await {
                Ok(_) => {
                    show_delete.set(false);
                    on_deleted.call(());
                }
                Err(e) => {
                    show_delete.set(false);
                    flash(FormPhase::Error(e.to_string()), ERROR_BANNER_SECS);
                }
            }
        });
    };

    if profile.read().is_none() {
        return rsx! {
            div { class: "view-page", p { class: "view-muted", "Loading..." } }
        };
    }

    let current = form();
    let submitting = phase().is_submitting();
    let has_image = !current.profile_image_url.is_empty() && current.profile_image_url != "undefined";

    rsx! {
        div {
            class: "view-page",
            style: "max-width: 40rem;",
            h1 { class: "view-title", "My account" }
            Alert { message: phase().error().unwrap_or_default().to_string() }
            Alert { kind: AlertKind::Success, message: phase().success().unwrap_or_default().to_string() }

            div {
                class: "card",
                style: "display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem;",
                if has_image {
                    img {
                        src: "{current.profile_image_url}",
                        alt: "Profile",
                        style: "width: 72px; height: 72px; border-radius: 9999px; object-fit: cover;",
                    }
                }
                div {
                    label {
                        class: "button",
                        "data-style": "outline",
                        r#for: "profile-image",
                        Icon { width: 12, height: 12, icon: FaPen }
                        "Change picture"
                    }
                    input {
                        id: "profile-image",
                        r#type: "file",
                        accept: "image/*",
                        style: "display: none;",
                        onchange: on_image,
                    }
                    p { class: "view-muted", "Role: {current.role}" }
                }
            }

            form {
                class: "card",
                onsubmit: onsubmit,
                div {
                    class: "form-row",
                    Label { html_for: "username", "Username" }
                    Input {
                        id: "username",
                        value: current.username.clone(),
                        oninput: move |evt: FormEvent| form.write().username = evt.value(),
                    }
                }
                div {
                    class: "form-row",
                    Label { html_for: "email", "Email" }
                    Input {
                        id: "email",
                        r#type: "email",
                        value: current.email.clone(),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                }
                h2 { class: "view-section-title", "Change password" }
                div {
                    class: "form-row",
                    Label { html_for: "old-password", "Current password" }
                    Input {
                        id: "old-password",
                        r#type: "password",
                        value: current.old_password.clone(),
                        oninput: move |evt: FormEvent| form.write().old_password = evt.value(),
                    }
                }
                div {
                    class: "form-row",
                    Label { html_for: "new-password", "New password" }
                    Input {
                        id: "new-password",
                        r#type: "password",
                        value: current.new_password.clone(),
                        invalid: errors().has("new_password"),
                        oninput: move |evt: FormEvent| form.write().new_password = evt.value(),
                    }
                    FieldError { message: errors().message("new_password") }
                }
                div {
                    class: "form-row",
                    Label { html_for: "confirm-password", "Confirm new password" }
                    Input {
                        id: "confirm-password",
                        r#type: "password",
                        value: current.confirm_password.clone(),
                        invalid: errors().has("confirm_password"),
                        oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                    }
                    FieldError { message: errors().message("confirm_password") }
                }
                div {
                    style: "display: flex; justify-content: space-between;",
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| show_delete.set(true),
                        Icon { width: 12, height: 12, fill: "white", icon: FaTrash }
                        "Delete account"
                    }
                    Button {
                        r#type: "submit",
                        disabled: submitting,
                        if submitting { "Saving..." } else { "Save changes" }
                    }
                }
            }

            if show_delete() {
                ModalOverlay {
                    on_close: move |_| show_delete.set(false),
                    h2 { class: "view-section-title", "Delete your account?" }
                    p { "This cannot be undone. Your bookings will be lost." }
                    div {
                        style: "display: flex; justify-content: flex-end; gap: 0.5rem;",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| show_delete.set(false),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: on_delete,
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
