use api::models::AdminUser;
use dioxus::prelude::*;

use super::LookupBar;
use crate::components::Alert;
use crate::forms::admin::{user_lookup_error, validate_user_id};
use crate::use_api;

#[component]
pub(super) fn UserLookupPanel() -> Element {
    let client = use_api();
    let query = use_signal(String::new);
    let mut user = use_signal(|| None::<AdminUser>);
    let mut error = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let on_submit = move |user_id: String| {
        if let Err(message) = validate_user_id(&user_id) {
            error.set(message);
            return;
        }
        let client = client.clone();
        spawn(async move {
            busy.set(true);
            error.set(String::new());
            match client.get_user(&user_id).await {
                Ok(found) => user.set(Some(found)),
                Err(e) => {
                    user.set(None);
                    error.set(user_lookup_error(&e));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        LookupBar {
            id: "lookup-user-id",
            placeholder: "User ID",
            value: query,
            busy: busy(),
            on_submit: on_submit,
        }
        Alert { message: error() }
        if let Some(found) = user() {
            UserDetails { user: found }
        }
    }
}

#[component]
fn UserDetails(user: AdminUser) -> Element {
    let verified = if user.is_valid_email { "Yes" } else { "No" };
    rsx! {
        div {
            class: "card",
            style: "display: flex; gap: 1rem; align-items: flex-start;",
            if !user.profile_image_url.is_empty() {
                img {
                    src: "{user.profile_image_url}",
                    alt: "Profile",
                    style: "width: 64px; height: 64px; border-radius: 9999px; object-fit: cover;",
                }
            }
            table {
                class: "data",
                tbody {
                    tr { th { "ID" } td { "{user.id}" } }
                    tr { th { "Username" } td { "{user.username}" } }
                    tr { th { "Email" } td { "{user.email}" } }
                    tr { th { "Role" } td { "{user.role}" } }
                    tr { th { "Email verified" } td { "{verified}" } }
                }
            }
        }
    }
}
