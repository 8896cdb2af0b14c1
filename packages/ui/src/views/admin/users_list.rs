use dioxus::prelude::*;

use crate::components::{Alert, Button, ButtonVariant, Input};
use crate::filters::Pager;
use crate::forms::admin::{UserQuery, USERS_FETCH_FAILED, USERS_PAGE_SIZE};
use crate::use_api;

#[component]
pub(super) fn UsersListPanel() -> Element {
    let client = use_api();
    let mut query = use_signal(UserQuery::default);
    let mut keyword = use_signal(String::new);

    let users = use_resource(move || {
        let client = client.clone();
        let UserQuery { keyword, page } = query();
        async move {
            client
                .list_users(&keyword, page, USERS_PAGE_SIZE)
                .await
                .map_err(|e| {
                    tracing::warn!("user listing failed: {e}");
                    USERS_FETCH_FAILED.to_string()
                })
                .and_then(|page| match page.error {
                    Some(message) if !message.is_empty() => Err(message),
                    _ => Ok(page),
                })
        }
    });

    let page = query().page;

    rsx! {
        form {
            style: "display: flex; gap: 0.5rem; margin-bottom: 1rem;",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let wanted = keyword();
                query.write().search(wanted.trim());
            },
            Input {
                id: "users-keyword",
                placeholder: "Username or email",
                value: keyword(),
                oninput: move |evt: FormEvent| keyword.set(evt.value()),
            }
            Button { r#type: "submit", "Search" }
        }

        match &*users.read() {
            None => rsx! { p { class: "view-muted", "Loading..." } },
            Some(Err(message)) => rsx! { Alert { message: message.clone() } },
            Some(Ok(found)) => {
                let pager = Pager { page, total_pages: found.total_pages };
                rsx! {
                    if found.users.is_empty() {
                        p { class: "view-muted", "No users found." }
                    } else {
                        table {
                            class: "data",
                            thead {
                                tr {
                                    th { "ID" }
                                    th { "Username" }
                                    th { "Email" }
                                    th { "Role" }
                                    th { "Verified" }
                                }
                            }
                            tbody {
                                for user in found.users.iter().cloned() {
                                    tr {
                                        key: "{user.id}",
                                        td { "{user.id}" }
                                        td { "{user.username}" }
                                        td { "{user.email}" }
                                        td { "{user.role}" }
                                        td { if user.is_valid_email { "Yes" } else { "No" } }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "pagination",
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: !pager.has_previous(),
                            onclick: move |_| query.write().page = pager.previous().page,
                            "Previous"
                        }
                        span { "{pager.label()}" }
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: !pager.has_next(),
                            onclick: move |_| query.write().page = pager.next().page,
                            "Next"
                        }
                    }
                }
            }
        }
    }
}
