//! Admin dashboard: a grouped side menu and one panel at a time.
//!
//! | Panel | Calls |
//! |-------|-------|
//! | Create hotel | `create_hotel` |
//! | Update hotel | `get_hotel`, `add_room`, `delete_room`, `add_hotel_image`, `delete_hotel_image` |
//! | Delete hotel | `delete_hotel` |
//! | Hotel bookings | `hotel_bookings` |
//! | Get user | `get_user` |
//! | Update user | `get_user`, `update_user_by_id` |
//! | List users | `list_users` |
//! | User bookings | `user_bookings` |

mod bookings;
mod create_hotel;
mod delete_hotel;
mod update_hotel;
mod update_user;
mod user_lookup;
mod users_list;

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input};

use bookings::{HotelBookingsPanel, UserBookingsPanel};
use create_hotel::CreateHotelPanel;
use delete_hotel::DeleteHotelPanel;
use update_hotel::UpdateHotelPanel;
use update_user::UpdateUserPanel;
use user_lookup::UserLookupPanel;
use users_list::UsersListPanel;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminPanel {
    #[default]
    Intro,
    CreateHotel,
    UpdateHotel,
    DeleteHotel,
    HotelBookings,
    GetUser,
    UpdateUser,
    ListUsers,
    UserBookings,
}

impl AdminPanel {
    /// Menu layout: group title and its entries, in display order.
    pub const GROUPS: [(&'static str, &'static [AdminPanel]); 2] = [
        (
            "Hotels",
            &[
                AdminPanel::CreateHotel,
                AdminPanel::UpdateHotel,
                AdminPanel::DeleteHotel,
                AdminPanel::HotelBookings,
            ],
        ),
        (
            "Users",
            &[
                AdminPanel::GetUser,
                AdminPanel::UpdateUser,
                AdminPanel::ListUsers,
                AdminPanel::UserBookings,
            ],
        ),
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminPanel::Intro => "Dashboard",
            AdminPanel::CreateHotel => "Create hotel",
            AdminPanel::UpdateHotel => "Update hotel",
            AdminPanel::DeleteHotel => "Delete hotel",
            AdminPanel::HotelBookings => "Hotel bookings",
            AdminPanel::GetUser => "Get user by ID",
            AdminPanel::UpdateUser => "Update user",
            AdminPanel::ListUsers => "List users",
            AdminPanel::UserBookings => "User bookings",
        }
    }
}

#[component]
pub fn AdminDashboardView() -> Element {
    let mut active = use_signal(AdminPanel::default);

    rsx! {
        div {
            class: "admin-layout",
            nav {
                class: "admin-menu",
                button {
                    "data-active": active() == AdminPanel::Intro,
                    onclick: move |_| active.set(AdminPanel::Intro),
                    "{AdminPanel::Intro.label()}"
                }
                for (group, panels) in AdminPanel::GROUPS {
                    div { key: "{group}", class: "group", "{group}" }
                    for panel in panels.iter().copied() {
                        button {
                            key: "{panel.label()}",
                            "data-active": active() == panel,
                            onclick: move |_| active.set(panel),
                            "{panel.label()}"
                        }
                    }
                }
            }
            main {
                class: "admin-content",
                h1 { class: "view-title", "{active().label()}" }
                match active() {
                    AdminPanel::Intro => rsx! { Intro {} },
                    AdminPanel::CreateHotel => rsx! { CreateHotelPanel {} },
                    AdminPanel::UpdateHotel => rsx! { UpdateHotelPanel {} },
                    AdminPanel::DeleteHotel => rsx! { DeleteHotelPanel {} },
                    AdminPanel::HotelBookings => rsx! { HotelBookingsPanel {} },
                    AdminPanel::GetUser => rsx! { UserLookupPanel {} },
                    AdminPanel::UpdateUser => rsx! { UpdateUserPanel {} },
                    AdminPanel::ListUsers => rsx! { UsersListPanel {} },
                    AdminPanel::UserBookings => rsx! { UserBookingsPanel {} },
                }
            }
        }
    }
}

#[component]
fn Intro() -> Element {
    rsx! {
        div {
            class: "card",
            p { "Pick an action in the menu." }
            p {
                class: "view-muted",
                "Hotel actions need the hotel ID, user actions the user ID. "
                "Admin accounts cannot be viewed or edited from here."
            }
        }
    }
}

/// ID field and submit button shared by the lookup panels.
#[component]
fn LookupBar(
    id: String,
    placeholder: String,
    value: Signal<String>,
    #[props(default = "Search".to_string())] action: String,
    #[props(default)] busy: bool,
    on_submit: EventHandler<String>,
) -> Element {
    let mut value = value;
    rsx! {
        form {
            style: "display: flex; gap: 0.5rem; margin-bottom: 1rem;",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(value.peek().trim().to_string());
            },
            Input {
                id: id,
                placeholder: placeholder,
                value: value(),
                oninput: move |evt: FormEvent| value.set(evt.value()),
            }
            Button {
                r#type: "submit",
                variant: ButtonVariant::Primary,
                disabled: busy,
                "{action}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_every_panel_once() {
        let listed: Vec<AdminPanel> = AdminPanel::GROUPS
            .iter()
            .flat_map(|(_, panels)| panels.iter().copied())
            .collect();
        assert_eq!(listed.len(), 8);
        assert!(!listed.contains(&AdminPanel::Intro));
        for (i, panel) in listed.iter().enumerate() {
            assert!(!listed[i + 1..].contains(panel), "{panel:?} listed twice");
        }
        assert_eq!(AdminPanel::default().label(), "Dashboard");
    }
}
