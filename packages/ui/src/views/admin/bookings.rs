use api::models::Booking;
use api::ApiError;
use dioxus::prelude::*;

use super::LookupBar;
use crate::components::Alert;
use crate::forms::admin::{prefixed_error, user_lookup_error, validate_hotel_id, validate_user_id};
use crate::views::BookingCard;
use crate::use_api;

#[derive(Clone, Copy, PartialEq)]
enum Owner {
    Hotel,
    User,
}

impl Owner {
    fn validate(self, id: &str) -> Result<(), String> {
        match self {
            Owner::Hotel => validate_hotel_id(id),
            Owner::User => validate_user_id(id),
        }
    }

    fn error(self, err: &ApiError) -> String {
        match self {
            Owner::Hotel => prefixed_error(err),
            Owner::User => user_lookup_error(err),
        }
    }
}

#[component]
pub(super) fn HotelBookingsPanel() -> Element {
    rsx! { BookingsLookup { owner: Owner::Hotel } }
}

#[component]
pub(super) fn UserBookingsPanel() -> Element {
    rsx! { BookingsLookup { owner: Owner::User } }
}

#[component]
fn BookingsLookup(owner: Owner) -> Element {
    let client = use_api();
    let query = use_signal(String::new);
    let mut bookings = use_signal(|| None::<Vec<Booking>>);
    let mut error = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let on_submit = move |id: String| {
        if let Err(message) = owner.validate(&id) {
            error.set(message);
            return;
        }
        let client = client.clone();
        spawn(async move {
            busy.set(true);
            error.set(String::new());
            let result = match owner {
                Owner::Hotel => client.hotel_bookings(&id).await,
                Owner::User => client.user_bookings(&id).await,
            };
            match result {
                Ok(found) => bookings.set(Some(found)),
                Err(e) => {
                    bookings.set(None);
                    error.set(owner.error(&e));
                }
            }
            busy.set(false);
        });
    };

    let placeholder = match owner {
        Owner::Hotel => "Hotel ID".to_string(),
        Owner::User => "User ID".to_string(),
    };

    rsx! {
        LookupBar {
            id: "bookings-owner-id",
            placeholder: placeholder,
            value: query,
            busy: busy(),
            on_submit: on_submit,
        }
        Alert { message: error() }
        if let Some(found) = bookings() {
            if found.is_empty() {
                p { class: "view-muted", "No bookings." }
            }
            div {
                class: "hotel-grid",
                for booking in found {
                    BookingCard { key: "{booking.id}", booking: booking }
                }
            }
        }
    }
}
