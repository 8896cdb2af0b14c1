use api::models::{Booking, RoomType};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::forms::booking::display_datetime;

/// One reservation. Shows a cancel button when `on_cancel` is set.
#[component]
pub fn BookingCard(
    booking: Booking,
    #[props(default)] cancelling: bool,
    on_cancel: Option<EventHandler<String>>,
) -> Element {
    let hotel_name = booking
        .hotel
        .as_ref()
        .map(|h| h.name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| format!("Hotel {}", booking.hotel_id));
    let image = booking
        .hotel
        .as_ref()
        .and_then(|h| h.image())
        .map(str::to_string);
    let room = booking
        .hotel_room
        .as_ref()
        .map(|r| RoomType::display(&r.room_type))
        .unwrap_or_default();
    let check_in = display_datetime(&booking.check_in_date);
    let check_out = display_datetime(&booking.check_out_date);
    let total = booking.total_price.map(|t| format!("Total: {t:.2}€"));
    let booking_id = booking.id.clone();

    rsx! {
        article {
            class: "card booking-card",
            if let Some(src) = image {
                img { src: "{src}", alt: "{hotel_name}" }
            }
            h3 { "{hotel_name}" }
            if !room.is_empty() {
                p { class: "view-muted", "{room}" }
            }
            p { "From {check_in} to {check_out}" }
            p { "Guests: {booking.guests}" }
            if let Some(total) = total {
                p { "{total}" }
            }
            if let Some(status) = booking.status.as_ref() {
                p { class: "view-muted", "Status: {status}" }
            }
            if booking.is_paid {
                p { class: "view-muted", "Paid" }
            }
            if let Some(handler) = on_cancel {
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: cancelling,
                    onclick: move |_| handler.call(booking_id.clone()),
                    if cancelling { "Cancelling..." } else { "Cancel booking" }
                }
            }
        }
    }
}
