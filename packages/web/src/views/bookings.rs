use dioxus::prelude::*;
use ui::components::{Alert, AlertKind};
use ui::use_api;
use ui::views::BookingCard;

use crate::Route;

/// The signed-in user's reservations.
#[component]
pub fn Bookings() -> Element {
    let client = use_api();
    let mut cancelling = use_signal(|| None::<String>);
    let mut notice = use_signal(String::new);
    let mut failure = use_signal(String::new);

    let mut bookings = {
        let client = client.clone();
        use_resource(move || {
            let client = client.clone();
            async move { client.get_bookings().await }
        })
    };

    let on_cancel = move |booking_id: String| {
        let client = client.clone();
        spawn(async move {
            cancelling.set(Some(booking_id.clone()));
            failure.set(String::new());
            match client.cancel_booking(&booking_id).await {
                Ok(ack) => {
                    notice.set(ack.message_or("Booking cancelled"));
                    bookings.restart();
                }
                Err(e) => failure.set(e.to_string()),
            }
            cancelling.set(None);
        });
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "My bookings" }
            Alert { kind: AlertKind::Success, message: notice() }
            Alert { message: failure() }
            match &*bookings.read() {
                None => rsx! { p { class: "view-muted", "Loading bookings..." } },
                Some(Err(e)) => rsx! { Alert { message: e.to_string() } },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p {
                        "You have no bookings yet. "
                        Link { to: Route::Home {}, "Find a hotel" }
                    }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "hotel-grid",
                        for booking in list.iter().cloned() {
                            BookingCard {
                                key: "{booking.id}",
                                cancelling: cancelling().as_deref() == Some(booking.id.as_str()),
                                booking: booking,
                                on_cancel: on_cancel.clone(),
                            }
                        }
                    }
                },
            }
        }
    }
}
