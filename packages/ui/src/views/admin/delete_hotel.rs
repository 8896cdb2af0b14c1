use dioxus::prelude::*;

use super::LookupBar;
use crate::components::{Alert, AlertKind, Button, ButtonVariant};
use crate::forms::admin::{delete_hotel_error, validate_hotel_id, HOTEL_DELETED};
use crate::forms::FormPhase;
use crate::use_api;

/// Two-step delete: the ID is checked first, then the admin confirms.
#[component]
pub(super) fn DeleteHotelPanel() -> Element {
    let client = use_api();
    let query = use_signal(String::new);
    let mut pending = use_signal(|| None::<String>);
    let mut phase = use_signal(|| FormPhase::Idle);

    let on_request = move |hotel_id: String| match validate_hotel_id(&hotel_id) {
        Ok(()) => {
            phase.set(FormPhase::Idle);
            pending.set(Some(hotel_id));
        }
        Err(message) => phase.set(FormPhase::Error(message)),
    };

    let on_confirm = move |_| {
        let Some(hotel_id) = pending() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            phase.set(FormPhase::Submitting);
            let result = client.delete_hotel(&hotel_id).await;
            pending.set(None);
            match result {
                Ok(ack) => {
                    tracing::info!(%hotel_id, "hotel deleted");
                    phase.set(FormPhase::Success(ack.message_or(HOTEL_DELETED)));
                }
                Err(e) => phase.set(FormPhase::Error(delete_hotel_error(&e))),
            }
        });
    };

    rsx! {
        LookupBar {
            id: "delete-hotel-id",
            placeholder: "Hotel ID",
            value: query,
            action: "Delete",
            busy: phase().is_submitting(),
            on_submit: on_request,
        }
        Alert { message: phase().error().unwrap_or_default().to_string() }
        Alert { kind: AlertKind::Success, message: phase().success().unwrap_or_default().to_string() }
        if let Some(hotel_id) = pending() {
            div {
                class: "card",
                p { "Delete hotel {hotel_id}? Its rooms, pictures and bookings go with it." }
                div {
                    style: "display: flex; gap: 0.5rem;",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| pending.set(None),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: phase().is_submitting(),
                        onclick: on_confirm,
                        "Confirm deletion"
                    }
                }
            }
        }
    }
}
