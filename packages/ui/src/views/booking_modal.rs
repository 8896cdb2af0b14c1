use std::time::Duration;

use dioxus::prelude::*;

use super::ModalOverlay;
use crate::components::{Alert, AlertKind, Button, ButtonVariant, FieldError, Input, Label};
use crate::forms::booking::{BookingForm, BOOKING_SUCCESS};
use crate::forms::{FormPhase, ValidationErrors, REDIRECT_DELAY_SECS};
use crate::{sleep, use_api};

/// Reserve one room. Closes itself shortly after a successful booking.
#[component]
pub fn BookingModal(hotel_id: String, room_id: String, on_close: EventHandler<()>) -> Element {
    let client = use_api();
    let mut form = use_signal(BookingForm::now);
    let mut errors = use_signal(ValidationErrors::new);
    let mut phase = use_signal(|| FormPhase::Idle);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let hotel_id = hotel_id.clone();
        let room_id = room_id.clone();
        spawn(async move {
            phase.set(FormPhase::Validating);
            let current = form();
            if let Err(invalid) = current.validate() {
                errors.set(invalid);
                phase.set(FormPhase::Idle);
                return;
            }
            errors.set(ValidationErrors::new());
            phase.set(FormPhase::Submitting);

            let booking = current.to_new_booking(&hotel_id, &room_id);
            match client.create_booking(&booking).await {
                Ok(_) => {
                    phase.set(FormPhase::Success(BOOKING_SUCCESS.to_string()));
                    sleep(Duration::from_secs(REDIRECT_DELAY_SECS)).await;
                    on_close.call(());
                }
                Err(e) => {
                    tracing::warn!(%hotel_id, %room_id, "booking failed: {e}");
                    phase.set(FormPhase::Error(e.to_string()));
                }
            }
        });
    };

    let current = form();
    let submitting = phase().is_submitting();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            h2 { class: "view-section-title", "Book this room" }
            Alert { message: phase().error().unwrap_or_default().to_string() }
            Alert { kind: AlertKind::Success, message: phase().success().unwrap_or_default().to_string() }
            form {
                onsubmit: onsubmit,
                div {
                    class: "form-row",
                    Label { html_for: "guests", "Number of people" }
                    Input {
                        id: "guests",
                        r#type: "number",
                        min: "1".to_string(),
                        value: current.guests.to_string(),
                        invalid: errors().has("guests"),
                        oninput: move |evt: FormEvent| form.write().set_guests(&evt.value()),
                    }
                    FieldError { message: errors().message("guests") }
                }
                div {
                    class: "form-row",
                    Label { html_for: "check-in", "Check-in date" }
                    Input {
                        id: "check-in",
                        r#type: "datetime-local",
                        value: current.check_in.clone(),
                        invalid: errors().has("check_in"),
                        oninput: move |evt: FormEvent| form.write().check_in = evt.value(),
                    }
                    FieldError { message: errors().message("check_in") }
                }
                div {
                    class: "form-row",
                    Label { html_for: "check-out", "Check-out date" }
                    Input {
                        id: "check-out",
                        r#type: "datetime-local",
                        value: current.check_out.clone(),
                        invalid: errors().has("check_out"),
                        oninput: move |evt: FormEvent| form.write().check_out = evt.value(),
                    }
                    FieldError { message: errors().message("check_out") }
                }
                div {
                    style: "display: flex; justify-content: flex-end; gap: 0.5rem;",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        r#type: "submit",
                        disabled: submitting,
                        if submitting { "Processing..." } else { "Confirm booking" }
                    }
                }
            }
        }
    }
}
