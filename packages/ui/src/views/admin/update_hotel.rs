use api::models::{Hotel, RoomFeature, RoomType};
use dioxus::prelude::*;

use super::LookupBar;
use crate::components::{Alert, AlertKind, Button, ButtonVariant, FieldError, Input, Label};
use crate::forms::admin::{is_allowed_image, prefixed_error, validate_hotel_id, RoomForm, INVALID_MAIN_IMAGE};
use crate::forms::{FormPhase, ValidationErrors};
use crate::icons::FaTrash;
use crate::{read_uploads, use_api, AppClient, Icon};

async fn load_hotel(client: &AppClient, hotel_id: &str) -> Result<Hotel, String> {
    client
        .get_hotel(hotel_id)
        .await
        .and_then(|outcome| outcome.into_result())
        .map(|details| details.hotel)
        .map_err(|e| prefixed_error(&e))
}

/// Rooms and pictures of an existing hotel.
#[component]
pub(super) fn UpdateHotelPanel() -> Element {
    let client = use_api();
    let query = use_signal(String::new);
    let mut hotel = use_signal(|| None::<Hotel>);
    let mut room = use_signal(RoomForm::default);
    let mut room_errors = use_signal(ValidationErrors::new);
    let mut phase = use_signal(|| FormPhase::Idle);

    // Re-fetch after every change so the lists match the server.
    let refresh = {
        let client = client.clone();
        move |hotel_id: String, message: Option<String>| {
            let client = client.clone();
            spawn(async move {
                match load_hotel(&client, &hotel_id).await {
                    Ok(found) => {
                        hotel.set(Some(found));
                        if let Some(message) = message {
                            phase.set(FormPhase::Success(message));
                        }
                    }
                    Err(message) => {
                        hotel.set(None);
                        phase.set(FormPhase::Error(message));
                    }
                }
            });
        }
    };

    let on_lookup = {
        let refresh = refresh.clone();
        move |hotel_id: String| {
            if let Err(message) = validate_hotel_id(&hotel_id) {
                phase.set(FormPhase::Error(message));
                return;
            }
            phase.set(FormPhase::Idle);
            refresh(hotel_id, None);
        }
    };

    let on_add_room = {
        let client = client.clone();
        let refresh = refresh.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(hotel_id) = hotel.peek().as_ref().map(|h| h.id.clone()) else {
                return;
            };
            let client = client.clone();
            let refresh = refresh.clone();
            spawn(async move {
                let current = room();
                if let Err(invalid) = current.validate() {
                    room_errors.set(invalid);
                    return;
                }
                room_errors.set(ValidationErrors::new());
                match client.add_room(&current.to_new_room(&hotel_id)).await {
                    Ok(ack) => {
                        room.set(RoomForm::default());
                        refresh(hotel_id, Some(ack.message_or("Room added successfully")));
                    }
                    Err(e) => phase.set(FormPhase::Error(prefixed_error(&e))),
                }
            });
        }
    };

    let on_add_image = {
        let client = client.clone();
        let refresh = refresh.clone();
        move |evt: FormEvent| {
            let Some(hotel_id) = hotel.peek().as_ref().map(|h| h.id.clone()) else {
                return;
            };
            let client = client.clone();
            let refresh = refresh.clone();
            spawn(async move {
                let Some(image) = read_uploads(evt).await.into_iter().next() else {
                    phase.set(FormPhase::Error("An image is required".to_string()));
                    return;
                };
                if !is_allowed_image(&image.mime) {
                    phase.set(FormPhase::Error(INVALID_MAIN_IMAGE.to_string()));
                    return;
                }
                match client.add_hotel_image(&hotel_id, image).await {
                    Ok(ack) => refresh(hotel_id, Some(ack.message_or("Image added successfully"))),
                    Err(e) => phase.set(FormPhase::Error(prefixed_error(&e))),
                }
            });
        }
    };

    let delete_room = {
        let client = client.clone();
        let refresh = refresh.clone();
        move |hotel_id: String, room_id: String| {
            let client = client.clone();
            let refresh = refresh.clone();
            spawn(async move {
                match client.delete_room(&hotel_id, &room_id).await {
                    Ok(ack) => refresh(hotel_id, Some(ack.message_or("Room deleted successfully"))),
                    Err(e) => phase.set(FormPhase::Error(prefixed_error(&e))),
                }
            });
        }
    };

    let delete_image = move |hotel_id: String, url: String| {
        let client = client.clone();
        let refresh = refresh.clone();
        spawn(async move {
            match client.delete_hotel_image(&hotel_id, &url).await {
                Ok(ack) => refresh(hotel_id, Some(ack.message_or("Image deleted successfully"))),
                Err(e) => phase.set(FormPhase::Error(prefixed_error(&e))),
            }
        });
    };

    let form = room();

    rsx! {
        LookupBar {
            id: "update-hotel-id",
            placeholder: "Hotel ID",
            value: query,
            busy: phase().is_submitting(),
            on_submit: on_lookup,
        }
        Alert { message: phase().error().unwrap_or_default().to_string() }
        Alert { kind: AlertKind::Success, message: phase().success().unwrap_or_default().to_string() }

        if let Some(current) = hotel() {
            div {
                class: "card",
                h2 { class: "view-section-title", "{current.name}" }
                p { class: "view-muted", "{current.display_address()}" }

                h3 { "Rooms" }
                if current.rooms.is_empty() {
                    p { class: "view-muted", "No rooms yet." }
                } else {
                    table {
                        class: "data",
                        thead {
                            tr {
                                th { "Type" }
                                th { "Features" }
                                th { "Max occupancy" }
                                th { "Price" }
                                th {}
                            }
                        }
                        tbody {
                            for existing in current.rooms.iter().cloned() {
                                tr {
                                    key: "{existing.id}",
                                    td { "{RoomType::display(&existing.room_type)}" }
                                    td { "{existing.features.len()}" }
                                    td { "{existing.max_occupancy}" }
                                    td { {format!("{:.2} €", existing.price)} }
                                    td {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: {
                                                let delete_room = delete_room.clone();
                                                let hotel_id = current.id.clone();
                                                let room_id = existing.id.clone();
                                                move |_| delete_room(hotel_id.clone(), room_id.clone())
                                            },
                                            Icon { width: 12, height: 12, icon: FaTrash }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                h3 { "Add a room" }
                form {
                    onsubmit: on_add_room,
                    div {
                        class: "form-grid",
                        div {
                            class: "form-row",
                            Label { html_for: "room-type", "Room type" }
                            select {
                                id: "room-type",
                                class: "input",
                                onchange: move |evt: FormEvent| {
                                    if let Some(kind) = RoomType::parse(&evt.value()) {
                                        room.write().room_type = kind;
                                    }
                                },
                                for kind in RoomType::CREATABLE {
                                    option {
                                        key: "{kind.as_str()}",
                                        value: kind.as_str(),
                                        selected: form.room_type == kind,
                                        "{kind.display_name()}"
                                    }
                                }
                            }
                        }
                        div {
                            class: "form-row",
                            Label { html_for: "room-occupancy", "Max occupancy" }
                            Input {
                                id: "room-occupancy",
                                r#type: "number",
                                min: "1".to_string(),
                                value: form.max_occupancy.to_string(),
                                invalid: room_errors().has("max_occupancy"),
                                oninput: move |evt: FormEvent| room.write().set_max_occupancy(&evt.value()),
                            }
                            FieldError { message: room_errors().message("max_occupancy") }
                        }
                        div {
                            class: "form-row",
                            Label { html_for: "room-price", "Price per night (€)" }
                            Input {
                                id: "room-price",
                                r#type: "number",
                                min: "0".to_string(),
                                value: form.price.to_string(),
                                invalid: room_errors().has("price"),
                                oninput: move |evt: FormEvent| room.write().set_price(&evt.value()),
                            }
                            FieldError { message: room_errors().message("price") }
                        }
                    }
                    div {
                        class: "checkbox-grid",
                        for feature in RoomFeature::ALL {
                            label {
                                key: "{feature.as_str()}",
                                class: "checkbox",
                                input {
                                    r#type: "checkbox",
                                    checked: form.has_feature(feature),
                                    onchange: move |_| room.write().toggle_feature(feature),
                                }
                                "{feature.label()}"
                            }
                        }
                    }
                    div {
                        style: "display: flex; justify-content: flex-end; margin-top: 1rem;",
                        Button { r#type: "submit", "Add room" }
                    }
                }

                h3 { "Pictures" }
                div {
                    class: "image-grid",
                    for url in current.picture_list.iter().cloned() {
                        div {
                            key: "{url}",
                            img { src: "{url}", alt: "Hotel picture" }
                            Button {
                                variant: ButtonVariant::Destructive,
                                onclick: {
                                    let delete_image = delete_image.clone();
                                    let hotel_id = current.id.clone();
                                    let url = url.clone();
                                    move |_| delete_image(hotel_id.clone(), url.clone())
                                },
                                "Delete"
                            }
                        }
                    }
                }
                div {
                    class: "form-row",
                    style: "margin-top: 1rem;",
                    Label { html_for: "hotel-new-image", "Add a picture" }
                    input {
                        id: "hotel-new-image",
                        r#type: "file",
                        accept: "image/*",
                        onchange: on_add_image,
                    }
                }
            }
        }
    }
}
