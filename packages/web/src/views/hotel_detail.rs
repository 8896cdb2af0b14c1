use api::models::{Amenity, RoomFeature, RoomType};
use api::ApiOutcome;
use dioxus::prelude::*;
use ui::components::{Alert, Button};
use ui::views::{BookingModal, Stars};
use ui::{use_api, use_session};

use crate::Route;

fn feature_label(raw: &str) -> String {
    RoomFeature::ALL
        .into_iter()
        .find(|f| f.as_str() == raw)
        .map(RoomFeature::label)
        .unwrap_or_else(|| raw.to_string())
}

#[component]
pub fn HotelDetail(hotel_id: String) -> Element {
    let client = use_api();
    let session = use_session();
    let mut booking_room = use_signal(|| None::<String>);

    let details = use_resource(use_reactive!(|hotel_id| {
        let client = client.clone();
        async move { client.get_hotel(&hotel_id).await }
    }));

    let signed_in = session().is_authenticated();

    rsx! {
        div {
            class: "view-page",
            match &*details.read() {
                None => rsx! { p { class: "view-muted", "Loading hotel..." } },
                Some(Err(e)) => rsx! { Alert { message: e.to_string() } },
                Some(Ok(ApiOutcome::Err(message))) => rsx! { Alert { message: message.clone() } },
                Some(Ok(ApiOutcome::Ok(found) | ApiOutcome::Warning(found))) => {
                    let hotel = found.hotel.clone();
                    rsx! {
                        h1 { class: "view-title", "{hotel.name}" }
                        Stars { count: hotel.stars }
                        p { class: "view-muted", "{hotel.display_address()}, {hotel.location.city}, {hotel.location.country}" }
                        if !hotel.location.google_maps_url.is_empty() {
                            a {
                                href: "{hotel.location.google_maps_url}",
                                target: "_blank",
                                rel: "noopener",
                                "View on map"
                            }
                        }
                        if !hotel.picture_list.is_empty() {
                            div {
                                class: "image-grid",
                                style: "margin: 1rem 0;",
                                for url in hotel.picture_list.iter().cloned() {
                                    img { key: "{url}", src: "{url}", alt: "{hotel.name}" }
                                }
                            }
                        }
                        if !hotel.description.is_empty() {
                            p { "{hotel.description}" }
                        }

                        h2 { class: "view-section-title", "Amenities" }
                        div {
                            class: "chips",
                            for amenity in hotel.amenities.iter() {
                                span { key: "{amenity}", class: "chip", "{Amenity::display(amenity)}" }
                            }
                        }

                        h2 { class: "view-section-title", "Rooms" }
                        if hotel.rooms.is_empty() {
                            p { class: "view-muted", "No rooms available." }
                        }
                        div {
                            class: "hotel-grid",
                            for room in hotel.rooms.iter().cloned() {
                                article {
                                    key: "{room.id}",
                                    class: "card",
                                    h3 { "{RoomType::display(&room.room_type)}" }
                                    p { "Up to {room.max_occupancy} guest(s)" }
                                    p { strong { {format!("{:.2}€ / night", room.price)} } }
                                    if !room.features.is_empty() {
                                        ul {
                                            for feature in room.features.iter() {
                                                li { key: "{feature}", "{feature_label(feature)}" }
                                            }
                                        }
                                    }
                                    if signed_in {
                                        Button {
                                            onclick: move |_| booking_room.set(Some(room.id.clone())),
                                            "Book"
                                        }
                                    } else {
                                        Link { to: Route::Login {}, "Sign in to book" }
                                    }
                                }
                            }
                        }
                        if let Some(room_id) = booking_room() {
                            BookingModal {
                                hotel_id: hotel.id.clone(),
                                room_id: room_id,
                                on_close: move |_| booking_room.set(None),
                            }
                        }
                    }
                }
            }
        }
    }
}
