use api::models::HotelSummary;
use dioxus::prelude::*;

use super::Stars;

/// One search hit. `children` is the call to action, usually a router link.
#[component]
pub fn HotelCard(hotel: HotelSummary, children: Element) -> Element {
    let price = hotel
        .price
        .map(|p| format!("from {p:.0}€ / night"))
        .unwrap_or_default();

    rsx! {
        article {
            class: "card hotel-card",
            if let Some(picture) = hotel.first_picture.as_ref() {
                img { src: "{picture}", alt: "{hotel.name}" }
            }
            h3 { "{hotel.name}" }
            Stars { count: hotel.stars }
            p { class: "view-muted", "{hotel.address}" }
            if !hotel.description.is_empty() {
                p { "{hotel.description}" }
            }
            if !price.is_empty() {
                p { strong { "{price}" } }
            }
            if !hotel.google_map_url.is_empty() {
                a { href: "{hotel.google_map_url}", target: "_blank", rel: "noopener", "View on map" }
            }
            div { {children} }
        }
    }
}
