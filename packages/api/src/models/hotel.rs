//! Hotel search, hotel details and the admin hotel/room payloads.

use serde::{Deserialize, Serialize};

use super::{id_string, Amenity, RoomFeature, RoomType, SortOrder, StarRating};

/// Body of `POST /hotel`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub page: u32,
    pub page_size: u32,
    pub filter: SortOrder,
    pub filters: SearchFilters,
}

/// The `filters` object of a search: one flag per star category, uppercase
/// amenity names, price bounds, occupancy and an optional city.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub one_star: bool,
    pub two_stars: bool,
    pub three_stars: bool,
    pub four_stars: bool,
    pub five_stars: bool,
    pub hotel_amenities: Vec<Amenity>,
    pub min_price: u32,
    pub max_price: u32,
    pub guests: u32,
    pub bedrooms: u32,
    pub city: String,
}

impl SearchFilters {
    pub fn set_stars(&mut self, rating: StarRating, on: bool) {
        let flag = match rating {
            StarRating::One => &mut self.one_star,
            StarRating::Two => &mut self.two_stars,
            StarRating::Three => &mut self.three_stars,
            StarRating::Four => &mut self.four_stars,
            StarRating::Five => &mut self.five_stars,
        };
        *flag = on;
    }
}

/// One search hit, as listed on the home page.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelSummary {
    #[serde(deserialize_with = "id_string")]
    pub hotel_id: String,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub stars: u8,
    pub google_map_url: String,
    pub address: String,
    pub first_picture: Option<String>,
}

/// Payload of a search envelope (`informations` or `warning`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelPage {
    pub hotels: Vec<HotelSummary>,
    pub hotels_found: u32,
    pub total_pages: u32,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelLocation {
    pub city: String,
    pub address: String,
    pub country: String,
    pub state: String,
    pub postal_code: String,
    pub google_maps_url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Room {
    #[serde(alias = "_id", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub features: Vec<String>,
    pub max_occupancy: u32,
    pub price: f64,
}

/// Full hotel record from `GET /hotel/:id`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hotel {
    #[serde(alias = "_id", alias = "hotelId", deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: HotelLocation,
    /// Some records carry the address at the top level instead.
    pub address: Option<String>,
    pub stars: u8,
    pub amenities: Vec<String>,
    #[serde(rename = "picture_list")]
    pub picture_list: Vec<String>,
    pub rooms: Vec<Room>,
    pub price: Option<f64>,
}

impl Hotel {
    pub fn display_address(&self) -> &str {
        if self.location.address.is_empty() {
            self.address.as_deref().unwrap_or_default()
        } else {
            &self.location.address
        }
    }

    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == room_id)
    }
}

/// `informations` payload of `GET /hotel/:id`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct HotelDetails {
    pub hotel: Hotel,
}

/// JSON `request` part of the create-hotel form.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelDraft {
    pub name: String,
    pub description: String,
    pub city: String,
    pub address: String,
    pub country: String,
    pub state: String,
    pub postal_code: String,
    pub google_maps_url: String,
    pub stars: u8,
    pub amenities: Vec<Amenity>,
}

/// Body of `POST /private/admin/hotel/room`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub hotel_id: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub features: Vec<RoomFeature>,
    pub max_occupancy: u32,
    pub price: f64,
}
