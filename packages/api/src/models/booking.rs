//! Bookings.

use serde::{Deserialize, Serialize};

use super::id_string;

/// Body of `POST /private/booking`. Dates use the `datetime-local` format
/// `YYYY-MM-DDTHH:MM`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub hotel_id: String,
    pub hotel_room_id: String,
    pub guests: u32,
    pub check_in_date: String,
    pub check_out_date: String,
}

/// Hotel summary embedded in a booking.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingHotel {
    #[serde(alias = "_id", deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    pub address: String,
    pub image_url: Option<String>,
    #[serde(rename = "picture_list")]
    pub picture_list: Vec<String>,
}

impl BookingHotel {
    pub fn image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .or_else(|| self.picture_list.first().map(String::as_str))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingRoom {
    #[serde(alias = "_id", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "type")]
    pub room_type: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Booking {
    #[serde(alias = "_id", deserialize_with = "id_string")]
    pub id: String,
    #[serde(deserialize_with = "id_string")]
    pub hotel_id: String,
    #[serde(deserialize_with = "id_string")]
    pub hotel_room_id: String,
    #[serde(deserialize_with = "id_string")]
    pub user_id: String,
    pub guests: u32,
    pub check_in_date: String,
    pub check_out_date: String,
    pub total_price: Option<f64>,
    pub status: Option<String>,
    pub is_paid: bool,
    pub hotel: Option<BookingHotel>,
    pub hotel_room: Option<BookingRoom>,
}

/// `{ "bookings": [...] }`, the payload of every booking listing.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct BookingList {
    pub bookings: Vec<Booking>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_booking_wire_shape() {
        let booking = NewBooking {
            hotel_id: "h1".to_string(),
            hotel_room_id: "r2".to_string(),
            guests: 2,
            check_in_date: "2025-06-01T14:00".to_string(),
            check_out_date: "2025-06-02T14:00".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&booking).unwrap(),
            json!({
                "hotelId": "h1",
                "hotelRoomId": "r2",
                "guests": 2,
                "checkInDate": "2025-06-01T14:00",
                "checkOutDate": "2025-06-02T14:00"
            })
        );
    }

    #[test]
    fn test_booking_list_decodes_nested_records() {
        let list: BookingList = serde_json::from_value(json!({
            "bookings": [{
                "_id": "b1",
                "userId": 9,
                "guests": 3,
                "checkInDate": "2025-06-01",
                "checkOutDate": "2025-06-04",
                "totalPrice": 420.0,
                "status": "CONFIRMED",
                "isPaid": true,
                "hotel": {"name": "Ritz", "picture_list": ["ritz.jpg"]},
                "hotelRoom": {"type": "SUITE"}
            }]
        }))
        .unwrap();
        let booking = &list.bookings[0];
        assert_eq!(booking.id, "b1");
        assert_eq!(booking.user_id, "9");
        assert_eq!(booking.hotel.as_ref().and_then(BookingHotel::image), Some("ritz.jpg"));
        assert_eq!(booking.hotel_room.as_ref().map(|r| r.room_type.as_str()), Some("SUITE"));
    }
}
