//! # Wire models for the hotel API
//!
//! | Module | Types |
//! |--------|-------|
//! | [`hotel`] | search request/response, hotel details, rooms, admin drafts |
//! | [`user`] | own profile, admin user records, update payloads |
//! | [`booking`] | bookings and the booking request |
//!
//! This module holds the closed vocabularies shared by forms and records:
//! [`Amenity`], [`StarRating`], [`RoomType`], [`RoomFeature`], [`SortOrder`].
//!
//! Records coming *from* the backend are lenient: unknown fields are ignored,
//! missing fields default, and ids may arrive as strings or numbers. Enumerated
//! fields on records stay `String` so an unknown value never fails a whole
//! page; use [`humanize`] or the enum `parse` helpers to display them.

pub mod booking;
pub mod hotel;
pub mod user;

use serde::{Deserialize, Deserializer, Serialize};

pub use booking::{Booking, BookingHotel, BookingList, BookingRoom, NewBooking};
pub use hotel::{
    Hotel, HotelDetails, HotelDraft, HotelLocation, HotelPage, HotelSummary, NewRoom, Room,
    SearchFilters, SearchRequest,
};
pub use user::{
    AdminUser, AdminUserFields, AdminUserUpdate, LoginResponse, UserPage, UserProfile, UserUpdate,
};

/// Body of calls that only acknowledge, e.g. `{ "message": "Email confirmed" }`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ack {
    pub message: Option<String>,
}

impl Ack {
    /// Any JSON is accepted; a top-level or `informations.message` string is kept.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let message = value
            .get("message")
            .or_else(|| value.get("informations").and_then(|i| i.get("message")))
            .and_then(serde_json::Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string);
        Ack { message }
    }

    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_string())
    }
}

/// `AIR_CONDITIONING` / `air_conditioning` → `Air Conditioning`.
pub fn humanize(raw: &str) -> String {
    raw.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Accept `"42"`, `42` or `null` for an id field.
pub(crate) fn id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(s)) => s,
        Some(RawId::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

/// Hotel amenities. The first thirteen are searchable from the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Amenity {
    Wifi,
    Pool,
    Gym,
    Spa,
    Parking,
    Restaurant,
    AirConditioning,
    PetFriendly,
    AirportShuttle,
    Bar,
    BusinessCenter,
    Laundry,
    SmokingArea,
    RoomService,
    ConferenceRoom,
}

impl Amenity {
    pub const ALL: [Amenity; 15] = [
        Amenity::Wifi,
        Amenity::Pool,
        Amenity::Gym,
        Amenity::Spa,
        Amenity::Parking,
        Amenity::Restaurant,
        Amenity::AirConditioning,
        Amenity::PetFriendly,
        Amenity::AirportShuttle,
        Amenity::Bar,
        Amenity::BusinessCenter,
        Amenity::Laundry,
        Amenity::SmokingArea,
        Amenity::RoomService,
        Amenity::ConferenceRoom,
    ];

    pub fn searchable() -> &'static [Amenity] {
        &Self::ALL[..13]
    }

    /// Wire name, e.g. `AIR_CONDITIONING`.
    pub fn as_str(self) -> &'static str {
        match self {
            Amenity::Wifi => "WIFI",
            Amenity::Pool => "POOL",
            Amenity::Gym => "GYM",
            Amenity::Spa => "SPA",
            Amenity::Parking => "PARKING",
            Amenity::Restaurant => "RESTAURANT",
            Amenity::AirConditioning => "AIR_CONDITIONING",
            Amenity::PetFriendly => "PET_FRIENDLY",
            Amenity::AirportShuttle => "AIRPORT_SHUTTLE",
            Amenity::Bar => "BAR",
            Amenity::BusinessCenter => "BUSINESS_CENTER",
            Amenity::Laundry => "LAUNDRY",
            Amenity::SmokingArea => "SMOKING_AREA",
            Amenity::RoomService => "ROOM_SERVICE",
            Amenity::ConferenceRoom => "CONFERENCE_ROOM",
        }
    }

    /// Case-insensitive lookup; `air_conditioning` and `AIR_CONDITIONING` both match.
    pub fn parse(raw: &str) -> Option<Amenity> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(raw.trim()))
    }

    /// Filter chip label: the humanised search key (`Wifi`, `Air Conditioning`).
    pub fn chip_label(self) -> String {
        humanize(self.as_str())
    }

    /// Label on hotel pages and admin forms.
    pub fn label(self) -> String {
        match self {
            Amenity::Wifi => "Wi-Fi".to_string(),
            other => humanize(other.as_str()),
        }
    }

    /// Display any amenity string a hotel record carries.
    pub fn display(raw: &str) -> String {
        Self::parse(raw)
            .map(Amenity::label)
            .unwrap_or_else(|| raw.to_string())
    }
}

/// Star-rating filter categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StarRating {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl StarRating {
    pub const ALL: [StarRating; 5] = [
        StarRating::One,
        StarRating::Two,
        StarRating::Three,
        StarRating::Four,
        StarRating::Five,
    ];

    pub fn from_count(count: u8) -> Option<StarRating> {
        Self::ALL.into_iter().find(|s| s.count() == count)
    }

    pub fn count(self) -> u8 {
        self as u8
    }

    /// `1 Star`, `2 Stars`...
    pub fn label(self) -> String {
        match self.count() {
            1 => "1 Star".to_string(),
            n => format!("{n} Stars"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Executive,
    Single,
    Double,
    Twin,
    Family,
    Penthouse,
}

impl RoomType {
    /// Types the admin form can create.
    pub const CREATABLE: [RoomType; 4] = [
        RoomType::Standard,
        RoomType::Deluxe,
        RoomType::Suite,
        RoomType::Executive,
    ];

    const ALL: [RoomType; 9] = [
        RoomType::Standard,
        RoomType::Deluxe,
        RoomType::Suite,
        RoomType::Executive,
        RoomType::Single,
        RoomType::Double,
        RoomType::Twin,
        RoomType::Family,
        RoomType::Penthouse,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RoomType::Standard => "STANDARD",
            RoomType::Deluxe => "DELUXE",
            RoomType::Suite => "SUITE",
            RoomType::Executive => "EXECUTIVE",
            RoomType::Single => "SINGLE",
            RoomType::Double => "DOUBLE",
            RoomType::Twin => "TWIN",
            RoomType::Family => "FAMILY",
            RoomType::Penthouse => "PENTHOUSE",
        }
    }

    pub fn parse(raw: &str) -> Option<RoomType> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RoomType::Standard => "Standard Room",
            RoomType::Deluxe => "Deluxe Room",
            RoomType::Suite => "Suite",
            RoomType::Executive => "Executive Room",
            RoomType::Single => "Single Room",
            RoomType::Double => "Double Room",
            RoomType::Twin => "Twin Room",
            RoomType::Family => "Family Room",
            RoomType::Penthouse => "Penthouse",
        }
    }

    /// Display name for a raw type string; unknown types are shown as-is.
    pub fn display(raw: &str) -> String {
        Self::parse(raw)
            .map(|t| t.display_name().to_string())
            .unwrap_or_else(|| raw.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomFeature {
    KingSizeBed,
    AirConditioning,
    FlatScreenTv,
    MiniFridge,
    Desk,
    Safe,
    CoffeeMachine,
    Wifi,
    RoomService,
    Balcony,
    Shower,
    Bathtub,
    HairDryer,
    Closet,
    SmokeDetected,
    NoSmoking,
    PetFriendly,
}

impl RoomFeature {
    pub const ALL: [RoomFeature; 17] = [
        RoomFeature::KingSizeBed,
        RoomFeature::AirConditioning,
        RoomFeature::FlatScreenTv,
        RoomFeature::MiniFridge,
        RoomFeature::Desk,
        RoomFeature::Safe,
        RoomFeature::CoffeeMachine,
        RoomFeature::Wifi,
        RoomFeature::RoomService,
        RoomFeature::Balcony,
        RoomFeature::Shower,
        RoomFeature::Bathtub,
        RoomFeature::HairDryer,
        RoomFeature::Closet,
        RoomFeature::SmokeDetected,
        RoomFeature::NoSmoking,
        RoomFeature::PetFriendly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RoomFeature::KingSizeBed => "KING_SIZE_BED",
            RoomFeature::AirConditioning => "AIR_CONDITIONING",
            RoomFeature::FlatScreenTv => "FLAT_SCREEN_TV",
            RoomFeature::MiniFridge => "MINI_FRIDGE",
            RoomFeature::Desk => "DESK",
            RoomFeature::Safe => "SAFE",
            RoomFeature::CoffeeMachine => "COFFEE_MACHINE",
            RoomFeature::Wifi => "WIFI",
            RoomFeature::RoomService => "ROOM_SERVICE",
            RoomFeature::Balcony => "BALCONY",
            RoomFeature::Shower => "SHOWER",
            RoomFeature::Bathtub => "BATHTUB",
            RoomFeature::HairDryer => "HAIR_DRYER",
            RoomFeature::Closet => "CLOSET",
            RoomFeature::SmokeDetected => "SMOKE_DETECTED",
            RoomFeature::NoSmoking => "NO_SMOKING",
            RoomFeature::PetFriendly => "PET_FRIENDLY",
        }
    }

    pub fn label(self) -> String {
        humanize(self.as_str())
    }
}

/// Result ordering for hotel search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    #[default]
    PriceLowToHigh,
    PriceHighToLow,
    Rating,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [
        SortOrder::PriceLowToHigh,
        SortOrder::PriceHighToLow,
        SortOrder::Rating,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::PriceLowToHigh => "Price ↑",
            SortOrder::PriceHighToLow => "Price ↓",
            SortOrder::Rating => "Rating ↓",
        }
    }
}
