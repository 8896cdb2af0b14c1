//! Booking modal form.

use api::models::NewBooking;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use super::ValidationErrors;

pub const BOOKING_SUCCESS: &str = "Booking successfully created!";

/// `datetime-local` input format.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingForm {
    pub guests: u32,
    pub check_in: String,
    pub check_out: String,
}

impl BookingForm {
    /// One guest, checking in now and out a day later.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            guests: 1,
            check_in: now.format(DATETIME_FORMAT).to_string(),
            check_out: (now + Duration::days(1)).format(DATETIME_FORMAT).to_string(),
        }
    }

    pub fn now() -> Self {
        Self::starting_at(Utc::now())
    }

    /// Parse the guests field; anything unreadable becomes 0 and fails validation.
    pub fn set_guests(&mut self, raw: &str) {
        self.guests = raw.trim().parse().unwrap_or(0);
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.guests < 1 {
            errors.add("guests", "At least one guest is required");
        }
        let check_in = parse_datetime(&self.check_in);
        let check_out = parse_datetime(&self.check_out);
        if check_in.is_none() {
            errors.add("check_in", "Please choose a check-in date");
        }
        if check_out.is_none() {
            errors.add("check_out", "Please choose a check-out date");
        }
        if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
            if check_out <= check_in {
                errors.add("check_out", "Check-out must be after check-in");
            }
        }
        errors.into_result()
    }

    pub fn to_new_booking(&self, hotel_id: &str, room_id: &str) -> NewBooking {
        NewBooking {
            hotel_id: hotel_id.to_string(),
            hotel_room_id: room_id.to_string(),
            guests: self.guests,
            check_in_date: self.check_in.clone(),
            check_out_date: self.check_out.clone(),
        }
    }
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), DATETIME_FORMAT).ok()
}

/// `2025-06-01T14:00` → `2025-06-01 14:00`; anything else is returned as-is.
pub fn display_datetime(value: &str) -> String {
    let trimmed = value.get(..16).unwrap_or(value);
    match parse_datetime(trimmed) {
        Some(parsed) => parsed.format("%Y-%m-%d %H:%M").to_string(),
        None => value.to_string(),
    }
}
