//! Booking endpoints for the signed-in user (`/private/booking`).

use serde_json::Value;
use store::KeyValueStorage;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Ack, Booking, BookingList, NewBooking};
use crate::transport::{ApiRequest, Transport};

/// Booking listings come back as a bare array, `{bookings}` or
/// `{informations: {bookings}}` depending on the endpoint.
pub(crate) fn bookings_from(value: Value) -> Result<Vec<Booking>, ApiError> {
    let value = match value {
        Value::Object(mut map) => match map.remove("informations") {
            Some(inner) => inner,
            None => Value::Object(map),
        },
        other => other,
    };
    if value.is_array() {
        return Ok(serde_json::from_value(value)?);
    }
    let list: BookingList = serde_json::from_value(value)?;
    Ok(list.bookings)
}

impl<T: Transport, S: KeyValueStorage> ApiClient<T, S> {
    pub async fn get_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let request = ApiRequest::get("/private/booking").bearer(self.bearer()?);
        bookings_from(self.call(request).await?)
    }

    pub async fn create_booking(&self, booking: &NewBooking) -> Result<Ack, ApiError> {
        let request = ApiRequest::post("/private/booking")
            .bearer(self.bearer()?)
            .json(serde_json::to_value(booking)?);
        let value = self.call(request).await?;
        tracing::info!(hotel_id = %booking.hotel_id, room_id = %booking.hotel_room_id, "booking created");
        Ok(Ack::from_value(&value))
    }

    pub async fn cancel_booking(&self, booking_id: &str) -> Result<Ack, ApiError> {
        let request = ApiRequest::delete("/private/booking")
            .segment(booking_id)
            .bearer(self.bearer()?);
        let value = self.call(request).await?;
        Ok(Ack::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{RecordingTransport, RequestBody};
    use crate::RetryPolicy;
    use serde_json::json;
    use store::{MemoryStorage, SessionStore};

    fn client(token: bool) -> (ApiClient<RecordingTransport, MemoryStorage>, RecordingTransport) {
        let transport = RecordingTransport::new();
        let storage = if token {
            MemoryStorage::with_entries([("authToken", "tok")])
        } else {
            MemoryStorage::new()
        };
        let client = ApiClient::new(transport.clone(), SessionStore::open(storage))
            .with_retry(RetryPolicy::NONE);
        (client, transport)
    }

    #[test]
    fn test_bookings_from_each_shape() {
        let row = json!({"id": "b1", "guests": 2});
        assert_eq!(bookings_from(json!([row.clone()])).unwrap().len(), 1);
        assert_eq!(bookings_from(json!({"bookings": [row.clone()]})).unwrap().len(), 1);
        assert_eq!(
            bookings_from(json!({"informations": {"bookings": [row]}})).unwrap()[0].id,
            "b1"
        );
        assert!(bookings_from(json!({})).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_booking_is_not_retried() {
        let (client, transport) = client(true);
        let client = client.with_retry(RetryPolicy {
            max_retries: 3,
            backoff: std::time::Duration::ZERO,
        });
        transport.respond(503, "");

        let booking = NewBooking {
            hotel_id: "h1".to_string(),
            hotel_room_id: "r1".to_string(),
            guests: 2,
            check_in_date: "2025-06-01T14:00".to_string(),
            check_out_date: "2025-06-02T14:00".to_string(),
        };
        assert!(client.create_booking(&booking).await.is_err());
        assert_eq!(transport.request_count(), 1);

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.bearer.as_deref(), Some("tok"));
        assert!(matches!(sent.body, RequestBody::Json(ref v) if v["hotelRoomId"] == "r1"));
    }

    #[tokio::test]
    async fn test_cancel_booking_path() {
        let (client, transport) = client(true);
        transport.respond(204, "");

        client.cancel_booking("b42").await.unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, reqwest::Method::DELETE);
        assert_eq!(sent.path(), "/private/booking/b42");
    }

    #[tokio::test]
    async fn test_bookings_need_a_token() {
        let (client, transport) = client(false);
        assert_eq!(client.get_bookings().await.unwrap_err(), ApiError::MissingToken);
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_booking_errors_join_list() {
        let (client, transport) = client(true);
        transport.respond_json(400, json!({"errors": ["Room unavailable", "Dates overlap"]}));
        assert_eq!(
            client.get_bookings().await.unwrap_err().to_string(),
            "Room unavailable, Dates overlap"
        );
    }
}
