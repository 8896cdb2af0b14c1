//! Public hotel endpoints: search and details. No token required.

use store::KeyValueStorage;

use crate::client::ApiClient;
use crate::envelope::ApiOutcome;
use crate::error::ApiError;
use crate::models::{HotelDetails, HotelPage, SearchRequest};
use crate::transport::{ApiRequest, Transport};

impl<T: Transport, S: KeyValueStorage> ApiClient<T, S> {
    /// `POST /hotel`. A search with no hits usually comes back as a
    /// [`ApiOutcome::Warning`] whose page carries the reason in `error`.
    pub async fn search_hotels(&self, search: &SearchRequest) -> Result<ApiOutcome<HotelPage>, ApiError> {
        let request = ApiRequest::post("/hotel").json(serde_json::to_value(search)?);
        self.call_envelope(request).await
    }

    pub async fn get_hotel(&self, hotel_id: &str) -> Result<ApiOutcome<HotelDetails>, ApiError> {
        let request = ApiRequest::get("/hotel").segment(hotel_id);
        self.call_envelope(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SearchFilters, SortOrder};
    use crate::transport::RecordingTransport;
    use crate::RetryPolicy;
    use serde_json::json;
    use store::{MemoryStorage, SessionStore};

    fn client() -> (ApiClient<RecordingTransport, MemoryStorage>, RecordingTransport) {
        let transport = RecordingTransport::new();
        let client = ApiClient::new(transport.clone(), SessionStore::open(MemoryStorage::new()))
            .with_retry(RetryPolicy::NONE);
        (client, transport)
    }

    fn search() -> SearchRequest {
        SearchRequest {
            page: 0,
            page_size: 10,
            filter: SortOrder::PriceLowToHigh,
            filters: SearchFilters {
                max_price: 2000,
                guests: 1,
                bedrooms: 1,
                ..SearchFilters::default()
            },
        }
    }

    #[tokio::test]
    async fn test_search_decodes_each_envelope() {
        let (client, transport) = client();
        transport
            .respond_json(200, json!({"informations": {"hotels": [{"hotelId": 1, "name": "Ritz"}], "hotelsFound": 1, "totalPages": 1}}))
            .respond_json(200, json!({"warning": {"totalPages": 0, "error": "No hotel found"}}))
            .respond_json(200, json!({"error": {"error": "Invalid filters"}}));

        let ok = client.search_hotels(&search()).await.unwrap();
        assert_eq!(ok.data().map(|p| p.hotels_found), Some(1));

        let warning = client.search_hotels(&search()).await.unwrap();
        assert!(matches!(&warning, ApiOutcome::Warning(page) if page.error.as_deref() == Some("No hotel found")));

        let error = client.search_hotels(&search()).await.unwrap();
        assert_eq!(error, ApiOutcome::Err("Invalid filters".to_string()));

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.path(), "/hotel");
        assert_eq!(sent.bearer, None);
    }

    #[tokio::test]
    async fn test_get_hotel_encodes_id() {
        let (client, transport) = client();
        transport.respond_json(200, json!({"informations": {"hotel": {"id": "a b", "name": "Ritz"}}}));

        let details = client.get_hotel("a b").await.unwrap().into_result().unwrap();

        assert_eq!(details.hotel.name, "Ritz");
        assert_eq!(transport.last_request().unwrap().segments, vec!["hotel", "a b"]);
    }

    #[tokio::test]
    async fn test_get_hotel_is_retried() {
        let transport = RecordingTransport::new();
        let client = ApiClient::new(transport.clone(), SessionStore::open(MemoryStorage::new()))
            .with_retry(RetryPolicy {
                max_retries: 1,
                backoff: std::time::Duration::ZERO,
            });
        transport
            .respond(502, "")
            .respond_json(200, json!({"informations": {"hotel": {"name": "Ritz"}}}));

        assert!(client.get_hotel("1").await.unwrap().is_ok());
        assert_eq!(transport.request_count(), 2);
    }
}
