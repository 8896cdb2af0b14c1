//! # Admin endpoints (`/private/admin/...`)
//!
//! All calls carry the bearer token; the backend enforces the ADMIN role.
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`ApiClient::create_hotel`] | `POST /private/admin/hotel` (multipart) |
//! | [`ApiClient::delete_hotel`] | `DELETE /private/admin/hotel/:id` |
//! | [`ApiClient::add_room`] | `POST /private/admin/hotel/room` |
//! | [`ApiClient::delete_room`] | `DELETE /private/admin/hotel/:hotelId/room/:roomId` |
//! | [`ApiClient::add_hotel_image`] | `POST /private/admin/hotel/:hotelId/picture` (multipart) |
//! | [`ApiClient::delete_hotel_image`] | `DELETE /private/admin/hotel/:hotelId/picture?url=` |
//! | [`ApiClient::hotel_bookings`] | `GET /private/admin/hotel/:id/bookings` |
//! | [`ApiClient::get_user`] | `GET /private/admin/user/:id` |
//! | [`ApiClient::update_user_by_id`] | `PUT /private/admin/user/:id` |
//! | [`ApiClient::user_bookings`] | `GET /private/admin/user/:id/bookings` |
//! | [`ApiClient::list_users`] | `GET /private/admin/users?keyword&page&pageSize` |

use store::KeyValueStorage;

use crate::booking::bookings_from;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::user::AdminUserEnvelope;
use crate::models::{Ack, AdminUser, AdminUserUpdate, Booking, HotelDraft, NewRoom, UserPage};
use crate::transport::{ApiRequest, FormPart, Transport, Upload};

const HOTEL: &str = "/private/admin/hotel";
const USER: &str = "/private/admin/user";

impl<T: Transport, S: KeyValueStorage> ApiClient<T, S> {
    /// Multipart: `request` holds the JSON draft, then one `pictures` part per
    /// image with the main image first.
    pub async fn create_hotel(
        &self,
        draft: &HotelDraft,
        main_image: Upload,
        extra_images: Vec<Upload>,
    ) -> Result<Ack, ApiError> {
        let mut parts = Vec::with_capacity(extra_images.len() + 2);
        parts.push(FormPart::text("request", serde_json::to_string(draft)?));
        parts.push(FormPart::file("pictures", main_image));
        parts.extend(extra_images.into_iter().map(|image| FormPart::file("pictures", image)));

        let request = ApiRequest::post(HOTEL).bearer(self.bearer()?).multipart(parts);
        let value = self.call(request).await?;
        tracing::info!(name = %draft.name, "hotel created");
        Ok(Ack::from_value(&value))
    }

    pub async fn delete_hotel(&self, hotel_id: &str) -> Result<Ack, ApiError> {
        let request = ApiRequest::delete(HOTEL).segment(hotel_id).bearer(self.bearer()?);
        let value = self.call(request).await?;
        tracing::info!(%hotel_id, "hotel deleted");
        Ok(Ack::from_value(&value))
    }

    pub async fn add_room(&self, room: &NewRoom) -> Result<Ack, ApiError> {
        let request = ApiRequest::post(HOTEL)
            .segment("room")
            .bearer(self.bearer()?)
            .json(serde_json::to_value(room)?);
        let value = self.call(request).await?;
        Ok(Ack::from_value(&value))
    }

    pub async fn delete_room(&self, hotel_id: &str, room_id: &str) -> Result<Ack, ApiError> {
        let request = ApiRequest::delete(HOTEL)
            .segment(hotel_id)
            .segment("room")
            .segment(room_id)
            .bearer(self.bearer()?);
        let value = self.call(request).await?;
        Ok(Ack::from_value(&value))
    }

    pub async fn add_hotel_image(&self, hotel_id: &str, image: Upload) -> Result<Ack, ApiError> {
        let request = ApiRequest::post(HOTEL)
            .segment(hotel_id)
            .segment("picture")
            .bearer(self.bearer()?)
            .multipart(vec![FormPart::file("picture", image)]);
        let value = self.call(request).await?;
        Ok(Ack::from_value(&value))
    }

    pub async fn delete_hotel_image(&self, hotel_id: &str, image_url: &str) -> Result<Ack, ApiError> {
        let request = ApiRequest::delete(HOTEL)
            .segment(hotel_id)
            .segment("picture")
            .query("url", image_url)
            .bearer(self.bearer()?);
        let value = self.call(request).await?;
        Ok(Ack::from_value(&value))
    }

    pub async fn hotel_bookings(&self, hotel_id: &str) -> Result<Vec<Booking>, ApiError> {
        let request = ApiRequest::get(HOTEL)
            .segment(hotel_id)
            .segment("bookings")
            .bearer(self.bearer()?);
        bookings_from(self.call(request).await?)
    }

    /// The backend refuses (403) to return other admins.
    pub async fn get_user(&self, user_id: &str) -> Result<AdminUser, ApiError> {
        let request = ApiRequest::get(USER).segment(user_id).bearer(self.bearer()?);
        let envelope: AdminUserEnvelope = self.call_as(request).await?;
        Ok(envelope.user.user)
    }

    pub async fn update_user_by_id(&self, user_id: &str, update: &AdminUserUpdate) -> Result<Ack, ApiError> {
        let request = ApiRequest::put(USER)
            .segment(user_id)
            .bearer(self.bearer()?)
            .json(serde_json::to_value(update)?);
        let value = self.call(request).await?;
        tracing::info!(%user_id, role = ?update.role, "user updated");
        Ok(Ack::from_value(&value))
    }

    pub async fn user_bookings(&self, user_id: &str) -> Result<Vec<Booking>, ApiError> {
        let request = ApiRequest::get(USER)
            .segment(user_id)
            .segment("bookings")
            .bearer(self.bearer()?);
        bookings_from(self.call(request).await?)
    }

    pub async fn list_users(&self, keyword: &str, page: u32, page_size: u32) -> Result<UserPage, ApiError> {
        let request = ApiRequest::get("/private/admin/users")
            .query("keyword", keyword)
            .query("page", page)
            .query("pageSize", page_size)
            .bearer(self.bearer()?);
        self.call_as(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amenity, RoomFeature, RoomType};
    use crate::transport::{RecordingTransport, RequestBody};
    use crate::RetryPolicy;
    use serde_json::json;
    use store::{MemoryStorage, Role, SessionStore};

    fn admin() -> (ApiClient<RecordingTransport, MemoryStorage>, RecordingTransport) {
        let transport = RecordingTransport::new();
        let storage = MemoryStorage::with_entries([("authToken", "admin-token"), ("userRole", "ADMIN")]);
        let client = ApiClient::new(transport.clone(), SessionStore::open(storage))
            .with_retry(RetryPolicy::NONE);
        (client, transport)
    }

    fn png(name: &str) -> Upload {
        Upload::new(name, "image/png", vec![0x89, 0x50])
    }

    #[tokio::test]
    async fn test_create_hotel_multipart_order() {
        let (client, transport) = admin();
        transport.respond_json(201, json!({"message": "Hotel created"}));
        let draft = HotelDraft {
            name: "Ritz".to_string(),
            stars: 5,
            amenities: vec![Amenity::Spa],
            ..HotelDraft::default()
        };

        let ack = client
            .create_hotel(&draft, png("main.png"), vec![png("pool.png"), png("lobby.png")])
            .await
            .unwrap();
        assert_eq!(ack.message.as_deref(), Some("Hotel created"));

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.path(), "/private/admin/hotel");
        let RequestBody::Multipart(parts) = sent.body else {
            panic!("expected multipart body");
        };
        let names: Vec<&str> = parts.iter().map(FormPart::name).collect();
        assert_eq!(names, vec!["request", "pictures", "pictures", "pictures"]);
        match &parts[1] {
            FormPart::File { upload, .. } => assert_eq!(upload.file_name, "main.png"),
            other => panic!("expected the main image, got {other:?}"),
        }
        match &parts[0] {
            FormPart::Text { value, .. } => {
                let request: serde_json::Value = serde_json::from_str(value).unwrap();
                assert_eq!(request["amenities"], json!(["SPA"]));
            }
            other => panic!("expected the JSON request, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_hotel_not_found() {
        let (client, transport) = admin();
        transport.respond_json(404, json!({"error": "Hotel not found"}));

        let err = client.delete_hotel("99").await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(transport.last_request().unwrap().path(), "/private/admin/hotel/99");
    }

    #[tokio::test]
    async fn test_room_paths() {
        let (client, transport) = admin();
        transport.respond(200, "").respond(200, "");

        let room = NewRoom {
            hotel_id: "h1".to_string(),
            room_type: RoomType::Suite,
            features: vec![RoomFeature::Balcony],
            max_occupancy: 2,
            price: 100.0,
        };
        client.add_room(&room).await.unwrap();
        client.delete_room("h1", "r7").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].path(), "/private/admin/hotel/room");
        assert_eq!(requests[1].path(), "/private/admin/hotel/h1/room/r7");
    }

    #[tokio::test]
    async fn test_image_paths() {
        let (client, transport) = admin();
        transport.respond(200, "").respond(200, "");

        client.add_hotel_image("h1", png("extra.png")).await.unwrap();
        client
            .delete_hotel_image("h1", "https://cdn.example.com/a.png")
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].path(), "/private/admin/hotel/h1/picture");
        assert_eq!(requests[1].path(), "/private/admin/hotel/h1/picture");
        assert_eq!(
            requests[1].query,
            vec![("url".to_string(), "https://cdn.example.com/a.png".to_string())]
        );
    }

    #[tokio::test]
    async fn test_get_user_unwraps_nested_record() {
        let (client, transport) = admin();
        transport.respond_json(200, json!({"user": {"user": {"id": 3, "username": "ann", "role": "USER"}}}));

        let user = client.get_user("3").await.unwrap();

        assert_eq!(user.id, "3");
        assert_eq!(user.username, "ann");
        assert_eq!(transport.last_request().unwrap().bearer.as_deref(), Some("admin-token"));
    }

    #[tokio::test]
    async fn test_get_admin_user_is_forbidden() {
        let (client, transport) = admin();
        transport.respond(403, "");
        assert_eq!(client.get_user("1").await.unwrap_err().status(), Some(403));
    }

    #[tokio::test]
    async fn test_update_user_by_id_body() {
        let (client, transport) = admin();
        transport.respond(200, "{}");

        let update = AdminUserUpdate {
            role: Some(Role::Admin),
            ..AdminUserUpdate::default()
        };
        client.update_user_by_id("3", &update).await.unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, reqwest::Method::PUT);
        assert_eq!(
            sent.body,
            RequestBody::Json(json!({"username": null, "email": null, "role": "ADMIN", "isValidEmail": null, "profileImageUrl": null}))
        );
    }

    #[tokio::test]
    async fn test_list_users_query() {
        let (client, transport) = admin();
        transport.respond_json(200, json!({"users": [{"id": "u1", "username": "ann"}], "totalPages": 3}));

        let page = client.list_users("ann", 2, 10).await.unwrap();

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.users[0].username, "ann");
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.path(), "/private/admin/users");
        assert_eq!(
            sent.query,
            vec![
                ("keyword".to_string(), "ann".to_string()),
                ("page".to_string(), "2".to_string()),
                ("pageSize".to_string(), "10".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_booking_listings() {
        let (client, transport) = admin();
        transport
            .respond_json(200, json!({"informations": {"bookings": [{"id": "b1"}, {"id": "b2"}]}}))
            .respond_json(200, json!({"bookings": []}));

        assert_eq!(client.hotel_bookings("h1").await.unwrap().len(), 2);
        assert!(client.user_bookings("u1").await.unwrap().is_empty());
        assert_eq!(transport.last_request().unwrap().path(), "/private/admin/user/u1/bookings");
    }
}
