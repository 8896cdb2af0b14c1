//! Admin dashboard panels: hotel creation, room and picture management,
//! hotel deletion and user administration.

use std::collections::BTreeSet;

use api::models::{AdminUserFields, Amenity, HotelDraft, NewRoom, RoomFeature, RoomType};
use api::{ApiClient, ApiError, Transport, Upload};
use store::KeyValueStorage;

use super::{FormPhase, ValidationErrors};

pub const HOTEL_CREATED: &str = "Hotel created successfully!";
pub const FORM_HAS_ERRORS: &str = "Please correct the errors in the form";
pub const HOTEL_DELETED: &str = "Hotel successfully deleted";
pub const HOTEL_ID_REQUIRED: &str = "Please enter a hotel ID";
pub const USER_ID_REQUIRED: &str = "Please enter a user ID";
pub const USER_UPDATED: &str = "User updated successfully";
pub const USER_PROMOTED: &str =
    "User promoted to ADMIN successfully. You can no longer edit this user.";
pub const PROMOTION_WARNING: &str = "If you change this user's role to ADMIN, you will no longer be able to edit or view their information after saving.";
pub const USERS_FETCH_FAILED: &str = "Failed to fetch users";
pub const USERS_PAGE_SIZE: u32 = 10;

pub const ALLOWED_IMAGE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/svg+xml",
    "image/webp",
];
pub const INVALID_MAIN_IMAGE: &str =
    "Invalid image format. Supported formats: JPG, JPEG, PNG, SVG, WEBP";
pub const INVALID_EXTRA_IMAGES: &str =
    "Some images have an invalid format. Supported formats: JPG, JPEG, PNG, SVG, WEBP";

pub const HOTEL_NAME_MAX: usize = 25;
pub const DESCRIPTION_MAX: usize = 500;
pub const ADDRESS_MAX: usize = 100;
pub const STATE_MAX: usize = 50;
pub const POSTAL_CODE_MAX: usize = 10;

pub fn is_allowed_image(mime: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&mime.trim().to_ascii_lowercase().as_str())
}

/// Best-effort MIME type from a file name, for browsers that report none.
pub fn mime_from_name(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

/// `Error: <server message>`, or a connectivity hint when the server never answered.
pub fn prefixed_error(err: &ApiError) -> String {
    match err {
        ApiError::Transport(_) | ApiError::Timeout(_) => {
            "Error: Unable to connect to the server".to_string()
        }
        other => format!("Error: {other}"),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HotelForm {
    pub name: String,
    pub description: String,
    pub city: String,
    pub address: String,
    pub country: String,
    pub state: String,
    pub postal_code: String,
    pub google_maps_url: String,
    pub stars: u8,
    pub amenities: BTreeSet<Amenity>,
}

impl HotelForm {
    pub fn toggle_amenity(&mut self, amenity: Amenity) {
        if !self.amenities.remove(&amenity) {
            self.amenities.insert(amenity);
        }
    }

    pub fn validate(&self, has_main_image: bool) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name_len = self.name.chars().count();
        if self.name.is_empty() {
            errors.add("name", "The hotel name cannot be empty");
        } else if !(3..=HOTEL_NAME_MAX).contains(&name_len) {
            errors.add("name", "The hotel name must be between 3 and 25 characters");
        } else if self.name.contains(' ') {
            errors.add("name", "The hotel name cannot contain spaces");
        }
        if self.stars < 1 {
            errors.add("stars", "Please select the number of stars for the hotel");
        }
        if self.description.chars().count() > DESCRIPTION_MAX {
            errors.add("description", "The description cannot exceed 500 characters");
        }
        if self.city.is_empty() {
            errors.add("city", "City is required");
        }
        if self.address.is_empty() {
            errors.add("address", "Address is required");
        } else if self.address.chars().count() > ADDRESS_MAX {
            errors.add("address", "The address cannot exceed 100 characters");
        }
        if self.country.is_empty() {
            errors.add("country", "Country is required");
        }
        if self.state.is_empty() {
            errors.add("state", "State/Region is required");
        } else if self.state.chars().count() > STATE_MAX {
            errors.add("state", "The state/region cannot exceed 50 characters");
        }
        if self.postal_code.is_empty() {
            errors.add("postal_code", "Postal code is required");
        } else if self.postal_code.chars().count() > POSTAL_CODE_MAX {
            errors.add("postal_code", "The postal code cannot exceed 10 characters");
        }
        if self.google_maps_url.is_empty() {
            errors.add("google_maps_url", "Google Maps URL is required");
        } else if !self.google_maps_url.starts_with("https://") {
            errors.add("google_maps_url", "Google Maps URL must start with 'https://'");
        }
        if self.amenities.is_empty() {
            errors.add("amenities", "Please select at least one amenity");
        }
        if !has_main_image {
            errors.add("main_image", "A main image is required");
        }
        errors.into_result()
    }

    pub fn to_draft(&self) -> HotelDraft {
        HotelDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            city: self.city.clone(),
            address: self.address.clone(),
            country: self.country.clone(),
            state: self.state.clone(),
            postal_code: self.postal_code.clone(),
            google_maps_url: self.google_maps_url.clone(),
            stars: self.stars,
            amenities: self.amenities.iter().copied().collect(),
        }
    }
}

/// Validate the hotel form and create the hotel. `picker_errors` holds image
/// format errors raised when the files were chosen; they block the call too.
/// Returns the field errors to display.
pub async fn submit_hotel<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    form: &HotelForm,
    main_image: Option<Upload>,
    extra_images: Vec<Upload>,
    picker_errors: &ValidationErrors,
    mut set_phase: impl FnMut(FormPhase),
) -> ValidationErrors {
    set_phase(FormPhase::Validating);
    let mut invalid = form.validate(main_image.is_some()).err().unwrap_or_default();
    for field in ["main_image", "extra_images"] {
        if let Some(message) = picker_errors.get(field) {
            invalid.add(field, message.to_string());
        }
    }
    let Some(main_image) = main_image.filter(|_| invalid.is_empty()) else {
        set_phase(FormPhase::Error(FORM_HAS_ERRORS.to_string()));
        return invalid;
    };
    set_phase(FormPhase::Submitting);

    match client.create_hotel(&form.to_draft(), main_image, extra_images).await {
        Ok(ack) => set_phase(FormPhase::Success(ack.message_or(HOTEL_CREATED))),
        Err(e) => set_phase(FormPhase::Error(prefixed_error(&e))),
    }
    invalid
}

/// `current/max characters`, flagged when over the limit.
pub fn character_count(current: &str, max: usize) -> (String, bool) {
    let count = current.chars().count();
    (format!("{count}/{max} characters"), count > max)
}

/// Add-room form. Resets to these defaults after every successful add.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomForm {
    pub room_type: RoomType,
    pub features: BTreeSet<RoomFeature>,
    pub max_occupancy: u32,
    pub price: f64,
}

impl Default for RoomForm {
    fn default() -> Self {
        Self {
            room_type: RoomType::Standard,
            features: BTreeSet::new(),
            max_occupancy: 2,
            price: 100.0,
        }
    }
}

impl RoomForm {
    pub fn toggle_feature(&mut self, feature: RoomFeature) {
        if !self.features.remove(&feature) {
            self.features.insert(feature);
        }
    }

    pub fn has_feature(&self, feature: RoomFeature) -> bool {
        self.features.contains(&feature)
    }

    pub fn set_max_occupancy(&mut self, raw: &str) {
        self.max_occupancy = raw.trim().parse().unwrap_or(0);
    }

    pub fn set_price(&mut self, raw: &str) {
        self.price = raw.trim().parse().unwrap_or(0.0);
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.max_occupancy < 1 {
            errors.add("max_occupancy", "Max occupancy must be at least 1");
        }
        if !(self.price.is_finite() && self.price > 0.0) {
            errors.add("price", "Price must be greater than 0");
        }
        errors.into_result()
    }

    pub fn to_new_room(&self, hotel_id: &str) -> NewRoom {
        NewRoom {
            hotel_id: hotel_id.to_string(),
            room_type: self.room_type,
            features: self.features.iter().copied().collect(),
            max_occupancy: self.max_occupancy,
            price: self.price,
        }
    }
}

pub fn validate_hotel_id(id: &str) -> Result<(), String> {
    if id.trim().is_empty() {
        Err(HOTEL_ID_REQUIRED.to_string())
    } else {
        Ok(())
    }
}

pub fn validate_user_id(id: &str) -> Result<(), String> {
    if id.trim().is_empty() {
        Err(USER_ID_REQUIRED.to_string())
    } else {
        Ok(())
    }
}

pub fn delete_hotel_error(err: &ApiError) -> String {
    match err.status() {
        Some(404) => "Hotel not found".to_string(),
        Some(400) => "Invalid request parameters".to_string(),
        _ => prefixed_error(err),
    }
}

pub fn user_lookup_error(err: &ApiError) -> String {
    match err.status() {
        Some(403) => "Admin users cannot be retrieved".to_string(),
        Some(404) => "User not found".to_string(),
        _ => prefixed_error(err),
    }
}

pub fn user_update_error(err: &ApiError) -> String {
    format!("Error updating user: {err}")
}

/// Admin edit form for one user.
///
/// Once a USER has been promoted the form is locked: the backend no longer
/// lets an admin read or edit another admin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserEditForm {
    pub user_id: String,
    pub original: AdminUserFields,
    pub fields: AdminUserFields,
    pub locked: bool,
}

impl UserEditForm {
    pub fn new(user_id: impl Into<String>, original: AdminUserFields) -> Self {
        Self {
            user_id: user_id.into(),
            fields: original.clone(),
            original,
            locked: false,
        }
    }

    pub fn shows_promotion_warning(&self) -> bool {
        !self.locked && self.fields.is_promotion_from(&self.original)
    }

    pub fn is_dirty(&self) -> bool {
        !self.fields.diff(&self.original).is_empty()
    }

    /// Record a successful save and return the banner text.
    pub fn saved(&mut self) -> &'static str {
        if self.fields.is_promotion_from(&self.original) {
            self.locked = true;
            USER_PROMOTED
        } else {
            self.original = self.fields.clone();
            USER_UPDATED
        }
    }
}

/// Keyword-filtered, paged user listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub keyword: String,
    pub page: u32,
}

impl UserQuery {
    /// A new keyword always starts again from the first page.
    pub fn search(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
        self.page = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{RecordingTransport, RequestBody, RetryPolicy};
    use serde_json::json;
    use store::{MemoryStorage, Role, SessionStore};

    fn admin_client() -> (ApiClient<RecordingTransport, MemoryStorage>, RecordingTransport) {
        let transport = RecordingTransport::new();
        let storage = MemoryStorage::with_entries([("authToken", "admin-token"), ("userRole", "ADMIN")]);
        let client = ApiClient::new(transport.clone(), SessionStore::open(storage)).with_retry(RetryPolicy::NONE);
        (client, transport)
    }

    fn jpeg(name: &str) -> Upload {
        Upload::new(name, "image/jpeg", vec![0xFF, 0xD8])
    }

    fn valid_hotel() -> HotelForm {
        let mut form = HotelForm {
            name: "GrandHotel".to_string(),
            description: "Lovely".to_string(),
            city: "Paris".to_string(),
            address: "1 Rue de Rivoli".to_string(),
            country: "France".to_string(),
            state: "IDF".to_string(),
            postal_code: "75001".to_string(),
            google_maps_url: "https://maps.example.com/x".to_string(),
            stars: 4,
            ..HotelForm::default()
        };
        form.toggle_amenity(Amenity::Wifi);
        form
    }

    #[test]
    fn test_hotel_without_main_image_is_rejected() {
        let errors = valid_hotel().validate(false).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("main_image"), Some("A main image is required"));
        assert!(valid_hotel().validate(true).is_ok());
    }

    #[tokio::test]
    async fn test_hotel_without_main_image_sends_nothing() {
        let (client, transport) = admin_client();
        let mut last = FormPhase::Idle;

        let errors = submit_hotel(
            &client,
            &valid_hotel(),
            None,
            vec![jpeg("extra.jpg")],
            &ValidationErrors::new(),
            |next| last = next,
        )
        .await;

        assert_eq!(errors.get("main_image"), Some("A main image is required"));
        assert_eq!(last, FormPhase::Error(FORM_HAS_ERRORS.to_string()));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_picker_errors_block_hotel_creation() {
        let (client, transport) = admin_client();
        let mut picked = ValidationErrors::new();
        picked.add("extra_images", INVALID_EXTRA_IMAGES);
        let mut last = FormPhase::Idle;

        let errors =
            submit_hotel(&client, &valid_hotel(), Some(jpeg("main.jpg")), Vec::new(), &picked, |next| last = next)
                .await;

        assert_eq!(errors.get("extra_images"), Some(INVALID_EXTRA_IMAGES));
        assert_eq!(last, FormPhase::Error(FORM_HAS_ERRORS.to_string()));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_valid_hotel_is_created() {
        let (client, transport) = admin_client();
        transport.respond_json(201, json!({"informations": {}}));
        let mut phases = Vec::new();

        let errors = submit_hotel(
            &client,
            &valid_hotel(),
            Some(jpeg("main.jpg")),
            vec![jpeg("pool.jpg")],
            &ValidationErrors::new(),
            |next| phases.push(next),
        )
        .await;

        assert!(errors.is_empty());
        assert_eq!(
            phases,
            vec![
                FormPhase::Validating,
                FormPhase::Submitting,
                FormPhase::Success(HOTEL_CREATED.to_string()),
            ]
        );
        let request = transport.last_request().unwrap();
        assert_eq!(request.bearer.as_deref(), Some("admin-token"));
        match request.body {
            RequestBody::Multipart(parts) => assert_eq!(parts.len(), 3),
            other => panic!("expected multipart, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_hotel_server_error_is_prefixed() {
        let (client, transport) = admin_client();
        transport.respond_json(400, json!({"error": "Hotel already exists"}));
        let mut last = FormPhase::Idle;

        submit_hotel(
            &client,
            &valid_hotel(),
            Some(jpeg("main.jpg")),
            Vec::new(),
            &ValidationErrors::new(),
            |next| last = next,
        )
        .await;

        assert_eq!(last, FormPhase::Error("Error: Hotel already exists".to_string()));
        assert_eq!(transport.request_count(), 1);
    }

    #[test]
    fn test_hotel_name_rules() {
        let mut form = valid_hotel();
        form.name = String::new();
        assert_eq!(form.validate(true).unwrap_err().get("name"), Some("The hotel name cannot be empty"));
        form.name = "ab".to_string();
        assert_eq!(
            form.validate(true).unwrap_err().get("name"),
            Some("The hotel name must be between 3 and 25 characters")
        );
        form.name = "Grand Hotel".to_string();
        assert_eq!(
            form.validate(true).unwrap_err().get("name"),
            Some("The hotel name cannot contain spaces")
        );
    }

    #[test]
    fn test_hotel_field_limits() {
        let mut form = valid_hotel();
        form.stars = 0;
        form.description = "d".repeat(501);
        form.address = "a".repeat(101);
        form.state = "s".repeat(51);
        form.postal_code = "12345678901".to_string();
        form.google_maps_url = "http://maps".to_string();
        form.amenities.clear();
        form.city.clear();
        form.country.clear();

        let errors = form.validate(true).unwrap_err();
        for field in [
            "stars",
            "description",
            "address",
            "state",
            "postal_code",
            "google_maps_url",
            "amenities",
            "city",
            "country",
        ] {
            assert!(errors.has(field), "missing error for {field}");
        }
    }

    #[test]
    fn test_draft_carries_amenities() {
        let draft = valid_hotel().to_draft();
        assert_eq!(draft.amenities, vec![Amenity::Wifi]);
        assert_eq!(draft.stars, 4);
    }

    #[test]
    fn test_image_types() {
        assert!(is_allowed_image("image/png"));
        assert!(is_allowed_image("IMAGE/SVG+XML"));
        assert!(!is_allowed_image("image/gif"));
        assert_eq!(mime_from_name("photo.JPG"), "image/jpeg");
        assert_eq!(mime_from_name("noext"), "application/octet-stream");
    }

    #[test]
    fn test_character_count() {
        assert_eq!(character_count("abc", 500), ("3/500 characters".to_string(), false));
        assert!(character_count(&"x".repeat(501), 500).1);
    }

    #[test]
    fn test_room_form_defaults_and_payload() {
        let mut form = RoomForm::default();
        assert_eq!(form.room_type, RoomType::Standard);
        assert_eq!(form.max_occupancy, 2);
        form.toggle_feature(RoomFeature::Wifi);
        form.toggle_feature(RoomFeature::KingSizeBed);
        form.toggle_feature(RoomFeature::Desk);
        form.toggle_feature(RoomFeature::Desk);
        assert!(form.has_feature(RoomFeature::Wifi));

        let room = form.to_new_room("h1");
        assert_eq!(room.features, vec![RoomFeature::KingSizeBed, RoomFeature::Wifi]);
        assert_eq!(room.price, 100.0);
    }

    #[test]
    fn test_room_form_validation() {
        let mut form = RoomForm::default();
        form.set_max_occupancy("0");
        form.set_price("-5");
        let errors = form.validate().unwrap_err();
        assert!(errors.has("max_occupancy"));
        assert!(errors.has("price"));
    }

    #[test]
    fn test_delete_hotel_error_mapping() {
        let http = |status| ApiError::Http {
            status,
            message: "boom".to_string(),
        };
        assert_eq!(delete_hotel_error(&http(404)), "Hotel not found");
        assert_eq!(delete_hotel_error(&http(400)), "Invalid request parameters");
        assert_eq!(delete_hotel_error(&http(500)), "Error: boom");
        assert_eq!(
            delete_hotel_error(&ApiError::Transport("reset".to_string())),
            "Error: Unable to connect to the server"
        );
        assert_eq!(validate_hotel_id("  "), Err(HOTEL_ID_REQUIRED.to_string()));
    }

    #[test]
    fn test_user_error_mapping() {
        let http = |status| ApiError::Http {
            status,
            message: "nope".to_string(),
        };
        assert_eq!(user_lookup_error(&http(403)), "Admin users cannot be retrieved");
        assert_eq!(user_lookup_error(&http(404)), "User not found");
        assert_eq!(user_update_error(&http(500)), "Error updating user: nope");
        assert_eq!(validate_user_id(""), Err(USER_ID_REQUIRED.to_string()));
    }

    #[test]
    fn test_promotion_locks_form() {
        let original = AdminUserFields {
            username: "bob".to_string(),
            role: Role::User,
            ..AdminUserFields::default()
        };
        let mut form = UserEditForm::new("u1", original);
        assert!(!form.is_dirty());
        form.fields.role = Role::Admin;
        assert!(form.shows_promotion_warning());
        assert_eq!(form.saved(), USER_PROMOTED);
        assert!(form.locked);
        assert!(!form.shows_promotion_warning());
    }

    #[test]
    fn test_plain_update_rebases() {
        let original = AdminUserFields {
            username: "bob".to_string(),
            ..AdminUserFields::default()
        };
        let mut form = UserEditForm::new("u1", original);
        form.fields.username = "robert".to_string();
        assert!(form.is_dirty());
        assert_eq!(form.saved(), USER_UPDATED);
        assert!(!form.is_dirty());
        assert!(!form.locked);
    }

    #[test]
    fn test_keyword_search_resets_page() {
        let mut query = UserQuery {
            keyword: String::new(),
            page: 3,
        };
        query.search("ali");
        assert_eq!(query, UserQuery { keyword: "ali".to_string(), page: 0 });
    }
}
