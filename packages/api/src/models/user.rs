//! # User records
//!
//! - [`UserProfile`]: the signed-in user's own profile (`GET /private/user`).
//!   [`UserProfile::to_snapshot`] applies the fallbacks the session stores
//!   when the backend omits a field.
//! - [`UserUpdate`]: `PATCH /private/user`; unchanged fields are sent as `null`.
//! - [`AdminUser`] / [`AdminUserFields`] / [`AdminUserUpdate`]: the admin
//!   lookup, its editable subset, and the changed-fields-only update built by
//!   [`AdminUserFields::diff`].

use serde::{Deserialize, Serialize};
use store::{ProfileSnapshot, Role};

use super::id_string;

/// Stored when the profile lacks a username or image.
pub const UNDEFINED: &str = "undefined";

/// Body of a successful `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub username: Option<String>,
    pub email: Option<String>,
    pub profile_image_url: Option<String>,
    pub user_role: Option<String>,
}

impl UserProfile {
    pub fn role(&self) -> Role {
        non_empty(&self.user_role).map(Role::parse).unwrap_or_default()
    }

    /// Empty strings count as missing.
    pub fn to_snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            username: non_empty(&self.username).unwrap_or(UNDEFINED).to_string(),
            profile_image_url: non_empty(&self.profile_image_url)
                .unwrap_or(UNDEFINED)
                .to_string(),
            role: self.role(),
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.old_password.is_none()
            && self.new_password.is_none()
    }
}

/// A user as seen from the admin dashboard.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminUser {
    #[serde(alias = "_id", deserialize_with = "id_string")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_valid_email: bool,
    pub profile_image_url: String,
}

/// `{ "user": { "user": AdminUser } }` from `GET /private/admin/user/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AdminUserEnvelope {
    pub user: AdminUserInner,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AdminUserInner {
    pub user: AdminUser,
}

/// The fields an admin can edit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminUserFields {
    pub username: String,
    pub email: String,
    pub role: Role,
    pub is_valid_email: bool,
    pub profile_image_url: String,
}

impl From<&AdminUser> for AdminUserFields {
    fn from(user: &AdminUser) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            role: Role::parse(&user.role),
            is_valid_email: user.is_valid_email,
            profile_image_url: user.profile_image_url.clone(),
        }
    }
}

impl AdminUserFields {
    /// Changed fields carry the new value, the rest are `None`.
    pub fn diff(&self, original: &AdminUserFields) -> AdminUserUpdate {
        fn changed<T: PartialEq + Clone>(new: &T, old: &T) -> Option<T> {
            (new != old).then(|| new.clone())
        }
        AdminUserUpdate {
            username: changed(&self.username, &original.username),
            email: changed(&self.email, &original.email),
            role: changed(&self.role, &original.role),
            is_valid_email: changed(&self.is_valid_email, &original.is_valid_email),
            profile_image_url: changed(&self.profile_image_url, &original.profile_image_url),
        }
    }

    /// USER → ADMIN. After this the account can no longer be edited here.
    pub fn is_promotion_from(&self, original: &AdminUserFields) -> bool {
        original.role == Role::User && self.role == Role::Admin
    }
}

/// Body of `PUT /private/admin/user/:id`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub is_valid_email: Option<bool>,
    pub profile_image_url: Option<String>,
}

impl AdminUserUpdate {
    pub fn is_empty(&self) -> bool {
        *self == AdminUserUpdate::default()
    }
}

/// Body of `GET /private/admin/users`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPage {
    pub users: Vec<AdminUser>,
    pub total_pages: u32,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_fallbacks() {
        let profile = UserProfile {
            username: Some(String::new()),
            ..UserProfile::default()
        };
        assert_eq!(
            profile.to_snapshot(),
            ProfileSnapshot {
                username: "undefined".to_string(),
                profile_image_url: "undefined".to_string(),
                role: Role::User,
            }
        );

        let profile: UserProfile = serde_json::from_value(json!({
            "username": "testuser",
            "profileImageUrl": "test-image.jpg",
            "userRole": "ADMIN"
        }))
        .unwrap();
        let snapshot = profile.to_snapshot();
        assert_eq!(snapshot.username, "testuser");
        assert_eq!(snapshot.role, Role::Admin);
    }

    #[test]
    fn test_user_update_sends_nulls() {
        let update = UserUpdate {
            email: Some("new@example.com".to_string()),
            ..UserUpdate::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"username": null, "email": "new@example.com", "oldPassword": null, "newPassword": null})
        );
        assert!(UserUpdate::default().is_empty());
    }

    #[test]
    fn test_admin_diff_only_changed_fields() {
        let user: AdminUser = serde_json::from_value(json!({
            "id": 5, "username": "ann", "email": "ann@example.com", "role": "USER", "isValidEmail": false
        }))
        .unwrap();
        let original = AdminUserFields::from(&user);
        let mut edited = original.clone();
        edited.is_valid_email = true;
        edited.role = Role::Admin;

        let update = edited.diff(&original);
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"username": null, "email": null, "role": "ADMIN", "isValidEmail": true, "profileImageUrl": null})
        );
        assert!(edited.is_promotion_from(&original));
        assert!(original.diff(&original).is_empty());
    }

    #[test]
    fn test_admin_envelope_shape() {
        let envelope: AdminUserEnvelope = serde_json::from_value(json!({
            "user": {"user": {"id": "u1", "username": "bob", "role": "ADMIN"}}
        }))
        .unwrap();
        assert_eq!(envelope.user.user.username, "bob");
        assert_eq!(envelope.user.user.id, "u1");
    }
}
