//! Account page: edit username, email and password.

use api::models::{UserProfile, UserUpdate};

use super::ValidationErrors;

pub const UPDATE_SUCCESS: &str = "Information updated successfully!";
pub const UPDATE_FAILED: &str = "An error occurred during the update.";
pub const IMAGE_FAILED: &str = "Error updating the image.";
pub const NOTHING_TO_UPDATE: &str = "Nothing to update.";

/// Seconds a success banner stays up.
pub const SUCCESS_BANNER_SECS: u64 = 3;
/// Seconds an error banner stays up.
pub const ERROR_BANNER_SECS: u64 = 6;

/// Editable copy of the profile plus the values it was loaded with, so only
/// modified fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountForm {
    loaded_username: String,
    loaded_email: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub profile_image_url: String,
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl AccountForm {
    pub fn from_profile(profile: &UserProfile) -> Self {
        let username = profile.username.clone().unwrap_or_default();
        let email = profile.email.clone().unwrap_or_default();
        Self {
            loaded_username: username.clone(),
            loaded_email: email.clone(),
            username,
            email,
            role: profile.role().as_str().to_string(),
            profile_image_url: profile.profile_image_url.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !self.new_password.is_empty() {
            if self.new_password != self.confirm_password {
                errors.add("confirm_password", "The new passwords do not match");
            } else if self.new_password.chars().count() < 8 {
                errors.add("new_password", "The password must be at least 8 characters long");
            }
        }
        errors.into_result()
    }

    /// Only the fields that differ from what was loaded; the rest are `null`.
    pub fn to_update(&self) -> UserUpdate {
        fn changed(current: &str, loaded: &str) -> Option<String> {
            (current != loaded).then(|| current.to_string())
        }
        fn filled(value: &str) -> Option<String> {
            (!value.is_empty()).then(|| value.to_string())
        }
        UserUpdate {
            username: changed(&self.username, &self.loaded_username),
            email: changed(&self.email, &self.loaded_email),
            old_password: filled(&self.old_password),
            new_password: filled(&self.new_password),
        }
    }

    /// After a successful save: the edited values become the baseline and the
    /// password fields are emptied.
    pub fn saved(&mut self) {
        self.loaded_username = self.username.clone();
        self.loaded_email = self.email.clone();
        self.clear_passwords();
    }

    pub fn clear_passwords(&mut self) {
        self.old_password.clear();
        self.new_password.clear();
        self.confirm_password.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            username: Some("jane".to_string()),
            email: Some("jane@example.com".to_string()),
            profile_image_url: Some("jane.png".to_string()),
            user_role: Some("ADMIN".to_string()),
        }
    }

    #[test]
    fn test_untouched_form_sends_nothing() {
        let form = AccountForm::from_profile(&profile());
        assert_eq!(form.role, "ADMIN");
        assert!(form.to_update().is_empty());
    }

    #[test]
    fn test_only_modified_fields_are_sent() {
        let mut form = AccountForm::from_profile(&profile());
        form.email = "new@example.com".to_string();

        let update = form.to_update();
        assert_eq!(update.username, None);
        assert_eq!(update.email.as_deref(), Some("new@example.com"));
        assert_eq!(update.new_password, None);

        form.saved();
        assert!(form.to_update().is_empty());
    }

    #[test]
    fn test_password_change_rules() {
        let mut form = AccountForm::from_profile(&profile());
        form.new_password = "abcdefgh".to_string();
        form.confirm_password = "abcdefgX".to_string();
        assert!(form.validate().unwrap_err().has("confirm_password"));

        form.new_password = "short".to_string();
        form.confirm_password = "short".to_string();
        assert_eq!(
            form.validate().unwrap_err().get("new_password"),
            Some("The password must be at least 8 characters long")
        );

        form.old_password = "OldPass1!".to_string();
        form.new_password = "NewPass1!".to_string();
        form.confirm_password = "NewPass1!".to_string();
        assert!(form.validate().is_ok());
        let update = form.to_update();
        assert_eq!(update.old_password.as_deref(), Some("OldPass1!"));
        assert_eq!(update.new_password.as_deref(), Some("NewPass1!"));

        form.saved();
        assert!(form.new_password.is_empty());
    }
}
