//! Endpoints for the signed-in user's own account (`/private/user`).

use store::KeyValueStorage;

use crate::client::ApiClient;
use crate::envelope::ApiOutcome;
use crate::error::ApiError;
use crate::models::{Ack, UserProfile, UserUpdate};
use crate::transport::{ApiRequest, FormPart, Transport, Upload};

impl<T: Transport, S: KeyValueStorage> ApiClient<T, S> {
    pub async fn get_user_data(&self) -> Result<ApiOutcome<UserProfile>, ApiError> {
        let request = ApiRequest::get("/private/user").bearer(self.bearer()?);
        self.call_envelope(request).await
    }

    /// Fetch the profile again and mirror it into the session.
    pub async fn refresh_profile(&self) -> Result<Option<UserProfile>, ApiError> {
        let profile = self.get_user_data().await?.data();
        if let Some(profile) = &profile {
            self.session().set_profile(profile.to_snapshot());
        }
        Ok(profile)
    }

    /// `PATCH /private/user`. Unchanged fields are `None` and go out as `null`.
    pub async fn update_user(&self, update: &UserUpdate) -> Result<Ack, ApiError> {
        let request = ApiRequest::patch("/private/user")
            .bearer(self.bearer()?)
            .json(serde_json::to_value(update)?);
        let value = self.call(request).await?;
        if let Some(username) = &update.username {
            self.session().set_username(username.clone());
        }
        Ok(Ack::from_value(&value))
    }

    /// Upload a new avatar as multipart field `file`, then refresh the stored
    /// profile image from the server's copy of the profile.
    pub async fn update_profile_image(&self, image: Upload) -> Result<Option<String>, ApiError> {
        let request = ApiRequest::post("/private/user/profile-image")
            .bearer(self.bearer()?)
            .multipart(vec![FormPart::file("file", image)]);
        self.call(request).await?;
        let profile = self.refresh_profile().await?;
        Ok(profile.and_then(|p| p.profile_image_url))
    }

    /// Delete the account and forget the session.
    pub async fn delete_user(&self) -> Result<Ack, ApiError> {
        let request = ApiRequest::delete("/private/user").bearer(self.bearer()?);
        let value = self.call(request).await?;
        self.session().clear();
        tracing::info!("account deleted");
        Ok(Ack::from_value(&value))
    }
}
