//! # Authentication endpoints
//!
//! | Method | Endpoint | Session effect |
//! |--------|----------|----------------|
//! | [`ApiClient::login`] | `POST /auth/login` | stores the token |
//! | [`ApiClient::sign_in`] | login + `GET /private/user` | stores token and profile |
//! | [`ApiClient::register`] | `POST /auth/register` | none |
//! | [`ApiClient::confirm_email`] | `POST /auth/confirm-email` | none |
//! | [`ApiClient::resend_confirmation_email`] | `POST /auth/resend-confirmation-email` | none |
//! | [`ApiClient::logout`] | no request | clears every session key |
//!
//! None of these need a token.

use serde_json::json;
use store::{KeyValueStorage, ProfileSnapshot};

use crate::client::ApiClient;
use crate::envelope::ApiOutcome;
use crate::error::ApiError;
use crate::models::{Ack, LoginResponse};
use crate::transport::{ApiRequest, Transport};

impl<T: Transport, S: KeyValueStorage> ApiClient<T, S> {
    /// Exchange credentials for a token and store it.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = ApiRequest::post("/auth/login").json(json!({
            "email": email,
            "password": password,
        }));
        let response: LoginResponse = self.call_as(request).await?;
        match response.token.as_deref().filter(|t| !t.is_empty()) {
            Some(token) => {
                self.session().set_token(token);
                tracing::info!("logged in");
            }
            None => tracing::warn!("login response carried no token"),
        }
        Ok(response)
    }

    /// Log in, then fetch the profile and store it next to the token.
    ///
    /// Returns the stored profile, or `None` when the profile call answered
    /// without an `informations` payload. A failed profile call is an error,
    /// but the token from the first step stays stored.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<ProfileSnapshot>, ApiError> {
        self.login(email, password).await?;
        match self.get_user_data().await? {
            ApiOutcome::Ok(profile) => {
                let snapshot = profile.to_snapshot();
                self.session().set_profile(snapshot.clone());
                Ok(Some(snapshot))
            }
            ApiOutcome::Warning(_) | ApiOutcome::Err(_) => {
                tracing::warn!("profile fetched without informations");
                Ok(None)
            }
        }
    }

    /// Forget the session locally. The backend keeps no session to end.
    pub fn logout(&self) {
        self.session().clear();
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<Ack, ApiError> {
        let request = ApiRequest::post("/auth/register").json(json!({
            "username": username,
            "email": email,
            "password": password,
        }));
        let value = self.call(request).await?;
        Ok(Ack::from_value(&value))
    }

    pub async fn confirm_email(&self, token: &str) -> Result<Ack, ApiError> {
        let request = ApiRequest::post("/auth/confirm-email").json(json!({ "token": token }));
        let value = self.call(request).await?;
        Ok(Ack::from_value(&value))
    }

    pub async fn resend_confirmation_email(&self, email: &str) -> Result<Ack, ApiError> {
        let request =
            ApiRequest::post("/auth/resend-confirmation-email").json(json!({ "email": email }));
        let value = self.call(request).await?;
        Ok(Ack::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{RecordingTransport, RequestBody};
    use crate::RetryPolicy;
    use store::{MemoryStorage, Role, SessionStore};

    fn client() -> (ApiClient<RecordingTransport, MemoryStorage>, RecordingTransport, MemoryStorage) {
        let transport = RecordingTransport::new();
        let storage = MemoryStorage::new();
        let client = ApiClient::new(transport.clone(), SessionStore::open(storage.clone()))
            .with_retry(RetryPolicy::NONE);
        (client, transport, storage)
    }

    #[tokio::test]
    async fn test_sign_in_stores_token_and_profile() {
        let (client, transport, storage) = client();
        transport
            .respond_json(200, json!({"token": "fake-token"}))
            .respond_json(
                200,
                json!({"informations": {
                    "username": "testuser",
                    "profileImageUrl": "test-image.jpg",
                    "userRole": "USER"
                }}),
            );

        let profile = client.sign_in("test@example.com", "StrongPass1!").await.unwrap();

        assert_eq!(profile.map(|p| p.username), Some("testuser".to_string()));
        assert_eq!(storage.get("authToken").as_deref(), Some("fake-token"));
        assert_eq!(storage.get("username").as_deref(), Some("testuser"));
        assert_eq!(storage.get("profileImage").as_deref(), Some("test-image.jpg"));
        assert_eq!(storage.get("userRole").as_deref(), Some("USER"));

        let requests = transport.requests();
        assert_eq!(requests[0].path(), "/auth/login");
        assert_eq!(
            requests[0].body,
            RequestBody::Json(json!({"email": "test@example.com", "password": "StrongPass1!"}))
        );
        assert_eq!(requests[0].bearer, None);
        assert_eq!(requests[1].path(), "/private/user");
        assert_eq!(requests[1].bearer.as_deref(), Some("fake-token"));
    }

    #[tokio::test]
    async fn test_sign_in_applies_profile_fallbacks() {
        let (client, transport, storage) = client();
        transport
            .respond_json(200, json!({"token": "t"}))
            .respond_json(200, json!({"informations": {}}));

        client.sign_in("a@b.c", "StrongPass1!").await.unwrap();

        assert_eq!(storage.get("username").as_deref(), Some("undefined"));
        assert_eq!(storage.get("profileImage").as_deref(), Some("undefined"));
        assert_eq!(storage.get("userRole").as_deref(), Some("USER"));
        assert_eq!(client.session().role(), Role::User);
    }

    #[tokio::test]
    async fn test_login_failure_surfaces_server_message() {
        let (client, transport, storage) = client();
        transport.respond_json(401, json!({"error": "Invalid credentials"}));

        let err = client.sign_in("a@b.c", "WrongPass1!").await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(storage.get("authToken"), None);
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_profile_failure_keeps_token() {
        let (client, transport, storage) = client();
        transport
            .respond_json(200, json!({"token": "t"}))
            .respond(500, "");

        let err = client.sign_in("a@b.c", "StrongPass1!").await.unwrap_err();

        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert_eq!(storage.get("authToken").as_deref(), Some("t"));
        assert_eq!(storage.get("username"), None);
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let (client, transport, storage) = client();
        transport
            .respond_json(200, json!({"token": "t"}))
            .respond_json(200, json!({"informations": {"username": "u", "userRole": "ADMIN"}}));
        client.sign_in("a@b.c", "StrongPass1!").await.unwrap();
        assert!(client.session().snapshot().is_admin());

        client.logout();

        for key in store::storage::SESSION_KEYS {
            assert_eq!(storage.get(key), None, "{key} left behind");
        }
        assert!(!client.session().is_authenticated());
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_confirm_email_posts_token_in_body() {
        let (client, transport, _) = client();
        transport.respond_json(200, json!({"message": "Email confirmed"}));

        let ack = client.confirm_email("abc123").await.unwrap();

        assert_eq!(ack.message_or("Email successfully validated"), "Email confirmed");
        let request = transport.last_request().unwrap();
        assert_eq!(request.path(), "/auth/confirm-email");
        assert_eq!(request.body, RequestBody::Json(json!({"token": "abc123"})));
    }

    #[tokio::test]
    async fn test_register_and_resend() {
        let (client, transport, _) = client();
        transport
            .respond(201, "")
            .respond_json(400, json!({"message": "Email already confirmed"}));

        let ack = client.register("ann", "ann@example.com", "Password1").await.unwrap();
        assert_eq!(ack.message, None);

        let err = client.resend_confirmation_email("ann@example.com").await.unwrap_err();
        assert_eq!(err.to_string(), "Email already confirmed");
        assert_eq!(
            transport.last_request().map(|r| r.body),
            Some(RequestBody::Json(json!({"email": "ann@example.com"})))
        );
    }
}
