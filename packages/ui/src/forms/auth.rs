//! Login, registration and email-confirmation forms.

use std::future::Future;

use api::{ApiClient, Transport};
use store::KeyValueStorage;

use super::{is_email, password_strength, FormPhase, ValidationErrors};

pub const LOGIN_SUCCESS: &str = "Login successful. Redirecting...";
pub const REGISTER_SUCCESS: &str = "Account created successfully.";
pub const EMAIL_VALIDATED: &str = "Email successfully validated";
pub const MISSING_VALIDATION_TOKEN: &str = "No validation token provided.";
pub const EMAIL_VALIDATION_FAILED: &str =
    "An error occurred during email validation. Please try again.";

/// Seconds between two confirmation-email sends.
pub const RESEND_COOLDOWN_SECS: u32 = 60;
/// How long the "email sent" notice stays up.
pub const SENT_NOTICE_SECS: u64 = 5;
/// Seconds before a validated account is sent to the login page.
pub const VALIDATED_REDIRECT_SECS: u32 = 5;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.email.trim().is_empty() {
            errors.add("email", "Email is required.");
        }
        if password_strength(&self.password) < 4 {
            errors.add(
                "password",
                "Password must be at least 8 characters long, with one uppercase letter, one lowercase letter, and a number or special character.",
            );
        }
        errors.into_result()
    }

    /// Banner text for a failed login call.
    pub fn api_error(message: impl std::fmt::Display) -> String {
        format!("ERROR : {message}")
    }
}

/// Run the login panel once: validate, sign in, then await `redirect` while
/// the success message is showing. Nothing is sent when validation fails;
/// the field errors come back instead.
pub async fn submit_login<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    form: &LoginForm,
    mut set_phase: impl FnMut(FormPhase),
    redirect: impl Future<Output = ()>,
) -> ValidationErrors {
    set_phase(FormPhase::Validating);
    if let Err(invalid) = form.validate() {
        set_phase(FormPhase::Idle);
        return invalid;
    }
    set_phase(FormPhase::Submitting);

    match client.sign_in(form.email.trim(), &form.password).await {
        Ok(_) => {
            set_phase(FormPhase::Success(LOGIN_SUCCESS.to_string()));
            redirect.await;
        }
        Err(e) => {
            tracing::warn!(status = ?e.status(), "login failed");
            set_phase(FormPhase::Error(LoginForm::api_error(e)));
        }
    }
    ValidationErrors::new()
}

/// Confirm the account behind a validation link. The outcome is the phase
/// the confirmation page shows; a blank token never reaches the server.
pub async fn confirm_token<T: Transport, S: KeyValueStorage>(client: &ApiClient<T, S>, token: &str) -> FormPhase {
    if token.trim().is_empty() {
        return FormPhase::Error(MISSING_VALIDATION_TOKEN.to_string());
    }
    match client.confirm_email(token).await {
        Ok(_) => FormPhase::Success(EMAIL_VALIDATED.to_string()),
        Err(e) => {
            tracing::warn!("email confirmation failed: {e}");
            FormPhase::Error(EMAIL_VALIDATION_FAILED.to_string())
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.username.trim().is_empty() {
            errors.add("username", "Username is required.");
        }
        if !is_email(self.email.trim()) {
            errors.add("email", "Invalid email format.");
        }
        if self.password.chars().count() < 8 {
            errors.add("password", "Password must be at least 8 characters long.");
        }
        if self.password != self.confirm_password {
            errors.add("confirm_password", "Passwords do not match.");
        }
        errors.into_result()
    }

    pub fn strength(&self) -> u8 {
        password_strength(&self.password)
    }
}

pub fn validate_resend_email(email: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if !is_email(email.trim()) {
        errors.add("email", "Please enter a valid email address");
    }
    errors.into_result()
}

/// One-second countdown driven by the view's timer task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn start(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0
    }

    /// Advance one second. Returns `true` on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }
}

/// Gate for the resend-confirmation button.
///
/// A send closes the gate until the request settles; success keeps it
/// closed for [`RESEND_COOLDOWN_SECS`], failure reopens it at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResendGate {
    in_flight: bool,
    cooldown: Countdown,
}

impl ResendGate {
    pub fn can_send(&self) -> bool {
        !self.in_flight && !self.cooldown.is_running()
    }

    /// Claim the gate for one send. `false` when a send is not allowed now.
    pub fn begin(&mut self) -> bool {
        if !self.can_send() {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn sent(&mut self) {
        self.in_flight = false;
        self.cooldown = Countdown::start(RESEND_COOLDOWN_SECS);
    }

    pub fn failed(&mut self) {
        self.in_flight = false;
    }

    pub fn tick(&mut self) {
        self.cooldown.tick();
    }

    pub fn seconds_left(&self) -> u32 {
        self.cooldown.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{RecordingTransport, RequestBody, RetryPolicy};
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use store::{MemoryStorage, SessionStore};

    fn client() -> (ApiClient<RecordingTransport, MemoryStorage>, RecordingTransport) {
        let transport = RecordingTransport::new();
        let client = ApiClient::new(transport.clone(), SessionStore::open(MemoryStorage::new()))
            .with_retry(RetryPolicy::NONE);
        (client, transport)
    }

    fn credentials() -> LoginForm {
        LoginForm {
            email: " alice@example.com ".to_string(),
            password: "StrongPass1!".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_shows_success_before_redirecting() {
        let (client, transport) = client();
        transport
            .respond_json(200, json!({"token": "tok"}))
            .respond_json(200, json!({"informations": {"username": "alice", "userRole": "USER"}}));
        let phases = RefCell::new(Vec::new());
        let redirected_after = Cell::new(None);

        let errors = submit_login(
            &client,
            &credentials(),
            |next| phases.borrow_mut().push(next),
            async { redirected_after.set(Some(phases.borrow().clone())) },
        )
        .await;

        assert!(errors.is_empty());
        let expected = vec![
            FormPhase::Validating,
            FormPhase::Submitting,
            FormPhase::Success(LOGIN_SUCCESS.to_string()),
        ];
        assert_eq!(redirected_after.take(), Some(expected.clone()));
        assert_eq!(phases.into_inner(), expected);
        assert!(client.session().is_authenticated());
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_login_failure_stays_on_page() {
        let (client, transport) = client();
        transport.respond_json(401, json!({"error": "Invalid credentials"}));
        let mut last = FormPhase::Idle;
        let redirected = Cell::new(false);

        submit_login(&client, &credentials(), |next| last = next, async { redirected.set(true) }).await;

        assert_eq!(last, FormPhase::Error("ERROR : Invalid credentials".to_string()));
        assert!(!redirected.get());
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_each_token_is_confirmed() {
        let (client, transport) = client();
        transport
            .respond_json(200, json!({"message": "ok"}))
            .respond_json(400, json!({"error": "Token expired"}));

        assert_eq!(confirm_token(&client, "first").await, FormPhase::Success(EMAIL_VALIDATED.to_string()));
        assert_eq!(
            confirm_token(&client, "second").await,
            FormPhase::Error(EMAIL_VALIDATION_FAILED.to_string())
        );

        let bodies: Vec<_> = transport.requests().into_iter().map(|r| r.body).collect();
        assert_eq!(
            bodies,
            vec![
                RequestBody::Json(json!({"token": "first"})),
                RequestBody::Json(json!({"token": "second"})),
            ]
        );
    }

    #[tokio::test]
    async fn test_blank_token_is_not_sent() {
        let (client, transport) = client();

        assert_eq!(
            confirm_token(&client, "  ").await,
            FormPhase::Error(MISSING_VALIDATION_TOKEN.to_string())
        );
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_login_sends_nothing() {
        let (client, transport) = client();
        let mut last = FormPhase::Idle;

        let errors = submit_login(&client, &LoginForm::default(), |next| last = next, async {}).await;

        assert!(errors.has("email"));
        assert!(errors.has("password"));
        assert_eq!(last, FormPhase::Idle);
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_login_requires_email_and_strong_password() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required."));
        assert!(errors.get("password").unwrap().starts_with("Password must be at least 8"));

        let weak = LoginForm {
            email: "test@example.com".to_string(),
            password: "password".to_string(),
        };
        assert!(weak.validate().unwrap_err().has("password"));

        let ok = LoginForm {
            email: "test@example.com".to_string(),
            password: "StrongPass1!".to_string(),
        };
        assert!(ok.validate().is_ok());
        assert_eq!(LoginForm::api_error("Invalid credentials"), "ERROR : Invalid credentials");
    }

    #[test]
    fn test_register_messages() {
        let form = RegisterForm {
            username: " ".to_string(),
            email: "nope".to_string(),
            password: "short".to_string(),
            confirm_password: "other".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("username"), Some("Username is required."));
        assert_eq!(errors.get("email"), Some("Invalid email format."));
        assert_eq!(errors.get("password"), Some("Password must be at least 8 characters long."));
        assert_eq!(errors.get("confirm_password"), Some("Passwords do not match."));

        let form = RegisterForm {
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "longenough".to_string(),
            confirm_password: "longenough".to_string(),
        };
        assert!(form.validate().is_ok());
        assert_eq!(form.strength(), 2);
    }

    #[test]
    fn test_resend_email_validation() {
        assert!(validate_resend_email("a@b.co").is_ok());
        assert_eq!(
            validate_resend_email("ab.co").unwrap_err().get("email"),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_countdown_reports_zero_once() {
        let mut countdown = Countdown::start(2);
        assert!(!countdown.tick());
        assert!(countdown.tick());
        assert!(!countdown.tick());
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_resend_gate_cooldown_after_success() {
        let mut gate = ResendGate::default();
        assert!(gate.begin());
        assert!(!gate.begin());
        gate.sent();
        assert!(!gate.can_send());
        assert_eq!(gate.seconds_left(), 60);
        for _ in 0..59 {
            gate.tick();
        }
        assert!(!gate.can_send());
        gate.tick();
        assert!(gate.can_send());
    }

    #[test]
    fn test_resend_gate_reopens_after_failure() {
        let mut gate = ResendGate::default();
        assert!(gate.begin());
        gate.failed();
        assert!(gate.can_send());
        assert_eq!(gate.seconds_left(), 0);
    }
}
