//! Form models: local validation and panel state, independent of rendering.
//!
//! Every panel runs the same [`FormPhase`] machine:
//! `Idle → Validating → Submitting → Success(msg) | Error(msg)`.
//! Validation failures never reach the network; server errors are shown
//! verbatim.

pub mod account;
pub mod admin;
pub mod auth;
pub mod booking;

use std::collections::BTreeMap;

/// Pause between a success message and the follow-up navigation.
pub const REDIRECT_DELAY_SECS: u64 = 2;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success(String),
    Error(String),
}

impl FormPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormPhase::Submitting)
    }

    pub fn success(&self) -> Option<&str> {
        match self {
            FormPhase::Success(message) => Some(message),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FormPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Outcome of a finished call: the success message or the error's text.
    pub fn finished<E: std::fmt::Display>(result: Result<String, E>) -> FormPhase {
        match result {
            Ok(message) => FormPhase::Success(message),
            Err(err) => FormPhase::Error(err.to_string()),
        }
    }
}

/// Field name → message. Empty means the form may be submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Message for `field`, or `""` so views can render it unconditionally.
    pub fn message(&self, field: &str) -> String {
        self.get(field).unwrap_or_default().to_string()
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

const PASSWORD_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

/// 0..=4: length ≥ 8, an uppercase letter, a lowercase letter, a digit or
/// special character. One point each.
pub fn password_strength(password: &str) -> u8 {
    let checks = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password
            .chars()
            .any(|c| c.is_ascii_digit() || PASSWORD_SPECIALS.contains(c)),
    ];
    checks.into_iter().filter(|&passed| passed).count() as u8
}

pub fn strength_label(strength: u8) -> &'static str {
    match strength {
        1 => "Very weak",
        2 => "Weak",
        3 => "Moderate",
        4 => "Strong",
        _ => "",
    }
}
