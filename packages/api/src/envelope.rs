//! # Response envelopes
//!
//! The backend wraps most payloads in one of three keys:
//!
//! | Key | Meaning | Decoded as |
//! |-----|---------|------------|
//! | `informations` | normal result | [`ApiOutcome::Ok`] |
//! | `warning` | partial result, e.g. a search with no hits | [`ApiOutcome::Warning`] |
//! | `error` | business-level failure on a 2xx | [`ApiOutcome::Err`] |
//!
//! Non-2xx bodies go through [`error_from_body`] instead, which looks for
//! `errors[]`, `error` or `message` and falls back to a generic status line.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// A decoded `informations` / `warning` / `error` envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Ok(T),
    Warning(T),
    Err(String),
}

impl<T: DeserializeOwned> ApiOutcome<T> {
    /// Decode an envelope. The first of `informations`, `warning`, `error`
    /// present wins.
    pub fn decode(value: Value) -> Result<Self, ApiError> {
        let Value::Object(mut map) = value else {
            return Err(ApiError::Decode("expected a JSON object".to_string()));
        };
        if let Some(inner) = map.remove("informations") {
            return Ok(ApiOutcome::Ok(serde_json::from_value(inner)?));
        }
        if let Some(inner) = map.remove("warning") {
            return Ok(ApiOutcome::Warning(serde_json::from_value(inner)?));
        }
        if let Some(inner) = map.remove("error") {
            let message = message_of(&inner).unwrap_or_else(|| "Unknown error".to_string());
            return Ok(ApiOutcome::Err(message));
        }
        Err(ApiError::Decode(
            "missing informations, warning or error".to_string(),
        ))
    }
}

impl<T> ApiOutcome<T> {
    /// The payload, whether it came back as a result or a warning.
    pub fn data(self) -> Option<T> {
        match self {
            ApiOutcome::Ok(data) | ApiOutcome::Warning(data) => Some(data),
            ApiOutcome::Err(_) => None,
        }
    }

    /// Treat a warning as success and an `error` envelope as a failure.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiOutcome::Ok(data) | ApiOutcome::Warning(data) => Ok(data),
            ApiOutcome::Err(message) => Err(ApiError::Http {
                status: 200,
                message,
            }),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ApiOutcome::Ok(_))
    }
}

/// Parse a 2xx body. An empty body is an empty object.
pub(crate) fn parse_success(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    Ok(serde_json::from_str(body)?)
}

/// Turn a non-2xx response into [`ApiError::Http`].
pub(crate) fn error_from_body(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| message_of(&value))
        .unwrap_or_else(|| format!("HTTP error! status: {status}"));
    ApiError::Http { status, message }
}

/// Pull a human message out of an error payload.
fn message_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) => {
            if let Some(Value::Array(errors)) = map.get("errors") {
                let joined: Vec<String> = errors
                    .iter()
                    .filter_map(|e| match e {
                        Value::String(s) => Some(s.clone()),
                        other => message_of(other),
                    })
                    .collect();
                if !joined.is_empty() {
                    return Some(joined.join(", "));
                }
            }
            map.get("error")
                .and_then(message_of)
                .or_else(|| map.get("message").and_then(message_of))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, Deserialize, PartialEq)]
    struct Page {
        #[serde(default)]
        total: u32,
    }

    #[test]
    fn test_decode_informations() {
        let outcome = ApiOutcome::<Page>::decode(json!({"informations": {"total": 3}})).unwrap();
        assert_eq!(outcome, ApiOutcome::Ok(Page { total: 3 }));
        assert!(outcome.is_ok());
    }

    #[test]
    fn test_decode_warning_keeps_payload() {
        let outcome = ApiOutcome::<Page>::decode(json!({"warning": {}})).unwrap();
        assert_eq!(outcome.clone().data(), Some(Page { total: 0 }));
        assert!(!outcome.is_ok());
    }

    #[test]
    fn test_decode_error_envelope() {
        let nested = ApiOutcome::<Page>::decode(json!({"error": {"error": "No hotel"}})).unwrap();
        assert_eq!(nested, ApiOutcome::Err("No hotel".to_string()));

        let flat = ApiOutcome::<Page>::decode(json!({"error": "Bad filter"})).unwrap();
        assert_eq!(
            flat.into_result(),
            Err(ApiError::Http {
                status: 200,
                message: "Bad filter".to_string()
            })
        );
    }

    #[test]
    fn test_decode_unknown_shape() {
        assert!(matches!(
            ApiOutcome::<Page>::decode(json!({"something": 1})),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            ApiOutcome::<Page>::decode(json!([1, 2])),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_parse_success_empty_body() {
        assert_eq!(parse_success("").unwrap(), json!({}));
        assert_eq!(parse_success("  \n").unwrap(), json!({}));
        assert_eq!(parse_success(r#"{"a":1}"#).unwrap(), json!({"a": 1}));
        assert!(parse_success("not json").is_err());
    }

    #[test]
    fn test_error_from_body_variants() {
        let err = error_from_body(400, r#"{"errors": ["Name too short", "Stars missing"]}"#);
        assert_eq!(err.to_string(), "Name too short, Stars missing");

        let err = error_from_body(401, r#"{"error": "Invalid credentials"}"#);
        assert_eq!(err.to_string(), "Invalid credentials");

        let err = error_from_body(409, r#"{"message": "Email already used"}"#);
        assert_eq!(err.to_string(), "Email already used");

        let err = error_from_body(500, "<html>oops</html>");
        assert_eq!(err.to_string(), "HTTP error! status: 500");

        let err = error_from_body(404, "");
        assert_eq!(
            err,
            ApiError::Http {
                status: 404,
                message: "HTTP error! status: 404".to_string()
            }
        );
    }
}
