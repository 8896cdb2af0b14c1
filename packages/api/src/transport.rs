//! # Transport: how a request leaves the client
//!
//! [`ApiRequest`] is a backend-agnostic description of one call: method, path
//! segments, query pairs, optional bearer token and a JSON or multipart body.
//! A [`Transport`] turns it into a [`RawResponse`] (status + body text).
//!
//! | Implementation | Used by |
//! |----------------|---------|
//! | [`crate::HttpTransport`] | the real app, via `reqwest` (fetch on wasm32) |
//! | [`RecordingTransport`] | tests: replays queued responses, records requests |
//!
//! Everything above this seam (envelope decoding, error mapping, retries,
//! session writes) is shared, so tests exercise the same code the browser runs.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use reqwest::Method;
use serde_json::Value;

use crate::error::ApiError;

/// A file selected in a form, ready to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }
}

/// One part of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, upload: Upload },
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        FormPart::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn file(name: impl Into<String>, upload: Upload) -> Self {
        FormPart::File {
            name: name.into(),
            upload,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(Vec<FormPart>),
}

/// Description of a single API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path segments, unencoded: `["private", "admin", "hotel", "42"]`.
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub bearer: Option<String>,
    pub body: RequestBody,
}

impl ApiRequest {
    /// Build a request from a `/`-separated static path.
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            query: Vec::new(),
            bearer: None,
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: &str) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: &str) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a dynamic segment (an id typed by a user, a URL...). It is
    /// percent-encoded by the transport, never interpreted as a path.
    pub fn segment(mut self, segment: impl ToString) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    /// `/`-joined path, for logs and assertions.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Safe to send twice.
    pub fn is_idempotent(&self) -> bool {
        self.method == Method::GET
    }
}

/// Status and body text of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async trait for sending an [`ApiRequest`].
pub trait Transport {
    fn send(
        &self,
        request: &ApiRequest,
    ) -> impl std::future::Future<Output = Result<RawResponse, ApiError>>;
}

#[derive(Default)]
struct Recording {
    responses: VecDeque<Result<RawResponse, ApiError>>,
    requests: Vec<ApiRequest>,
}

/// In-memory transport for tests: replays queued responses in order and keeps
/// every request it was handed.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    inner: Rc<RefCell<Recording>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with a raw body.
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.inner
            .borrow_mut()
            .responses
            .push_back(Ok(RawResponse::new(status, body)));
        self
    }

    /// Queue a response with a JSON body.
    pub fn respond_json(&self, status: u16, body: Value) -> &Self {
        self.respond(status, body.to_string())
    }

    /// Queue a transport-level failure.
    pub fn fail(&self, error: ApiError) -> &Self {
        self.inner.borrow_mut().responses.push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.borrow().requests.clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.inner.borrow().requests.last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.inner.borrow().requests.len()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(request.clone());
        inner
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no response queued".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_builder() {
        let request = ApiRequest::get("/private/admin/users")
            .query("keyword", "ann")
            .query("page", 0)
            .bearer("tok");
        assert_eq!(request.path(), "/private/admin/users");
        assert_eq!(
            request.query,
            vec![
                ("keyword".to_string(), "ann".to_string()),
                ("page".to_string(), "0".to_string())
            ]
        );
        assert_eq!(request.bearer.as_deref(), Some("tok"));
        assert!(request.is_idempotent());
    }

    #[test]
    fn test_dynamic_segments_stay_whole() {
        let request = ApiRequest::delete("/private/admin/hotel").segment("a/b");
        assert_eq!(request.segments, vec!["private", "admin", "hotel", "a/b"]);
        assert!(!request.is_idempotent());
    }

    #[test]
    fn test_form_part_names() {
        let part = FormPart::file("pictures", Upload::new("a.png", "image/png", vec![1]));
        assert_eq!(part.name(), "pictures");
        assert_eq!(FormPart::text("request", "{}").name(), "request");
    }

    #[tokio::test]
    async fn test_recording_transport_replays_in_order() {
        let transport = RecordingTransport::new();
        transport
            .respond_json(200, json!({"ok": true}))
            .respond(500, "");

        let request = ApiRequest::post("/hotel").json(json!({"page": 0}));
        let first = transport.send(&request).await.unwrap();
        let second = transport.send(&request).await.unwrap();
        let third = transport.send(&request).await;

        assert!(first.is_success());
        assert_eq!(second.status, 500);
        assert!(matches!(third, Err(ApiError::Transport(_))));
        assert_eq!(transport.request_count(), 3);
        assert_eq!(
            transport.last_request().map(|r| r.body),
            Some(RequestBody::Json(json!({"page": 0})))
        );
    }
}
