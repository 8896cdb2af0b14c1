//! # API crate: typed client for the Akkor hotel backend
//!
//! Every page of the web client talks to the backend through one
//! [`ApiClient`]. The client attaches the bearer token from the shared
//! [`store::SessionStore`], sends JSON or multipart bodies, and normalises
//! failures into [`ApiError`] so a panel can show `err.to_string()` as-is.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`], timeout and bounded retry of idempotent calls |
//! | [`transport`] | [`Transport`] seam, [`ApiRequest`], [`RecordingTransport`] test double |
//! | [`http`] | [`HttpTransport`] over `reqwest` |
//! | [`envelope`] | `informations` / `warning` / `error` decoding into [`ApiOutcome`] |
//! | [`error`] | [`ApiError`] |
//! | [`models`] | request and response shapes, closed vocabularies |
//!
//! Endpoint groups are `impl ApiClient` blocks in `auth`, `user`, `hotel`,
//! `booking` and `admin`.

pub mod client;
pub mod envelope;
pub mod error;
pub mod http;
pub mod models;
pub mod transport;

mod admin;
mod auth;
mod booking;
mod hotel;
mod timer;
mod user;

pub use client::{ApiClient, RetryPolicy};
pub use envelope::ApiOutcome;
pub use error::ApiError;
pub use http::HttpTransport;
pub use timer::sleep;
pub use transport::{ApiRequest, FormPart, RawResponse, RecordingTransport, RequestBody, Transport, Upload};

/// The client the browser app uses.
pub type WebClient<S> = ApiClient<HttpTransport, S>;
