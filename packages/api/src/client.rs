//! # ApiClient: credentials, retries and decoding around a [`Transport`]
//!
//! One `ApiClient` is created at start-up and shared through the UI context.
//! It owns:
//!
//! - the [`Transport`] (real HTTP or a test double),
//! - the [`SessionStore`] it reads the bearer token from and writes login
//!   results into,
//! - the [`RetryPolicy`] and per-request timeout.
//!
//! Endpoint methods live in the sibling modules (`auth`, `user`, `hotel`,
//! `booking`, `admin`) as `impl` blocks on this type.
//!
//! ## Retries
//!
//! Only idempotent `GET` requests are re-sent, and only after a transport
//! failure, a timeout or a 5xx. Everything else fails on the first attempt,
//! so a booking is never created twice. `max_retries = 0` restores strict
//! single-attempt behaviour.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use store::config::ApiConfig;
use store::{KeyValueStorage, SessionStore};

use crate::envelope::{error_from_body, parse_success, ApiOutcome};
use crate::error::ApiError;
use crate::timer::{sleep, with_timeout};
use crate::transport::{ApiRequest, Transport};

/// Bounded retry for idempotent requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    /// Wait before the first retry; doubled after each further failure.
    pub backoff: Duration,
}

impl RetryPolicy {
    pub const NONE: RetryPolicy = RetryPolicy {
        max_retries: 0,
        backoff: Duration::ZERO,
    };

    fn delay_for(&self, retry: u32) -> Duration {
        self.backoff.saturating_mul(1u32 << retry.saturating_sub(1).min(16))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff: Duration::from_millis(250),
        }
    }
}

/// Typed client for the hotel API.
pub struct ApiClient<T: Transport, S: KeyValueStorage> {
    transport: T,
    session: SessionStore<S>,
    retry: RetryPolicy,
    timeout: Option<Duration>,
}

impl<T: Transport + Clone, S: KeyValueStorage + Clone> Clone for ApiClient<T, S> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            session: self.session.clone(),
            retry: self.retry,
            timeout: self.timeout,
        }
    }
}

impl<T: Transport, S: KeyValueStorage> PartialEq for ApiClient<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session && self.retry == other.retry && self.timeout == other.timeout
    }
}

impl<T: Transport, S: KeyValueStorage> ApiClient<T, S> {
    pub fn new(transport: T, session: SessionStore<S>) -> Self {
        Self {
            transport,
            session,
            retry: RetryPolicy::default(),
            timeout: Some(Duration::from_secs(30)),
        }
    }

    /// Apply the `[api]` section of the client configuration.
    pub fn with_config(self, config: &ApiConfig) -> Self {
        self.with_retry(RetryPolicy {
            max_retries: config.max_retries,
            backoff: config.retry_backoff(),
        })
        .with_timeout(config.timeout())
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The stored token, or [`ApiError::MissingToken`] before any I/O.
    pub(crate) fn bearer(&self) -> Result<String, ApiError> {
        self.session.token().ok_or(ApiError::MissingToken)
    }

    /// Send `request` and parse the 2xx body as JSON (`{}` when empty).
    pub(crate) async fn call(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let path = request.path();
        let mut retry = 0;
        loop {
            tracing::debug!(method = %request.method, %path, attempt = retry + 1, "api request");
            let error = match with_timeout(self.timeout, self.transport.send(&request)).await {
                Ok(response) if response.is_success() => return parse_success(&response.body),
                Ok(response) => error_from_body(response.status, &response.body),
                Err(error) => error,
            };

            if request.is_idempotent() && error.is_transient() && retry < self.retry.max_retries {
                retry += 1;
                let delay = self.retry.delay_for(retry);
                tracing::warn!(%path, retry, ?delay, error = %error, "retrying request");
                sleep(delay).await;
                continue;
            }

            tracing::warn!(method = %request.method, %path, status = ?error.status(), error = %error, "api request failed");
            return Err(error);
        }
    }

    /// [`call`](Self::call) and deserialize the whole body.
    pub(crate) async fn call_as<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let value = self.call(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// [`call`](Self::call) and decode an `informations`/`warning`/`error` envelope.
    pub(crate) async fn call_envelope<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<ApiOutcome<R>, ApiError> {
        let value = self.call(request).await?;
        ApiOutcome::decode(value)
    }
}
