//! # tp-client
//!
//! HTTP client for the TutorPilot tutoring backend.
//!
//! One async method per backend endpoint, grouped by area:
//! - [`data`](crate::data): students, tutors, and per-student galleries
//! - [`agents`](crate::agents): strategy, lesson, and activity generation
//! - [`chat`](crate::chat): conversational activity edits
//! - [`versions`](crate::versions): tutor edit history
//! - [`reflection`](crate::reflection): health and learning insights
//!
//! List endpoints wrap rows in `{"success": true, "<rows>": [...]}`; those
//! envelopes are unwrapped here. Non-success statuses surface as
//! [`ClientError::Api`] carrying FastAPI's `detail` text.

pub mod agents;
pub mod chat;
pub mod data;
pub mod reflection;
pub mod versions;

mod error;
mod http;

pub use error::ClientError;

use std::borrow::Cow;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tp_config::ApiConfig;
use tp_core::responses::Roster;

use crate::http::{check_response, decode};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct TutorClient {
    http: reqwest::Client,
    base_url: String,
}

impl TutorClient {
    /// Build a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build (e.g. the user agent is not a valid header value).
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_http(http, &config.base_url))
    }

    /// Wrap an already configured `reqwest::Client`.
    #[must_use]
    pub fn with_http(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Backend root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch students and tutors concurrently for selection lists.
    ///
    /// Either lookup failing fails the whole call.
    ///
    /// # Errors
    ///
    /// Returns the first [`ClientError`] of the two lookups.
    pub async fn load_roster(&self) -> Result<Roster, ClientError> {
        let (students, tutors) = tokio::join!(self.students(), self.tutors());
        Ok(Roster {
            students: students?,
            tutors: tutors?,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        tracing::debug!(method = "GET", path, "backend request");
        let resp = check_response(self.http.get(self.url(path)).send().await?).await?;
        decode(resp, path).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        tracing::debug!(method = "POST", path, "backend request");
        let resp =
            check_response(self.http.post(self.url(path)).json(body).send().await?).await?;
        decode(resp, path).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        tracing::debug!(method = "POST", path, "backend request");
        let resp = check_response(self.http.post(self.url(path)).send().await?).await?;
        decode(resp, path).await
    }
}

/// Percent-encode one path segment.
fn segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}
