//! HTTP gateway to the forum server.
//!
//! [`ForumGateway`] is the seam the state-holding components talk through;
//! [`ApiClient`] is its reqwest implementation. Endpoints are opaque
//! collaborators: the client POSTs, checks for a 2xx, and ignores the ack
//! body beyond logging. Any 2xx counts as success.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::domain::ShareRequest;
use crate::error::ApiError;
use crate::services::csrf::{self, CsrfToken, CSRF_HEADER};

/// Path marking all primary notifications read.
pub const READ_ALL_NOTIFICATIONS: &str = "/notification/read_All_Notifications/";
/// Path marking all achievement notifications read.
pub const READ_ALL_ACHIEVEMENTS: &str = "/notification/read_All_Priv_Notifications/";
/// Path deleting every notification.
pub const DELETE_ALL_NOTIFICATIONS: &str = "/notification/delete-all/";
/// Path for share/repost/quote submissions.
pub const SHARE_POST: &str = "/qa/share-post/";

/// Async boundary to the forum server.
///
/// All operations are fire-and-forget from the caller's point of view:
/// one POST, success or failure, no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ForumGateway: Send + Sync {
    /// Marks every primary notification read.
    async fn mark_all_notifications_read(&self) -> Result<(), ApiError>;

    /// Marks every achievement notification read.
    async fn mark_all_achievements_read(&self) -> Result<(), ApiError>;

    /// Deletes a single notification by id.
    async fn delete_notification(&self, id: u64) -> Result<(), ApiError>;

    /// Deletes every notification for the current user.
    async fn delete_all_notifications(&self) -> Result<(), ApiError>;

    /// Submits a share, repost, or quote.
    async fn share_post(&self, request: &ShareRequest) -> Result<(), ApiError>;
}

/// Ack body the server returns. Fields vary by endpoint; none are load-bearing.
#[derive(Debug, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reqwest-backed [`ForumGateway`].
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    csrf: Option<CsrfToken>,
}

impl ApiClient {
    /// Creates a client for the given origin, reading the CSRF token out of
    /// a `Cookie` header string if one is present.
    pub fn new(base: Url, cookie_header: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
            csrf: csrf::token_from_cookie_header(cookie_header),
        }
    }

    /// Creates a client from an origin string, e.g. `https://forum.example`.
    pub fn from_origin(origin: &str, cookie_header: &str) -> anyhow::Result<Self> {
        let base = Url::parse(origin)
            .with_context(|| format!("invalid forum origin: {origin}"))?;
        Ok(Self::new(base, cookie_header))
    }

    /// Creates a client with an explicit token (or none).
    pub fn with_token(base: Url, csrf: Option<CsrfToken>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
            csrf,
        }
    }

    /// Headers for a request to `path`: the CSRF header goes on same-origin
    /// paths only, and only when a token is available.
    fn headers_for(&self, path: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(value) = csrf::header_for(self.csrf.as_ref(), path) {
            if let Ok(value) = HeaderValue::from_str(&value) {
                headers.insert(CSRF_HEADER, value);
            }
        }
        headers
    }

    async fn post_form(
        &self,
        path: &str,
        form: &[(&'static str, String)],
    ) -> Result<(), ApiError> {
        let url = self.base.join(path)?;
        let response = self
            .http
            .post(url)
            .headers(self.headers_for(path))
            .form(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        // The ack is informational only; a 2xx with an unparseable body is
        // still a success.
        if let Ok(ack) = response.json::<Ack>().await {
            debug!(path, action = ?ack.action, "server acknowledged");
        }
        Ok(())
    }
}

#[async_trait]
impl ForumGateway for ApiClient {
    async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        self.post_form(READ_ALL_NOTIFICATIONS, &[]).await
    }

    async fn mark_all_achievements_read(&self) -> Result<(), ApiError> {
        self.post_form(READ_ALL_ACHIEVEMENTS, &[]).await
    }

    async fn delete_notification(&self, id: u64) -> Result<(), ApiError> {
        let path = format!("/notification/delete/{id}/");
        self.post_form(&path, &[]).await
    }

    async fn delete_all_notifications(&self) -> Result<(), ApiError> {
        self.post_form(DELETE_ALL_NOTIFICATIONS, &[]).await
    }

    async fn share_post(&self, request: &ShareRequest) -> Result<(), ApiError> {
        self.post_form(SHARE_POST, &request.form_fields()).await
    }
}
