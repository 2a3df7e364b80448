//! REST helpers for the unread-notification count.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: the source reports `ViewError::Request` since the
//! endpoint is only reachable from the page's own origin.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a `ViewError` rather than a panic so the
//! poller can keep the stale badge and try again on the next tick.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use futures::future::LocalBoxFuture;
use serde::Deserialize;

use crate::error::ViewError;

/// Body of `GET /notifications/unread-count`.
#[derive(Debug, Deserialize)]
struct UnreadCountResponse {
    /// Missing or `null` means nothing unread.
    #[serde(default)]
    count: Option<u32>,
}

/// Parse the endpoint's JSON body into a count.
///
/// # Errors
///
/// Returns [`ViewError::Malformed`] for non-JSON bodies and for counts that
/// are not non-negative integers.
pub fn parse_unread_count(body: &str) -> Result<u32, ViewError> {
    let parsed: UnreadCountResponse = serde_json::from_str(body).map_err(|e| ViewError::Malformed(e.to_string()))?;
    Ok(parsed.count.unwrap_or(0))
}

/// Anything that can produce the current unread count.
pub trait CountSource {
    fn fetch_count(&self) -> LocalBoxFuture<'static, Result<u32, ViewError>>;
}

/// Fetches the count from the server over HTTP.
#[derive(Clone, Debug)]
pub struct HttpCountSource {
    endpoint: String,
}

impl HttpCountSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl CountSource for HttpCountSource {
    fn fetch_count(&self) -> LocalBoxFuture<'static, Result<u32, ViewError>> {
        let endpoint = self.endpoint.clone();
        Box::pin(async move { fetch_unread_count(&endpoint).await })
    }
}

/// Issue one `GET` against `endpoint` and parse the count.
///
/// # Errors
///
/// Returns [`ViewError::Request`] when the request cannot complete,
/// [`ViewError::Status`] on a non-2xx answer and [`ViewError::Malformed`]
/// when the body is not the expected JSON.
pub async fn fetch_unread_count(endpoint: &str) -> Result<u32, ViewError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| ViewError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ViewError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| ViewError::Request(e.to_string()))?;
        parse_unread_count(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ViewError::Request(format!("{endpoint} is not reachable outside the browser")))
    }
}
