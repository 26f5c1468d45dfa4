//! HTTP client for the data.police.uk REST API
//!
//! One outbound GET per call, bounded by a fixed timeout. Transport
//! failures are returned as `Err` so callers can apply the empty-default
//! policy as an explicit step (see [`crate::shape`]).

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::{Error, Result};

/// Default origin of the upstream service
pub const DEFAULT_BASE_URL: &str = "https://data.police.uk/api";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the UK Police public crime-data API
///
/// Cheap to clone; concurrent calls share the underlying connection pool
/// and need no synchronization since the client carries no mutable state.
#[derive(Debug, Clone)]
pub struct PoliceClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PoliceClient {
    /// Create a client against the production origin with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a client against an arbitrary origin
    ///
    /// Used by tests to point at a stub server, and by the binary's
    /// `--base-url` flag.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// The origin requests are issued against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue a single GET for `endpoint` with the given query parameters
    ///
    /// `endpoint` is appended to the base origin; non-2xx statuses are
    /// mapped to [`Error::Http`]. No retries.
    pub async fn get(&self, endpoint: &str, params: &[(String, String)]) -> Result<Value> {
        let url = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            endpoint
        );

        tracing::debug!(%url, "GET upstream");

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<Value>().await?;
        Ok(body)
    }
}
