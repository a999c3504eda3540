//! Blocking HTTP client for the portal API.
//!
//! One-shot collection fetch, no retry or backoff: the listing view issues a
//! single `GET /files/all` at mount and treats the response as an immutable
//! snapshot.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::COOKIE;
use serde_json::Value;

use crate::config::{
    API_URL_ENV, DEFAULT_API_URL, DEFAULT_TIMEOUT_MS, TIMEOUT_MS_ENV, normalize_base_url,
    read_env_u64, read_non_empty_env,
};
use crate::error::Result;
use crate::models::{FetchOutcome, decode_record_array};
use crate::session::{SharedSession, USER_ID_COOKIE};

#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl PortalConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: read_non_empty_env(API_URL_ENV)
                .map_or_else(|| DEFAULT_API_URL.to_string(), |raw| normalize_base_url(&raw)),
            timeout_ms: read_env_u64(TIMEOUT_MS_ENV).unwrap_or(DEFAULT_TIMEOUT_MS),
        }
    }
}

#[derive(Clone)]
pub struct PortalClient {
    config: PortalConfig,
    http: Client,
    session: SharedSession,
}

impl std::fmt::Debug for PortalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl PortalClient {
    pub fn new(config: PortalConfig, session: SharedSession) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            config,
            http,
            session,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Fetches the whole record collection once. Malformed elements in the
    /// payload are dropped and reported via the outcome; a non-array payload
    /// or transport failure fails the call.
    pub fn fetch_all_files(&self) -> Result<FetchOutcome> {
        let url = format!("{}/files/all", self.config.base_url);
        let mut request = self.http.get(url);
        if let Some(user_id) = self.session.current_user_id() {
            request = request.header(COOKIE, format!("{USER_ID_COOKIE}={user_id}"));
        }
        let payload: Value = request.send()?.error_for_status()?.json()?;
        decode_record_array(&payload)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::session::StaticSession;

    use super::*;

    #[test]
    fn default_config_points_at_the_local_backend() {
        let config = PortalConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_ms, 5000);
    }

    #[test]
    fn client_builds_from_default_config() {
        let client = PortalClient::new(
            PortalConfig::default(),
            Arc::new(StaticSession::anonymous()),
        );
        assert!(client.is_ok());
    }
}
