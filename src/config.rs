//! Settings files and environment overrides
//!
//! A settings file is YAML (JSON works too, being a subset) holding the
//! tokens and transport options a [`SpotifyClient`] is built from:
//!
//! ```yaml
//! refresh_token: AQD...
//! client_id: 5fe0...
//! client_secret: 9c1a...
//! cache_ttl_seconds: 600
//! requests_per_second: 5
//! ```
//!
//! Environment variables take precedence over file values.

use crate::auth::{OAuth2Refresher, SessionConfig};
use crate::client::SpotifyClient;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Environment variable overriding `access_token`
pub const ENV_ACCESS_TOKEN: &str = "SPOTIFY_ACCESS_TOKEN";
/// Environment variable overriding `refresh_token`
pub const ENV_REFRESH_TOKEN: &str = "SPOTIFY_REFRESH_TOKEN";
/// Environment variable overriding `client_id`
pub const ENV_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
/// Environment variable overriding `client_secret`
pub const ENV_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";

/// Client settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Initial access token
    #[serde(default)]
    pub access_token: Option<String>,

    /// Refresh token (required to build a client)
    #[serde(default)]
    pub refresh_token: Option<String>,

    /// App client ID, enables automatic token refresh together with
    /// `client_secret`
    #[serde(default)]
    pub client_id: Option<String>,

    /// App client secret
    #[serde(default)]
    pub client_secret: Option<String>,

    /// Token endpoint override
    #[serde(default)]
    pub token_url: Option<String>,

    /// API base URL override
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// GET cache lifetime; 0 disables the cache
    #[serde(default)]
    pub cache_ttl_seconds: Option<u64>,

    /// Request timeout
    #[serde(default)]
    pub timeout_seconds: Option<u64>,

    /// Client-side request rate; 0 disables throttling
    #[serde(default)]
    pub requests_per_second: Option<u32>,
}

impl Settings {
    /// Load settings from a YAML or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read settings file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;
        debug!("Loaded settings from {}", path.display());
        Self::from_yaml_str(&content)
    }

    /// Parse settings from a YAML or JSON string
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse settings: {e}")))
    }

    /// Apply overrides from the process environment
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; empty values are ignored
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = lookup(ENV_ACCESS_TOKEN) {
            self.access_token = Some(v);
        }
        if let Some(v) = lookup(ENV_REFRESH_TOKEN) {
            self.refresh_token = Some(v);
        }
        if let Some(v) = lookup(ENV_CLIENT_ID) {
            self.client_id = Some(v);
        }
        if let Some(v) = lookup(ENV_CLIENT_SECRET) {
            self.client_secret = Some(v);
        }
        self
    }

    /// Session credentials described by these settings
    ///
    /// A refresher is attached only when both client credentials are set.
    pub fn session_config(&self) -> Result<SessionConfig> {
        let refresh_token = self
            .refresh_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::missing_field("refresh_token"))?;

        let mut session = SessionConfig::new(refresh_token);
        if let Some(token) = &self.access_token {
            session = session.access_token(token);
        }

        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => {
                let mut refresher = OAuth2Refresher::new(id, secret);
                if let Some(url) = &self.token_url {
                    refresher = refresher.with_token_url(url);
                }
                session = session.refresher(refresher);
            }
            (Some(_), None) => return Err(Error::missing_field("client_secret")),
            (None, Some(_)) => return Err(Error::missing_field("client_id")),
            (None, None) => {}
        }

        Ok(session)
    }

    /// Transport options described by these settings
    pub fn http_config(&self) -> Result<HttpClientConfig> {
        let mut builder = HttpClientConfig::builder();

        if let Some(url) = &self.api_base_url {
            url::Url::parse(url)
                .map_err(|e| Error::invalid_value("api_base_url", e.to_string()))?;
            builder = builder.base_url(url);
        }

        match self.cache_ttl_seconds {
            Some(0) => builder = builder.no_cache(),
            Some(secs) => builder = builder.cache_ttl(Duration::from_secs(secs)),
            None => {}
        }

        match self.timeout_seconds {
            Some(0) => {
                return Err(Error::invalid_value(
                    "timeout_seconds",
                    "must be greater than 0",
                ))
            }
            Some(secs) => builder = builder.timeout(Duration::from_secs(secs)),
            None => {}
        }

        match self.requests_per_second {
            Some(0) => builder = builder.no_rate_limit(),
            Some(rps) => builder = builder.rate_limit(RateLimiterConfig::per_second(rps)),
            None => {}
        }

        Ok(builder.build())
    }

    /// Build a client from these settings
    ///
    /// Fails with a configuration error, without touching the network,
    /// when the refresh token is missing.
    pub fn into_client(self) -> Result<SpotifyClient> {
        let session = self.session_config()?;
        let config = self.http_config()?;
        SpotifyClient::with_config(session, config)
    }
}
