//! Auth configuration types
//!
//! These types describe the credentials a session starts from and the
//! tokens a refresh callback hands back.

use super::refresher::TokenRefresher;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

/// Result of a successful token refresh
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefreshedToken {
    /// The new access token
    pub access_token: String,
    /// A rotated refresh token, when the provider issues one
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Lifetime of the access token in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,
}

impl RefreshedToken {
    /// Create a refreshed token with no expiry information
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            expires_in: None,
        }
    }

    /// Attach a rotated refresh token
    #[must_use]
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Attach the access token lifetime
    #[must_use]
    pub fn with_expires_in(mut self, seconds: i64) -> Self {
        self.expires_in = Some(seconds);
        self
    }

    pub(crate) fn into_cached_token(self) -> (CachedToken, Option<String>) {
        let token = match self.expires_in {
            Some(secs) => CachedToken::expires_in(self.access_token, secs),
            None => CachedToken::new(self.access_token, None),
        };
        (token, self.refresh_token)
    }
}

/// Credentials a [`Session`](super::Session) is created from
#[derive(Clone, Default)]
pub struct SessionConfig {
    /// Initial access token. When absent it is obtained with the refresh token
    /// before the first request.
    pub access_token: Option<String>,
    /// Refresh token (required)
    pub refresh_token: Option<String>,
    /// Callback that exchanges a refresh token for a new access token
    pub refresher: Option<Arc<dyn TokenRefresher>>,
}

impl SessionConfig {
    /// Create a config from a refresh token
    pub fn new(refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: None,
            refresh_token: Some(refresh_token.into()),
            refresher: None,
        }
    }

    /// Set the initial access token
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the refresh token
    #[must_use]
    pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    /// Set the refresh callback
    #[must_use]
    pub fn refresher(mut self, refresher: impl TokenRefresher + 'static) -> Self {
        self.refresher = Some(Arc::new(refresher));
        self
    }

    /// Set a shared refresh callback
    #[must_use]
    pub fn shared_refresher(mut self, refresher: Arc<dyn TokenRefresher>) -> Self {
        self.refresher = Some(refresher);
        self
    }
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("has_access_token", &self.access_token.is_some())
            .field("has_refresh_token", &self.refresh_token.is_some())
            .field("has_refresher", &self.refresher.is_some())
            .finish()
    }
}

/// Cached token with expiration
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The access token
    pub token: String,
    /// When the token expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    /// Create a new cached token
    pub fn new(token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { token, expires_at }
    }

    /// Create a token that expires in N seconds from now
    pub fn expires_in(token: String, seconds: i64) -> Self {
        let expires_at = Utc::now() + chrono::Duration::seconds(seconds);
        Self {
            token,
            expires_at: Some(expires_at),
        }
    }

    /// Check if the token is expired (with 30 second buffer)
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let buffer = chrono::Duration::seconds(30);
                Utc::now() + buffer >= expires_at
            }
            None => false, // unknown expiry: trust it until the API says 401
        }
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_cached_token_not_expired() {
        let token = CachedToken::expires_in("test".to_string(), 3600);
        assert!(!token.is_expired());
    }

    #[test]
    fn test_cached_token_expired() {
        let token = CachedToken::expires_in("test".to_string(), -100);
        assert!(token.is_expired());
    }

    #[test]
    fn test_cached_token_no_expiration() {
        let token = CachedToken::new("test".to_string(), None);
        assert!(!token.is_expired());
    }

    #[test]
    fn test_refreshed_token_into_cached() {
        let (token, rotated) = RefreshedToken::new("at")
            .with_refresh_token("rt-2")
            .with_expires_in(3600)
            .into_cached_token();
        assert_eq!(token.token, "at");
        assert!(token.expires_at.is_some());
        assert_eq!(rotated.as_deref(), Some("rt-2"));
    }

    #[test]
    fn test_session_config_debug_hides_tokens() {
        let config = SessionConfig::new("secret-refresh").access_token("secret-access");
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("has_refresh_token: true"));
    }
}
