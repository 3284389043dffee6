//! Token refresh callbacks
//!
//! A [`TokenRefresher`] exchanges the current refresh token for a new access
//! token. [`OAuth2Refresher`] talks to the Spotify accounts service; any async
//! closure can be plugged in through [`RefreshFn`].

use super::types::RefreshedToken;
use crate::error::{Error, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Spotify accounts token endpoint
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Exchanges a refresh token for a fresh access token
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    /// Called with the current refresh token
    async fn refresh(&self, refresh_token: &str) -> Result<RefreshedToken>;
}

/// Refresh callback backed by the OAuth2 `refresh_token` grant
#[derive(Clone)]
pub struct OAuth2Refresher {
    token_url: String,
    client_id: String,
    client_secret: String,
    http_client: Client,
}

impl OAuth2Refresher {
    /// Create a refresher for the given app credentials
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            token_url: SPOTIFY_TOKEN_URL.to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            http_client: Client::new(),
        }
    }

    /// Override the token endpoint
    #[must_use]
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// Use a custom HTTP client for token requests
    #[must_use]
    pub fn with_client(mut self, http_client: Client) -> Self {
        self.http_client = http_client;
        self
    }

    /// The token endpoint in use
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    fn basic_credentials(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

#[async_trait]
impl TokenRefresher for OAuth2Refresher {
    async fn refresh(&self, refresh_token: &str) -> Result<RefreshedToken> {
        let form = [
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", self.client_id.as_str()),
        ];

        debug!("Requesting new access token from {}", self.token_url);

        let response = self
            .http_client
            .post(&self.token_url)
            .form(&form)
            .header("Authorization", self.basic_credentials())
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(Error::Http)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::TokenRefresh {
                message: format!("Refresh token request failed with status {status}: {body}"),
            });
        }

        let token: RefreshedToken = response.json().await.map_err(Error::Http)?;
        Ok(token)
    }
}

impl std::fmt::Debug for OAuth2Refresher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuth2Refresher")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

/// Adapts an async closure into a [`TokenRefresher`]
///
/// ```rust,ignore
/// let refresher = RefreshFn::new(|refresh_token: String| async move {
///     my_vault.exchange(&refresh_token).await
/// });
/// ```
pub struct RefreshFn<F>(F);

impl<F> RefreshFn<F> {
    /// Wrap a closure taking the current refresh token
    pub fn new<Fut>(f: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync,
        Fut: Future<Output = Result<RefreshedToken>> + Send,
    {
        Self(f)
    }
}

#[async_trait]
impl<F, Fut> TokenRefresher for RefreshFn<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<RefreshedToken>> + Send,
{
    async fn refresh(&self, refresh_token: &str) -> Result<RefreshedToken> {
        (self.0)(refresh_token.to_string()).await
    }
}
