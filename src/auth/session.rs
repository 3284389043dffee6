//! Session implementation
//!
//! Holds the access and refresh tokens for one client and coordinates
//! refreshes. Refreshes are serialized: a task that was rejected with a token
//! somebody else already replaced picks up the new token instead of
//! refreshing a second time.

use super::refresher::TokenRefresher;
use super::types::{CachedToken, SessionConfig};
use crate::error::{Error, Result};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

#[derive(Debug)]
struct TokenState {
    access: Option<CachedToken>,
    refresh_token: String,
}

/// In-memory token store for a client
pub struct Session {
    state: RwLock<TokenState>,
    refresh_lock: Mutex<()>,
    refresher: Option<Arc<dyn TokenRefresher>>,
}

impl Session {
    /// Create a session from its config
    ///
    /// Fails if no refresh token is supplied. Nothing is sent over the network.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let refresh_token = config
            .refresh_token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::missing_field("refresh_token"))?;

        if config.refresher.is_none() {
            warn!(
                "No token refresh callback is configured; requests will fail once the access token expires"
            );
        }

        let access = config
            .access_token
            .filter(|t| !t.is_empty())
            .map(|t| CachedToken::new(t, None));

        Ok(Self {
            state: RwLock::new(TokenState {
                access,
                refresh_token,
            }),
            refresh_lock: Mutex::new(()),
            refresher: config.refresher,
        })
    }

    /// Whether a refresh callback is configured
    pub fn has_refresher(&self) -> bool {
        self.refresher.is_some()
    }

    /// Current refresh token
    pub async fn refresh_token(&self) -> String {
        self.state.read().await.refresh_token.clone()
    }

    /// Get a usable access token, refreshing first if there is none yet
    pub async fn access_token(&self) -> Result<String> {
        if let Some(token) = self.current_token().await {
            return Ok(token);
        }

        let _guard = self.refresh_lock.lock().await;

        // Another task may have refreshed while we waited
        if let Some(token) = self.current_token().await {
            return Ok(token);
        }

        self.refresh_locked().await
    }

    /// Force a refresh regardless of the current token
    pub async fn refresh(&self) -> Result<String> {
        let _guard = self.refresh_lock.lock().await;
        self.refresh_locked().await
    }

    /// Handle a 401 for a request that was sent with `rejected`
    ///
    /// Refreshes at most once per rejected token: if the stored token already
    /// differs from `rejected`, it is returned as-is.
    pub async fn refresh_rejected(&self, rejected: &str) -> Result<String> {
        let _guard = self.refresh_lock.lock().await;

        if let Some(token) = self.current_token().await {
            if token != rejected {
                debug!("Access token already refreshed by another request");
                return Ok(token);
            }
        }

        self.refresh_locked().await
    }

    async fn current_token(&self) -> Option<String> {
        let state = self.state.read().await;
        state
            .access
            .as_ref()
            .filter(|t| !t.is_expired())
            .map(|t| t.token.clone())
    }

    /// Caller must hold `refresh_lock`
    async fn refresh_locked(&self) -> Result<String> {
        let Some(refresher) = self.refresher.as_ref() else {
            return Err(Error::auth(
                "Access token is missing or expired and no refresh callback is configured",
            ));
        };

        let refresh_token = self.refresh_token().await;
        debug!("Refreshing access token");

        let refreshed = refresher.refresh(&refresh_token).await.map_err(|e| {
            if e.is_auth() {
                e
            } else {
                Error::token_refresh(format!("Failed to refresh token. Reason: {e}"))
            }
        })?;

        let (token, rotated) = refreshed.into_cached_token();
        let access = token.token.clone();

        let mut state = self.state.write().await;
        state.access = Some(token);
        if let Some(rotated) = rotated.filter(|t| !t.is_empty()) {
            state.refresh_token = rotated;
        }

        Ok(access)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("has_refresher", &self.refresher.is_some())
            .finish_non_exhaustive()
    }
}
