//! HTTP client with bearer auth, 401 refresh and response caching
//!
//! Provides the transport used by every API call:
//! - Attaches `Authorization: Bearer <token>` to each request
//! - On a 401, refreshes the session once and replays the request once
//! - Caches GET responses for a fixed window
//! - Optional client-side rate limiting

use super::cache::{ResponseCache, DEFAULT_CACHE_TTL};
use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::auth::Session;
use crate::error::{Error, Result};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Base URL of the Spotify Web API
pub const SPOTIFY_API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all relative paths
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Lifetime of cached GET responses (`None` disables caching)
    pub cache_ttl: Option<Duration>,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: SPOTIFY_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            cache_ttl: Some(DEFAULT_CACHE_TTL),
            rate_limit: Some(RateLimiterConfig::default()),
            default_headers: HashMap::new(),
            user_agent: format!("spotify-web/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set how long GET responses are cached
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.config.cache_ttl = Some(ttl);
        self
    }

    /// Disable response caching
    pub fn no_cache(mut self) -> Self {
        self.config.cache_ttl = None;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: BTreeMap<String, String>,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body (JSON)
    pub body: Option<Value>,
    /// Override timeout for this request
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Merge a set of query parameters
    #[must_use]
    pub fn queries(mut self, params: BTreeMap<String, String>) -> Self {
        self.query.extend(params);
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Authenticated HTTP transport for the Spotify Web API
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    session: Arc<Session>,
    cache: Option<ResponseCache>,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a client for `session` with the given configuration
    pub fn new(config: HttpClientConfig, session: Session) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);
        let cache = config.cache_ttl.map(ResponseCache::new);

        Ok(Self {
            client,
            config,
            session: Arc::new(session),
            cache,
            rate_limiter,
        })
    }

    /// The session whose tokens this client sends
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Make a GET request
    pub async fn get(&self, url: &str) -> Result<Value> {
        self.request(Method::GET, url, RequestConfig::default())
            .await
    }

    /// Make a GET request with config
    pub async fn get_with_config(&self, url: &str, config: RequestConfig) -> Result<Value> {
        self.request(Method::GET, url, config).await
    }

    /// Make a POST request
    pub async fn post(&self, url: &str, body: Value) -> Result<Value> {
        self.request(Method::POST, url, RequestConfig::default().json(body))
            .await
    }

    /// Make a POST request with config
    pub async fn post_with_config(&self, url: &str, config: RequestConfig) -> Result<Value> {
        self.request(Method::POST, url, config).await
    }

    /// Make a generic request and return the decoded JSON body
    ///
    /// Empty bodies (e.g. 204 No Content) decode to `Value::Null`.
    pub async fn request(&self, method: Method, url: &str, config: RequestConfig) -> Result<Value> {
        let full_url = self.build_url(url);

        let cache_key = match (&self.cache, method == Method::GET) {
            (Some(_), true) => Some(ResponseCache::key(&method, &full_url, &config.query)),
            _ => None,
        };

        if let (Some(cache), Some(key)) = (&self.cache, &cache_key) {
            if let Some(hit) = cache.get(key).await {
                debug!("Cache hit: {}", key);
                return Ok(hit);
            }
        }

        let mut token = self.session.access_token().await?;
        let mut retried = false;

        loop {
            let response = self.send(&method, &full_url, &config, &token).await?;
            let status = response.status();

            if status == StatusCode::UNAUTHORIZED {
                if retried {
                    return Err(Error::auth(format!(
                        "{method} {full_url} was rejected again after refreshing the access token"
                    )));
                }
                warn!(
                    "Received 401 for {} {}, refreshing access token",
                    method, full_url
                );
                token = self.session.refresh_rejected(&token).await?;
                retried = true;
                continue;
            }

            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(Error::RateLimited {
                    retry_after_seconds: extract_retry_after(&response),
                });
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(Error::HttpStatus {
                    status: status.as_u16(),
                    body,
                });
            }

            let body = decode_body(response).await?;
            debug!("Request succeeded: {} {}", method, full_url);

            if let Some(cache) = &self.cache {
                match cache_key {
                    Some(key) => cache.insert(key, body.clone()).await,
                    None => {
                        let prefix = format!("{} {}", Method::GET, parent_resource(&full_url));
                        let removed = cache.invalidate_prefix(&prefix).await;
                        if removed > 0 {
                            debug!("Invalidated {} cached responses under {}", removed, prefix);
                        }
                    }
                }
            }

            return Ok(body);
        }
    }

    /// Make a request and deserialize the JSON response
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<T> {
        let value = self.request(method, url, config).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Make a GET request and deserialize the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.request_json(Method::GET, url, RequestConfig::default())
            .await
    }

    /// Make a GET request with config and deserialize the JSON response
    pub async fn get_json_with_config<T: DeserializeOwned>(
        &self,
        url: &str,
        config: RequestConfig,
    ) -> Result<T> {
        self.request_json(Method::GET, url, config).await
    }

    /// Check if response caching is enabled
    pub fn has_cache(&self) -> bool {
        self.cache.is_some()
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Drop every cached response
    pub async fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear().await;
        }
    }

    /// Build full URL from path
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    async fn send(
        &self,
        method: &Method,
        url: &str,
        config: &RequestConfig,
        token: &str,
    ) -> Result<Response> {
        if let Some(ref limiter) = self.rate_limiter {
            limiter.wait().await;
        }

        let mut req = self.client.request(method.clone(), url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        for (key, value) in &config.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if let Some(ref body) = config.body {
            req = req.json(body);
        }

        let timeout = config.timeout.unwrap_or(self.config.timeout);
        req = req.timeout(timeout).bearer_auth(token);

        req.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_ms: timeout.as_millis() as u64,
                }
            } else {
                Error::Http(e)
            }
        })
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_cache", &self.cache.is_some())
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

async fn decode_body(response: Response) -> Result<Value> {
    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(&bytes)?)
}

/// `https://host/v1/playlists/abc/tracks?x=1` -> `https://host/v1/playlists/abc`
fn parent_resource(url: &str) -> &str {
    let without_query = url.split('?').next().unwrap_or(url);
    match without_query.rsplit_once('/') {
        Some((parent, _)) if !parent.ends_with('/') => parent,
        _ => without_query,
    }
}

/// Extract retry-after header value
fn extract_retry_after(response: &Response) -> u64 {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(60)
}
