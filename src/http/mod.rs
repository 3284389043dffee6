//! HTTP client module
//!
//! Provides the authenticated transport used by every API call.
//!
//! # Features
//!
//! - **Bearer Auth**: Access token attached to every request
//! - **Refresh on 401**: One token refresh and one replay per request
//! - **Response Cache**: GET responses cached for 30 minutes by default
//! - **Rate Limiting**: Optional token bucket limiter using governor

mod cache;
mod client;
mod rate_limit;

pub use cache::{ResponseCache, DEFAULT_CACHE_TTL};
pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig, SPOTIFY_API_BASE_URL,
};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
