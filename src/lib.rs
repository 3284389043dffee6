// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # spotify-web
//!
//! A typed async client for the Spotify Web API.
//!
//! ## Features
//!
//! - **Bearer Auth with Refresh**: One refresh and one replay on a 401,
//!   serialized across concurrent requests
//! - **Response Cache**: GET responses cached for 30 minutes
//! - **Lazy Pagination**: Follow `next` links only when items run out
//! - **Typed Entities**: Tracks, albums, playlists, episodes and more, with
//!   accessors such as `Track::artists` and `PlaylistItem::content`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spotify_web::{OAuth2Refresher, SessionConfig, SpotifyClient, ItemsQuery, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let session = SessionConfig::new("AQD...refresh-token")
//!         .refresher(OAuth2Refresher::new("client-id", "client-secret"));
//!     let client = SpotifyClient::new(session)?;
//!
//!     let me = client.get_me().await?;
//!     for playlist in me.all_playlists(&client).await? {
//!         let mut items = playlist.items(&client, &ItemsQuery::new()).await?;
//!         while let Some(item) = items.next(&client).await? {
//!             println!("{}", item.content()?.name());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         SpotifyClient                           │
//! │   get_track()  get_playlist_items()  add_items_to_playlist()    │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │   Auth   │   HTTP    │   Paginate    │ Entities  │    Query    │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ Session  │ Bearer    │ Next URL      │ Track     │ Market      │
//! │ Refresh  │ 401 Retry │ Cursors       │ Playlist  │ Page        │
//! │ OAuth2   │ Cache     │ Stream        │ Playable  │ Seeds       │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Session tokens and refresh callbacks
pub mod auth;

/// HTTP transport with auth retry, caching and rate limiting
pub mod http;

/// Lazy pagination over page envelopes
pub mod pagination;

/// Typed API entities
pub mod entities;

/// Typed query parameters
pub mod query;

/// Canonical URI helpers
pub mod uri;

/// Debug rendering of entities
pub mod render;

/// Endpoint methods
pub mod client;

/// Settings files and environment overrides
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use auth::{OAuth2Refresher, RefreshFn, RefreshedToken, SessionConfig, TokenRefresher};
pub use client::SpotifyClient;
pub use config::Settings;
pub use entities::{
    Album, Artist, Episode, Playable, Playlist, PlaylistItem, RecentlyPlayedItem, Recommendations,
    Show, SpotifyObject, Track, User,
};
pub use http::{HttpClientConfig, RateLimiterConfig};
pub use pagination::{Page, Paginator};
pub use query::{
    ItemsQuery, MarketQuery, PageQuery, Query, RecentlyPlayedQuery, RecommendationsQuery,
    TrackAttribute,
};
pub use uri::{create_spotify_uri, parse_spotify_uri, resolve_id, resolve_uris, UriRef};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
