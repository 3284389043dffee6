//! Authentication module
//!
//! Bearer-token sessions for the Spotify Web API.
//!
//! The `Session` owns the access and refresh tokens of one client and knows
//! how to obtain a new access token through a `TokenRefresher`.

mod refresher;
mod session;
mod types;

pub use refresher::{OAuth2Refresher, RefreshFn, TokenRefresher, SPOTIFY_TOKEN_URL};
pub use session::Session;
pub use types::{CachedToken, RefreshedToken, SessionConfig};
