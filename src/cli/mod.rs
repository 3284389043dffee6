//! CLI module
//!
//! Command-line front end over [`SpotifyClient`](crate::SpotifyClient).
//!
//! # Commands
//!
//! - `me`, `user`, `track`, `album`, `artist`, `episode`, `show`,
//!   `playlist` - Fetch a single object
//! - `playlists`, `playlist-items`, `recent` - List collections, one page
//!   or everything with `--all`
//! - `recommend` - Recommendations from seeds
//! - `queue`, `add` - Playback queue and playlist edits
//! - `uri` - Print a canonical URI without touching the network

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
