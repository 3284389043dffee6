//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Spotify Web API command-line client
#[derive(Parser, Debug)]
#[command(name = "spotify-web")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file with tokens and client credentials (YAML or JSON)
    #[arg(short, long, global = true, env = "SPOTIFY_WEB_CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current user
    Me,

    /// Show a user's public profile
    User {
        /// Spotify user ID
        id: String,
    },

    /// Show a track
    Track {
        /// Spotify track ID
        id: String,

        /// Market (ISO 3166-1 alpha-2 country code)
        #[arg(short, long)]
        market: Option<String>,

        /// Also fetch the full artist objects
        #[arg(long)]
        artists: bool,
    },

    /// Show an album
    Album {
        /// Spotify album ID
        id: String,

        #[arg(short, long)]
        market: Option<String>,
    },

    /// Show an artist
    Artist {
        /// Spotify artist ID
        id: String,
    },

    /// Show a podcast episode
    Episode {
        /// Spotify episode ID
        id: String,

        #[arg(short, long)]
        market: Option<String>,
    },

    /// Show a podcast show
    Show {
        /// Spotify show ID
        id: String,

        #[arg(short, long)]
        market: Option<String>,
    },

    /// Show a playlist
    Playlist {
        /// Spotify playlist ID
        id: String,

        #[arg(short, long)]
        market: Option<String>,
    },

    /// List playlists of the current user or of another user
    Playlists {
        /// List this user's playlists instead of the current user's
        #[arg(short, long)]
        user: Option<String>,

        /// Fetch every page
        #[arg(long)]
        all: bool,

        /// Page size (1-50)
        #[arg(long)]
        limit: Option<u32>,

        #[arg(long)]
        offset: Option<u32>,
    },

    /// List the items of a playlist
    PlaylistItems {
        /// Spotify playlist ID
        id: String,

        /// Fetch every page
        #[arg(long)]
        all: bool,

        /// Page size (1-100)
        #[arg(long)]
        limit: Option<u32>,

        #[arg(long)]
        offset: Option<u32>,

        #[arg(short, long)]
        market: Option<String>,

        /// Include podcast episodes
        #[arg(long)]
        episodes: bool,
    },

    /// List recently played tracks
    Recent {
        /// Fetch every page
        #[arg(long)]
        all: bool,

        /// Page size (1-50)
        #[arg(long)]
        limit: Option<u32>,

        /// Only items played after this Unix timestamp in milliseconds
        #[arg(long, conflicts_with = "before")]
        after: Option<i64>,

        /// Only items played before this Unix timestamp in milliseconds
        #[arg(long)]
        before: Option<i64>,
    },

    /// Get track recommendations
    Recommend {
        /// Seed artist ID (repeatable)
        #[arg(long = "seed-artist")]
        seed_artists: Vec<String>,

        /// Seed track ID (repeatable)
        #[arg(long = "seed-track")]
        seed_tracks: Vec<String>,

        /// Seed genre (repeatable)
        #[arg(long = "seed-genre")]
        seed_genres: Vec<String>,

        /// Number of tracks (1-100)
        #[arg(long)]
        limit: Option<u32>,

        #[arg(short, long)]
        market: Option<String>,
    },

    /// Add a track or episode to the playback queue
    Queue {
        /// Track or episode URI
        uri: String,

        /// Target device ID
        #[arg(short, long)]
        device: Option<String>,
    },

    /// Add items to a playlist
    Add {
        /// Playlist ID
        playlist: String,

        /// Track or episode URIs
        #[arg(required = true)]
        uris: Vec<String>,

        /// Zero-based insert position (default: append)
        #[arg(short, long)]
        position: Option<u32>,
    },

    /// Print the canonical URI of an object
    Uri {
        /// Object type (track, album, artist, episode, show, playlist, user)
        object_type: String,

        /// Spotify ID
        id: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one object per line)
    Json,
    /// Human-readable output
    Pretty,
}
