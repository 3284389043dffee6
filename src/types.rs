//! Common types used throughout spotify-web
//!
//! The catalog object kinds that appear in canonical Spotify URIs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// ============================================================================
// Object Types
// ============================================================================

/// Kind of catalog object, as found in the `type` field of API objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Album,
    Artist,
    Episode,
    Playlist,
    Show,
    Track,
    User,
}

impl ObjectType {
    /// All object types, in URI spelling order
    pub const ALL: [ObjectType; 7] = [
        ObjectType::Album,
        ObjectType::Artist,
        ObjectType::Episode,
        ObjectType::Playlist,
        ObjectType::Show,
        ObjectType::Track,
        ObjectType::User,
    ];

    /// The lowercase name used in URIs and API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Album => "album",
            ObjectType::Artist => "artist",
            ObjectType::Episode => "episode",
            ObjectType::Playlist => "playlist",
            ObjectType::Show => "show",
            ObjectType::Track => "track",
            ObjectType::User => "user",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::invalid_value("type", format!("unknown object type '{s}'")))
    }
}
