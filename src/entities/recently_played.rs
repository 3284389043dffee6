//! Recently played history

use super::common::{null_as_default, ExternalUrls};
use super::entity;
use super::playable::Playable;
use super::playlist_item::nested_content;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Context (album, playlist, ...) something was played from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackContext {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub uri: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,
}

/// One entry of the user's playback history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentlyPlayedItem {
    #[serde(default)]
    pub played_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub context: Option<PlaybackContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<Value>,
}

entity!(RecentlyPlayedItem);

impl RecentlyPlayedItem {
    /// The track or episode that was played
    pub fn content(&self) -> Result<Playable> {
        nested_content(self.track.as_ref(), self.episode.as_ref())
            .ok_or_else(|| Error::shape("No track or episode in recently played item"))?
    }
}
