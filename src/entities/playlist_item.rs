//! Playlist items

use super::common::null_as_default;
use super::entity;
use super::playable::Playable;
use super::user::UserRef;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An entry of a playlist: a track or an episode plus who added it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// When the item was added, missing on very old playlists
    #[serde(default)]
    pub added_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub added_by: Option<UserRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_local: bool,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<Value>,
}

entity!(PlaylistItem);

impl PlaylistItem {
    /// The track or episode this item holds
    ///
    /// Fails with a shape error when the API sent neither.
    pub fn content(&self) -> Result<Playable> {
        nested_content(self.track.as_ref(), self.episode.as_ref())
            .ok_or_else(|| Error::shape("No track or episode in playlist item"))?
    }
}

/// Resolve the `track`/`episode` pair shared by playlist and
/// recently-played items
pub(crate) fn nested_content(
    track: Option<&Value>,
    episode: Option<&Value>,
) -> Option<Result<Playable>> {
    if let Some(track) = track.filter(|v| !v.is_null()) {
        return Some(Playable::from_value_or(track.clone(), Some("track")));
    }
    episode
        .filter(|v| !v.is_null())
        .map(|episode| Playable::from_value_or(episode.clone(), Some("episode")))
}
