//! Tracks

use super::album::Album;
use super::artist::{Artist, ArtistRef};
use super::common::{null_as_default, ExternalIds, ExternalUrls, Restrictions};
use super::entity;
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::types::ObjectType;
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};

/// A track, full or simplified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Spotify ID, empty for local files
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Album the track appears on, absent on simplified tracks
    #[serde(default)]
    pub album: Option<Album>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists: Vec<ArtistRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_markets: Vec<String>,
    #[serde(default)]
    pub disc_number: u32,
    #[serde(default)]
    pub track_number: u32,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub explicit: bool,
    #[serde(default)]
    pub is_local: bool,
    #[serde(default)]
    pub is_playable: Option<bool>,
    /// Originally requested track when relinking replaced it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_from: Option<Box<Track>>,
    /// 30-second MP3 preview
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub restrictions: Option<Restrictions>,
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,
    #[serde(default, deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uri: String,
}

entity!(Track, ObjectType::Track);

impl Track {
    /// The album embedded in this track
    pub fn album(&self) -> Option<&Album> {
        self.album.as_ref()
    }

    /// Fetch every artist of this track
    ///
    /// Lookups run concurrently; results keep the order of `artists` and
    /// the first failure fails the whole call.
    pub async fn artists(&self, client: &SpotifyClient) -> Result<Vec<Artist>> {
        try_join_all(self.artists.iter().map(|artist| client.get_artist(&artist.id))).await
    }
}
