//! Playlists

use super::common::{null_as_default, Collection, ExternalUrls, Followers, Image};
use super::playlist_item::PlaylistItem;
use super::user::UserRef;
use super::{decode, entity};
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::pagination::Paginator;
use crate::query::ItemsQuery;
use crate::types::ObjectType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A playlist
///
/// Full playlists embed the first page of their items under `tracks`;
/// playlists listed by the playlists endpoints only carry a count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Only returned for modified, verified playlists
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the owner lets other users modify the playlist
    #[serde(default)]
    pub collaborative: bool,
    /// Public/private status, `None` when not relevant
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub owner: Option<UserRef>,
    /// Version identifier of the playlist contents
    #[serde(default)]
    pub snapshot_id: String,
    #[serde(default)]
    pub followers: Option<Followers>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub tracks: Option<Collection<Value>>,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub uri: String,
}

entity!(Playlist, ObjectType::Playlist);

impl Playlist {
    /// Number of items in the playlist
    pub fn total_items(&self) -> u32 {
        self.tracks.as_ref().map_or(0, Collection::total)
    }

    /// Iterate the items embedded in this playlist without a new request
    /// for the first page
    pub fn embedded_items(&self) -> Option<Paginator<PlaylistItem>> {
        self.tracks
            .as_ref()
            .and_then(Collection::page)
            .map(|page| Paginator::new(page.clone(), decode::<PlaylistItem>))
    }

    /// Fetch the playlist's items
    pub async fn items(
        &self,
        client: &SpotifyClient,
        query: &ItemsQuery,
    ) -> Result<Paginator<PlaylistItem>> {
        client.get_playlist_items(&self.id, query).await
    }

    /// Fetch every item of the playlist
    pub async fn all_items(
        &self,
        client: &SpotifyClient,
        query: &ItemsQuery,
    ) -> Result<Vec<PlaylistItem>> {
        client.get_all_playlist_items(&self.id, query).await
    }
}
