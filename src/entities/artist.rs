//! Artists

use super::common::{null_as_default, ExternalUrls, Followers, Image};
use super::entity;
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::types::ObjectType;
use serde::{Deserialize, Serialize};

/// Full artist object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Genres the artist is associated with, empty if not classified yet
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    /// Popularity between 0 and 100
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub followers: Option<Followers>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub uri: String,
}

entity!(Artist, ObjectType::Artist);

/// Simplified artist embedded in tracks and albums
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,
    #[serde(default, deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uri: String,
}

entity!(ArtistRef, ObjectType::Artist);

impl ArtistRef {
    /// Fetch the full artist object
    pub async fn fetch(&self, client: &SpotifyClient) -> Result<Artist> {
        client.get_artist(&self.id).await
    }
}
