//! Albums

use super::artist::ArtistRef;
use super::common::{
    null_as_default, AlbumType, Copyright, ExternalIds, ExternalUrls, Image,
    ReleaseDatePrecision, Restrictions,
};
use super::track::Track;
use super::{decode, entity};
use crate::pagination::{Page, Paginator};
use crate::types::ObjectType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Album, either full or simplified as embedded in a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Spotify ID, empty for the album of a local file
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub album_type: Option<AlbumType>,
    #[serde(default)]
    pub total_tracks: u32,
    /// Markets where at least one of the album's tracks is available
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_markets: Vec<String>,
    /// First release date, precision given by `release_date_precision`
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub release_date_precision: Option<ReleaseDatePrecision>,
    #[serde(default)]
    pub restrictions: Option<Restrictions>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists: Vec<ArtistRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub copyrights: Vec<Copyright>,
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,
    /// First page of the album's tracks, only on full albums
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Page<Value>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uri: String,
}

entity!(Album, ObjectType::Album);

impl Album {
    /// Iterate the album's tracks, starting from the embedded page
    ///
    /// `None` for simplified albums, which carry no track listing.
    pub fn tracks(&self) -> Option<Paginator<Track>> {
        self.tracks
            .clone()
            .map(|page| Paginator::new(page, decode::<Track>))
    }
}
