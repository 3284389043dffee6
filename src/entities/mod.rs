//! Typed views over Spotify Web API objects
//!
//! Every entity is deserialized from the raw JSON the API returns and is
//! never mutated afterwards. Accessors that need another request take the
//! [`SpotifyClient`](crate::SpotifyClient) as an argument instead of
//! holding a reference to it.
//!
//! Catalog objects carrying an `id` implement [`SpotifyObject`], which
//! gives them a canonical `spotify:<type>:<id>` URI. All entities
//! implement `Display` through [`render`](crate::render::render).

mod album;
mod artist;
mod common;
mod episode;
mod playable;
mod playlist;
mod playlist_item;
mod recently_played;
mod recommendations;
mod show;
mod track;
mod user;

pub use album::Album;
pub use artist::{Artist, ArtistRef};
pub use common::{
    AlbumType, Collection, Copyright, CountRef, ExplicitContent, ExternalIds, ExternalUrls,
    Followers, Image, ReleaseDatePrecision, Restrictions, ResumePoint,
};
pub use episode::Episode;
pub use playable::Playable;
pub use playlist::Playlist;
pub use playlist_item::PlaylistItem;
pub use recently_played::{PlaybackContext, RecentlyPlayedItem};
pub use recommendations::{RecommendationSeed, Recommendations, SeedType};
pub use show::Show;
pub use track::Track;
pub use user::{User, UserRef};

use crate::error::{Error, Result};
use crate::types::ObjectType;
use crate::uri::create_spotify_uri;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A catalog object addressable by a canonical Spotify URI
pub trait SpotifyObject {
    /// Kind of the object
    fn object_type(&self) -> ObjectType;

    /// Spotify ID of the object
    fn id(&self) -> &str;

    /// Canonical URI, e.g. `spotify:track:11dFghVXANMlKmJXsNCbNl`
    fn spotify_uri(&self) -> String {
        create_spotify_uri(self.object_type(), self.id())
    }
}

/// Deserialize a raw API object into an entity
///
/// Mismatched payloads are reported as shape errors since they point at
/// the API returning something unexpected.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        Error::shape(format!(
            "Unexpected {} payload: {e}",
            short_type_name::<T>()
        ))
    })
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Implements `Display` (debug rendering) and optionally [`SpotifyObject`]
macro_rules! entity {
    ($ty:ident) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&crate::render::render_entity(stringify!($ty), self))
            }
        }
    };
    ($ty:ident, $kind:expr) => {
        entity!($ty);

        impl crate::entities::SpotifyObject for $ty {
            fn object_type(&self) -> crate::types::ObjectType {
                $kind
            }

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

pub(crate) use entity;
