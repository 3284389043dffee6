//! User profiles

use super::common::{null_as_default, ExplicitContent, ExternalUrls, Followers, Image};
use super::entity;
use super::playlist::Playlist;
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::pagination::Paginator;
use crate::query::PageQuery;
use crate::types::ObjectType;
use serde::{Deserialize, Serialize};

/// A Spotify user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Spotify user ID
    pub id: String,
    /// Name shown on the profile
    #[serde(default)]
    pub display_name: Option<String>,
    /// Country code, needs the `user-read-private` scope
    #[serde(default)]
    pub country: Option<String>,
    /// Unverified email address, needs the `user-read-email` scope
    #[serde(default)]
    pub email: Option<String>,
    /// Subscription level: `premium`, `free` or `open`
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub explicit_content: Option<ExplicitContent>,
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

entity!(User, ObjectType::User);

impl User {
    /// Playlists owned or followed by this user
    pub async fn playlists(
        &self,
        client: &SpotifyClient,
        query: &PageQuery,
    ) -> Result<Paginator<Playlist>> {
        client.get_user_playlists(&self.id, query).await
    }

    /// Every playlist owned or followed by this user
    pub async fn all_playlists(&self, client: &SpotifyClient) -> Result<Vec<Playlist>> {
        client.get_all_user_playlists(&self.id).await
    }
}

/// Abbreviated user, as found in playlist owners and `added_by`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub uri: String,
}

entity!(UserRef, ObjectType::User);

impl UserRef {
    /// Fetch the full profile of this user
    pub async fn fetch(&self, client: &SpotifyClient) -> Result<User> {
        client.get_user(&self.id).await
    }
}
