//! Spotify Web API client
//!
//! One method per endpoint. Responses are wrapped into the typed entities
//! of [`crate::entities`]; collection endpoints return a [`Paginator`] and
//! have `get_all_*` counterparts that drain it.

use crate::auth::SessionConfig;
use crate::entities::{
    decode, Album, Artist, Episode, Playlist, PlaylistItem, RecentlyPlayedItem, Recommendations,
    Show, Track, User,
};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::{ItemWrapper, Paginator};
use crate::query::{
    ItemsQuery, MarketQuery, PageQuery, Query, RecentlyPlayedQuery, RecommendationsQuery,
};
use crate::uri::{resolve_id, resolve_uris, UriRef};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Page size used by the `get_all_*` helpers
pub const ALL_PAGE_LIMIT: u32 = 50;

/// Handle to the Spotify Web API
///
/// Cheap to clone; clones share the session, cache and rate limiter.
#[derive(Clone)]
pub struct SpotifyClient {
    http: Arc<HttpClient>,
}

impl SpotifyClient {
    /// Create a client against the public API
    ///
    /// Fails with a configuration error, before any request, when the
    /// session has no refresh token.
    pub fn new(session: SessionConfig) -> Result<Self> {
        Self::with_config(session, HttpClientConfig::default())
    }

    /// Create a client with custom transport settings
    pub fn with_config(session: SessionConfig, config: HttpClientConfig) -> Result<Self> {
        let session = crate::auth::Session::new(session)?;
        let http = HttpClient::new(config, session)?;
        info!("Spotify client ready for {}", http.config().base_url);
        Ok(Self::from_http(http))
    }

    /// Wrap an already built transport
    pub fn from_http(http: HttpClient) -> Self {
        Self {
            http: Arc::new(http),
        }
    }

    /// The underlying transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Canonical URI for an object type and ID
    pub fn create_spotify_uri(&self, object_type: impl fmt::Display, id: &str) -> String {
        crate::uri::create_spotify_uri(object_type, id)
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, query: &impl Query) -> Result<T> {
        let body = self
            .http
            .get_with_config(path, RequestConfig::new().queries(query.to_params()?))
            .await?;
        decode(body)
    }

    async fn fetch_page<T>(
        &self,
        path: &str,
        query: &impl Query,
        wrap: ItemWrapper<T>,
    ) -> Result<Paginator<T>> {
        let body = self
            .http
            .get_with_config(path, RequestConfig::new().queries(query.to_params()?))
            .await?;
        Paginator::from_value(body, wrap)
    }

    /// The current user's profile
    pub async fn get_me(&self) -> Result<User> {
        self.fetch("/me", &()).await
    }

    /// Public profile of a user, e.g. `smedjan`
    pub async fn get_user(&self, id: &str) -> Result<User> {
        self.fetch(&format!("/users/{id}"), &()).await
    }

    /// A playlist, with the first page of its items embedded
    pub async fn get_playlist(&self, id: &str, query: &MarketQuery) -> Result<Playlist> {
        self.fetch(&format!("/playlists/{id}"), query).await
    }

    /// A single track
    pub async fn get_track(&self, id: &str, query: &MarketQuery) -> Result<Track> {
        self.fetch(&format!("/tracks/{id}"), query).await
    }

    /// A single album
    pub async fn get_album(&self, id: &str, query: &MarketQuery) -> Result<Album> {
        self.fetch(&format!("/albums/{id}"), query).await
    }

    /// A single podcast episode
    pub async fn get_episode(&self, id: &str, query: &MarketQuery) -> Result<Episode> {
        self.fetch(&format!("/episodes/{id}"), query).await
    }

    /// A single podcast show
    pub async fn get_show(&self, id: &str, query: &MarketQuery) -> Result<Show> {
        self.fetch(&format!("/shows/{id}"), query).await
    }

    /// A single artist
    pub async fn get_artist(&self, id: &str) -> Result<Artist> {
        self.fetch(&format!("/artists/{id}"), &()).await
    }

    /// Tracks recommended from up to five seeds
    pub async fn get_recommendations(&self, query: &RecommendationsQuery) -> Result<Recommendations> {
        self.fetch("/recommendations", query).await
    }

    /// Playlists owned or followed by the current user
    pub async fn get_client_playlists(&self, query: &PageQuery) -> Result<Paginator<Playlist>> {
        self.fetch_page("/me/playlists", query, decode::<Playlist>)
            .await
    }

    /// Every playlist owned or followed by the current user
    pub async fn get_all_client_playlists(&self) -> Result<Vec<Playlist>> {
        let query = PageQuery::new().limit(ALL_PAGE_LIMIT);
        self.get_client_playlists(&query)
            .await?
            .collect_all(self)
            .await
    }

    /// Playlists owned or followed by a user
    pub async fn get_user_playlists(
        &self,
        user_id: &str,
        query: &PageQuery,
    ) -> Result<Paginator<Playlist>> {
        self.fetch_page(
            &format!("/users/{user_id}/playlists"),
            query,
            decode::<Playlist>,
        )
        .await
    }

    /// Every playlist owned or followed by a user
    pub async fn get_all_user_playlists(&self, user_id: &str) -> Result<Vec<Playlist>> {
        let query = PageQuery::new().limit(ALL_PAGE_LIMIT);
        self.get_user_playlists(user_id, &query)
            .await?
            .collect_all(self)
            .await
    }

    /// Items of a playlist
    pub async fn get_playlist_items(
        &self,
        playlist_id: &str,
        query: &ItemsQuery,
    ) -> Result<Paginator<PlaylistItem>> {
        self.fetch_page(
            &format!("/playlists/{playlist_id}/tracks"),
            query,
            decode::<PlaylistItem>,
        )
        .await
    }

    /// Every item of a playlist
    pub async fn get_all_playlist_items(
        &self,
        playlist_id: &str,
        query: &ItemsQuery,
    ) -> Result<Vec<PlaylistItem>> {
        let items = self
            .get_playlist_items(playlist_id, query)
            .await?
            .collect_all(self)
            .await?;
        debug!("Collected {} items of playlist {}", items.len(), playlist_id);
        Ok(items)
    }

    /// The current user's recently played tracks
    pub async fn get_recently_played(
        &self,
        query: &RecentlyPlayedQuery,
    ) -> Result<Paginator<RecentlyPlayedItem>> {
        self.fetch_page(
            "/me/player/recently-played",
            query,
            decode::<RecentlyPlayedItem>,
        )
        .await
    }

    /// The whole playback history the API exposes
    pub async fn get_all_recently_played(&self) -> Result<Vec<RecentlyPlayedItem>> {
        let query = RecentlyPlayedQuery::new().limit(ALL_PAGE_LIMIT);
        self.get_recently_played(&query)
            .await?
            .collect_all(self)
            .await
    }

    /// Append a track or episode to the playback queue (premium only)
    ///
    /// Without `device_id` the user's active device is targeted.
    pub async fn add_item_to_playback_queue(
        &self,
        uri: &str,
        device_id: Option<&str>,
    ) -> Result<()> {
        let mut config = RequestConfig::new().query("uri", uri);
        if let Some(device_id) = device_id {
            config = config.query("device_id", device_id);
        }
        self.http.post_with_config("/me/player/queue", config).await?;
        Ok(())
    }

    /// Add items to a playlist, returning the new snapshot ID
    ///
    /// `playlist` and `items` accept IDs/URIs as strings or entities. With
    /// no `position` the items are appended.
    pub async fn add_items_to_playlist<'a, I>(
        &self,
        playlist: impl Into<UriRef<'a>>,
        items: I,
        position: Option<u32>,
    ) -> Result<String>
    where
        I: IntoIterator,
        I::Item: Into<UriRef<'a>>,
    {
        #[derive(Deserialize)]
        struct Snapshot {
            snapshot_id: String,
        }

        let playlist_id = resolve_id(playlist);
        let uris = resolve_uris(items);

        let mut body = json!({ "uris": uris });
        if let Some(position) = position {
            body["position"] = Value::from(position);
        }

        let response = self
            .http
            .post(&format!("/playlists/{playlist_id}/tracks"), body)
            .await?;
        let snapshot: Snapshot = decode(response)?;
        Ok(snapshot.snapshot_id)
    }
}

impl fmt::Debug for SpotifyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyClient")
            .field("http", &self.http)
            .finish()
    }
}
