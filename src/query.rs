//! Typed query parameters
//!
//! Each query validates its ranges and renders to the sorted parameter map
//! passed to [`RequestConfig::queries`](crate::http::RequestConfig::queries).

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;

/// Rendered query parameters
pub type QueryParams = BTreeMap<String, String>;

/// A query that renders to request parameters
pub trait Query {
    /// Validate and render the parameters
    fn to_params(&self) -> Result<QueryParams>;
}

/// No parameters
impl Query for () {
    fn to_params(&self) -> Result<QueryParams> {
        Ok(QueryParams::new())
    }
}

fn check_range(field: &str, value: u32, min: u32, max: u32) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::invalid_value(
            field,
            format!("must be between {min} and {max}, got {value}"),
        ))
    }
}

fn insert_opt<T: ToString>(params: &mut QueryParams, key: &str, value: Option<&T>) {
    if let Some(value) = value {
        params.insert(key.to_string(), value.to_string());
    }
}

/// Market restriction only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketQuery {
    /// ISO 3166-1 alpha-2 country code
    pub market: Option<String>,
}

impl MarketQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only return content available in `market`
    #[must_use]
    pub fn market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into());
        self
    }
}

impl Query for MarketQuery {
    fn to_params(&self) -> Result<QueryParams> {
        let mut params = QueryParams::new();
        insert_opt(&mut params, "market", self.market.as_ref());
        Ok(params)
    }
}

/// Offset based paging
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// Page size, 1 to 50
    pub limit: Option<u32>,
    /// Index of the first item
    pub offset: Option<u32>,
}

impl PageQuery {
    /// Largest page size the playlist endpoints accept
    pub const MAX_LIMIT: u32 = 50;

    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl Query for PageQuery {
    fn to_params(&self) -> Result<QueryParams> {
        if let Some(limit) = self.limit {
            check_range("limit", limit, 1, Self::MAX_LIMIT)?;
        }
        let mut params = QueryParams::new();
        insert_opt(&mut params, "limit", self.limit.as_ref());
        insert_opt(&mut params, "offset", self.offset.as_ref());
        Ok(params)
    }
}

/// Item kinds a client can handle besides tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdditionalType {
    Track,
    Episode,
}

impl fmt::Display for AdditionalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AdditionalType::Track => "track",
            AdditionalType::Episode => "episode",
        })
    }
}

/// Paging, market and item kinds for playlist items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemsQuery {
    /// Page size, 1 to 100
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub market: Option<String>,
    /// Rendered comma-joined, e.g. `track,episode`
    pub additional_types: Vec<AdditionalType>,
}

impl ItemsQuery {
    pub const MAX_LIMIT: u32 = 100;

    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into());
        self
    }

    /// Also accept items of this kind
    #[must_use]
    pub fn additional_type(mut self, kind: AdditionalType) -> Self {
        if !self.additional_types.contains(&kind) {
            self.additional_types.push(kind);
        }
        self
    }
}

impl Query for ItemsQuery {
    fn to_params(&self) -> Result<QueryParams> {
        if let Some(limit) = self.limit {
            check_range("limit", limit, 1, Self::MAX_LIMIT)?;
        }
        let mut params = QueryParams::new();
        insert_opt(&mut params, "limit", self.limit.as_ref());
        insert_opt(&mut params, "offset", self.offset.as_ref());
        insert_opt(&mut params, "market", self.market.as_ref());
        if !self.additional_types.is_empty() {
            params.insert(
                "additional_types".to_string(),
                join(self.additional_types.iter()),
            );
        }
        Ok(params)
    }
}

/// Cursor paging over the playback history
///
/// `after` and `before` are Unix timestamps in milliseconds and exclusive;
/// at most one of them may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentlyPlayedQuery {
    /// Page size, 1 to 50
    pub limit: Option<u32>,
    pub after: Option<i64>,
    pub before: Option<i64>,
}

impl RecentlyPlayedQuery {
    pub const MAX_LIMIT: u32 = 50;

    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Items played after this timestamp
    #[must_use]
    pub fn after(mut self, millis: i64) -> Self {
        self.after = Some(millis);
        self
    }

    /// Items played before this timestamp
    #[must_use]
    pub fn before(mut self, millis: i64) -> Self {
        self.before = Some(millis);
        self
    }
}

impl Query for RecentlyPlayedQuery {
    fn to_params(&self) -> Result<QueryParams> {
        if let Some(limit) = self.limit {
            check_range("limit", limit, 1, Self::MAX_LIMIT)?;
        }
        if self.after.is_some() && self.before.is_some() {
            return Err(Error::invalid_value(
                "after",
                "after and before cannot both be set",
            ));
        }
        let mut params = QueryParams::new();
        insert_opt(&mut params, "limit", self.limit.as_ref());
        insert_opt(&mut params, "after", self.after.as_ref());
        insert_opt(&mut params, "before", self.before.as_ref());
        Ok(params)
    }
}

/// Tunable audio attributes for recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrackAttribute {
    Acousticness,
    Danceability,
    DurationMs,
    Energy,
    Instrumentalness,
    Key,
    Liveness,
    Loudness,
    Mode,
    Popularity,
    Speechiness,
    Tempo,
    TimeSignature,
    Valence,
}

impl TrackAttribute {
    /// Parameter suffix, as in `min_<name>`
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackAttribute::Acousticness => "acousticness",
            TrackAttribute::Danceability => "danceability",
            TrackAttribute::DurationMs => "duration_ms",
            TrackAttribute::Energy => "energy",
            TrackAttribute::Instrumentalness => "instrumentalness",
            TrackAttribute::Key => "key",
            TrackAttribute::Liveness => "liveness",
            TrackAttribute::Loudness => "loudness",
            TrackAttribute::Mode => "mode",
            TrackAttribute::Popularity => "popularity",
            TrackAttribute::Speechiness => "speechiness",
            TrackAttribute::Tempo => "tempo",
            TrackAttribute::TimeSignature => "time_signature",
            TrackAttribute::Valence => "valence",
        }
    }
}

/// Seeds and tuning for the recommendations endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationsQuery {
    pub market: Option<String>,
    /// Number of tracks, 1 to 100
    pub limit: Option<u32>,
    pub seed_artists: Vec<String>,
    pub seed_genres: Vec<String>,
    pub seed_tracks: Vec<String>,
    pub min: BTreeMap<TrackAttribute, f64>,
    pub max: BTreeMap<TrackAttribute, f64>,
    pub target: BTreeMap<TrackAttribute, f64>,
}

impl RecommendationsQuery {
    pub const MAX_LIMIT: u32 = 100;
    /// Seeds allowed across artists, genres and tracks combined
    pub const MAX_SEEDS: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn seed_artist(mut self, id: impl Into<String>) -> Self {
        self.seed_artists.push(id.into());
        self
    }

    #[must_use]
    pub fn seed_genre(mut self, genre: impl Into<String>) -> Self {
        self.seed_genres.push(genre.into());
        self
    }

    #[must_use]
    pub fn seed_track(mut self, id: impl Into<String>) -> Self {
        self.seed_tracks.push(id.into());
        self
    }

    /// Hard floor on an attribute
    #[must_use]
    pub fn min(mut self, attribute: TrackAttribute, value: f64) -> Self {
        self.min.insert(attribute, value);
        self
    }

    /// Hard ceiling on an attribute
    #[must_use]
    pub fn max(mut self, attribute: TrackAttribute, value: f64) -> Self {
        self.max.insert(attribute, value);
        self
    }

    /// Preferred value of an attribute
    #[must_use]
    pub fn target(mut self, attribute: TrackAttribute, value: f64) -> Self {
        self.target.insert(attribute, value);
        self
    }

    /// Number of seeds across all kinds
    pub fn seed_count(&self) -> usize {
        self.seed_artists.len() + self.seed_genres.len() + self.seed_tracks.len()
    }
}

impl Query for RecommendationsQuery {
    fn to_params(&self) -> Result<QueryParams> {
        let seeds = self.seed_count();
        if seeds == 0 || seeds > Self::MAX_SEEDS {
            return Err(Error::invalid_value(
                "seeds",
                format!(
                    "between 1 and {} seeds are required, got {seeds}",
                    Self::MAX_SEEDS
                ),
            ));
        }
        if let Some(limit) = self.limit {
            check_range("limit", limit, 1, Self::MAX_LIMIT)?;
        }

        let mut params = QueryParams::new();
        insert_opt(&mut params, "market", self.market.as_ref());
        insert_opt(&mut params, "limit", self.limit.as_ref());

        for (key, seeds) in [
            ("seed_artists", &self.seed_artists),
            ("seed_genres", &self.seed_genres),
            ("seed_tracks", &self.seed_tracks),
        ] {
            if !seeds.is_empty() {
                params.insert(key.to_string(), seeds.join(","));
            }
        }

        for (prefix, values) in [("min", &self.min), ("max", &self.max), ("target", &self.target)] {
            for (attribute, value) in values {
                params.insert(format!("{prefix}_{}", attribute.as_str()), value.to_string());
            }
        }

        Ok(params)
    }
}

fn join<T: fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(",")
}
