//! Track recommendations

use super::entity;
use super::track::Track;
use serde::{Deserialize, Serialize};

/// Kind of seed a recommendation was generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedType {
    #[serde(alias = "ARTIST")]
    Artist,
    #[serde(alias = "TRACK")]
    Track,
    #[serde(alias = "GENRE")]
    Genre,
}

/// Pool sizes for one recommendation seed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSeed {
    /// Tracks left after min_* and max_* filters
    #[serde(default)]
    pub after_filtering_size: u32,
    /// Tracks left after relinking for regional availability
    #[serde(default)]
    pub after_relinking_size: u32,
    /// Link to the seed object, null for genres
    #[serde(default)]
    pub href: Option<String>,
    /// The seed value as passed in the request
    pub id: String,
    #[serde(default)]
    pub initial_pool_size: u32,
    #[serde(rename = "type")]
    pub kind: SeedType,
}

/// Recommended tracks together with the seeds they came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub seeds: Vec<RecommendationSeed>,
    /// Simplified tracks, ordered by the request parameters
    #[serde(default)]
    pub tracks: Vec<Track>,
}

entity!(Recommendations);

impl Recommendations {
    /// The recommended tracks
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
