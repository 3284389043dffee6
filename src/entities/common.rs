//! Value types shared between entities

use crate::pagination::Page;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize `null` as the type's default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Cover art or profile image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Source URL of the image
    pub url: String,
    /// Width in pixels, when known
    #[serde(default)]
    pub width: Option<u32>,
    /// Height in pixels, when known
    #[serde(default)]
    pub height: Option<u32>,
}

/// Follower information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Followers {
    /// Always null, the API does not support it yet
    #[serde(default)]
    pub href: Option<String>,
    /// Total number of followers
    #[serde(default)]
    pub total: u64,
}

/// Known external URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUrls {
    /// Open Spotify URL of the object
    #[serde(default)]
    pub spotify: Option<String>,
}

/// Known external identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIds {
    /// International Standard Recording Code
    #[serde(default)]
    pub isrc: Option<String>,
    /// International Article Number
    #[serde(default)]
    pub ean: Option<String>,
    /// Universal Product Code
    #[serde(default)]
    pub upc: Option<String>,
}

/// Content restriction applied to an object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restrictions {
    /// `market`, `product` or `explicit`
    pub reason: String,
}

/// Playback position of an episode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumePoint {
    /// Whether the episode has been fully played
    #[serde(default)]
    pub fully_played: bool,
    /// Most recent position in milliseconds
    #[serde(default)]
    pub resume_position_ms: u64,
}

/// Copyright statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Copyright {
    /// Copyright text
    pub text: String,
    /// `C` for copyright, `P` for the sound recording copyright
    #[serde(rename = "type")]
    pub kind: String,
}

/// Explicit content settings of a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplicitContent {
    /// Explicit content should not be played
    #[serde(default)]
    pub filter_enabled: bool,
    /// The setting is locked and can't be changed by the user
    #[serde(default)]
    pub filter_locked: bool,
}

/// Kind of album
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlbumType {
    #[serde(alias = "ALBUM")]
    Album,
    #[serde(alias = "SINGLE")]
    Single,
    #[serde(alias = "COMPILATION")]
    Compilation,
    AppearsOn,
}

/// Precision of a release date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseDatePrecision {
    Year,
    Month,
    Day,
}

/// `{ href, total }` stand-in for a collection that was not embedded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRef {
    /// Endpoint returning the full collection
    #[serde(default)]
    pub href: String,
    /// Number of items in the collection
    #[serde(default)]
    pub total: u32,
}

/// A nested collection: either a first page or just a count reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Collection<T> {
    Page(Page<T>),
    Count(CountRef),
}

impl<T> Collection<T> {
    /// Total number of items in the collection
    pub fn total(&self) -> u32 {
        match self {
            Collection::Page(page) => page.total,
            Collection::Count(count) => count.total,
        }
    }

    /// Endpoint returning the full collection
    pub fn href(&self) -> &str {
        match self {
            Collection::Page(page) => &page.href,
            Collection::Count(count) => &count.href,
        }
    }

    /// The embedded page, if any
    pub fn page(&self) -> Option<&Page<T>> {
        match self {
            Collection::Page(page) => Some(page),
            Collection::Count(_) => None,
        }
    }
}
