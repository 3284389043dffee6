//! Podcast episodes

use super::common::{
    null_as_default, ExternalUrls, Image, ReleaseDatePrecision, Restrictions, ResumePoint,
};
use super::entity;
use super::show::Show;
use crate::types::ObjectType;
use serde::{Deserialize, Serialize};

/// A podcast episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub html_description: Option<String>,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub explicit: bool,
    #[serde(default)]
    pub is_externally_hosted: Option<bool>,
    #[serde(default)]
    pub is_playable: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub release_date_precision: Option<ReleaseDatePrecision>,
    /// Set when the token has the `user-read-playback-position` scope
    #[serde(default)]
    pub resume_point: Option<ResumePoint>,
    #[serde(default)]
    pub audio_preview_url: Option<String>,
    #[serde(default)]
    pub restrictions: Option<Restrictions>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    /// Show the episode belongs to, absent when nested inside a show
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<Show>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub uri: String,
}

entity!(Episode, ObjectType::Episode);

impl Episode {
    /// The show embedded in this episode
    pub fn show(&self) -> Option<&Show> {
        self.show.as_ref()
    }
}
