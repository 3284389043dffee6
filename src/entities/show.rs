//! Podcast shows

use super::common::{null_as_default, Copyright, ExternalUrls, Image};
use super::episode::Episode;
use super::{decode, entity};
use crate::pagination::{Page, Paginator};
use crate::types::ObjectType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A podcast show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Description with HTML tags stripped
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub html_description: Option<String>,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub explicit: bool,
    #[serde(default)]
    pub is_externally_hosted: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_markets: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub copyrights: Vec<Copyright>,
    /// ISO 639-1 codes of the languages used
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(default)]
    pub total_episodes: Option<u32>,
    /// First page of episodes, only on full shows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episodes: Option<Page<Value>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub uri: String,
}

entity!(Show, ObjectType::Show);

impl Show {
    /// Iterate the show's episodes, starting from the embedded page
    pub fn episodes(&self) -> Option<Paginator<Episode>> {
        self.episodes
            .clone()
            .map(|page| Paginator::new(page, decode::<Episode>))
    }
}
