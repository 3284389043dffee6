//! Tracks and episodes behind one type
//!
//! Playlist and recently-played payloads can hold either kind. The `type`
//! field of the payload picks the constructor.

use super::episode::Episode;
use super::track::Track;
use super::{decode, SpotifyObject};
use crate::error::{Error, Result};
use crate::types::ObjectType;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

type Constructor = fn(Value) -> Result<Playable>;

/// `type` discriminant to constructor
const CONSTRUCTORS: &[(&str, Constructor)] = &[("track", track), ("episode", episode)];

fn track(value: Value) -> Result<Playable> {
    decode::<Track>(value).map(Playable::Track)
}

fn episode(value: Value) -> Result<Playable> {
    decode::<Episode>(value).map(Playable::Episode)
}

/// Something that can be played: a track or an episode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Playable {
    Track(Track),
    Episode(Episode),
}

impl Playable {
    /// Wrap a raw payload, dispatching on its `type` field
    pub fn from_value(value: Value) -> Result<Self> {
        Self::from_value_or(value, None)
    }

    /// Like [`from_value`](Self::from_value), using `fallback` when the
    /// payload has no `type` field
    pub fn from_value_or(value: Value, fallback: Option<&str>) -> Result<Self> {
        let kind = match value.get("type").and_then(Value::as_str) {
            Some(kind) => kind.to_string(),
            None => fallback
                .ok_or_else(|| Error::shape("Playable payload has no type field"))?
                .to_string(),
        };

        let constructor = CONSTRUCTORS
            .iter()
            .find(|(name, _)| *name == kind)
            .map(|(_, constructor)| *constructor)
            .ok_or_else(|| Error::shape(format!("Unknown playable type '{kind}'")))?;

        constructor(value)
    }

    /// The track, if this is one
    pub fn as_track(&self) -> Option<&Track> {
        match self {
            Playable::Track(track) => Some(track),
            Playable::Episode(_) => None,
        }
    }

    /// The episode, if this is one
    pub fn as_episode(&self) -> Option<&Episode> {
        match self {
            Playable::Episode(episode) => Some(episode),
            Playable::Track(_) => None,
        }
    }

    pub fn is_track(&self) -> bool {
        matches!(self, Playable::Track(_))
    }

    pub fn is_episode(&self) -> bool {
        matches!(self, Playable::Episode(_))
    }

    /// Display name of the track or episode
    pub fn name(&self) -> &str {
        match self {
            Playable::Track(track) => &track.name,
            Playable::Episode(episode) => &episode.name,
        }
    }
}

impl SpotifyObject for Playable {
    fn object_type(&self) -> ObjectType {
        match self {
            Playable::Track(_) => ObjectType::Track,
            Playable::Episode(_) => ObjectType::Episode,
        }
    }

    fn id(&self) -> &str {
        match self {
            Playable::Track(track) => &track.id,
            Playable::Episode(episode) => &episode.id,
        }
    }
}

impl fmt::Display for Playable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Playable::Track(track) => fmt::Display::fmt(track, f),
            Playable::Episode(episode) => fmt::Display::fmt(episode, f),
        }
    }
}
