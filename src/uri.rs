//! Canonical `spotify:<type>:<id>` identifiers

use crate::entities::SpotifyObject;
use crate::error::{Error, Result};
use crate::types::ObjectType;
use std::borrow::Cow;
use std::fmt;

/// URI namespace of every Spotify identifier
pub const URI_NAMESPACE: &str = "spotify";

/// Build the canonical URI of an object
///
/// ```
/// use spotify_web::create_spotify_uri;
///
/// assert_eq!(
///     create_spotify_uri("track", "11dFghVXANMlKmJXsNCbNl"),
///     "spotify:track:11dFghVXANMlKmJXsNCbNl"
/// );
/// ```
pub fn create_spotify_uri(object_type: impl fmt::Display, id: &str) -> String {
    format!("{URI_NAMESPACE}:{object_type}:{id}")
}

/// Split a canonical URI into its object type and ID
pub fn parse_spotify_uri(uri: &str) -> Result<(ObjectType, String)> {
    let mut parts = uri.splitn(3, ':');
    let (Some(namespace), Some(kind), Some(id)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::invalid_uri(uri, "expected spotify:<type>:<id>"));
    };

    if namespace != URI_NAMESPACE {
        return Err(Error::invalid_uri(
            uri,
            format!("unknown namespace '{namespace}'"),
        ));
    }

    let object_type = kind
        .parse::<ObjectType>()
        .map_err(|_| Error::invalid_uri(uri, format!("unknown object type '{kind}'")))?;

    if id.is_empty() {
        return Err(Error::invalid_uri(uri, "empty id"));
    }

    Ok((object_type, id.to_string()))
}

/// Either a literal URI/ID string or an entity
///
/// Lets calls such as
/// [`add_items_to_playlist`](crate::SpotifyClient::add_items_to_playlist)
/// take strings and entities in the same list.
pub enum UriRef<'a> {
    /// Used as given
    Literal(Cow<'a, str>),
    /// Resolved through its canonical URI or ID
    Object(&'a dyn SpotifyObject),
}

impl UriRef<'_> {
    /// The URI this reference resolves to
    pub fn uri(&self) -> String {
        match self {
            UriRef::Literal(s) => s.to_string(),
            UriRef::Object(object) => object.spotify_uri(),
        }
    }

    /// The ID this reference resolves to
    pub fn id(&self) -> String {
        match self {
            UriRef::Literal(s) => s.to_string(),
            UriRef::Object(object) => object.id().to_string(),
        }
    }
}

impl<'a> From<&'a str> for UriRef<'a> {
    fn from(value: &'a str) -> Self {
        UriRef::Literal(Cow::Borrowed(value))
    }
}

impl From<String> for UriRef<'_> {
    fn from(value: String) -> Self {
        UriRef::Literal(Cow::Owned(value))
    }
}

impl<'a, T: SpotifyObject> From<&'a T> for UriRef<'a> {
    fn from(value: &'a T) -> Self {
        UriRef::Object(value)
    }
}

impl fmt::Debug for UriRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UriRef::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            UriRef::Object(object) => f.debug_tuple("Object").field(&object.spotify_uri()).finish(),
        }
    }
}

/// One URI per input, in input order; strings pass through untouched
pub fn resolve_uris<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<UriRef<'a>>,
{
    items.into_iter().map(|item| item.into().uri()).collect()
}

/// The ID of an entity, or the string itself
pub fn resolve_id<'a>(item: impl Into<UriRef<'a>>) -> String {
    item.into().id()
}
