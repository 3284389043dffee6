//! Page envelope types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cursor pair returned by cursor-paged endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursors {
    /// Cursor to fetch items after this page
    #[serde(default)]
    pub after: Option<String>,
    /// Cursor to fetch items before this page
    #[serde(default)]
    pub before: Option<String>,
}

/// One fetched page of a paginated collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Link to the endpoint returning this page
    #[serde(default)]
    pub href: String,
    /// Items on this page
    pub items: Vec<T>,
    /// Maximum number of items in the response
    #[serde(default)]
    pub limit: u32,
    /// URL of the next page, absent on the last page
    #[serde(default)]
    pub next: Option<String>,
    /// Offset of the first item on this page
    #[serde(default)]
    pub offset: u32,
    /// URL of the previous page
    #[serde(default)]
    pub previous: Option<String>,
    /// Total number of items available
    #[serde(default)]
    pub total: u32,
    /// Cursors, only present on cursor-paged endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursors: Option<Cursors>,
}

impl<T> Page<T> {
    /// Whether another page follows this one
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Page<Value> {
    /// Parse a page envelope out of a raw response body
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| Error::shape(format!("Response is not a page envelope: {e}")))
    }
}
