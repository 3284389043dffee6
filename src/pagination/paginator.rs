//! Lazy forward iteration over paged collections

use super::page::Page;
use crate::client::SpotifyClient;
use crate::error::Result;
use futures::stream::{self, Stream};
use serde_json::Value;
use std::collections::VecDeque;
use tracing::debug;

/// Turns one raw page item into the wrapped item type
pub type ItemWrapper<T> = fn(Value) -> Result<T>;

/// Forward-only sequence over every item of a paginated collection
///
/// The paginator owns the current page. When its items run out and the
/// page links a `next` URL, that page is fetched through the client and
/// replaces the current one. Once `next` is absent, or a fetch fails, the
/// sequence is over.
pub struct Paginator<T> {
    page: Page<Value>,
    pending: VecDeque<Value>,
    wrap: ItemWrapper<T>,
}

impl<T> Paginator<T> {
    /// Start iterating from an already fetched page
    pub fn new(mut page: Page<Value>, wrap: ItemWrapper<T>) -> Self {
        let pending = std::mem::take(&mut page.items).into();
        Self {
            page,
            pending,
            wrap,
        }
    }

    /// Start iterating from a raw response body
    pub fn from_value(value: Value, wrap: ItemWrapper<T>) -> Result<Self> {
        Ok(Self::new(Page::from_value(value)?, wrap))
    }

    /// Envelope of the current page (its `items` have been moved out)
    pub fn page(&self) -> &Page<Value> {
        &self.page
    }

    /// Total item count reported by the API
    pub fn total(&self) -> u32 {
        self.page.total
    }

    /// Items of the current page not yet yielded
    pub fn remaining_in_page(&self) -> usize {
        self.pending.len()
    }

    /// Whether no further items can be produced
    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty() && self.page.next.is_none()
    }

    /// Yield the next item, fetching the next page when needed
    ///
    /// An error ends the sequence: later calls return `Ok(None)`.
    pub async fn next(&mut self, client: &SpotifyClient) -> Result<Option<T>> {
        loop {
            if let Some(raw) = self.pending.pop_front() {
                let item = (self.wrap)(raw);
                if item.is_err() {
                    self.stop();
                }
                return item.map(Some);
            }

            // Taken before the fetch so a failed page ends the sequence
            let Some(next) = self.page.next.take() else {
                return Ok(None);
            };

            debug!("Fetching next page: {}", next);
            let body = client.http().get(&next).await?;
            let mut page = Page::from_value(body)?;
            self.pending = std::mem::take(&mut page.items).into();
            self.page = page;
        }
    }

    /// Drain the sequence into a vector, in page order
    pub async fn collect_all(mut self, client: &SpotifyClient) -> Result<Vec<T>> {
        // `total` is reported by the server, so only the buffered page is pre-sized
        let mut items = Vec::with_capacity(self.pending.len());
        while let Some(item) = self.next(client).await? {
            items.push(item);
        }
        Ok(items)
    }

    fn stop(&mut self) {
        self.pending.clear();
        self.page.next = None;
    }

    /// Expose the sequence as a stream of results
    pub fn into_stream<'a>(self, client: &'a SpotifyClient) -> impl Stream<Item = Result<T>> + 'a
    where
        T: 'a,
    {
        stream::try_unfold(self, move |mut paginator| async move {
            Ok(paginator
                .next(client)
                .await?
                .map(|item| (item, paginator)))
        })
    }
}

impl<T> std::fmt::Debug for Paginator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("href", &self.page.href)
            .field("next", &self.page.next)
            .field("total", &self.page.total)
            .field("pending", &self.pending.len())
            .finish()
    }
}
