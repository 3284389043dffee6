//! Pagination module
//!
//! Spotify collections come back one page at a time inside the envelope
//! `{ items, total, limit, offset, next, previous, href }`. The
//! [`Paginator`] walks that chain forward, fetching the next page through
//! the client only once the current one is exhausted.
//!
//! # Overview
//!
//! - [`Page`] is the raw envelope, optionally carrying `cursors` for
//!   cursor-paged endpoints such as recently-played
//! - [`Paginator`] yields wrapped items lazily and can be drained with
//!   [`Paginator::collect_all`] or turned into a `futures::Stream`

mod page;
mod paginator;

pub use page::{Cursors, Page};
pub use paginator::{ItemWrapper, Paginator};
