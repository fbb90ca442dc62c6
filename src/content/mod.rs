//! Content API client module
//!
//! Talks to a headless-CMS-style content delivery API: paginated entry
//! listings with filtering, sorting, and locale selection, single-entry
//! lookups, translations, and a page stream for append-style UIs
//! (infinite scroll, load-more).

mod client;
mod query;
mod types;

pub use client::{ContentClient, DEFAULT_COLLECTION};
pub use query::{EntryQuery, SortSpec, DEFAULT_PER_PAGE};
pub use types::{Entry, EntryFields, EntryPage, EntrySlice};
