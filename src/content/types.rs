//! Content entry types
//!
//! Entry shapes and the response envelopes the API serves them in. The
//! API is loose about envelopes: a listing may be a bare JSON array or a
//! `{ data: [...] }` object, and the total count (when reported at all)
//! shows up under several names. The envelope types absorb all of that
//! so the rest of the crate sees one shape.

use crate::pagination::PageMeta;
use crate::types::JsonObject;
use crate::window::{self, Window};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single content entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable entry identifier
    pub uuid: String,

    /// Locale this rendition of the entry is in
    #[serde(default)]
    pub locale: String,

    /// Publication timestamp, if published
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,

    /// Modeled field values
    #[serde(default)]
    pub fields: EntryFields,
}

/// Field values of a content entry
///
/// The common article fields are modeled; anything else the collection
/// defines lands in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryFields {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub excerpt: String,

    /// Editorial publication date, as the API serves it
    #[serde(default)]
    pub published_date: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    /// View counter, served as a string
    #[serde(default)]
    pub views: Option<String>,

    /// Collection-specific fields not modeled above
    #[serde(flatten)]
    pub extra: JsonObject,
}

// ============================================================================
// Listing Results
// ============================================================================

/// One page of a page-based listing
#[derive(Debug, Clone, Serialize)]
pub struct EntryPage {
    /// Entries on this page
    pub items: Vec<Entry>,
    /// 1-based page number this result is for
    pub page: u32,
    /// Requested page size
    pub per_page: u32,
    /// Total item count, when the API reports one
    pub total: Option<u64>,
}

impl EntryPage {
    /// Total page count, when the API reported a total
    pub fn total_pages(&self) -> Option<u32> {
        match (self.total, self.per_page) {
            (Some(_), 0) | (None, _) => None,
            (Some(total), per_page) => Some(total.div_ceil(u64::from(per_page)) as u32),
        }
    }

    /// Whether another page is worth requesting
    ///
    /// With a reported total this is exact; without one it falls back to
    /// the full-page heuristic (a page shorter than `per_page` must be
    /// the last).
    pub fn has_more(&self) -> bool {
        match self.total_pages() {
            Some(total_pages) => self.page < total_pages,
            None => self.items.len() == self.per_page as usize && self.per_page > 0,
        }
    }

    /// Page window for a pagination control, when a total is known
    pub fn window(&self) -> Option<Window> {
        self.total_pages()
            .map(|total_pages| window::page_window(self.page, total_pages))
    }

    /// Page window with an explicit width
    pub fn window_with(&self, max_visible: u32) -> Option<Window> {
        self.total_pages()
            .map(|total_pages| window::page_window_with(self.page, total_pages, max_visible))
    }

    /// Pagination facts for strategy stop checks
    pub fn meta(&self) -> PageMeta {
        let mut meta = PageMeta::with_records(self.items.len());
        if let Some(total) = self.total {
            meta = meta.total(total);
        }
        if let Some(total_pages) = self.total_pages() {
            meta = meta.total_pages(total_pages);
        }
        meta
    }
}

/// One slice of a limit/offset listing
#[derive(Debug, Clone, Serialize)]
pub struct EntrySlice {
    /// Entries in this slice
    pub items: Vec<Entry>,
    /// Requested slice size
    pub limit: u32,
    /// Offset this slice starts at
    pub offset: u32,
}

impl EntrySlice {
    /// Offset of the slice after this one
    pub fn next_offset(&self) -> u32 {
        self.offset + self.limit
    }

    /// Full-slice heuristic for whether more entries likely exist
    pub fn has_more(&self) -> bool {
        self.items.len() == self.limit as usize && self.limit > 0
    }
}

// ============================================================================
// Response Envelopes
// ============================================================================

/// Listing response: bare array or wrapped in `data`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListEnvelope {
    Wrapped(WrappedList),
    Bare(Vec<Entry>),
}

#[derive(Debug, Deserialize)]
pub(crate) struct WrappedList {
    #[serde(default)]
    data: Vec<Entry>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    count: Option<u64>,
    #[serde(default)]
    meta: Option<TotalMeta>,
    #[serde(default)]
    pagination: Option<TotalMeta>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TotalMeta {
    #[serde(default)]
    total: Option<u64>,
}

impl ListEnvelope {
    /// Normalize to items plus the first total the response reports
    pub(crate) fn into_parts(self) -> (Vec<Entry>, Option<u64>) {
        match self {
            Self::Bare(items) => (items, None),
            Self::Wrapped(wrapped) => {
                let total = wrapped
                    .total
                    .or_else(|| wrapped.meta.as_ref().and_then(|m| m.total))
                    .or_else(|| wrapped.pagination.as_ref().and_then(|m| m.total))
                    .or(wrapped.count);
                (wrapped.data, total)
            }
        }
    }
}

/// Single-entry response: bare entry or wrapped in `data`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum EntryEnvelope {
    Wrapped { data: Entry },
    Bare(Entry),
}

impl EntryEnvelope {
    pub(crate) fn into_entry(self) -> Entry {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(entry) => entry,
        }
    }
}
