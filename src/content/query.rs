//! Entry query builder
//!
//! Collects listing options and serializes them into the content API's
//! query parameters. Filters use the API's bracket syntax
//! (`where[category]=news`, `where[title][like]=%rust%`) and the sort
//! direction is emitted uppercase.

use crate::error::Error;
use crate::pagination::{PAGE_PARAM, PAGE_SIZE_PARAM};
use crate::types::SortDirection;
use std::fmt;
use std::str::FromStr;

/// Query parameter selecting the locale of returned entries
pub(crate) const LOCALE_PARAM: &str = "locale";
/// Query parameter requesting a translation of an entry
pub(crate) const TRANSLATION_LOCALE_PARAM: &str = "translation_locale";
/// Query parameter carrying the sort spec
pub(crate) const SORT_PARAM: &str = "sort";

/// Default page size for page-based listings
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Options for a page-based entry listing
#[derive(Debug, Clone)]
pub struct EntryQuery {
    /// 1-based page to fetch
    pub page: u32,
    /// Records per page
    pub per_page: u32,
    /// Locale override; the client default applies when unset
    pub locale: Option<String>,
    /// Category equality filter
    pub category: Option<String>,
    /// Title substring search
    pub search: Option<String>,
    /// Sort order
    pub sort: Option<SortSpec>,
}

impl Default for EntryQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            locale: None,
            category: None,
            search: None,
            sort: None,
        }
    }
}

impl EntryQuery {
    /// Create a query with default paging
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page to fetch
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size
    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the locale
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Filter by category
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Search in entry titles
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Sort by a field
    #[must_use]
    pub fn sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec::new(field, direction));
        self
    }

    /// Sort by a parsed spec
    #[must_use]
    pub fn sort_spec(mut self, spec: SortSpec) -> Self {
        self.sort = Some(spec);
        self
    }

    /// Serialize into query parameters
    pub(crate) fn to_params(&self, default_locale: &str) -> Vec<(String, String)> {
        let mut params = vec![
            (PAGE_SIZE_PARAM.to_string(), self.per_page.to_string()),
            (PAGE_PARAM.to_string(), self.page.to_string()),
            (
                LOCALE_PARAM.to_string(),
                self.locale
                    .clone()
                    .unwrap_or_else(|| default_locale.to_string()),
            ),
        ];

        if let Some(category) = &self.category {
            params.push(("where[category]".to_string(), category.clone()));
        }

        if let Some(term) = &self.search {
            params.push(("where[title][like]".to_string(), format!("%{term}%")));
        }

        if let Some(sort) = &self.sort {
            params.push((SORT_PARAM.to_string(), sort.as_param()));
        }

        params
    }
}

// ============================================================================
// Sort Spec
// ============================================================================

/// A `field:direction` sort order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Field to sort by
    pub field: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    /// Create a new sort spec
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Wire form with the direction uppercased
    pub fn as_param(&self) -> String {
        format!("{}:{}", self.field, self.direction.as_param())
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction)
    }
}

impl FromStr for SortSpec {
    type Err = Error;

    /// Parse `field` or `field:direction` (direction defaults to asc)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            None if s.is_empty() => Err(Error::invalid_value("sort", "empty sort spec")),
            None => Ok(Self::new(s, SortDirection::Asc)),
            Some((field, _)) if field.is_empty() => {
                Err(Error::invalid_value("sort", "empty sort field"))
            }
            Some((field, direction)) => Ok(Self::new(field, direction.parse()?)),
        }
    }
}
