//! Content API client
//!
//! Wraps the HTTP client with the content API's listing, lookup, and
//! translation operations. Listing pagination is driven by the
//! strategies in [`crate::pagination`].

use super::query::{EntryQuery, LOCALE_PARAM, TRANSLATION_LOCALE_PARAM};
use super::types::{Entry, EntryEnvelope, EntryPage, EntrySlice, ListEnvelope};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RateLimiterConfig, RequestConfig};
use crate::pagination::{
    LimitOffsetPaginator, PageMeta, PageNumberPaginator, PaginationState, Paginator,
    StopCondition, LIMIT_PARAM, OFFSET_PARAM,
};
use futures::stream::{self, Stream};
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::debug;

/// Collection name used when the caller does not pick one
pub const DEFAULT_COLLECTION: &str = "articles";

/// Async client for a content delivery API
pub struct ContentClient {
    http: HttpClient,
    default_locale: String,
}

impl ContentClient {
    /// Create a client from a validated config
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = HttpClientConfig::builder()
            .base_url(&config.api_url)
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .max_retries(config.http.max_retries)
            .backoff(
                config.http.backoff,
                Duration::from_millis(config.http.initial_backoff_ms),
                Duration::from_secs(config.http.max_backoff_secs),
            )
            .rate_limit(RateLimiterConfig::new(
                config.http.requests_per_second,
                config.http.burst_size,
            ))
            .header("Accept", "application/json")
            .header("project-id", &config.project_id);

        if let Some(token) = &config.api_token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }

        Ok(Self {
            http: HttpClient::with_config(builder.build()),
            default_locale: config.default_locale,
        })
    }

    /// Create a client from the process environment
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Locale used when a query does not specify one
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// List entries with page-based pagination and filters
    pub async fn entries(&self, collection: &str, query: &EntryQuery) -> Result<EntryPage> {
        let mut request = RequestConfig::new();
        request.query = query.to_params(&self.default_locale);

        let envelope: ListEnvelope = self.http.get_json_with_config(collection, request).await?;
        let (items, total) = envelope.into_parts();
        debug!(
            "Fetched {} entries from '{}' (page {}, total {:?})",
            items.len(),
            collection,
            query.page,
            total
        );

        Ok(EntryPage {
            items,
            page: query.page,
            per_page: query.per_page,
            total,
        })
    }

    /// List entries with limit/offset pagination
    pub async fn entries_slice(
        &self,
        collection: &str,
        limit: u32,
        offset: u32,
        locale: Option<&str>,
    ) -> Result<EntrySlice> {
        let request = RequestConfig::new()
            .query(LIMIT_PARAM, limit.to_string())
            .query(OFFSET_PARAM, offset.to_string())
            .query(LOCALE_PARAM, self.locale_or_default(locale));

        let envelope: ListEnvelope = self.http.get_json_with_config(collection, request).await?;
        let (items, _) = envelope.into_parts();
        debug!(
            "Fetched {} entries from '{}' (offset {}, limit {})",
            items.len(),
            collection,
            offset,
            limit
        );

        Ok(EntrySlice {
            items,
            limit,
            offset,
        })
    }

    /// Fetch every entry of a collection in one request
    pub async fn all_entries(&self, collection: &str, locale: Option<&str>) -> Result<Vec<Entry>> {
        let request = RequestConfig::new().query(LOCALE_PARAM, self.locale_or_default(locale));

        let envelope: ListEnvelope = self.http.get_json_with_config(collection, request).await?;
        let (items, _) = envelope.into_parts();
        Ok(items)
    }

    /// Fetch a single entry by UUID
    pub async fn entry(&self, collection: &str, uuid: &str, locale: Option<&str>) -> Result<Entry> {
        let mut request = RequestConfig::new();
        if let Some(locale) = locale {
            request = request.query(LOCALE_PARAM, locale);
        }

        self.fetch_entry(collection, uuid, request).await
    }

    /// Fetch an entry translated into the target locale
    pub async fn translation(
        &self,
        collection: &str,
        uuid: &str,
        target_locale: &str,
    ) -> Result<Entry> {
        let request = RequestConfig::new().query(TRANSLATION_LOCALE_PARAM, target_locale);
        self.fetch_entry(collection, uuid, request).await
    }

    /// Distinct categories across a collection, sorted
    pub async fn categories(&self, collection: &str, locale: Option<&str>) -> Result<Vec<String>> {
        let entries = self.all_entries(collection, locale).await?;

        let categories: BTreeSet<String> = entries
            .into_iter()
            .filter_map(|entry| entry.fields.category)
            .collect();

        Ok(categories.into_iter().collect())
    }

    /// Stream successive pages of a listing until it is exhausted
    ///
    /// Starts at `query.page` and keeps requesting the next page the way
    /// an infinite-scroll or load-more UI would. Stops at the reported
    /// total page count, or on the first short page when the API reports
    /// no totals.
    pub fn stream_pages<'a>(
        &'a self,
        collection: &'a str,
        query: EntryQuery,
    ) -> impl Stream<Item = Result<EntryPage>> + 'a {
        let paginator = PageNumberPaginator::new(query.page, query.per_page)
            .with_stop_condition(StopCondition::TotalPages);
        let state = PaginationState::with_page(query.page);

        stream::try_unfold(
            (query, paginator, state, false),
            move |(query, paginator, mut state, finished)| async move {
                if finished {
                    return Ok(None);
                }

                let page_query = query.clone().page(state.page);
                let page = self.entries(collection, &page_query).await?;

                let next = paginator.process_page(&page.meta(), &mut state);
                Ok(Some((page, (query, paginator, state, next.is_done()))))
            },
        )
    }

    /// Stream successive slices of a listing until it is exhausted
    ///
    /// The limit/offset counterpart of [`stream_pages`](Self::stream_pages):
    /// starts at `from_offset` and advances by `limit` until a short
    /// slice comes back.
    pub fn stream_slices<'a>(
        &'a self,
        collection: &'a str,
        limit: u32,
        from_offset: u32,
        locale: Option<&'a str>,
    ) -> impl Stream<Item = Result<EntrySlice>> + 'a {
        let paginator = LimitOffsetPaginator::new(limit);
        let state = PaginationState::with_offset(from_offset);

        stream::try_unfold(
            (paginator, state, false),
            move |(paginator, mut state, finished)| async move {
                if finished {
                    return Ok(None);
                }

                let slice = self
                    .entries_slice(collection, limit, state.offset, locale)
                    .await?;

                let meta = PageMeta::with_records(slice.items.len());
                let next = paginator.process_page(&meta, &mut state);
                Ok(Some((slice, (paginator, state, next.is_done()))))
            },
        )
    }

    fn locale_or_default(&self, locale: Option<&str>) -> String {
        locale.unwrap_or(&self.default_locale).to_string()
    }

    async fn fetch_entry(
        &self,
        collection: &str,
        uuid: &str,
        request: RequestConfig,
    ) -> Result<Entry> {
        let path = format!("{collection}/{uuid}");

        let envelope: EntryEnvelope = self
            .http
            .get_json_with_config(&path, request)
            .await
            .map_err(|err| {
                if err.is_not_found() {
                    Error::not_found(collection, uuid)
                } else {
                    err
                }
            })?;

        Ok(envelope.into_entry())
    }
}

impl std::fmt::Debug for ContentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentClient")
            .field("default_locale", &self.default_locale)
            .finish_non_exhaustive()
    }
}
