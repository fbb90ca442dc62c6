//! Pagination module
//!
//! Supports: Page Number, Limit/Offset, None
//!
//! # Overview
//!
//! The pagination module provides a unified interface for walking a
//! paginated content listing. Each strategy produces the query
//! parameters for the next request and tracks when the listing is
//! exhausted, driven by per-response facts ([`PageMeta`]) instead of raw
//! response bodies.

mod strategies;
mod types;

pub use strategies::{LimitOffsetPaginator, NoPaginator, PageNumberPaginator};
pub use types::{
    NextPage, PageMeta, PaginationState, Paginator, StopCondition, StopResult, LIMIT_PARAM,
    OFFSET_PARAM, PAGE_PARAM, PAGE_SIZE_PARAM,
};

#[cfg(test)]
mod tests;
