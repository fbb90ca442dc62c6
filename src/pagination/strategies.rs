//! Pagination strategy implementations
//!
//! Each strategy handles one request-parameter family of the content API.

use super::types::{
    check_stop_condition, NextPage, PageMeta, PaginationState, Paginator, StopCondition,
    StopResult, LIMIT_PARAM, OFFSET_PARAM, PAGE_PARAM, PAGE_SIZE_PARAM,
};
use crate::types::StringMap;

// ============================================================================
// Page Number Pagination
// ============================================================================

/// Page number pagination (`?page=2&paginate=10`)
///
/// The traditional numbered-pages pattern: a 1-based page parameter plus
/// a page size.
#[derive(Debug, Clone)]
pub struct PageNumberPaginator {
    /// First page number
    pub start_page: u32,
    /// Records per page
    pub page_size: u32,
    /// Stop condition
    pub stop_condition: StopCondition,
}

impl PageNumberPaginator {
    /// Create a new page number paginator
    pub fn new(start_page: u32, page_size: u32) -> Self {
        Self {
            start_page,
            page_size,
            stop_condition: StopCondition::default(),
        }
    }

    /// Set stop condition
    #[must_use]
    pub fn with_stop_condition(mut self, condition: StopCondition) -> Self {
        self.stop_condition = condition;
        self
    }

    fn params_for(&self, page: u32) -> StringMap {
        let mut params = StringMap::new();
        params.insert(PAGE_PARAM.to_string(), page.to_string());
        params.insert(PAGE_SIZE_PARAM.to_string(), self.page_size.to_string());
        params
    }
}

impl Paginator for PageNumberPaginator {
    fn initial_params(&self, state: &PaginationState) -> StringMap {
        let page = if state.page == 0 {
            self.start_page
        } else {
            state.page
        };
        self.params_for(page)
    }

    fn process_page(&self, meta: &PageMeta, state: &mut PaginationState) -> NextPage {
        state.add_fetched(meta.records as u64);

        // A fresh state still sits before the first page; align it so the
        // stop checks and the advance below see the page just fetched.
        if state.page == 0 {
            state.page = self.start_page;
        }

        if check_stop_condition(self.stop_condition, meta, state) == StopResult::Stop {
            state.mark_done();
            return NextPage::Done;
        }

        // A short or empty page means the listing ran out
        if meta.records == 0 || meta.records < self.page_size as usize {
            state.mark_done();
            return NextPage::Done;
        }

        state.next_page();
        NextPage::with_params(self.params_for(state.page))
    }
}

// ============================================================================
// Limit/Offset Pagination
// ============================================================================

/// Limit/offset pagination (`?limit=10&offset=20`)
///
/// SQL-style slicing: a fixed window size advanced by its own length.
#[derive(Debug, Clone)]
pub struct LimitOffsetPaginator {
    /// Records per request
    pub limit: u32,
    /// Stop condition
    pub stop_condition: StopCondition,
}

impl LimitOffsetPaginator {
    /// Create a new limit/offset paginator
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            stop_condition: StopCondition::default(),
        }
    }

    /// Set stop condition
    #[must_use]
    pub fn with_stop_condition(mut self, condition: StopCondition) -> Self {
        self.stop_condition = condition;
        self
    }

    fn params_for(&self, offset: u32) -> StringMap {
        let mut params = StringMap::new();
        params.insert(OFFSET_PARAM.to_string(), offset.to_string());
        params.insert(LIMIT_PARAM.to_string(), self.limit.to_string());
        params
    }
}

impl Paginator for LimitOffsetPaginator {
    fn initial_params(&self, state: &PaginationState) -> StringMap {
        self.params_for(state.offset)
    }

    fn process_page(&self, meta: &PageMeta, state: &mut PaginationState) -> NextPage {
        state.add_fetched(meta.records as u64);

        if check_stop_condition(self.stop_condition, meta, state) == StopResult::Stop {
            state.mark_done();
            return NextPage::Done;
        }

        if meta.records == 0 || meta.records < self.limit as usize {
            state.mark_done();
            return NextPage::Done;
        }

        state.add_offset(self.limit);
        NextPage::with_params(self.params_for(state.offset))
    }
}

// ============================================================================
// No Pagination
// ============================================================================

/// No pagination - single request
#[derive(Debug, Clone, Default)]
pub struct NoPaginator;

impl Paginator for NoPaginator {
    fn initial_params(&self, _state: &PaginationState) -> StringMap {
        StringMap::new()
    }

    fn process_page(&self, meta: &PageMeta, state: &mut PaginationState) -> NextPage {
        state.add_fetched(meta.records as u64);
        state.mark_done();
        NextPage::Done
    }
}
