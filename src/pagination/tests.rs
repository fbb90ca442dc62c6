//! Tests for pagination module

use super::*;

// ============================================================================
// NextPage Tests
// ============================================================================

#[test]
fn test_next_page_with_params() {
    let mut params = crate::types::StringMap::new();
    params.insert("page".to_string(), "2".to_string());

    let next = NextPage::with_params(params);
    assert!(next.is_continue());
    assert!(!next.is_done());

    if let NextPage::Continue { query_params } = next {
        assert_eq!(query_params.get("page"), Some(&"2".to_string()));
    } else {
        panic!("Expected Continue");
    }
}

#[test]
fn test_next_page_done() {
    let next = NextPage::Done;
    assert!(next.is_done());
    assert!(!next.is_continue());
}

// ============================================================================
// PageMeta Tests
// ============================================================================

#[test]
fn test_page_meta_builders() {
    let meta = PageMeta::with_records(10).total(95).total_pages(10);
    assert_eq!(meta.records, 10);
    assert_eq!(meta.total, Some(95));
    assert_eq!(meta.total_pages, Some(10));

    let bare = PageMeta::with_records(3);
    assert!(bare.total.is_none());
    assert!(bare.total_pages.is_none());
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_pagination_state_default() {
    let state = PaginationState::new();
    assert_eq!(state.page, 0);
    assert_eq!(state.offset, 0);
    assert_eq!(state.total_fetched, 0);
    assert!(!state.done);
}

#[test]
fn test_pagination_state_with_page() {
    let state = PaginationState::with_page(5);
    assert_eq!(state.page, 5);
}

#[test]
fn test_pagination_state_with_offset() {
    let state = PaginationState::with_offset(30);
    assert_eq!(state.offset, 30);
    assert_eq!(state.page, 0);
}

#[test]
fn test_pagination_state_mutations() {
    let mut state = PaginationState::new();

    state.next_page();
    assert_eq!(state.page, 1);

    state.add_offset(50);
    assert_eq!(state.offset, 50);

    state.add_fetched(100);
    assert_eq!(state.total_fetched, 100);

    state.mark_done();
    assert!(state.done);
}

// ============================================================================
// StopCondition Tests
// ============================================================================

#[test]
fn test_stop_condition_empty_page() {
    let state = PaginationState::new();

    let result = types::check_stop_condition(StopCondition::EmptyPage, &PageMeta::default(), &state);
    assert_eq!(result, StopResult::Stop);

    let result =
        types::check_stop_condition(StopCondition::EmptyPage, &PageMeta::with_records(10), &state);
    assert_eq!(result, StopResult::Continue);
    assert!(result.should_continue());
}

#[test]
fn test_stop_condition_total_count() {
    let meta = PageMeta::with_records(50).total(100);

    // Not at total yet
    let mut state = PaginationState::new();
    state.add_fetched(50);
    let result = types::check_stop_condition(StopCondition::TotalCount, &meta, &state);
    assert_eq!(result, StopResult::Continue);

    // At total
    state.add_fetched(50);
    let result = types::check_stop_condition(StopCondition::TotalCount, &meta, &state);
    assert_eq!(result, StopResult::Stop);
    assert!(result.should_stop());
}

#[test]
fn test_stop_condition_total_count_unreported() {
    // No reported total means the condition never trips
    let meta = PageMeta::with_records(50);
    let mut state = PaginationState::new();
    state.add_fetched(500);

    let result = types::check_stop_condition(StopCondition::TotalCount, &meta, &state);
    assert_eq!(result, StopResult::Continue);
}

#[test]
fn test_stop_condition_total_pages() {
    let meta = PageMeta::with_records(10).total_pages(5);

    // Not at last page
    let mut state = PaginationState::new();
    state.page = 3;
    let result = types::check_stop_condition(StopCondition::TotalPages, &meta, &state);
    assert_eq!(result, StopResult::Continue);

    // At last page
    state.page = 5;
    let result = types::check_stop_condition(StopCondition::TotalPages, &meta, &state);
    assert_eq!(result, StopResult::Stop);
}

// ============================================================================
// Page Number Paginator Tests
// ============================================================================

#[test]
fn test_page_number_paginator_initial_params() {
    let paginator = PageNumberPaginator::new(1, 25);
    let state = PaginationState::new();

    let params = paginator.initial_params(&state);
    assert_eq!(params.get("page"), Some(&"1".to_string()));
    assert_eq!(params.get("paginate"), Some(&"25".to_string()));
}

#[test]
fn test_page_number_paginator_resumes_from_state() {
    let paginator = PageNumberPaginator::new(1, 25);
    let state = PaginationState::with_page(4);

    let params = paginator.initial_params(&state);
    assert_eq!(params.get("page"), Some(&"4".to_string()));
}

#[test]
fn test_page_number_paginator_advances() {
    let paginator = PageNumberPaginator::new(1, 25);
    let mut state = PaginationState::new();

    // Full page: request the next one
    let next = paginator.process_page(&PageMeta::with_records(25), &mut state);

    assert!(next.is_continue());
    assert_eq!(state.page, 2);
    assert_eq!(state.total_fetched, 25);

    if let NextPage::Continue { query_params } = next {
        assert_eq!(query_params.get("page"), Some(&"2".to_string()));
        assert_eq!(query_params.get("paginate"), Some(&"25".to_string()));
    }
}

#[test]
fn test_page_number_paginator_stops_on_partial() {
    let paginator = PageNumberPaginator::new(1, 25);
    let mut state = PaginationState::new();

    let next = paginator.process_page(&PageMeta::with_records(15), &mut state);

    assert!(next.is_done());
    assert!(state.done);
}

#[test]
fn test_page_number_paginator_stops_on_empty_page() {
    // An empty response ends the walk even when the stop condition is
    // something else and the page size is degenerate.
    let paginator = PageNumberPaginator::new(1, 0).with_stop_condition(StopCondition::TotalPages);
    let mut state = PaginationState::new();

    let next = paginator.process_page(&PageMeta::with_records(0), &mut state);
    assert!(next.is_done());
}

#[test]
fn test_page_number_paginator_stops_on_total_pages() {
    let paginator =
        PageNumberPaginator::new(1, 10).with_stop_condition(StopCondition::TotalPages);
    let meta = PageMeta::with_records(10).total_pages(3);
    let mut state = PaginationState::new();

    // Pages 1 and 2 continue, page 3 is the last
    assert!(paginator.process_page(&meta, &mut state).is_continue());
    assert!(paginator.process_page(&meta, &mut state).is_continue());
    assert!(paginator.process_page(&meta, &mut state).is_done());
    assert_eq!(state.total_fetched, 30);
}

// ============================================================================
// Limit/Offset Paginator Tests
// ============================================================================

#[test]
fn test_limit_offset_paginator_initial_params() {
    let paginator = LimitOffsetPaginator::new(50);
    let state = PaginationState::new();

    let params = paginator.initial_params(&state);
    assert_eq!(params.get("offset"), Some(&"0".to_string()));
    assert_eq!(params.get("limit"), Some(&"50".to_string()));
}

#[test]
fn test_limit_offset_paginator_resumes_from_state() {
    let paginator = LimitOffsetPaginator::new(10);
    let state = PaginationState::with_offset(40);

    let params = paginator.initial_params(&state);
    assert_eq!(params.get("offset"), Some(&"40".to_string()));
    assert_eq!(params.get("limit"), Some(&"10".to_string()));
}

#[test]
fn test_limit_offset_paginator_advances() {
    let paginator = LimitOffsetPaginator::new(50);
    let mut state = PaginationState::new();

    // Full slice
    let next = paginator.process_page(&PageMeta::with_records(50), &mut state);

    assert!(next.is_continue());
    assert_eq!(state.offset, 50);
    assert_eq!(state.total_fetched, 50);

    if let NextPage::Continue { query_params } = next {
        assert_eq!(query_params.get("offset"), Some(&"50".to_string()));
        assert_eq!(query_params.get("limit"), Some(&"50".to_string()));
    }
}

#[test]
fn test_limit_offset_paginator_stops_on_partial() {
    let paginator = LimitOffsetPaginator::new(50);
    let mut state = PaginationState::new();

    let next = paginator.process_page(&PageMeta::with_records(25), &mut state);

    assert!(next.is_done());
    assert!(state.done);
}

#[test]
fn test_limit_offset_paginator_stops_on_total_count() {
    let paginator = LimitOffsetPaginator::new(50).with_stop_condition(StopCondition::TotalCount);
    let meta = PageMeta::with_records(50).total(75);
    let mut state = PaginationState::new();

    // First slice
    let next = paginator.process_page(&meta, &mut state);
    assert!(next.is_continue());

    // Second slice crosses the reported total
    let next = paginator.process_page(&meta, &mut state);
    assert!(next.is_done());
}

// ============================================================================
// No Paginator Tests
// ============================================================================

#[test]
fn test_no_paginator_single_request() {
    let paginator = NoPaginator;
    let mut state = PaginationState::new();

    assert!(paginator.initial_params(&state).is_empty());

    let next = paginator.process_page(&PageMeta::with_records(200), &mut state);
    assert!(next.is_done());
    assert_eq!(state.total_fetched, 200);
}
