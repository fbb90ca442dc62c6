//! Window generator
//!
//! The windowing rules, given a sanitized width `w` and `half = w / 2`:
//!
//! - everything fits (`total <= w`): every page, no ellipsis
//! - near the start (`current <= half + 1`): `1..=w-1`, ellipsis, last
//! - near the end (`current >= total - half`): `1`, ellipsis, `total-(w-2)..=total`
//! - middle: `1`, ellipsis, `current-1..=current+1`, ellipsis, last
//!
//! The branches are checked in that order; the first match wins, which
//! settles boundary cases where two shapes would otherwise both apply.

use super::types::{PageLabel, Window};

/// Default number of visible slots, end anchors included
pub const DEFAULT_MAX_VISIBLE: u32 = 7;

/// Smallest usable window width
const MIN_MAX_VISIBLE: u32 = 5;

/// Generate a page window with the default width
///
/// # Example
///
/// ```
/// use pagekit::window::page_window;
///
/// let window = page_window(10, 20);
/// let rendered: Vec<String> = window.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["1", "...", "9", "10", "11", "...", "20"]);
/// ```
pub fn page_window(current_page: u32, total_pages: u32) -> Window {
    page_window_with(current_page, total_pages, DEFAULT_MAX_VISIBLE)
}

/// Generate a page window with an explicit width
///
/// `current_page` is clamped into `[1, total_pages]` before the window
/// shape is chosen, so out-of-range values behave as the nearest valid
/// page. `max_visible` is sanitized: values below 5 are raised to 5 and
/// even values are rounded up to the next odd number, keeping the window
/// symmetric around the current page.
///
/// `total_pages == 0` yields an empty window. The function has no other
/// degenerate cases and never fails.
pub fn page_window_with(current_page: u32, total_pages: u32, max_visible: u32) -> Window {
    if total_pages == 0 {
        return Window::new();
    }

    let max_visible = sanitize_max_visible(max_visible);
    if total_pages <= max_visible {
        return (1..=total_pages).map(PageLabel::Page).collect();
    }

    let current = current_page.clamp(1, total_pages);
    let half = max_visible / 2;
    let mut labels = Window::with_capacity(max_visible as usize + 2);

    if current <= half + 1 {
        // Near the start: leading run, one jump to the last page
        labels.extend((1..max_visible).map(PageLabel::Page));
        labels.push(PageLabel::Ellipsis);
        labels.push(PageLabel::Page(total_pages));
    } else if current >= total_pages - half {
        // Near the end: first page, one jump into the trailing run
        labels.push(PageLabel::Page(1));
        labels.push(PageLabel::Ellipsis);
        labels.extend((total_pages - (max_visible - 2)..=total_pages).map(PageLabel::Page));
    } else {
        // Middle: both anchors, the current page and one neighbor per side
        labels.push(PageLabel::Page(1));
        labels.push(PageLabel::Ellipsis);
        labels.extend((current - 1..=current + 1).map(PageLabel::Page));
        labels.push(PageLabel::Ellipsis);
        labels.push(PageLabel::Page(total_pages));
    }

    labels
}

fn sanitize_max_visible(max_visible: u32) -> u32 {
    let width = max_visible.max(MIN_MAX_VISIBLE);
    if width % 2 == 0 {
        width + 1
    } else {
        width
    }
}
