//! Page window generation
//!
//! Computes which page numbers a pagination control should display,
//! collapsing long runs of pages behind ellipsis markers.
//!
//! # Overview
//!
//! A pagination control rarely shows every page. For 20 pages with the
//! tenth selected, it shows a *window*: `1 ... 9 10 11 ... 20`. This module
//! produces that window as a sequence of [`PageLabel`] values which the
//! caller renders as links (numbers) or separators (ellipses).

mod generator;
mod types;

pub use generator::{page_window, page_window_with, DEFAULT_MAX_VISIBLE};
pub use types::{PageLabel, Window, ELLIPSIS};
