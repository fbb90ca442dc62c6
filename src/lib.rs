// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # pagekit
//!
//! A Rust-native toolkit for browsing paginated, localized content APIs.
//!
//! ## Features
//!
//! - **Page Windows**: Compute the page numbers a pagination control
//!   should display, with ellipsis truncation
//! - **Pagination Strategies**: Page number and limit/offset parameter
//!   families with explicit state and stop conditions
//! - **Content Client**: Async listing, lookup, translation, and
//!   category queries against a headless-CMS-style delivery API
//! - **CLI + Serve Mode**: Browse collections from the terminal or
//!   expose listings as a small JSON API
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagekit::{ClientConfig, ContentClient, EntryQuery, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ContentClient::new(
//!         ClientConfig::new("https://cms.example.com/api", "my-project"),
//!     )?;
//!
//!     let page = client
//!         .entries("articles", &EntryQuery::new().page(2).per_page(10))
//!         .await?;
//!
//!     for label in page.window().unwrap_or_default() {
//!         print!("{label} ");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        CLI / Serve                          │
//! │   pages    slice    feed    show    translate    categories │
//! └─────────────────────────────┬───────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴──────────────┬────────────────┐
//! │    Window    │          Content            │      HTTP      │
//! ├──────────────┼─────────────────────────────┼────────────────┤
//! │ PageLabel    │ EntryQuery    Paginate:     │ GET            │
//! │ page_window  │ EntryPage      PageNumber   │ Retry          │
//! │ Ellipsis     │ Entry          LimitOffset  │ Rate Limit     │
//! │              │ Translations   None         │ Backoff        │
//! └──────────────┴─────────────────────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for pagekit
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Page window generation for pagination controls
pub mod window;

/// Pagination strategies
pub mod pagination;

/// HTTP client with retry and rate limiting
pub mod http;

/// Content API client
pub mod content;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use content::{ContentClient, Entry, EntryPage, EntryQuery};
pub use error::{Error, Result};
pub use window::{page_window, page_window_with, PageLabel, Window};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
