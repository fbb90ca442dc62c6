//! CLI module
//!
//! Command-line interface for browsing paginated content.
//!
//! # Commands
//!
//! - `pages` - Page-based listing with a pagination bar
//! - `slice` - Limit/offset listing
//! - `feed` - Append successive pages (load-more style)
//! - `show` - Fetch a single entry
//! - `translate` - Fetch an entry's translation
//! - `categories` - List distinct categories
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::serve;
