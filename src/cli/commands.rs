//! CLI commands and argument parsing

use crate::content::DEFAULT_COLLECTION;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pagekit CLI
#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML); environment variables otherwise
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Collection to browse
    #[arg(short, long, global = true, default_value = DEFAULT_COLLECTION)]
    pub collection: String,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse a collection page by page
    Pages {
        /// Page to fetch (1-based)
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Entries per page
        #[arg(long, default_value = "10")]
        per_page: u32,

        /// Locale override
        #[arg(long)]
        locale: Option<String>,

        /// Filter by category
        #[arg(long)]
        category: Option<String>,

        /// Search in titles
        #[arg(long)]
        search: Option<String>,

        /// Sort spec (`field` or `field:direction`)
        #[arg(long)]
        sort: Option<String>,

        /// Width of the pagination bar
        #[arg(long, default_value = "7")]
        window: u32,
    },

    /// Fetch one slice with limit/offset pagination
    Slice {
        /// Entries per slice
        #[arg(short, long, default_value = "10")]
        limit: u32,

        /// Offset to start at
        #[arg(short, long, default_value = "0")]
        offset: u32,

        /// Locale override
        #[arg(long)]
        locale: Option<String>,
    },

    /// Append successive pages, load-more style
    Feed {
        /// Page to start from
        #[arg(long, default_value = "1")]
        from_page: u32,

        /// Entries per page
        #[arg(long, default_value = "10")]
        per_page: u32,

        /// Locale override
        #[arg(long)]
        locale: Option<String>,

        /// Maximum pages to fetch (0 = until exhausted)
        #[arg(long, default_value = "5")]
        max_pages: u32,
    },

    /// Fetch a single entry by UUID
    Show {
        /// Entry UUID
        uuid: String,

        /// Locale override
        #[arg(long)]
        locale: Option<String>,
    },

    /// Fetch an entry's translation
    Translate {
        /// Entry UUID
        uuid: String,

        /// Target locale
        #[arg(long)]
        to: String,
    },

    /// List distinct categories in a collection
    Categories {
        /// Locale override
        #[arg(long)]
        locale: Option<String>,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
