//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server;
use crate::config::ClientConfig;
use crate::content::{ContentClient, Entry, EntryPage, EntryQuery, EntrySlice, SortSpec};
use crate::error::Result;
use crate::window::{page_window_with, PageLabel};
use futures::{pin_mut, StreamExt};
use serde_json::json;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the selected command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Pages {
                page,
                per_page,
                locale,
                category,
                search,
                sort,
                window,
            } => {
                let query = build_query(*page, *per_page, locale, category, search, sort)?;
                self.run_pages(&query, *window).await
            }
            Commands::Slice {
                limit,
                offset,
                locale,
            } => self.run_slice(*limit, *offset, locale.as_deref()).await,
            Commands::Feed {
                from_page,
                per_page,
                locale,
                max_pages,
            } => {
                let query = build_query(*from_page, *per_page, locale, &None, &None, &None)?;
                self.run_feed(query, *max_pages).await
            }
            Commands::Show { uuid, locale } => self.run_show(uuid, locale.as_deref()).await,
            Commands::Translate { uuid, to } => self.run_translate(uuid, to).await,
            Commands::Categories { locale } => self.run_categories(locale.as_deref()).await,
            Commands::Serve { port } => {
                let client = self.build_client()?;
                server::serve(client, *port).await
            }
        }
    }

    async fn run_pages(&self, query: &EntryQuery, window: u32) -> Result<()> {
        let client = self.build_client()?;
        let page = client.entries(&self.cli.collection, query).await?;

        match self.cli.format {
            OutputFormat::Json => {
                let payload = json!({
                    "data": page.items,
                    "pagination": {
                        "page": page.page,
                        "per_page": page.per_page,
                        "total": page.total,
                        "total_pages": page.total_pages(),
                        "has_more": page.has_more(),
                        "window": page.window_with(window),
                    },
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            OutputFormat::Pretty => render_page(&page, window, self.cli.verbose),
        }
        Ok(())
    }

    async fn run_slice(&self, limit: u32, offset: u32, locale: Option<&str>) -> Result<()> {
        let client = self.build_client()?;
        let slice = client
            .entries_slice(&self.cli.collection, limit, offset, locale)
            .await?;

        match self.cli.format {
            OutputFormat::Json => {
                let payload = json!({
                    "data": slice.items,
                    "limit": slice.limit,
                    "offset": slice.offset,
                    "next_offset": slice.next_offset(),
                    "has_more": slice.has_more(),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            OutputFormat::Pretty => render_slice(&slice),
        }
        Ok(())
    }

    async fn run_feed(&self, query: EntryQuery, max_pages: u32) -> Result<()> {
        let client = self.build_client()?;
        let stream = client.stream_pages(&self.cli.collection, query);
        pin_mut!(stream);

        let mut entries: Vec<Entry> = Vec::new();
        let mut pages_fetched = 0u32;

        while let Some(page) = stream.next().await {
            let page = page?;
            pages_fetched += 1;

            if self.cli.format == OutputFormat::Pretty {
                println!("Loaded page {} ({} entries)", page.page, page.items.len());
            }
            entries.extend(page.items);

            if max_pages > 0 && pages_fetched >= max_pages {
                break;
            }
        }

        match self.cli.format {
            OutputFormat::Json => {
                let payload = json!({
                    "data": entries,
                    "pages_fetched": pages_fetched,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            OutputFormat::Pretty => {
                println!();
                render_entries(&entries);
                println!("\n{} entries across {} pages", entries.len(), pages_fetched);
            }
        }
        Ok(())
    }

    async fn run_show(&self, uuid: &str, locale: Option<&str>) -> Result<()> {
        let client = self.build_client()?;
        match client.entry(&self.cli.collection, uuid, locale).await {
            Ok(entry) => self.emit_entry(&entry),
            Err(err) if err.is_not_found() => self.emit_not_found(uuid),
            Err(err) => Err(err),
        }
    }

    async fn run_translate(&self, uuid: &str, target_locale: &str) -> Result<()> {
        let client = self.build_client()?;
        match client
            .translation(&self.cli.collection, uuid, target_locale)
            .await
        {
            Ok(entry) => self.emit_entry(&entry),
            Err(err) if err.is_not_found() => self.emit_not_found(uuid),
            Err(err) => Err(err),
        }
    }

    async fn run_categories(&self, locale: Option<&str>) -> Result<()> {
        let client = self.build_client()?;
        let categories = client.categories(&self.cli.collection, locale).await?;

        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&categories)?),
            OutputFormat::Pretty => {
                if categories.is_empty() {
                    println!("No categories found.");
                } else {
                    for category in &categories {
                        println!("{category}");
                    }
                }
            }
        }
        Ok(())
    }

    fn emit_entry(&self, entry: &Entry) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(entry)?),
            OutputFormat::Pretty => render_entry_detail(entry),
        }
        Ok(())
    }

    fn emit_not_found(&self, uuid: &str) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "error": "not_found", "uuid": uuid }))?
            ),
            OutputFormat::Pretty => println!("Entry '{uuid}' not found."),
        }
        Ok(())
    }

    fn build_client(&self) -> Result<ContentClient> {
        let config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::from_env()?,
        };
        ContentClient::new(config)
    }
}

fn build_query(
    page: u32,
    per_page: u32,
    locale: &Option<String>,
    category: &Option<String>,
    search: &Option<String>,
    sort: &Option<String>,
) -> Result<EntryQuery> {
    let mut query = EntryQuery::new().page(page).per_page(per_page);
    if let Some(locale) = locale {
        query = query.locale(locale);
    }
    if let Some(category) = category {
        query = query.category(category);
    }
    if let Some(search) = search {
        query = query.search(search);
    }
    if let Some(sort) = sort {
        let spec: SortSpec = sort.parse()?;
        query = query.sort_spec(spec);
    }
    Ok(query)
}

// ============================================================================
// Pretty Rendering
// ============================================================================

fn render_page(page: &EntryPage, window: u32, verbose: bool) {
    render_entries(&page.items);
    println!();

    match page.total_pages() {
        Some(total_pages) => {
            println!("{}", pagination_bar(page.page, total_pages, window));
            match page.total {
                Some(total) => println!("Page {} of {total_pages} ({total} entries)", page.page),
                None => println!("Page {} of {total_pages}", page.page),
            }
        }
        None => {
            print!("Page {}", page.page);
            if page.has_more() {
                print!(" (more available)");
            }
            println!();
        }
    }

    if verbose {
        println!();
        println!("Current page:       {}", page.page);
        println!("Items per page:     {}", page.per_page);
        println!("Items on this page: {}", page.items.len());
        if let Some(total) = page.total {
            println!("Total items:        {total}");
        }
    }
}

fn render_slice(slice: &EntrySlice) {
    render_entries(&slice.items);
    println!();
    let end = slice.offset as usize + slice.items.len();
    println!("Entries {}..{} (limit {})", slice.offset, end, slice.limit);
    if slice.has_more() {
        println!("Next offset: {}", slice.next_offset());
    }
}

fn render_entries(items: &[Entry]) {
    if items.is_empty() {
        println!("No entries found.");
        return;
    }
    for entry in items {
        render_entry_line(entry);
    }
}

fn render_entry_line(entry: &Entry) {
    let mut line = format!("  {}", entry.fields.title);
    if let Some(category) = &entry.fields.category {
        line.push_str(&format!("  [{category}]"));
    }
    if let Some(date) = &entry.fields.published_date {
        line.push_str(&format!("  {date}"));
    }
    if let Some(views) = &entry.fields.views {
        line.push_str(&format!("  {views} views"));
    }
    println!("{line}");
    if !entry.fields.excerpt.is_empty() {
        println!("    {}", entry.fields.excerpt);
    }
}

fn render_entry_detail(entry: &Entry) {
    println!("{}", entry.fields.title);
    println!("uuid:   {}", entry.uuid);
    println!("locale: {}", entry.locale);
    if let Some(category) = &entry.fields.category {
        println!("category: {category}");
    }
    if let Some(date) = &entry.fields.published_date {
        println!("published: {date}");
    }
    if !entry.fields.content.is_empty() {
        println!("\n{}", entry.fields.content);
    }
}

/// Render a pagination bar like `< 1 ... 9 [10] 11 ... 20 >`
fn pagination_bar(current: u32, total_pages: u32, max_visible: u32) -> String {
    let window = page_window_with(current, total_pages, max_visible);
    let mut parts: Vec<String> = Vec::with_capacity(window.len() + 2);

    if current > 1 {
        parts.push("<".to_string());
    }
    for label in &window {
        match label {
            PageLabel::Page(n) if *n == current => parts.push(format!("[{n}]")),
            other => parts.push(other.to_string()),
        }
    }
    if current < total_pages {
        parts.push(">".to_string());
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_bar_highlights_current() {
        assert_eq!(
            pagination_bar(10, 20, 7),
            "< 1 ... 9 [10] 11 ... 20 >"
        );
    }

    #[test]
    fn test_pagination_bar_edges() {
        assert_eq!(pagination_bar(1, 3, 7), "[1] 2 3 >");
        assert_eq!(pagination_bar(3, 3, 7), "< 1 2 [3]");
        assert_eq!(pagination_bar(1, 1, 7), "[1]");
    }

    #[test]
    fn test_build_query_parses_sort() {
        let query = build_query(
            2,
            25,
            &Some("fr".to_string()),
            &Some("news".to_string()),
            &None,
            &Some("views:desc".to_string()),
        )
        .unwrap();

        assert_eq!(query.page, 2);
        assert_eq!(query.per_page, 25);
        assert_eq!(query.locale.as_deref(), Some("fr"));
        assert_eq!(query.category.as_deref(), Some("news"));
        assert_eq!(query.sort.as_ref().unwrap().as_param(), "views:DESC");
    }

    #[test]
    fn test_build_query_rejects_bad_sort() {
        let result = build_query(1, 10, &None, &None, &None, &Some(":desc".to_string()));
        assert!(result.is_err());
    }
}
