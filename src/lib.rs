//! Search the Path of Exile public stash tab feed for items by name, type,
//! league, modifiers and sockets.

pub mod analyzer;
pub mod cli;
pub mod errors;
pub mod fetcher;
pub mod models;
pub mod report;

pub use analyzer::{FilterCriteria, ItemMatcher};
pub use errors::{Result, SearchError};
pub use fetcher::{FetchConfig, StashApiClient};
pub use models::{MatchResult, StashFeed};

/// How a finished search is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Fetches the feed once and renders every match.
pub async fn find_items(
    client: &StashApiClient,
    matcher: &ItemMatcher,
    format: OutputFormat,
) -> Result<String> {
    let feed = client.fetch_feed().await?;

    let matches: Vec<MatchResult<'_>> = matcher.matches(&feed).collect();
    tracing::info!(
        scanned = feed.item_count(),
        matched = matches.len(),
        "search finished"
    );

    match format {
        OutputFormat::Text => Ok(report::format_report(&matches)),
        OutputFormat::Json => report::format_json(&matches),
    }
}
