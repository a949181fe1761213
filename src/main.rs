use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use poe_stash_search::cli::Cli;
use poe_stash_search::report::PROGRESS_LINE;
use poe_stash_search::{find_items, ItemMatcher, OutputFormat, StashApiClient};

fn init_logging(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if Cli::is_bare_invocation(std::env::args_os()) {
        Cli::command().print_help()?;
        return Ok(());
    }

    let cli = Cli::parse();
    init_logging(cli.log_directive());

    // Pattern errors surface here, before anything is printed or fetched.
    let matcher = ItemMatcher::new(&cli.criteria())?;
    let client = StashApiClient::new(cli.fetch_config())?;

    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };
    if format == OutputFormat::Text {
        println!("{PROGRESS_LINE}");
    }

    let output = find_items(&client, &matcher, format)
        .await
        .with_context(|| format!("failed to search {}", client.url()))?;

    print!("{output}");
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
