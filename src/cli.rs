use clap::{ArgAction, Parser};
use std::time::Duration;

use crate::analyzer::FilterCriteria;
use crate::fetcher::{FetchConfig, DEFAULT_FEED_URL, DEFAULT_TIMEOUT_SECS};

const EXAMPLES: &str = "\
Example of use:
    poesearch --mods armour 1000, life 60 --slots 5 --links 3
    poesearch --type wand --mods critical strike chance 100
    poesearch --links 6
    poesearch --name the bringer of rain";

#[derive(Parser, Debug)]
#[command(
    name = "poesearch",
    version,
    about = "Quick and dirty script to search items in POE public tabs.",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// URL of the JSON export for public tabs
    #[arg(long, env = "POESEARCH_URL", default_value = DEFAULT_FEED_URL)]
    pub url: String,

    /// Name of the item, arbitrary string
    #[arg(long, num_args = 0.., value_name = "NAME")]
    pub name: Option<Vec<String>>,

    /// Mods for the item, strings separated by comma
    #[arg(long, num_args = 0.., value_name = "MODS")]
    pub mods: Option<Vec<String>>,

    /// League to search items
    #[arg(long)]
    pub league: Option<String>,

    /// Type of the item, character string
    #[arg(long = "type", num_args = 0.., value_name = "TYPE")]
    pub item_type: Option<Vec<String>>,

    /// Number of slots for the item, integer
    #[arg(long)]
    pub slots: Option<usize>,

    /// Number of links for the item, integer
    #[arg(long)]
    pub links: Option<usize>,

    /// Match name, type and league literally instead of as regular expressions
    #[arg(long)]
    pub literal: bool,

    /// Print matches as JSON
    #[arg(long)]
    pub json: bool,

    /// Request timeout in seconds
    #[arg(long, env = "POESEARCH_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// User-Agent header sent with the request
    #[arg(long, env = "POESEARCH_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// True when only the program name was given.
    pub fn is_bare_invocation<I, T>(args: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        args.into_iter().nth(1).is_none()
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            league: self.league.clone(),
            name: self.name.as_deref().map(join_words),
            item_type: self.item_type.as_deref().map(join_words),
            mods: self.mods.as_deref().map(|words| {
                join_words(words).split(',').map(str::to_string).collect()
            }),
            slots: self.slots,
            links: self.links,
            literal: self.literal,
        }
    }

    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            url: self.url.clone(),
            timeout: Duration::from_secs(self.timeout),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(FetchConfig::default_user_agent),
        }
    }

    /// Filter directive for `-v`/`-vv`, or `None` to defer to `RUST_LOG`.
    pub fn log_directive(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            _ => Some("debug"),
        }
    }
}

fn join_words(words: &[String]) -> String {
    words.join(" ")
}
