use regex::Regex;
use tracing::trace;

use super::criteria::{compile_pattern, FilterCriteria};
use super::modifier::{combined_mods, ModQuery};
use super::sockets::LinkHistogram;
use crate::errors::Result;
use crate::models::{Item, MatchResult, StashFeed};

/// Compiled form of a [`FilterCriteria`].
#[derive(Debug, Clone)]
pub struct ItemMatcher {
    league: Option<Regex>,
    name: Option<Regex>,
    item_type: Option<Regex>,
    mods: Option<ModQuery>,
    slots: Option<usize>,
    links: Option<usize>,
}

impl ItemMatcher {
    pub fn new(criteria: &FilterCriteria) -> Result<Self> {
        let literal = criteria.literal;

        Ok(Self {
            league: compile_pattern("league", criteria.league.as_deref(), literal)?,
            name: compile_pattern("name", criteria.name.as_deref(), literal)?,
            item_type: compile_pattern("type", criteria.item_type.as_deref(), literal)?,
            mods: criteria.mods.as_deref().map(ModQuery::new),
            slots: criteria.slots,
            links: criteria.links,
        })
    }

    /// Runs every filter against `item`, cheapest first.
    pub fn evaluate<'a>(&self, seller: &'a str, item: &'a Item) -> Option<MatchResult<'a>> {
        if !pattern_allows(&self.league, &item.league)
            || !pattern_allows(&self.name, &item.name)
            || !pattern_allows(&self.item_type, &item.type_line)
        {
            return None;
        }

        let mods = combined_mods(item);
        if let Some(query) = &self.mods {
            if !query.satisfied_by(&mods) {
                return None;
            }
        }

        let histogram = LinkHistogram::from_sockets(&item.sockets);
        if self.slots.is_some_and(|slots| histogram.total() < slots) {
            return None;
        }
        if self.links.is_some_and(|links| histogram.max_linked() < links) {
            return None;
        }

        Some(MatchResult {
            seller,
            item,
            socket_summary: histogram.summary(),
            combined_mods: mods,
        })
    }

    /// Matches in stash order, then item order within each stash.
    pub fn matches<'a>(&'a self, feed: &'a StashFeed) -> impl Iterator<Item = MatchResult<'a>> + 'a {
        feed.stashes.iter().flat_map(move |stash| {
            let seller = stash.seller();
            stash.items.iter().filter_map(move |item| {
                let found = self.evaluate(seller, item);
                if found.is_some() {
                    trace!(seller = %seller, type_line = %item.type_line, "item matched");
                }
                found
            })
        })
    }
}

fn pattern_allows(pattern: &Option<Regex>, field: &str) -> bool {
    pattern.as_ref().map_or(true, |regex| regex.is_match(field))
}
