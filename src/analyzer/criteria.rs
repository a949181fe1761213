use regex::{Regex, RegexBuilder};

use crate::errors::{Result, SearchError};

/// User-facing filters. `None` disables the corresponding check.
///
/// `league`, `name` and `item_type` are case-insensitive regular expressions
/// searched anywhere in the field, so `.` or `(` act as metacharacters unless
/// `literal` is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub league: Option<String>,
    pub name: Option<String>,
    pub item_type: Option<String>,
    pub mods: Option<Vec<String>>,
    pub slots: Option<usize>,
    pub links: Option<usize>,
    pub literal: bool,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_league(mut self, league: &str) -> Self {
        self.league = Some(league.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_item_type(mut self, item_type: &str) -> Self {
        self.item_type = Some(item_type.to_string());
        self
    }

    /// Splits `mods` on commas, one requirement per piece.
    pub fn with_mods(mut self, mods: &str) -> Self {
        self.mods = Some(mods.split(',').map(str::to_string).collect());
        self
    }

    pub fn with_slots(mut self, slots: usize) -> Self {
        self.slots = Some(slots);
        self
    }

    pub fn with_links(mut self, links: usize) -> Self {
        self.links = Some(links);
        self
    }

    pub fn literal(mut self) -> Self {
        self.literal = true;
        self
    }
}

pub(crate) fn compile_pattern(
    field: &'static str,
    pattern: Option<&str>,
    literal: bool,
) -> Result<Option<Regex>> {
    let Some(pattern) = pattern else {
        return Ok(None);
    };

    let source = if literal {
        regex::escape(pattern)
    } else {
        pattern.to_string()
    };

    RegexBuilder::new(&source)
        .case_insensitive(true)
        .build()
        .map(Some)
        .map_err(|source| SearchError::Pattern {
            field,
            pattern: pattern.to_string(),
            source,
        })
}
