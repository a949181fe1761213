use crate::models::Item;

/// Explicit mods, then implicit mods, then one `"name value"` line per
/// property that has a value.
pub fn combined_mods(item: &Item) -> Vec<String> {
    let mut mods = Vec::new();

    for field in [&item.explicit_mods, &item.implicit_mods] {
        if let Some(values) = field {
            mods.extend(values.iter().cloned());
        }
    }

    if let Some(properties) = &item.properties {
        mods.extend(properties.iter().filter_map(|p| p.as_mod_line()));
    }

    mods
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    /// Candidate must hold a number strictly greater than this.
    Threshold(f64),
    /// Lowercased; candidate must contain it.
    Text(String),
}

/// One comma-separated piece of `--mods`. Every token has to match the same
/// candidate mod line.
#[derive(Debug, Clone, PartialEq)]
pub struct ModRequirement {
    source: String,
    tokens: Vec<Token>,
}

impl ModRequirement {
    pub fn parse(raw: &str) -> Self {
        let tokens = word_tokens(raw)
            .map(|word| {
                let threshold = is_plain_integer(word)
                    .then(|| word.parse::<f64>().ok())
                    .flatten();
                match threshold {
                    Some(value) => Token::Threshold(value),
                    None => Token::Text(word.to_lowercase()),
                }
            })
            .collect();

        Self {
            source: raw.trim().to_string(),
            tokens,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn matches_line(&self, candidate: &str) -> bool {
        let lowered = candidate.to_lowercase();
        let mut numbers: Option<Vec<f64>> = None;

        self.tokens.iter().all(|token| match token {
            Token::Text(word) => lowered.contains(word.as_str()),
            Token::Threshold(minimum) => numbers
                .get_or_insert_with(|| numbers_in(candidate))
                .iter()
                .any(|found| minimum < found),
        })
    }

    /// At least one of `mods` matches every token. An empty requirement
    /// still needs one line to match against.
    pub fn satisfied_by(&self, mods: &[String]) -> bool {
        mods.iter().any(|line| self.matches_line(line))
    }
}

/// All requirements from `--mods`; each may be met by a different line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModQuery {
    requirements: Vec<ModRequirement>,
}

impl ModQuery {
    pub fn new<S: AsRef<str>>(requirements: &[S]) -> Self {
        Self {
            requirements: requirements
                .iter()
                .map(|raw| ModRequirement::parse(raw.as_ref()))
                .collect(),
        }
    }

    pub fn requirements(&self) -> &[ModRequirement] {
        &self.requirements
    }

    pub fn satisfied_by(&self, mods: &[String]) -> bool {
        self.requirements.iter().all(|req| req.satisfied_by(mods))
    }
}

fn word_tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '\''))
        .filter(|word| !word.is_empty())
}

fn is_plain_integer(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

// Runs of ASCII digits; "1.5" gives 1 and 5.
fn numbers_in(text: &str) -> Vec<f64> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .filter_map(|run| run.parse::<f64>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Property;

    fn lines(mods: &[&str]) -> Vec<String> {
        mods.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_combined_mods_order() {
        let item = Item::new("", "Vaal Regalia", "Standard")
            .with_property(Property {
                name: "Energy Shield".to_string(),
                values: vec![(serde_json::json!("405"), 1)],
            })
            .with_property(Property {
                name: "Body Armours".to_string(),
                values: vec![],
            })
            .with_implicit_mods(&["+15 to Intelligence"])
            .with_explicit_mods(&["+80 to maximum Life", "+40% to Cold Resistance"]);

        assert_eq!(
            combined_mods(&item),
            lines(&[
                "+80 to maximum Life",
                "+40% to Cold Resistance",
                "+15 to Intelligence",
                "Energy Shield 405",
            ])
        );
    }

    #[test]
    fn test_threshold_is_strictly_greater() {
        let requirement = ModRequirement::parse("life 60");
        assert!(requirement.matches_line("+61 to maximum Life"));
        assert!(!requirement.matches_line("+60 to maximum Life"));
        assert!(!requirement.matches_line("+59 to maximum Life"));
    }

    #[test]
    fn test_every_token_must_match_one_line() {
        let requirement = ModRequirement::parse("critical strike chance 100");
        assert!(requirement.matches_line("120% increased Critical Strike Chance"));
        assert!(!requirement.matches_line("100% increased Critical Strike Chance"));
        assert!(!requirement.matches_line("120% increased Critical Strike Multiplier"));

        // Tokens split across lines do not satisfy it.
        let mods = lines(&["120% increased Critical Strike Multiplier", "+1% Chance to Block"]);
        assert!(!requirement.satisfied_by(&mods));
    }

    #[test]
    fn test_query_requirements_use_separate_lines() {
        let query = ModQuery::new(&["armour 1000", " life 60"]);
        assert_eq!(query.requirements()[1].source(), "life 60");

        let both = lines(&["Armour 1200", "+75 to maximum Life"]);
        assert!(query.satisfied_by(&both));

        let one = lines(&["Armour 1200", "+55 to maximum Life"]);
        assert!(!query.satisfied_by(&one));
    }

    #[test]
    fn test_text_tokens_are_case_insensitive_substrings() {
        let requirement = ModRequirement::parse("COLD res");
        assert!(requirement.matches_line("+40% to Cold Resistance"));
        assert!(!requirement.matches_line("+40% to Fire Resistance"));
    }

    #[test]
    fn test_apostrophes_stay_in_tokens() {
        let requirement = ModRequirement::parse("Ascendant's");
        assert!(requirement.matches_line("Socketed Gems are Supported by Ascendant's Blessing"));
        assert!(!requirement.matches_line("Socketed Gems are Supported by Ascendant Blessing"));
    }

    #[test]
    fn test_decimal_numbers_split_into_runs() {
        assert_eq!(numbers_in("1.5 Life Regenerated per second"), vec![1.0, 5.0]);
        assert!(ModRequirement::parse("regenerated 4").matches_line("1.5 Life Regenerated per second"));
        assert!(!ModRequirement::parse("regenerated 5").matches_line("1.5 Life Regenerated per second"));
    }

    #[test]
    fn test_empty_requirement_needs_some_line() {
        let requirement = ModRequirement::parse("  ");
        assert!(requirement.is_empty());
        assert!(requirement.satisfied_by(&lines(&["anything"])));
        assert!(!requirement.satisfied_by(&[]));
    }

    #[test]
    fn test_empty_query_accepts_everything() {
        let query = ModQuery::new::<&str>(&[]);
        assert!(query.satisfied_by(&[]));
    }
}
