use serde::{Deserialize, Serialize};

use super::item::Item;

/// One page of the public stash tab river.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StashFeed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_change_id: Option<String>,
    pub stashes: Vec<StashTab>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StashTab {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "accountName", default)]
    pub account_name: Option<String>,
    /// Tab name as chosen by the owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stash: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl StashFeed {
    pub fn item_count(&self) -> usize {
        self.stashes.iter().map(|stash| stash.items.len()).sum()
    }
}

impl StashTab {
    pub fn new(account_name: &str, items: Vec<Item>) -> Self {
        Self {
            id: None,
            account_name: Some(account_name.to_string()),
            stash: None,
            items,
        }
    }

    pub fn seller(&self) -> &str {
        self.account_name.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_deserialization() {
        let feed: StashFeed = serde_json::from_str(
            r#"{
                "next_change_id": "2-3-4",
                "stashes": [
                    { "id": "abc", "accountName": "seller1", "stash": "~b/o 1 chaos",
                      "public": true, "items": [{ "name": "", "typeLine": "Wand", "league": "Standard" }] },
                    { "id": "def", "accountName": null, "items": [] }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(feed.next_change_id.as_deref(), Some("2-3-4"));
        assert_eq!(feed.stashes.len(), 2);
        assert_eq!(feed.item_count(), 1);
        assert_eq!(feed.stashes[0].seller(), "seller1");
        assert_eq!(feed.stashes[1].seller(), "");
    }

    #[test]
    fn test_feed_requires_stashes() {
        assert!(serde_json::from_str::<StashFeed>(r#"{ "next_change_id": "1" }"#).is_err());
    }
}
