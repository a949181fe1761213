use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "typeLine", default)]
    pub type_line: String,
    #[serde(default)]
    pub league: String,
    #[serde(rename = "explicitMods", default, skip_serializing_if = "Option::is_none")]
    pub explicit_mods: Option<Vec<String>>,
    #[serde(rename = "implicitMods", default, skip_serializing_if = "Option::is_none")]
    pub implicit_mods: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,
    // Missing means no sockets.
    #[serde(default)]
    pub sockets: Vec<Socket>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A displayed item property such as `Quality` or `Physical Damage`.
///
/// Each entry of `values` is a `(value, displayHint)` pair; the value is
/// usually a string like `"+20%"` or `"45-98"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(default)]
    pub values: Vec<(Value, i64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socket {
    pub group: i64,
}

impl Property {
    /// Text of the first value, or `None` when the property has no values.
    pub fn first_value(&self) -> Option<String> {
        self.values.first().map(|(value, _)| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }

    /// `"name value"` for the first value.
    pub fn as_mod_line(&self) -> Option<String> {
        self.first_value()
            .map(|value| format!("{} {}", self.name, value))
    }
}

impl Item {
    pub fn new(name: &str, type_line: &str, league: &str) -> Self {
        Self {
            name: name.to_string(),
            type_line: type_line.to_string(),
            league: league.to_string(),
            explicit_mods: None,
            implicit_mods: None,
            properties: None,
            sockets: Vec::new(),
            note: None,
        }
    }

    pub fn with_explicit_mods(mut self, mods: &[&str]) -> Self {
        self.explicit_mods = Some(mods.iter().map(|m| m.to_string()).collect());
        self
    }

    pub fn with_implicit_mods(mut self, mods: &[&str]) -> Self {
        self.implicit_mods = Some(mods.iter().map(|m| m.to_string()).collect());
        self
    }

    pub fn with_sockets(mut self, groups: &[i64]) -> Self {
        self.sockets = groups.iter().map(|&group| Socket { group }).collect();
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.get_or_insert_with(Vec::new).push(property);
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserializes_feed_shape() {
        let raw = serde_json::json!({
            "verified": false,
            "name": "<<set:MS>><<set:M>><<set:S>>Soul Taker",
            "typeLine": "Siege Axe",
            "league": "Standard",
            "explicitMods": ["+2 Mana gained for each Enemy hit by your Attacks"],
            "properties": [
                { "name": "Quality", "values": [["+20%", 1]], "displayMode": 0 },
                { "name": "One Handed Axe", "values": [], "displayMode": 0 }
            ],
            "sockets": [{ "group": 0, "attr": "S" }, { "group": 0, "attr": "D" }],
            "note": "~price 5 chaos"
        });

        let item: Item = serde_json::from_value(raw).unwrap();
        assert_eq!(item.type_line, "Siege Axe");
        assert!(item.implicit_mods.is_none());
        assert_eq!(item.sockets.len(), 2);
        assert_eq!(item.note.as_deref(), Some("~price 5 chaos"));

        let properties = item.properties.unwrap();
        assert_eq!(properties[0].as_mod_line().as_deref(), Some("Quality +20%"));
        assert_eq!(properties[1].as_mod_line(), None);
    }

    #[test]
    fn test_missing_sockets_means_no_sockets() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "name": "",
            "typeLine": "Chaos Orb",
            "league": "Standard"
        }))
        .unwrap();
        assert!(item.sockets.is_empty());
        assert!(item.explicit_mods.is_none());
    }

    #[test]
    fn test_non_string_property_value() {
        let property = Property {
            name: "Level".to_string(),
            values: vec![(serde_json::json!(20), 0)],
        };
        assert_eq!(property.as_mod_line().as_deref(), Some("Level 20"));
    }
}
