use serde::{Serialize, Serializer};
use std::fmt;

use super::item::Item;

/// Total socket count and size of the largest link group, shown as `5S3L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketSummary {
    pub sockets: usize,
    pub max_linked: usize,
}

impl fmt::Display for SocketSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}S{}L", self.sockets, self.max_linked)
    }
}

impl Serialize for SocketSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An item that passed every filter, borrowed from the feed it came from.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'a> {
    pub seller: &'a str,
    pub item: &'a Item,
    #[serde(rename = "socketSummary")]
    pub socket_summary: Option<SocketSummary>,
    #[serde(rename = "combinedMods")]
    pub combined_mods: Vec<String>,
}
