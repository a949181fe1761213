//! Console output for a finished search.

use std::fmt::Write;

use crate::errors::Result;
use crate::models::MatchResult;

pub const PROGRESS_LINE: &str = "Looking for items matching query...";
const SEPARATOR: &str = "---------------------";
const LIST_WIDTH: usize = 80;

/// Names are only shown when longer than this many characters.
const NAME_MIN_CHARS: usize = 27;
/// Characters dropped from the front of a shown name.
const NAME_SKIP_CHARS: usize = 28;

pub fn format_report(matches: &[MatchResult<'_>]) -> String {
    let mut output = format!("\n\n{} items found.\n", matches.len());

    for found in matches {
        output.push_str(SEPARATOR);
        output.push('\n');
        let _ = writeln!(output, "seller : {}", found.seller);
        if let Some(name) = display_name(&found.item.name) {
            let _ = writeln!(output, "name   : {name}");
        }
        let _ = writeln!(output, "type   : {}", found.item.type_line);
        if let Some(summary) = found.socket_summary {
            let _ = writeln!(output, "sockets: {summary}");
        }
        if let Some(note) = &found.item.note {
            let _ = writeln!(output, "note   : {note}");
        }
        output.push_str("details:\n");
        output.push_str(&pretty_list(&found.combined_mods));
        output.push('\n');
    }

    output
}

pub fn format_json(matches: &[MatchResult<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(matches)?)
}

// Counted in chars, not bytes.
fn display_name(name: &str) -> Option<String> {
    (name.chars().count() > NAME_MIN_CHARS)
        .then(|| name.chars().skip(NAME_SKIP_CHARS).collect())
}

/// List of quoted strings on one line when it fits, otherwise one per line.
pub fn pretty_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| quote(item)).collect();
    let one_line = format!("[{}]", quoted.join(", "));

    if one_line.chars().count() < LIST_WIDTH {
        one_line
    } else {
        format!("[{}]", quoted.join(",\n "))
    }
}

fn quote(text: &str) -> String {
    let delimiter = if text.contains('\'') && !text.contains('"') { '"' } else { '\'' };
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push(delimiter);

    for c in text.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == delimiter => {
                quoted.push('\\');
                quoted.push(c);
            }
            c => quoted.push(c),
        }
    }

    quoted.push(delimiter);
    quoted
}
