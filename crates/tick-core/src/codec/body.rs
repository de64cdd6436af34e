//! Document body: heading, description and one checkbox line per item.
//!
//! The parser is a line-state machine:
//!
//! ```text
//!                 checkbox                 quoted line
//!  AwaitingItem ───────────▶ InItem ─────────────────▶ InComment ─┐
//!       ▲                      │  ▲                       │  ▲    │ quoted line
//!       │      other line      │  └──────── checkbox ─────┘  └────┘
//!       └──────────────────────┴──────── other line ──────────┘
//! ```
//!
//! Quoted lines only attach to the item directly above them; anywhere else
//! they are ignored together with any other prose.

use std::fmt;

use super::{HIGH_PRIORITY_MARKER, ITEMS_HEADING, LOW_PRIORITY_MARKER};
use crate::models::{Checklist, Item, ItemStatus, Priority};

fn checkbox(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::Unchecked => "- [ ]",
        ItemStatus::Checked => "- [x]",
        ItemStatus::CheckedAlt => "- [X]",
    }
}

fn priority_marker(priority: Priority) -> &'static str {
    match priority {
        Priority::High => HIGH_PRIORITY_MARKER,
        Priority::Low => LOW_PRIORITY_MARKER,
        Priority::Normal => "",
    }
}

pub(super) fn write(f: &mut fmt::Formatter<'_>, checklist: &Checklist) -> fmt::Result {
    writeln!(f, "# {}", checklist.name.replace('\n', " "))?;
    writeln!(f)?;

    if !checklist.description.trim().is_empty() {
        writeln!(f, "{}", checklist.description)?;
        writeln!(f)?;
    }

    writeln!(f, "{ITEMS_HEADING}")?;
    writeln!(f)?;

    if checklist.items.is_empty() {
        return writeln!(f, "{} ", checkbox(ItemStatus::Unchecked));
    }

    for item in &checklist.items {
        write!(
            f,
            "{} {}{}",
            checkbox(item.status),
            item.name,
            priority_marker(item.priority)
        )?;
        if let Some(comments) = &item.comments {
            for line in comments.split('\n') {
                write!(f, "\n  > {line}")?;
            }
        }
        writeln!(f)?;
    }
    Ok(())
}

/// Classification of a single body line.
#[derive(Debug, PartialEq)]
enum Line<'a> {
    /// `- [ ] name`, with an empty name for the placeholder line
    Checkbox {
        status: ItemStatus,
        text: &'a str,
    },
    /// `  > text`
    Quoted(&'a str),
    Other,
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if let Some(rest) = line.strip_prefix("- [") {
            let mut chars = rest.chars();
            let status = match chars.next() {
                Some(' ') => Some(ItemStatus::Unchecked),
                Some('x') => Some(ItemStatus::Checked),
                Some('X') => Some(ItemStatus::CheckedAlt),
                _ => None,
            };
            if let Some(status) = status
                && let Some(after) = chars.as_str().strip_prefix(']')
                && (after.is_empty() || after.starts_with(' '))
            {
                return Line::Checkbox {
                    status,
                    text: after.trim(),
                };
            }
            return Line::Other;
        }

        match line.trim_start().strip_prefix('>') {
            Some(quoted) => Line::Quoted(quoted.strip_prefix(' ').unwrap_or(quoted)),
            None => Line::Other,
        }
    }
}

/// Splits the priority marker off the checkbox text.
fn split_priority(text: &str) -> (&str, Priority) {
    if let Some(name) = text.strip_suffix(HIGH_PRIORITY_MARKER) {
        (name.trim_end(), Priority::High)
    } else if let Some(name) = text.strip_suffix(LOW_PRIORITY_MARKER) {
        (name.trim_end(), Priority::Low)
    } else {
        (text, Priority::Normal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingItem,
    InItem,
    InComment,
}

struct BodyParser {
    state: State,
    items: Vec<Item>,
}

impl BodyParser {
    fn new() -> Self {
        Self {
            state: State::AwaitingItem,
            items: Vec::new(),
        }
    }

    fn feed(&mut self, line: &str) {
        self.state = match (self.state, Line::classify(line)) {
            (_, Line::Checkbox { status, text }) => {
                let (name, priority) = split_priority(text);
                if name.is_empty() {
                    State::AwaitingItem
                } else {
                    self.items.push(Item::new(name).with_status(status).with_priority(priority));
                    State::InItem
                }
            }
            (State::InItem, Line::Quoted(text)) => {
                self.current().comments = Some(text.to_string());
                State::InComment
            }
            (State::InComment, Line::Quoted(text)) => {
                let comments = self.current().comments.get_or_insert_with(String::new);
                comments.push('\n');
                comments.push_str(text);
                State::InComment
            }
            (State::AwaitingItem, Line::Quoted(_)) | (_, Line::Other) => State::AwaitingItem,
        };
    }

    fn current(&mut self) -> &mut Item {
        // InItem and InComment are only entered right after pushing an item.
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    fn finish(self) -> Vec<Item> {
        self.items
    }
}

/// Phase two: extract items from the body lines.
///
/// Only lines after the last items heading are scanned, so a description
/// that happens to contain checkbox syntax never yields items. A body with
/// no heading is scanned in full.
pub(super) fn parse(lines: &[&str]) -> Vec<Item> {
    let start = lines
        .iter()
        .rposition(|line| line.trim_end() == ITEMS_HEADING)
        .map_or(0, |heading| heading + 1);

    let mut parser = BodyParser::new();
    for line in &lines[start..] {
        parser.feed(line);
    }
    parser.finish()
}
