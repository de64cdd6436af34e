//! Markdown document codec for checklists.
//!
//! One checklist is stored as one markdown document:
//!
//! ```text
//! ---
//! id: "1700000000000_k3j9x0a2b"
//! name: "Groceries"
//! description: ""
//! category: "Shopping"
//! creation_dt: "2026-10-18T09:00:00Z"
//! target_dt: ""
//! updated_dt: "2026-10-18T09:05:00Z"
//! status: "active"
//! continual: 0
//! favorite: 0
//! completion_dt: ""
//! ---
//!
//! # Groceries
//!
//! ## Items
//!
//! - [x] Milk
//! - [ ] Bread ⚡
//!   > whole grain
//! ```
//!
//! Decoding runs in two phases. [`split_document`] separates the metadata
//! block from the body by its delimiter lines; the metadata phase then parses
//! key/value pairs, and the body phase runs a small line-state machine over
//! the checkbox lines (see [`body`]). Only the metadata decides the scalar
//! fields; the body contributes the items alone.

use std::fmt;

use thiserror::Error;

use crate::models::Checklist;

mod body;
mod metadata;

pub use metadata::parse_timestamp;

#[cfg(test)]
mod tests;

/// Delimiter line that opens and closes the metadata block.
pub const DELIMITER: &str = "---";
/// Sub-heading that introduces the checkbox lines.
pub const ITEMS_HEADING: &str = "## Items";
/// Appended to the names of high-priority items.
pub const HIGH_PRIORITY_MARKER: &str = " ⚡";
/// Appended to the names of low-priority items.
pub const LOW_PRIORITY_MARKER: &str = " ⬇";

/// Reasons a document cannot be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("document does not start with a metadata block")]
    MissingMetadata,
    #[error("metadata block is not terminated")]
    UnterminatedMetadata,
    #[error("metadata line {line} is not a key/value pair")]
    InvalidLine { line: usize },
    #[error("missing required key '{0}'")]
    MissingKey(&'static str),
    #[error("invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Display adapter that renders a checklist as its document text.
pub struct Document<'a>(pub &'a Checklist);

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        metadata::write(f, self.0)?;
        writeln!(f)?;
        body::write(f, self.0)
    }
}

/// Encodes a checklist as document text.
pub fn encode(checklist: &Checklist) -> String {
    Document(checklist).to_string()
}

/// Decodes document text into a checklist.
///
/// Fails when the metadata block is absent or malformed; there is no partial
/// recovery. Item counts are derived from the decoded items.
pub fn decode(text: &str) -> Result<Checklist, ParseError> {
    let (metadata_lines, body_lines) = split_document(text)?;
    let mut checklist = metadata::parse(&metadata_lines)?;
    checklist.items = body::parse(&body_lines);
    Ok(checklist)
}

/// Phase one: split `text` into metadata lines and body lines.
pub fn split_document(text: &str) -> Result<(Vec<&str>, Vec<&str>), ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines();

    match lines.next() {
        Some(first) if first.trim_end() == DELIMITER => {}
        _ => return Err(ParseError::MissingMetadata),
    }

    let mut metadata = Vec::new();
    for line in lines.by_ref() {
        if line.trim_end() == DELIMITER {
            return Ok((metadata, lines.collect()));
        }
        metadata.push(line);
    }
    Err(ParseError::UnterminatedMetadata)
}
