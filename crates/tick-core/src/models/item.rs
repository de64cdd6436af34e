//! Item model definition.

use serde::{Deserialize, Serialize};

use super::{ItemStatus, Priority};

/// One entry of a checklist. Items have no identifier of their own; their
/// position in the parent's sequence is the only address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Display name (never empty)
    pub name: String,

    /// Check status
    #[serde(default)]
    pub status: ItemStatus,

    /// Priority
    #[serde(default)]
    pub priority: Priority,

    /// Optional free text, may span several lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl Item {
    /// Creates an unchecked item with normal priority.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ItemStatus::Unchecked,
            priority: Priority::Normal,
            comments: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = normalize_comments(comments.into());
        self
    }

    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }
}

/// Blank comments are stored as no comments; line breaks become `\n`.
pub(crate) fn normalize_comments(comments: String) -> Option<String> {
    if comments.trim().is_empty() {
        return None;
    }
    if comments.contains('\r') {
        Some(comments.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Some(comments)
    }
}
