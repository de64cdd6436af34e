//! Checklist model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Item, ItemStatus, ListStatus};

/// A checklist together with its ordered items.
///
/// Completed and total counts are not stored; [`Checklist::completed_count`]
/// and [`Checklist::total_count`] derive them from `items` on every call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Checklist {
    /// Opaque identifier, unique across all partitions
    pub id: String,

    /// Display name of the checklist
    pub name: String,

    /// Free text description, possibly empty or multi-line
    #[serde(default)]
    pub description: String,

    /// Category name, a registry entry or [`super::UNCATEGORIZED`]
    pub category: String,

    /// Timestamp when the checklist was created (UTC)
    pub created_at: Timestamp,

    /// Optional due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_at: Option<Timestamp>,

    /// Set exactly while the checklist is in history
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,

    /// Timestamp of the last persisted change (UTC)
    pub updated_at: Timestamp,

    /// Status, which also names the owning partition
    #[serde(default)]
    pub status: ListStatus,

    /// Recurring-list marker; stored, not interpreted
    #[serde(default)]
    pub continual: bool,

    #[serde(default)]
    pub favorite: bool,

    /// Items in stored order
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Checklist {
    /// Number of items whose status counts as complete.
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_complete()).count()
    }

    /// Number of items.
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// True when the checklist has items and every one of them is complete.
    pub fn is_done(&self) -> bool {
        !self.items.is_empty() && self.completed_count() == self.total_count()
    }

    /// Whether the target date lies strictly before `now`.
    pub fn is_overdue(&self, now: Timestamp) -> bool {
        self.target_at.is_some_and(|target| target < now)
    }

    /// Applies a status change and keeps the completion timestamp in step:
    /// it is set on entering history and cleared on leaving it.
    pub fn set_status(&mut self, status: ListStatus, now: Timestamp) {
        self.status = status;
        if status.is_history() {
            self.completed_at = Some(now);
        } else {
            self.completed_at = None;
        }
    }

    /// Resets every item to unchecked.
    pub fn uncheck_all(&mut self) {
        for item in &mut self.items {
            item.status = ItemStatus::Unchecked;
        }
    }
}
