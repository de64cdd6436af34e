//! Summary, statistics and target types.

use std::path::PathBuf;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Category, Checklist, ListStatus};

/// Summary information about a checklist with item statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub status: ListStatus,
    pub created_at: Timestamp,
    pub target_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub favorite: bool,
    pub continual: bool,
    /// Total number of items
    pub total_items: usize,
    /// Number of checked items
    pub completed_items: usize,
}

impl From<&Checklist> for ChecklistSummary {
    fn from(checklist: &Checklist) -> Self {
        Self {
            id: checklist.id.clone(),
            name: checklist.name.clone(),
            description: checklist.description.clone(),
            category: checklist.category.clone(),
            status: checklist.status,
            created_at: checklist.created_at,
            target_at: checklist.target_at,
            completed_at: checklist.completed_at,
            favorite: checklist.favorite,
            continual: checklist.continual,
            total_items: checklist.total_count(),
            completed_items: checklist.completed_count(),
        }
    }
}

/// Aggregate counts of checklists per partition and of items overall.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Statistics {
    pub active_lists: usize,
    pub saved_lists: usize,
    pub history_lists: usize,
    pub total_items: usize,
    pub completed_items: usize,
}

impl Statistics {
    /// Folds one checklist into the counts.
    pub fn record(&mut self, checklist: &Checklist) {
        match checklist.status {
            ListStatus::Active => self.active_lists += 1,
            ListStatus::Saved => self.saved_lists += 1,
            ListStatus::History => self.history_lists += 1,
        }
        self.total_items += checklist.total_count();
        self.completed_items += checklist.completed_count();
    }
}

/// A checklist with a due date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Target {
    pub id: String,
    pub name: String,
    pub status: ListStatus,
    pub target_at: Timestamp,
    /// True when the due date is already past
    pub overdue: bool,
}

impl Target {
    /// Builds a target entry for `checklist`, or `None` if it has no due date.
    pub fn from_checklist(checklist: &Checklist, now: Timestamp) -> Option<Self> {
        let target_at = checklist.target_at?;
        Some(Self {
            id: checklist.id.clone(),
            name: checklist.name.clone(),
            status: checklist.status,
            target_at,
            overdue: target_at < now,
        })
    }
}

/// A document that could not be decoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorruptDocument {
    /// Partition the document sits in
    pub status: ListStatus,
    pub path: PathBuf,
    pub reason: String,
}

/// Result of scanning every partition and the category registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntegrityReport {
    /// Number of documents inspected
    pub checked: usize,
    pub corrupt: Vec<CorruptDocument>,
    /// True when the registry holds no categories at all
    pub registry_empty: bool,
}

impl IntegrityReport {
    pub fn is_healthy(&self) -> bool {
        self.corrupt.is_empty() && !self.registry_empty
    }
}

/// Format version written into exports.
pub const EXPORT_VERSION: u32 = 1;

/// Full snapshot of the store, serialized as JSON by the export operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Export {
    pub version: u32,
    pub exported_at: Timestamp,
    pub checklists: Vec<Checklist>,
    pub categories: Vec<Category>,
}
