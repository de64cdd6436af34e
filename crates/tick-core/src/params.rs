//! Parameter structures for tick operations.
//!
//! These structures carry raw caller input into the core without any
//! interface framework attached. The CLI builds them from its clap argument
//! types; the [`crate::tracker::Tracker`] validates them into the request
//! types of [`crate::models::requests`] before touching storage.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │ Model Requests  │
//! │  (clap derives) │───▶│ (serde derives) │───▶│  (validated)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    models::{ItemStatus, ListStatus, Priority},
    query::{ChecklistOrder, ChecklistQuery, ItemOrder, ItemQuery, SearchMode, SortDirection},
};

/// Generic parameters for operations requiring just a checklist ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the checklist to operate on
    pub id: String,
}

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Parameters for creating a new checklist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateChecklist {
    /// Name of the checklist (required)
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Category name; defaults to the uncategorized sentinel
    pub category: Option<String>,
    /// Optional due date
    pub target: Option<Timestamp>,
    /// Partition to create the checklist in
    #[serde(default)]
    pub status: ListStatus,
    /// Recurring-list marker
    #[serde(default)]
    pub continual: bool,
}

/// Parameters for a partial checklist update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateChecklist {
    /// Checklist ID to update (required)
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// New target date
    pub target: Option<Timestamp>,
    /// Remove the target date
    #[serde(default)]
    pub clear_target: bool,
    pub continual: Option<bool>,
    pub favorite: Option<bool>,
}

/// Parameters for moving a checklist to another partition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveChecklist {
    pub id: String,
    /// Target status
    pub status: ListStatus,
}

/// Parameters for listing one partition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListChecklists {
    /// Partition to list
    #[serde(default)]
    pub status: ListStatus,
    /// Only favorites (`true`) or only non-favorites (`false`)
    pub favorite: Option<bool>,
    /// Optional search text
    pub search: Option<String>,
    #[serde(default)]
    pub mode: SearchMode,
    /// Sort key, newest first by creation when omitted
    pub order: Option<ChecklistOrder>,
    pub direction: Option<SortDirection>,
}

impl From<&ListChecklists> for ChecklistQuery {
    fn from(params: &ListChecklists) -> Self {
        ChecklistQuery {
            favorite: params.favorite,
            search: params.search.clone(),
            mode: params.mode,
            order: Some(params.order.unwrap_or_default()),
            direction: params.direction,
        }
    }
}

/// Parameters for searching across all partitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchChecklists {
    /// Text to search for
    pub text: String,
    #[serde(default)]
    pub mode: SearchMode,
    /// Re-sort the combined result; partition order is kept when omitted
    pub order: Option<ChecklistOrder>,
    pub direction: Option<SortDirection>,
}

impl From<&SearchChecklists> for ChecklistQuery {
    fn from(params: &SearchChecklists) -> Self {
        ChecklistQuery {
            favorite: None,
            search: Some(params.text.clone()),
            mode: params.mode,
            order: params.order,
            direction: params.direction,
        }
    }
}

/// Parameters for appending an item to a checklist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddItem {
    pub checklist_id: String,
    /// Item name (required)
    pub name: String,
    pub comments: Option<String>,
    #[serde(default)]
    pub priority: Priority,
}

/// Parameters for a partial item update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItem {
    pub checklist_id: String,
    /// 0-based position of the item in stored order
    pub index: usize,
    pub name: Option<String>,
    /// New comments; an empty string clears them
    pub comments: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<ItemStatus>,
}

/// Address of one item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemRef {
    pub checklist_id: String,
    /// 0-based position of the item in stored order
    pub index: usize,
}

/// Parameters for listing a checklist's items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListItems {
    pub checklist_id: String,
    pub status: Option<ItemStatus>,
    pub search: Option<String>,
    #[serde(default)]
    pub order: ItemOrder,
}

impl From<&ListItems> for ItemQuery {
    fn from(params: &ListItems) -> Self {
        ItemQuery {
            status: params.status,
            search: params.search.clone(),
            order: params.order,
        }
    }
}

/// Parameters for creating or updating a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveCategory {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// Parameters for renaming a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameCategory {
    /// Current name
    pub name: String,
    pub new_name: String,
    /// Replaces the description when given
    pub description: Option<String>,
    /// Replaces the icon when given
    pub icon: Option<String>,
}

/// Parameters naming a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryName {
    pub name: String,
}
