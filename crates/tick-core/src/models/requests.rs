//! Validated request types for creating and updating models.
//!
//! Each request names exactly the fields an operation may touch, so the set
//! of updatable attributes is fixed at compile time. Interfaces build them
//! from [`crate::params`] through `TryFrom`, which performs validation.

use jiff::Timestamp;

use super::{Checklist, Item, ItemStatus, ListStatus, Priority, item::normalize_comments};
use crate::{
    StoreError,
    codec::{HIGH_PRIORITY_MARKER, LOW_PRIORITY_MARKER},
    params::{AddItem, CreateChecklist, UpdateChecklist, UpdateItem},
};

/// Validated fields for a new checklist.
#[derive(Debug, Clone, Default)]
pub struct NewChecklist {
    pub name: String,
    pub description: String,
    /// `None` selects [`super::UNCATEGORIZED`]
    pub category: Option<String>,
    pub target_at: Option<Timestamp>,
    pub status: ListStatus,
    pub continual: bool,
}

/// Partial update of a checklist's scalar fields.
///
/// Status is deliberately absent: it changes only through a move, which also
/// relocates the document.
#[derive(Debug, Clone, Default)]
pub struct ChecklistUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// `Some(None)` clears the target date
    pub target_at: Option<Option<Timestamp>>,
    pub continual: Option<bool>,
    pub favorite: Option<bool>,
}

impl ChecklistUpdate {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.target_at.is_none()
            && self.continual.is_none()
            && self.favorite.is_none()
    }

    /// Merges the provided fields into `checklist` and describes each change.
    pub fn apply(&self, checklist: &mut Checklist) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            checklist.name = name.clone();
            changes.push(format!("Renamed to '{name}'"));
        }
        if let Some(description) = &self.description {
            checklist.description = description.clone();
            changes.push("Updated description".to_string());
        }
        if let Some(category) = &self.category {
            checklist.category = category.clone();
            changes.push(format!("Moved to category '{category}'"));
        }
        if let Some(target_at) = self.target_at {
            checklist.target_at = target_at;
            changes.push(match target_at {
                Some(target) => format!("Set target date to {target}"),
                None => "Cleared target date".to_string(),
            });
        }
        if let Some(continual) = self.continual {
            checklist.continual = continual;
            changes.push(format!("Set continual to {continual}"));
        }
        if let Some(favorite) = self.favorite {
            checklist.favorite = favorite;
            changes.push(format!("Set favorite to {favorite}"));
        }
        changes
    }
}

/// Validated fields for an item appended to a checklist.
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    pub name: String,
    pub comments: Option<String>,
    pub priority: Priority,
}

impl NewItem {
    /// Checks the name and normalizes the comments. The store runs this on
    /// every item it is handed.
    pub fn validated(self) -> Result<Self, StoreError> {
        Ok(Self {
            name: item_name(&self.name)?,
            comments: self.comments.and_then(normalize_comments),
            priority: self.priority,
        })
    }

    pub fn into_item(self) -> Item {
        Item {
            name: self.name,
            status: ItemStatus::Unchecked,
            priority: self.priority,
            comments: self.comments.and_then(normalize_comments),
        }
    }
}

/// Partial update of one item.
#[derive(Debug, Clone, Default)]
pub struct ItemUpdate {
    pub name: Option<String>,
    /// An empty string clears the comments
    pub comments: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<ItemStatus>,
}

impl ItemUpdate {
    /// Shorthand for a status-only update.
    pub fn status(status: ItemStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Copy of this update with the new name, if any, checked and trimmed.
    pub fn validated(&self) -> Result<Self, StoreError> {
        Ok(Self {
            name: self.name.as_deref().map(item_name).transpose()?,
            ..self.clone()
        })
    }

    /// Merges the provided fields into `item` and describes each change.
    pub fn apply(&self, item: &mut Item) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            item.name = name.clone();
            changes.push(format!("Renamed item to '{name}'"));
        }
        if let Some(comments) = &self.comments {
            item.comments = normalize_comments(comments.clone());
            changes.push(if item.comments.is_some() {
                "Updated comments".to_string()
            } else {
                "Cleared comments".to_string()
            });
        }
        if let Some(priority) = self.priority {
            item.priority = priority;
            changes.push(format!("Set priority to {}", priority.as_str()));
        }
        if let Some(status) = self.status {
            item.status = status;
            changes.push(format!("Set status to {}", status.as_u8()));
        }
        changes
    }
}

/// Trims a name and rejects it when nothing is left.
fn required_name(field: &str, name: &str) -> Result<String, StoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Like [`required_name`], but an item name must also fit on one checkbox
/// line and must not end in a priority marker.
fn item_name(name: &str) -> Result<String, StoreError> {
    let name = required_name("name", name)?;
    if name.contains(['\n', '\r']) {
        return Err(StoreError::invalid_input("name").with_reason("must be a single line"));
    }
    if name.ends_with(HIGH_PRIORITY_MARKER) || name.ends_with(LOW_PRIORITY_MARKER) {
        return Err(StoreError::invalid_input("name")
            .with_reason("must not end with a priority marker"));
    }
    Ok(name)
}

/// Trims an optional category; blank means "not given".
fn optional_category(category: Option<&str>) -> Option<String> {
    category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
}

impl TryFrom<&CreateChecklist> for NewChecklist {
    type Error = StoreError;

    fn try_from(params: &CreateChecklist) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required_name("name", &params.name)?,
            description: params.description.clone().unwrap_or_default(),
            category: optional_category(params.category.as_deref()),
            target_at: params.target,
            status: params.status,
            continual: params.continual,
        })
    }
}

impl TryFrom<&UpdateChecklist> for ChecklistUpdate {
    type Error = StoreError;

    fn try_from(params: &UpdateChecklist) -> Result<Self, Self::Error> {
        if params.clear_target && params.target.is_some() {
            return Err(StoreError::invalid_input("target")
                .with_reason("cannot set and clear the target date at once"));
        }

        let name = params
            .name
            .as_deref()
            .map(|name| required_name("name", name))
            .transpose()?;
        let target_at = if params.clear_target {
            Some(None)
        } else {
            params.target.map(Some)
        };

        Ok(Self {
            name,
            description: params.description.clone(),
            category: optional_category(params.category.as_deref()),
            target_at,
            continual: params.continual,
            favorite: params.favorite,
        })
    }
}

impl TryFrom<&AddItem> for NewItem {
    type Error = StoreError;

    fn try_from(params: &AddItem) -> Result<Self, Self::Error> {
        Self {
            name: params.name.clone(),
            comments: params.comments.clone(),
            priority: params.priority,
        }
        .validated()
    }
}

impl TryFrom<&UpdateItem> for ItemUpdate {
    type Error = StoreError;

    fn try_from(params: &UpdateItem) -> Result<Self, Self::Error> {
        Self {
            name: params.name.clone(),
            comments: params.comments.clone(),
            priority: params.priority,
            status: params.status,
        }
        .validated()
    }
}
