//! Filtering, text search and ordering over decoded checklists and items.
//!
//! The query engine works on values that are already in memory. The store
//! decodes a partition, then hands the result to [`ChecklistQuery::apply`];
//! item queries run over one checklist's item sequence.

use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::models::{Checklist, Item, ItemStatus};

#[cfg(test)]
mod tests;

/// How free-text search input is matched against a checklist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Case-insensitive substring of name or description
    #[default]
    Default,
    /// Case-insensitive substring of name only
    Name,
    /// Case-insensitive exact category match
    Category,
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(SearchMode::Default),
            "name" => Ok(SearchMode::Name),
            "category" => Ok(SearchMode::Category),
            _ => Err(format!("Invalid search mode: {s}")),
        }
    }
}

/// Sort keys for checklists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistOrder {
    Name,
    Category,
    /// Creation timestamp, newest first unless a direction says otherwise
    #[default]
    Created,
    /// Target date; checklists without one always come last
    Target,
}

impl ChecklistOrder {
    /// Direction used when the caller does not ask for one.
    pub fn natural_direction(&self) -> SortDirection {
        match self {
            ChecklistOrder::Created => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }
}

impl FromStr for ChecklistOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(ChecklistOrder::Name),
            "category" => Ok(ChecklistOrder::Category),
            "created" | "creation_dt" => Ok(ChecklistOrder::Created),
            "target" | "target_dt" => Ok(ChecklistOrder::Target),
            _ => Err(format!("Invalid checklist order: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Filter and sort options for checklist listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistQuery {
    /// Keep only checklists whose favorite flag equals this value
    pub favorite: Option<bool>,
    /// Free-text search; blank text matches everything
    pub search: Option<String>,
    #[serde(default)]
    pub mode: SearchMode,
    /// Sort key; `None` leaves ordering to the caller
    pub order: Option<ChecklistOrder>,
    /// Overrides the key's natural direction
    pub direction: Option<SortDirection>,
}

impl ChecklistQuery {
    /// Query matching every checklist with no explicit ordering.
    pub fn all() -> Self {
        Self::default()
    }

    /// Free-text search in the given mode.
    pub fn search(text: impl Into<String>, mode: SearchMode) -> Self {
        Self {
            search: Some(text.into()),
            mode,
            ..Default::default()
        }
    }

    pub fn with_order(mut self, order: ChecklistOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = Some(favorite);
        self
    }

    /// Whether `checklist` passes the favorite and text filters.
    pub fn matches(&self, checklist: &Checklist) -> bool {
        if let Some(favorite) = self.favorite
            && checklist.favorite != favorite
        {
            return false;
        }

        let Some(needle) = self.search_text() else {
            return true;
        };

        match self.mode {
            SearchMode::Default => {
                contains_ignore_case(&checklist.name, &needle)
                    || contains_ignore_case(&checklist.description, &needle)
            }
            SearchMode::Name => contains_ignore_case(&checklist.name, &needle),
            SearchMode::Category => checklist.category.to_lowercase() == needle,
        }
    }

    /// Filters `checklists`, then sorts them when an order is set.
    pub fn apply(&self, checklists: Vec<Checklist>) -> Vec<Checklist> {
        let mut kept: Vec<Checklist> = checklists
            .into_iter()
            .filter(|checklist| self.matches(checklist))
            .collect();
        if let Some(order) = self.order {
            sort_checklists(&mut kept, order, self.direction);
        }
        kept
    }

    /// Lower-cased search text, or `None` when blank.
    fn search_text(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_lowercase)
    }
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Stable sort of `checklists` by `order`.
///
/// With [`ChecklistOrder::Target`], checklists lacking a target date are
/// placed after all dated ones in either direction.
pub fn sort_checklists(
    checklists: &mut [Checklist],
    order: ChecklistOrder,
    direction: Option<SortDirection>,
) {
    let direction = direction.unwrap_or_else(|| order.natural_direction());
    checklists.sort_by(|a, b| match order {
        ChecklistOrder::Name => direction.apply(a.name.cmp(&b.name)),
        ChecklistOrder::Category => direction.apply(a.category.cmp(&b.category)),
        ChecklistOrder::Created => direction.apply(a.created_at.cmp(&b.created_at)),
        ChecklistOrder::Target => match (a.target_at, b.target_at) {
            (Some(x), Some(y)) => direction.apply(x.cmp(&y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    });
}

/// Sort keys for items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemOrder {
    /// Stored order, the order item indices refer to
    #[default]
    Stored,
    Name,
    /// High before Normal before Low
    Priority,
    /// Unchecked first
    Status,
}

impl FromStr for ItemOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stored" | "none" => Ok(ItemOrder::Stored),
            "name" => Ok(ItemOrder::Name),
            "priority" => Ok(ItemOrder::Priority),
            "status" => Ok(ItemOrder::Status),
            _ => Err(format!("Invalid item order: {s}")),
        }
    }
}

/// An item paired with its position in the stored sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexedItem {
    pub index: usize,
    pub item: Item,
}

/// Filter and sort options for one checklist's items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemQuery {
    /// Keep only items with exactly this status
    pub status: Option<ItemStatus>,
    /// Case-insensitive substring of name or comments
    pub search: Option<String>,
    #[serde(default)]
    pub order: ItemOrder,
}

impl ItemQuery {
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(status) = self.status
            && item.status != status
        {
            return false;
        }

        match self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
        {
            Some(text) => {
                let needle = text.to_lowercase();
                contains_ignore_case(&item.name, &needle)
                    || item
                        .comments
                        .as_deref()
                        .is_some_and(|comments| contains_ignore_case(comments, &needle))
            }
            None => true,
        }
    }

    /// Filters and sorts `items`, keeping each one's stored index.
    pub fn apply(&self, items: &[Item]) -> Vec<IndexedItem> {
        let mut selected: Vec<IndexedItem> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.matches(item))
            .map(|(index, item)| IndexedItem {
                index,
                item: item.clone(),
            })
            .collect();

        match self.order {
            ItemOrder::Stored => {}
            ItemOrder::Name => selected.sort_by(|a, b| a.item.name.cmp(&b.item.name)),
            ItemOrder::Priority => {
                selected.sort_by(|a, b| b.item.priority.rank().cmp(&a.item.priority.rank()))
            }
            ItemOrder::Status => selected.sort_by(|a, b| a.item.status.cmp(&b.item.status)),
        }
        selected
    }
}
