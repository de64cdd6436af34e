//! Status and priority enumerations for checklists and items.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a checklist. Each status owns one storage partition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListStatus {
    /// Checklist is in use
    #[default]
    Active,

    /// Checklist is kept as a reusable template
    Saved,

    /// Checklist has been completed and archived
    History,
}

impl ListStatus {
    /// All statuses in partition search order.
    pub const ALL: [ListStatus; 3] = [ListStatus::Active, ListStatus::Saved, ListStatus::History];

    /// Canonical string written into documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListStatus::Active => "active",
            ListStatus::Saved => "saved",
            ListStatus::History => "history",
        }
    }

    /// Whether this is the terminal status that carries a completion timestamp.
    pub fn is_history(&self) -> bool {
        matches!(self, ListStatus::History)
    }
}

impl FromStr for ListStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" | "lists" | "incomplete" => Ok(ListStatus::Active),
            "saved" => Ok(ListStatus::Saved),
            "history" | "completed" => Ok(ListStatus::History),
            _ => Err(format!("Invalid list status: {s}")),
        }
    }
}

/// Tri-state check status of an item.
///
/// `Checked` and `CheckedAlt` both count as completed. The raw value is kept
/// so documents round-trip without losing which one was recorded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum ItemStatus {
    #[default]
    Unchecked,
    Checked,
    CheckedAlt,
}

impl ItemStatus {
    pub fn is_complete(&self) -> bool {
        !matches!(self, ItemStatus::Unchecked)
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            ItemStatus::Unchecked => 0,
            ItemStatus::Checked => 1,
            ItemStatus::CheckedAlt => 2,
        }
    }
}

impl From<ItemStatus> for u8 {
    fn from(status: ItemStatus) -> Self {
        status.as_u8()
    }
}

impl TryFrom<u8> for ItemStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ItemStatus::Unchecked),
            1 => Ok(ItemStatus::Checked),
            2 => Ok(ItemStatus::CheckedAlt),
            _ => Err(format!("Invalid item status: {value}")),
        }
    }
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "unchecked" | "todo" => Ok(ItemStatus::Unchecked),
            "1" | "checked" | "done" => Ok(ItemStatus::Checked),
            "2" | "alt" | "checked-alt" => Ok(ItemStatus::CheckedAlt),
            _ => Err(format!("Invalid item status: {s}")),
        }
    }
}

/// Item priority.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Normal => "Normal",
            Priority::High => "High",
        }
    }

    /// Sort weight, higher is more urgent.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Normal => 2,
            Priority::High => 3,
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}
