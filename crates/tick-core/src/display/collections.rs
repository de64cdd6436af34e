//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper prints its elements one after another, or a fixed message
//! when empty.

use std::{fmt, ops::Index};

use crate::{
    models::{Category, ChecklistSummary, Target},
    query::IndexedItem,
};

/// Implements the slice-like accessors and `Display` for a newtype over
/// `Vec<$item>`.
macro_rules! collection {
    ($name:ident, $item:ty, $empty:literal) => {
        impl $name {
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    return writeln!(f, $empty);
                }
                for element in &self.0 {
                    write!(f, "{element}")?;
                }
                Ok(())
            }
        }
    };
}

/// Checklist summaries, as printed by `list ls` and `list search`.
///
/// # Examples
///
/// ```rust
/// use tick_core::{
///     display::ChecklistSummaries,
///     models::{ChecklistSummary, ListStatus},
/// };
/// use jiff::Timestamp;
///
/// let summary = ChecklistSummary {
///     id: "1700000000000_abc".to_string(),
///     name: "Groceries".to_string(),
///     description: String::new(),
///     category: "Shopping".to_string(),
///     status: ListStatus::Active,
///     created_at: Timestamp::now(),
///     target_at: None,
///     completed_at: None,
///     favorite: false,
///     continual: false,
///     total_items: 2,
///     completed_items: 1,
/// };
///
/// let output = ChecklistSummaries(vec![summary]).to_string();
/// assert!(output.contains("Groceries"));
/// assert_eq!(ChecklistSummaries(vec![]).to_string(), "No checklists found.\n");
/// ```
pub struct ChecklistSummaries(pub Vec<ChecklistSummary>);

collection!(ChecklistSummaries, ChecklistSummary, "No checklists found.");

/// Items of one checklist, each with its stored index.
pub struct IndexedItems(pub Vec<IndexedItem>);

collection!(IndexedItems, IndexedItem, "No items found.");

pub struct Categories(pub Vec<Category>);

collection!(Categories, Category, "No categories found.");

/// Checklists with a target date.
pub struct Targets(pub Vec<Target>);

collection!(Targets, Target, "No targets found.");
