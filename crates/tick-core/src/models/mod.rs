//! Data models for checklists, items and categories.
//!
//! These are plain in-memory values. Their on-disk form is produced by
//! [`crate::codec`], and their terminal form by the `Display`
//! implementations in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use tick_core::models::{Checklist, Item, ItemStatus, ListStatus, Priority};
//! use jiff::Timestamp;
//!
//! let now = Timestamp::now();
//! let mut checklist = Checklist {
//!     id: "1700000000000_abc".to_string(),
//!     name: "Groceries".to_string(),
//!     description: String::new(),
//!     category: "Shopping".to_string(),
//!     created_at: now,
//!     target_at: None,
//!     completed_at: None,
//!     updated_at: now,
//!     status: ListStatus::Active,
//!     continual: false,
//!     favorite: false,
//!     items: vec![
//!         Item::new("Milk"),
//!         Item::new("Bread").with_priority(Priority::High),
//!     ],
//! };
//! checklist.items[0].status = ItemStatus::Checked;
//!
//! assert_eq!(checklist.total_count(), 2);
//! assert_eq!(checklist.completed_count(), 1);
//! ```

pub mod category;
pub mod checklist;
pub mod item;
pub mod requests;
pub mod status;
pub mod summary;


pub use category::{Category, UNCATEGORIZED};
pub use checklist::Checklist;
pub use item::Item;
pub use requests::{ChecklistUpdate, ItemUpdate, NewChecklist, NewItem};
pub use status::{ItemStatus, ListStatus, Priority};
pub use summary::{
    ChecklistSummary, CorruptDocument, EXPORT_VERSION, Export, IntegrityReport, Statistics, Target,
};
