//! Core library for the tick checklist manager.
//!
//! Checklists are kept as markdown documents, one per checklist, in three
//! partitions (active, saved, history). Categories live in a JSON side-file.
//!
//! - [`codec`]: checklist ⇄ markdown document
//! - [`store`]: partitions, ids, moves and the category registry
//! - [`query`]: filtering and ordering of checklists and items
//! - [`tracker`]: async facade used by interfaces
//! - [`display`]: markdown rendering of models and operation results
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tick_core::{
//!     TrackerBuilder,
//!     models::{ItemStatus, ListStatus},
//!     params::{AddItem, CreateChecklist, ItemRef, MoveChecklist},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_data_dir(Some("/tmp/tick-data"))
//!     .build()
//!     .await?;
//!
//! let checklist = tracker
//!     .create_checklist(&CreateChecklist {
//!         name: "Groceries".to_string(),
//!         category: Some("Shopping".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! tracker
//!     .add_item(&AddItem {
//!         checklist_id: checklist.id.clone(),
//!         name: "Milk".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let item = ItemRef { checklist_id: checklist.id.clone(), index: 0 };
//! tracker.set_item_status(&item, ItemStatus::Checked).await?;
//!
//! let moved = tracker
//!     .move_checklist_result(&MoveChecklist {
//!         id: checklist.id,
//!         status: ListStatus::History,
//!     })
//!     .await?;
//! println!("{moved}");
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod query;
pub mod store;
pub mod tracker;

// Re-export commonly used types
pub use display::{
    Categories, ChecklistSummaries, CreateResult, DeleteResult, IndexedItems, LocalDateTime,
    MoveResult, OperationStatus, Targets, UpdateResult,
};
pub use error::{Result, StoreError};
pub use models::{
    Category, Checklist, ChecklistSummary, Item, ItemStatus, ListStatus, Priority, Statistics,
    Target,
};
pub use query::{ChecklistOrder, ChecklistQuery, IndexedItem, ItemOrder, ItemQuery, SearchMode};
pub use store::{ChecklistStore, FsStorage, Storage};
pub use tracker::{Tracker, TrackerBuilder};
