//! Async facade over the checklist store.
//!
//! The [`Tracker`] is what interfaces talk to. It owns one
//! [`ChecklistStore`] behind a mutex and runs every store call on the
//! blocking thread pool, so operations are serialized and file I/O never
//! blocks the async runtime.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │ ChecklistStore  │
//! │ (*_handlers)    │───▶│ (*_ops)         │───▶│   (via store/)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!  display wrappers       params → requests       markdown documents
//! ```
//!
//! - [`builder`]: resolves the data directory and opens the store
//! - `checklist_ops` / `item_ops` / `category_ops`: one async method per
//!   store operation, taking [`crate::params`] values
//! - `checklist_handlers` / `item_handlers`: the same operations returning
//!   [`crate::display`] wrappers for terminal output
//!
//! # Examples
//!
//! ```rust,no_run
//! use tick_core::{TrackerBuilder, params::{AddItem, CreateChecklist}};
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
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::{sync::Mutex, task};

use crate::{
    error::{Result, ResultExt},
    store::ChecklistStore,
};

pub mod builder;

mod category_ops;
mod checklist_handlers;
mod checklist_ops;
mod item_handlers;
mod item_ops;


pub use builder::TrackerBuilder;

/// Main interface for managing checklists, items and categories.
#[derive(Clone)]
pub struct Tracker {
    store: Arc<Mutex<ChecklistStore>>,
    data_dir: PathBuf,
}

impl Tracker {
    pub(crate) fn new(store: ChecklistStore, data_dir: PathBuf) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            data_dir,
        }
    }

    /// Root directory holding the partitions and the category file.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Runs `op` against the store on the blocking pool.
    pub(crate) async fn with_store<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut ChecklistStore) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        task::spawn_blocking(move || {
            let mut store = store.blocking_lock();
            op(&mut store)
        })
        .await
        .with_context("Task join error")?
    }
}
