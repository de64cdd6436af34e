//! Checklist store: one markdown document per checklist, spread over three
//! partitions.
//!
//! ```text
//! <root>/
//! ├── lists/      active checklists
//! ├── saved/      saved templates
//! ├── history/    completed checklists
//! └── categories/
//!     └── categories.json
//! ```
//!
//! A checklist id is unique across all partitions and its document is named
//! `<id>.md`. Every operation decodes the document, mutates the in-memory
//! value and re-encodes it in full.
//!
//! - [`storage`]: the [`Storage`] primitives and the file system backend
//! - [`categories`]: the category registry side-file
//! - `checklist_ops`: create, read, update, move and delete of checklists,
//!   plus listing, statistics and export
//! - `item_ops`: index-addressed item mutations

use std::collections::{HashMap, hash_map::Entry};

use jiff::Timestamp;
use log::{info, warn};
use rand::Rng;

use crate::{
    codec,
    error::{Result, StoreError},
    models::{Checklist, ListStatus},
};

pub mod categories;
pub mod storage;

mod checklist_ops;
mod item_ops;

#[cfg(test)]
mod tests;

pub use categories::CategoryRegistry;
pub use storage::{FsStorage, Storage};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;
const DOCUMENT_EXTENSION: &str = ".md";

/// Collection (directory) name of a partition.
pub fn partition_dir(status: ListStatus) -> &'static str {
    match status {
        ListStatus::Active => "lists",
        ListStatus::Saved => "saved",
        ListStatus::History => "history",
    }
}

/// Document name for `id`, or `None` if the id cannot name a document.
fn document_name(id: &str) -> Option<String> {
    let valid = !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\', '\0']);
    valid.then(|| format!("{id}{DOCUMENT_EXTENSION}"))
}

fn generate_id(now: Timestamp) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
        .collect();
    format!("{}_{suffix}", now.as_millisecond())
}

/// Where one copy of a checklist was found during reconciliation.
struct StoredCopy {
    status: ListStatus,
    name: String,
    updated_at: Timestamp,
}

/// Persistent checklist store over a [`Storage`] backend.
pub struct ChecklistStore<S: Storage = FsStorage> {
    storage: S,
    categories: CategoryRegistry,
}

impl ChecklistStore<FsStorage> {
    /// Opens (creating if needed) a store rooted at `root`.
    pub fn open_dir<P: AsRef<std::path::Path>>(root: P) -> Result<Self> {
        Self::open(FsStorage::new(root))
    }
}

impl<S: Storage> ChecklistStore<S> {
    /// Prepares the partitions and the category registry, then reconciles
    /// duplicate ids left behind by an interrupted move.
    pub fn open(storage: S) -> Result<Self> {
        for status in ListStatus::ALL {
            storage.ensure(partition_dir(status))?;
        }
        let categories = CategoryRegistry::load(&storage)?;
        let store = Self {
            storage,
            categories,
        };
        let removed = store.reconcile()?;
        if removed > 0 {
            info!("Removed {removed} stale checklist document(s)");
        }
        Ok(store)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Deletes stale copies of checklists present in more than one
    /// partition. The copy with the newer `updated_at` wins; on a tie the
    /// later partition in move order wins.
    fn reconcile(&self) -> Result<usize> {
        let mut seen: HashMap<String, StoredCopy> = HashMap::new();
        let mut removed = 0;

        for status in ListStatus::ALL {
            for name in self.storage.list(partition_dir(status))? {
                let checklist = match self.load(status, &name) {
                    Ok(checklist) => checklist,
                    Err(StoreError::MalformedDocument { .. }) => continue,
                    Err(e) => return Err(e),
                };
                let current = StoredCopy {
                    status,
                    name,
                    updated_at: checklist.updated_at,
                };
                let stale = match seen.entry(checklist.id.clone()) {
                    Entry::Vacant(slot) => {
                        slot.insert(current);
                        continue;
                    }
                    Entry::Occupied(mut slot) => {
                        if current.updated_at >= slot.get().updated_at {
                            slot.insert(current)
                        } else {
                            current
                        }
                    }
                };

                let collection = partition_dir(stale.status);
                warn!(
                    "Discarding stale copy of checklist {} at {}",
                    checklist.id,
                    self.storage.locate(collection, &stale.name).display()
                );
                self.storage.delete(collection, &stale.name)?;
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Reads and decodes one document.
    ///
    /// The partition decides the status; the completion timestamp is brought
    /// in line with it.
    fn load(&self, status: ListStatus, name: &str) -> Result<Checklist> {
        let collection = partition_dir(status);
        let text = self.storage.read(collection, name)?;
        let mut checklist = codec::decode(&text).map_err(|e| {
            StoreError::malformed(self.storage.locate(collection, name)).with_reason(e.to_string())
        })?;

        if checklist.status != status {
            warn!(
                "Checklist {} is stored in '{collection}' but marked '{}'",
                checklist.id,
                checklist.status.as_str()
            );
            checklist.status = status;
        }
        if status.is_history() {
            if checklist.completed_at.is_none() {
                checklist.completed_at = Some(checklist.updated_at);
            }
        } else {
            checklist.completed_at = None;
        }
        Ok(checklist)
    }

    /// Loads every readable checklist of one partition, skipping malformed
    /// documents.
    fn load_partition(&self, status: ListStatus) -> Result<Vec<Checklist>> {
        let mut checklists = Vec::new();
        for name in self.storage.list(partition_dir(status))? {
            match self.load(status, &name) {
                Ok(checklist) => checklists.push(checklist),
                Err(StoreError::MalformedDocument { path, reason }) => {
                    warn!("Skipping malformed document {}: {reason}", path.display());
                }
                Err(e) => return Err(e),
            }
        }
        Ok(checklists)
    }

    /// Finds the partition holding `id`, searching in move order.
    fn locate(&self, id: &str) -> Result<(ListStatus, String)> {
        let name = document_name(id).ok_or_else(|| StoreError::checklist_not_found(id))?;
        for status in ListStatus::ALL {
            if self.storage.exists(partition_dir(status), &name)? {
                return Ok((status, name));
            }
        }
        Err(StoreError::checklist_not_found(id))
    }

    fn contains(&self, id: &str) -> Result<bool> {
        match self.locate(id) {
            Ok(_) => Ok(true),
            Err(StoreError::ChecklistNotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Encodes `checklist` into the partition its status names.
    fn persist(&self, checklist: &Checklist) -> Result<()> {
        let name = document_name(&checklist.id)
            .ok_or_else(|| StoreError::invalid_input("id").with_reason("not a valid document name"))?;
        self.storage.write(
            partition_dir(checklist.status),
            &name,
            &codec::encode(checklist),
        )
    }

    /// Allocates an id that is not present in any partition.
    fn allocate_id(&self, now: Timestamp) -> Result<String> {
        loop {
            let id = generate_id(now);
            if !self.contains(&id)? {
                return Ok(id);
            }
        }
    }

    /// Fails unless `category` is a registry entry or the fallback.
    fn check_category(&self, category: &str) -> Result<()> {
        if self.categories.accepts(category) {
            Ok(())
        } else {
            Err(StoreError::category_not_found(category))
        }
    }
}
