//! Checklist operations for the store.

use jiff::Timestamp;
use log::{info, warn};

use super::{ChecklistStore, Storage, partition_dir};
use crate::{
    error::{Result, StoreError},
    models::{
        Category, Checklist, ChecklistUpdate, CorruptDocument, EXPORT_VERSION, Export,
        IntegrityReport, ListStatus, NewChecklist, Statistics, Target, UNCATEGORIZED,
    },
    query::ChecklistQuery,
};

impl<S: Storage> ChecklistStore<S> {
    /// Creates a checklist in the partition named by `new.status`.
    ///
    /// The category must be a registry entry; no category selects
    /// [`UNCATEGORIZED`]. A checklist created straight into history carries a
    /// completion timestamp.
    pub fn create(&mut self, new: NewChecklist) -> Result<Checklist> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(StoreError::invalid_input("name").with_reason("must not be empty"));
        }
        let category = new.category.unwrap_or_else(|| UNCATEGORIZED.to_string());
        self.check_category(&category)?;

        let now = Timestamp::now();
        let mut checklist = Checklist {
            id: self.allocate_id(now)?,
            name: name.to_string(),
            description: new.description,
            category,
            created_at: now,
            target_at: new.target_at,
            completed_at: None,
            updated_at: now,
            status: ListStatus::Active,
            continual: new.continual,
            favorite: false,
            items: Vec::new(),
        };
        checklist.set_status(new.status, now);

        self.persist(&checklist)?;
        info!(
            "Created checklist {} in '{}'",
            checklist.id,
            partition_dir(checklist.status)
        );
        Ok(checklist)
    }

    /// Retrieves a checklist by id, searching active, saved, then history.
    pub fn get(&self, id: &str) -> Result<Checklist> {
        let (status, name) = self.locate(id)?;
        self.load(status, &name)
    }

    /// Loads, mutates and rewrites a checklist in its current partition.
    ///
    /// Nothing is written when `mutate` fails.
    pub(super) fn modify<T>(
        &mut self,
        id: &str,
        mutate: impl FnOnce(&mut Checklist) -> Result<T>,
    ) -> Result<(Checklist, T)> {
        let mut checklist = self.get(id)?;
        let outcome = mutate(&mut checklist)?;
        checklist.updated_at = Timestamp::now();
        self.persist(&checklist)?;
        Ok((checklist, outcome))
    }

    /// Merges `update` into the checklist and returns it together with a
    /// description of each change.
    pub fn update(&mut self, id: &str, update: &ChecklistUpdate) -> Result<(Checklist, Vec<String>)> {
        if let Some(category) = &update.category {
            self.check_category(category)?;
        }
        if update.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(StoreError::invalid_input("name").with_reason("must not be empty"));
        }
        self.modify(id, |checklist| Ok(update.apply(checklist)))
    }

    /// Changes the status of a checklist and relocates its document.
    ///
    /// The document is written to the new partition first; the old one is
    /// removed only once that write has succeeded. If the old one cannot be
    /// removed, the new copy is dropped again so the checklist stays where it
    /// was. Moving into history stamps the completion time, moving out of it
    /// clears it.
    pub fn move_checklist(&mut self, id: &str, status: ListStatus) -> Result<Checklist> {
        let (from, name) = self.locate(id)?;
        let mut checklist = self.load(from, &name)?;

        let now = Timestamp::now();
        checklist.set_status(status, now);
        checklist.updated_at = now;
        self.persist(&checklist)?;

        if from != status {
            if let Err(e) = self.storage.delete(partition_dir(from), &name) {
                self.discard_copy(status, &name);
                return Err(e);
            }
            info!(
                "Moved checklist {id} from '{}' to '{}'",
                partition_dir(from),
                partition_dir(status)
            );
        }
        Ok(checklist)
    }

    /// Best-effort removal of the copy a failed move left in `status`.
    fn discard_copy(&self, status: ListStatus, name: &str) {
        let collection = partition_dir(status);
        if let Err(e) = self.storage.delete(collection, name) {
            warn!(
                "Could not remove {} after a failed move: {e}",
                self.storage.locate(collection, name).display()
            );
        }
    }

    /// Permanently removes a checklist and returns what was deleted.
    pub fn delete(&mut self, id: &str) -> Result<Checklist> {
        let (status, name) = self.locate(id)?;
        let checklist = self.load(status, &name)?;
        self.storage.delete(partition_dir(status), &name)?;
        info!("Deleted checklist {id}");
        Ok(checklist)
    }

    /// Lists one partition through `query`. Malformed documents are skipped.
    pub fn list(&self, status: ListStatus, query: &ChecklistQuery) -> Result<Vec<Checklist>> {
        Ok(query.apply(self.load_partition(status)?))
    }

    /// Runs `query` over all partitions.
    ///
    /// Results are concatenated active, saved, history; they are only
    /// re-sorted when the query names an order.
    pub fn search(&self, query: &ChecklistQuery) -> Result<Vec<Checklist>> {
        Ok(query.apply(self.load_all()?))
    }

    fn load_all(&self) -> Result<Vec<Checklist>> {
        let mut checklists = Vec::new();
        for status in ListStatus::ALL {
            checklists.extend(self.load_partition(status)?);
        }
        Ok(checklists)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<Checklist> {
        self.modify(id, |checklist| {
            checklist.favorite = !checklist.favorite;
            Ok(())
        })
        .map(|(checklist, ())| checklist)
    }

    /// Resets every item of a checklist to unchecked.
    pub fn uncheck_all(&mut self, id: &str) -> Result<Checklist> {
        self.modify(id, |checklist| {
            checklist.uncheck_all();
            Ok(())
        })
        .map(|(checklist, ())| checklist)
    }

    /// Deletes every document in the history partition.
    pub fn clear_history(&mut self) -> Result<usize> {
        let collection = partition_dir(ListStatus::History);
        let names = self.storage.list(collection)?;
        for name in &names {
            self.storage.delete(collection, name)?;
        }
        info!("Cleared {} checklist(s) from history", names.len());
        Ok(names.len())
    }

    /// Counts checklists per partition and items overall.
    pub fn statistics(&self) -> Result<Statistics> {
        let mut statistics = Statistics::default();
        for checklist in self.load_all()? {
            statistics.record(&checklist);
        }
        Ok(statistics)
    }

    /// Active and saved checklists that have a target date, soonest first.
    pub fn targets(&self, now: Timestamp) -> Result<Vec<Target>> {
        let mut targets = Vec::new();
        for status in [ListStatus::Active, ListStatus::Saved] {
            targets.extend(
                self.load_partition(status)?
                    .iter()
                    .filter_map(|checklist| Target::from_checklist(checklist, now)),
            );
        }
        targets.sort_by_key(|target| target.target_at);
        Ok(targets)
    }

    /// Tries to decode every document and reports the ones that fail.
    pub fn integrity_report(&self) -> Result<IntegrityReport> {
        let mut report = IntegrityReport {
            registry_empty: self.categories.list().is_empty(),
            ..Default::default()
        };
        for status in ListStatus::ALL {
            for name in self.storage.list(partition_dir(status))? {
                report.checked += 1;
                match self.load(status, &name) {
                    Ok(_) => {}
                    Err(StoreError::MalformedDocument { path, reason }) => {
                        warn!("Malformed document {}: {reason}", path.display());
                        report.corrupt.push(CorruptDocument {
                            status,
                            path,
                            reason,
                        });
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        Ok(report)
    }

    /// Snapshot of every readable checklist and the category registry.
    pub fn export(&self, now: Timestamp) -> Result<Export> {
        Ok(Export {
            version: EXPORT_VERSION,
            exported_at: now,
            checklists: self.load_all()?,
            categories: self.categories.list().to_vec(),
        })
    }

    pub fn categories(&self) -> &[Category] {
        self.categories.list()
    }

    pub fn category(&self, name: &str) -> Result<Category> {
        self.categories.get(name).cloned()
    }

    /// Adds a category or updates the description and icon of an existing
    /// one.
    pub fn save_category(&mut self, name: &str, description: &str, icon: &str) -> Result<Category> {
        self.categories.save(&self.storage, name, description, icon)
    }

    pub fn rename_category(
        &mut self,
        name: &str,
        new_name: &str,
        description: Option<&str>,
        icon: Option<&str>,
    ) -> Result<Category> {
        self.categories
            .rename(&self.storage, name, new_name, description, icon)
    }

    /// Removes a category. Checklists referencing it are not touched.
    pub fn delete_category(&mut self, name: &str) -> Result<Category> {
        self.categories.delete(&self.storage, name)
    }
}
