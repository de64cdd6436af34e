//! Checklist operations for the Tracker.

use jiff::Timestamp;

use super::Tracker;
use crate::{
    error::Result,
    models::{
        Checklist, ChecklistUpdate, Export, IntegrityReport, NewChecklist, Statistics, Target,
    },
    params::{CreateChecklist, Id, ListChecklists, MoveChecklist, SearchChecklists, UpdateChecklist},
    query::ChecklistQuery,
};

impl Tracker {
    /// Creates a new checklist in the requested partition.
    pub async fn create_checklist(&self, params: &CreateChecklist) -> Result<Checklist> {
        let new = NewChecklist::try_from(params)?;
        self.with_store(move |store| store.create(new)).await
    }

    /// Retrieves a checklist by its ID.
    pub async fn get_checklist(&self, params: &Id) -> Result<Checklist> {
        let id = params.id.clone();
        self.with_store(move |store| store.get(&id)).await
    }

    /// Applies a partial update and returns the change descriptions.
    pub async fn update_checklist(
        &self,
        params: &UpdateChecklist,
    ) -> Result<(Checklist, Vec<String>)> {
        let id = params.id.clone();
        let update = ChecklistUpdate::try_from(params)?;
        self.with_store(move |store| store.update(&id, &update)).await
    }

    /// Moves a checklist to the partition of the given status.
    pub async fn move_checklist(&self, params: &MoveChecklist) -> Result<Checklist> {
        let id = params.id.clone();
        let status = params.status;
        self.with_store(move |store| store.move_checklist(&id, status))
            .await
    }

    /// Permanently deletes a checklist.
    pub async fn delete_checklist(&self, params: &Id) -> Result<Checklist> {
        let id = params.id.clone();
        self.with_store(move |store| store.delete(&id)).await
    }

    /// Lists one partition with optional filtering and ordering.
    pub async fn list_checklists(&self, params: &ListChecklists) -> Result<Vec<Checklist>> {
        let status = params.status;
        let query = ChecklistQuery::from(params);
        self.with_store(move |store| store.list(status, &query))
            .await
    }

    /// Searches all partitions.
    pub async fn search_checklists(&self, params: &SearchChecklists) -> Result<Vec<Checklist>> {
        let query = ChecklistQuery::from(params);
        self.with_store(move |store| store.search(&query)).await
    }

    pub async fn toggle_favorite(&self, params: &Id) -> Result<Checklist> {
        let id = params.id.clone();
        self.with_store(move |store| store.toggle_favorite(&id))
            .await
    }

    /// Resets all items of a checklist to unchecked.
    pub async fn uncheck_all(&self, params: &Id) -> Result<Checklist> {
        let id = params.id.clone();
        self.with_store(move |store| store.uncheck_all(&id)).await
    }

    /// Deletes every checklist in history and returns how many were removed.
    pub async fn clear_history(&self) -> Result<usize> {
        self.with_store(|store| store.clear_history()).await
    }

    pub async fn statistics(&self) -> Result<Statistics> {
        self.with_store(|store| store.statistics()).await
    }

    /// Active and saved checklists with a target date, evaluated against the
    /// current time.
    pub async fn targets(&self) -> Result<Vec<Target>> {
        let now = Timestamp::now();
        self.with_store(move |store| store.targets(now)).await
    }

    pub async fn integrity_report(&self) -> Result<IntegrityReport> {
        self.with_store(|store| store.integrity_report()).await
    }

    /// Snapshot of the whole store.
    pub async fn export(&self) -> Result<Export> {
        let now = Timestamp::now();
        self.with_store(move |store| store.export(now)).await
    }

    /// Snapshot of the whole store as pretty-printed JSON.
    pub async fn export_json(&self) -> Result<String> {
        let export = self.export().await?;
        Ok(serde_json::to_string_pretty(&export)?)
    }
}
