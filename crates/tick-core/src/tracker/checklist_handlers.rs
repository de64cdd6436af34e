//! Checklist handler operations that return display wrappers.

use super::Tracker;
use crate::{
    display::{
        ChecklistSummaries, CreateResult, DeleteResult, MoveResult, OperationStatus, Targets,
        UpdateResult,
    },
    error::Result,
    models::{Checklist, ChecklistSummary},
    params::{CreateChecklist, Id, ListChecklists, MoveChecklist, SearchChecklists, UpdateChecklist},
};

fn summaries(checklists: &[Checklist]) -> ChecklistSummaries {
    ChecklistSummaries(checklists.iter().map(ChecklistSummary::from).collect())
}

impl Tracker {
    /// Handle listing one partition as summaries with item counts.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use tick_core::{params::ListChecklists, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let summaries = tracker
    ///     .list_checklists_summary(&ListChecklists::default())
    ///     .await?;
    /// println!("{summaries}");
    /// # Result::<(), tick_core::StoreError>::Ok(())
    /// # };
    /// ```
    pub async fn list_checklists_summary(
        &self,
        params: &ListChecklists,
    ) -> Result<ChecklistSummaries> {
        Ok(summaries(&self.list_checklists(params).await?))
    }

    /// Handle searching all partitions, returning summaries.
    pub async fn search_checklists_summary(
        &self,
        params: &SearchChecklists,
    ) -> Result<ChecklistSummaries> {
        Ok(summaries(&self.search_checklists(params).await?))
    }

    /// Handle creating a checklist.
    pub async fn create_checklist_result(
        &self,
        params: &CreateChecklist,
    ) -> Result<CreateResult<Checklist>> {
        Ok(CreateResult::new(self.create_checklist(params).await?))
    }

    /// Handle a partial checklist update, reporting each change.
    pub async fn update_checklist_result(
        &self,
        params: &UpdateChecklist,
    ) -> Result<UpdateResult<Checklist>> {
        let (checklist, changes) = self.update_checklist(params).await?;
        Ok(UpdateResult::with_changes(checklist, changes))
    }

    pub async fn move_checklist_result(&self, params: &MoveChecklist) -> Result<MoveResult> {
        Ok(MoveResult::new(self.move_checklist(params).await?))
    }

    /// Handle deleting a checklist; the deleted checklist is returned for
    /// confirmation.
    pub async fn delete_checklist_result(&self, params: &Id) -> Result<DeleteResult<Checklist>> {
        Ok(DeleteResult::new(self.delete_checklist(params).await?))
    }

    pub async fn toggle_favorite_result(&self, params: &Id) -> Result<UpdateResult<Checklist>> {
        let checklist = self.toggle_favorite(params).await?;
        let change = if checklist.favorite {
            "Marked as favorite"
        } else {
            "Removed from favorites"
        };
        Ok(UpdateResult::with_changes(checklist, vec![change.to_string()]))
    }

    pub async fn uncheck_all_result(&self, params: &Id) -> Result<UpdateResult<Checklist>> {
        let checklist = self.uncheck_all(params).await?;
        let change = format!("Unchecked {} item(s)", checklist.total_count());
        Ok(UpdateResult::with_changes(checklist, vec![change]))
    }

    pub async fn clear_history_result(&self) -> Result<OperationStatus> {
        let removed = self.clear_history().await?;
        Ok(OperationStatus::success(format!(
            "Cleared {removed} checklist(s) from history"
        )))
    }

    pub async fn targets_result(&self) -> Result<Targets> {
        Ok(Targets(self.targets().await?))
    }
}
