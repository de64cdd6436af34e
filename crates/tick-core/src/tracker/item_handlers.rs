//! Item handler operations that return display wrappers.
//!
//! Item changes are reported against the owning checklist, which is shown in
//! full after the change list.

use super::Tracker;
use crate::{
    display::{IndexedItems, UpdateResult},
    error::Result,
    models::{Checklist, ItemStatus},
    params::{AddItem, ItemRef, ListItems, UpdateItem},
};

impl Tracker {
    pub async fn add_item_result(&self, params: &AddItem) -> Result<UpdateResult<Checklist>> {
        let (checklist, index) = self.add_item(params).await?;
        let change = format!("Added item '{}' at index {index}", params.name.trim());
        Ok(UpdateResult::with_changes(checklist, vec![change]))
    }

    pub async fn update_item_result(&self, params: &UpdateItem) -> Result<UpdateResult<Checklist>> {
        let (checklist, changes) = self.update_item(params).await?;
        Ok(UpdateResult::with_changes(checklist, changes))
    }

    /// Handle checking or unchecking a single item.
    pub async fn set_item_status_result(
        &self,
        params: &ItemRef,
        status: ItemStatus,
    ) -> Result<UpdateResult<Checklist>> {
        let (checklist, changes) = self.set_item_status(params, status).await?;
        Ok(UpdateResult::with_changes(checklist, changes))
    }

    pub async fn delete_item_result(&self, params: &ItemRef) -> Result<UpdateResult<Checklist>> {
        let (checklist, item) = self.delete_item(params).await?;
        let change = format!("Deleted item '{}' from index {}", item.name, params.index);
        Ok(UpdateResult::with_changes(checklist, vec![change]))
    }

    pub async fn list_items_result(&self, params: &ListItems) -> Result<IndexedItems> {
        Ok(IndexedItems(self.list_items(params).await?))
    }
}
