//! Item operations for the Tracker.

use super::Tracker;
use crate::{
    error::Result,
    models::{Checklist, Item, ItemStatus, ItemUpdate, NewItem},
    params::{AddItem, ItemRef, ListItems, UpdateItem},
    query::{IndexedItem, ItemQuery},
};

impl Tracker {
    /// Appends an item and returns the checklist with the new item's index.
    pub async fn add_item(&self, params: &AddItem) -> Result<(Checklist, usize)> {
        let id = params.checklist_id.clone();
        let new = NewItem::try_from(params)?;
        self.with_store(move |store| store.add_item(&id, new)).await
    }

    /// Applies a partial update to one item.
    pub async fn update_item(&self, params: &UpdateItem) -> Result<(Checklist, Vec<String>)> {
        let id = params.checklist_id.clone();
        let index = params.index;
        let update = ItemUpdate::try_from(params)?;
        self.with_store(move |store| store.update_item(&id, index, &update))
            .await
    }

    /// Sets the status of one item.
    pub async fn set_item_status(
        &self,
        params: &ItemRef,
        status: ItemStatus,
    ) -> Result<(Checklist, Vec<String>)> {
        let id = params.checklist_id.clone();
        let index = params.index;
        self.with_store(move |store| store.update_item(&id, index, &ItemUpdate::status(status)))
            .await
    }

    /// Removes one item and returns it together with the updated checklist.
    pub async fn delete_item(&self, params: &ItemRef) -> Result<(Checklist, Item)> {
        let id = params.checklist_id.clone();
        let index = params.index;
        self.with_store(move |store| store.delete_item(&id, index))
            .await
    }

    /// Items of one checklist, filtered and ordered.
    pub async fn list_items(&self, params: &ListItems) -> Result<Vec<IndexedItem>> {
        let id = params.checklist_id.clone();
        let query = ItemQuery::from(params);
        self.with_store(move |store| store.items(&id, &query)).await
    }
}
