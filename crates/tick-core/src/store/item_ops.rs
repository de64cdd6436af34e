//! Item operations for the store. Items are addressed by their index in the
//! stored sequence.

use log::debug;

use super::{ChecklistStore, Storage};
use crate::{
    error::{Result, StoreError},
    models::{Checklist, Item, ItemUpdate, NewItem},
    query::{IndexedItem, ItemQuery},
};

fn check_index(checklist: &Checklist, index: usize) -> Result<()> {
    if index < checklist.items.len() {
        Ok(())
    } else {
        Err(StoreError::InvalidIndex {
            index,
            len: checklist.items.len(),
        })
    }
}

impl<S: Storage> ChecklistStore<S> {
    /// Appends an item; it lands at index `total_count() - 1`. Names must be
    /// non-empty single lines that do not end in a priority marker.
    pub fn add_item(&mut self, id: &str, new: NewItem) -> Result<(Checklist, usize)> {
        let new = new.validated()?;
        self.modify(id, |checklist| {
            checklist.items.push(new.into_item());
            debug!("Added item to checklist {}", checklist.id);
            Ok(checklist.items.len() - 1)
        })
    }

    /// Applies `update` to the item at `index`. An invalid name or an
    /// out-of-range index fails without writing anything.
    pub fn update_item(
        &mut self,
        id: &str,
        index: usize,
        update: &ItemUpdate,
    ) -> Result<(Checklist, Vec<String>)> {
        let update = update.validated()?;
        self.modify(id, |checklist| {
            check_index(checklist, index)?;
            Ok(update.apply(&mut checklist.items[index]))
        })
    }

    /// Removes the item at `index`; later items shift down by one.
    pub fn delete_item(&mut self, id: &str, index: usize) -> Result<(Checklist, Item)> {
        self.modify(id, |checklist| {
            check_index(checklist, index)?;
            Ok(checklist.items.remove(index))
        })
    }

    /// Items of a checklist filtered and ordered by `query`.
    pub fn items(&self, id: &str, query: &ItemQuery) -> Result<Vec<IndexedItem>> {
        Ok(query.apply(&self.get(id)?.items))
    }
}
