//! Category operations for the Tracker.

use super::Tracker;
use crate::{
    display::{Categories, CreateResult, DeleteResult, UpdateResult},
    error::Result,
    models::Category,
    params::{CategoryName, RenameCategory, SaveCategory},
};

impl Tracker {
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.with_store(|store| Ok(store.categories().to_vec()))
            .await
    }

    /// Adds a category, or updates description and icon of an existing one.
    pub async fn save_category(&self, params: &SaveCategory) -> Result<Category> {
        let params = params.clone();
        self.with_store(move |store| {
            store.save_category(&params.name, &params.description, &params.icon)
        })
        .await
    }

    /// Renames a category, keeping its colour.
    pub async fn rename_category(&self, params: &RenameCategory) -> Result<Category> {
        let params = params.clone();
        self.with_store(move |store| {
            store.rename_category(
                &params.name,
                &params.new_name,
                params.description.as_deref(),
                params.icon.as_deref(),
            )
        })
        .await
    }

    /// Deletes a category. Checklists that use it keep the name.
    pub async fn delete_category(&self, params: &CategoryName) -> Result<Category> {
        let name = params.name.clone();
        self.with_store(move |store| store.delete_category(&name))
            .await
    }

    /// Handle listing categories for display.
    pub async fn list_categories_result(&self) -> Result<Categories> {
        Ok(Categories(self.list_categories().await?))
    }

    /// Handle saving a category for display.
    pub async fn save_category_result(
        &self,
        params: &SaveCategory,
    ) -> Result<CreateResult<Category>> {
        Ok(CreateResult::new(self.save_category(params).await?))
    }

    /// Handle renaming a category for display.
    pub async fn rename_category_result(
        &self,
        params: &RenameCategory,
    ) -> Result<UpdateResult<Category>> {
        let category = self.rename_category(params).await?;
        let changes = vec![format!("Renamed from '{}'", params.name)];
        Ok(UpdateResult::with_changes(category, changes))
    }

    /// Handle deleting a category for display.
    pub async fn delete_category_result(
        &self,
        params: &CategoryName,
    ) -> Result<DeleteResult<Category>> {
        Ok(DeleteResult::new(self.delete_category(params).await?))
    }
}
