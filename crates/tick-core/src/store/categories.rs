//! Category registry persisted as one JSON side-file.
//!
//! The file is always handled wholesale: each mutation re-reads the whole
//! list, changes it, writes the whole list back and only then refreshes the
//! in-memory copy.

use log::info;
use rand::seq::SliceRandom;

use super::storage::Storage;
use crate::{
    error::{Result, StoreError},
    models::{Category, UNCATEGORIZED},
};

pub(crate) const CATEGORIES_COLLECTION: &str = "categories";
pub(crate) const CATEGORIES_FILE: &str = "categories.json";

/// Colours handed out to new categories.
pub const PALETTE: [&str; 7] = [
    "#3498db", "#2ecc71", "#e74c3c", "#f39c12", "#9b59b6", "#1abc9c", "#34495e",
];

/// Entries written when no registry exists yet.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Personal", "Personal tasks and lists", "contact", "#3498db"),
        Category::new("Work", "Work-related tasks", "office", "#2ecc71"),
        Category::new("Shopping", "Shopping lists", "shopping-cart", "#e74c3c"),
        Category::new(UNCATEGORIZED, "Default category", "default", "white"),
    ]
}

fn random_color() -> String {
    PALETTE
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(PALETTE[0])
        .to_string()
}

fn required(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(StoreError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(value.to_string())
}

/// In-memory copy of the registry file.
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    entries: Vec<Category>,
}

impl CategoryRegistry {
    /// Loads the registry, seeding the defaults on first use.
    pub fn load<S: Storage>(storage: &S) -> Result<Self> {
        storage.ensure(CATEGORIES_COLLECTION)?;
        if !storage.exists(CATEGORIES_COLLECTION, CATEGORIES_FILE)? {
            info!("Seeding default categories");
            let entries = default_categories();
            Self::write(storage, &entries)?;
            return Ok(Self { entries });
        }
        Ok(Self {
            entries: Self::read(storage)?,
        })
    }

    fn read<S: Storage>(storage: &S) -> Result<Vec<Category>> {
        let text = storage.read(CATEGORIES_COLLECTION, CATEGORIES_FILE)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn write<S: Storage>(storage: &S, entries: &[Category]) -> Result<()> {
        let text = serde_json::to_string_pretty(entries)?;
        storage.write(CATEGORIES_COLLECTION, CATEGORIES_FILE, &text)
    }

    /// Runs `mutate` against a fresh read of the file, then persists and
    /// caches the result.
    fn modify<S, T>(
        &mut self,
        storage: &S,
        mutate: impl FnOnce(&mut Vec<Category>) -> Result<T>,
    ) -> Result<T>
    where
        S: Storage,
    {
        let mut entries = Self::read(storage)?;
        let outcome = mutate(&mut entries)?;
        Self::write(storage, &entries)?;
        self.entries = entries;
        Ok(outcome)
    }

    pub fn list(&self) -> &[Category] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Result<&Category> {
        self.entries
            .iter()
            .find(|category| category.name == name)
            .ok_or_else(|| StoreError::category_not_found(name))
    }

    /// Whether `name` may be used as a checklist's category.
    pub fn accepts(&self, name: &str) -> bool {
        name == UNCATEGORIZED || self.entries.iter().any(|category| category.name == name)
    }

    /// Inserts a new entry with a palette colour, or updates description and
    /// icon of an existing one in place.
    pub fn save<S: Storage>(
        &mut self,
        storage: &S,
        name: &str,
        description: &str,
        icon: &str,
    ) -> Result<Category> {
        let name = required("name", name)?;
        self.modify(storage, |entries| {
            if let Some(existing) = entries.iter_mut().find(|category| category.name == name) {
                existing.description = description.to_string();
                existing.icon = icon.to_string();
                info!("Updated category '{name}'");
                return Ok(existing.clone());
            }
            let category = Category::new(name.as_str(), description, icon, random_color());
            entries.push(category.clone());
            info!("Added category '{name}'");
            Ok(category)
        })
    }

    /// Renames an entry, keeping its colour and position. Checklists that
    /// still name the old category are left as they are.
    pub fn rename<S: Storage>(
        &mut self,
        storage: &S,
        name: &str,
        new_name: &str,
        description: Option<&str>,
        icon: Option<&str>,
    ) -> Result<Category> {
        let new_name = required("new_name", new_name)?;
        self.modify(storage, |entries| {
            if new_name != name && entries.iter().any(|category| category.name == new_name) {
                return Err(StoreError::invalid_input("new_name")
                    .with_reason(format!("category '{new_name}' already exists")));
            }
            let entry = entries
                .iter_mut()
                .find(|category| category.name == name)
                .ok_or_else(|| StoreError::category_not_found(name))?;
            entry.name = new_name.clone();
            if let Some(description) = description {
                entry.description = description.to_string();
            }
            if let Some(icon) = icon {
                entry.icon = icon.to_string();
            }
            info!("Renamed category '{name}' to '{new_name}'");
            Ok(entry.clone())
        })
    }

    /// Removes an entry by exact name. Checklists referencing it keep the
    /// dangling name.
    pub fn delete<S: Storage>(&mut self, storage: &S, name: &str) -> Result<Category> {
        self.modify(storage, |entries| {
            let position = entries
                .iter()
                .position(|category| category.name == name)
                .ok_or_else(|| StoreError::category_not_found(name))?;
            info!("Deleted category '{name}'");
            Ok(entries.remove(position))
        })
    }
}
