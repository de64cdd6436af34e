//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Category, Checklist};

/// Outcome of a create operation: a confirmation line followed by the
/// created resource.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Checklist> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created checklist with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Category> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved category '{}'", self.resource.name)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of an update, listing each change that was applied.
///
/// # Examples
///
/// ```rust
/// use tick_core::{display::UpdateResult, models::Category};
///
/// let category = Category::new("Yard", "Outdoor work", "tree", "#2ecc71");
/// let result = UpdateResult::with_changes(category, vec!["Renamed from 'Garden'".to_string()]);
/// let output = result.to_string();
/// assert!(output.contains("Updated category 'Yard'"));
/// assert!(output.contains("- Renamed from 'Garden'"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    fn write_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for UpdateResult<Checklist> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated checklist with ID: {}", self.resource.id)?;
        self.write_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<Category> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated category '{}'", self.resource.name)?;
        self.write_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of moving a checklist between partitions.
pub struct MoveResult {
    pub checklist: Checklist,
}

impl MoveResult {
    pub fn new(checklist: Checklist) -> Self {
        Self { checklist }
    }
}

impl fmt::Display for MoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Moved checklist '{}' (ID: {}) to {}",
            self.checklist.name, self.checklist.id, self.checklist.status
        )
    }
}

/// Outcome of a permanent deletion.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Checklist> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted checklist '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<Category> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted category '{}'", self.resource.name)
    }
}
