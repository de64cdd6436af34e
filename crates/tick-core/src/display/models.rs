//! Display implementations for domain models.
//!
//! Everything renders as markdown. Items are always shown with their stored
//! index, which is what item commands take as their address.

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::{
    models::{
        Category, Checklist, ChecklistSummary, IntegrityReport, Item, ItemStatus, ListStatus,
        Priority, Statistics, Target,
    },
    query::IndexedItem,
};

impl fmt::Display for ListStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ItemStatus::Unchecked => "[ ]",
            ItemStatus::Checked => "[x]",
            ItemStatus::CheckedAlt => "[X]",
        })
    }
}

/// `1/3` style progress counter.
fn progress(completed: usize, total: usize) -> String {
    format!("{completed}/{total}")
}

fn write_item(f: &mut fmt::Formatter<'_>, index: usize, item: &Item) -> fmt::Result {
    write!(f, "- `{index}` {} {}", item.status, item.name)?;
    if item.priority != Priority::Normal {
        write!(f, " *({})*", item.priority)?;
    }
    writeln!(f)?;
    if let Some(comments) = &item.comments {
        for line in comments.lines() {
            writeln!(f, "    > {line}")?;
        }
    }
    Ok(())
}

impl fmt::Display for IndexedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_item(f, self.index, &self.item)
    }
}

impl fmt::Display for Checklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Category: {}", self.category)?;
        writeln!(
            f,
            "- Progress: {}",
            progress(self.completed_count(), self.total_count())
        )?;
        if let Some(target) = &self.target_at {
            writeln!(f, "- Target: {}", LocalDate(target))?;
        }
        if self.favorite {
            writeln!(f, "- Favorite: yes")?;
        }
        if self.continual {
            writeln!(f, "- Continual: yes")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        if let Some(completed) = &self.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed))?;
        }
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.description.trim().is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        if self.items.is_empty() {
            writeln!(f, "\nNo items in this checklist.")?;
        } else {
            writeln!(f, "\n## Items")?;
            writeln!(f)?;
            for (index, item) in self.items.iter().enumerate() {
                write_item(f, index, item)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ChecklistSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let star = if self.favorite { " ★" } else { "" };
        writeln!(
            f,
            "## {}{star} (ID: {}) ({})",
            self.name,
            self.id,
            progress(self.completed_items, self.total_items)
        )?;
        writeln!(f)?;

        if !self.description.trim().is_empty() {
            writeln!(f, "- **Description**: {}", self.description)?;
        }
        writeln!(f, "- **Category**: {}", self.category)?;
        writeln!(f, "- **Status**: {}", self.status)?;
        if let Some(target) = &self.target_at {
            writeln!(f, "- **Target**: {}", LocalDate(target))?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}**", self.name)?;
        if !self.description.is_empty() {
            write!(f, ": {}", self.description)?;
        }
        writeln!(f, " (icon `{}`, colour `{}`)", self.icon, self.color)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- **{}** (ID: {}, {}) due {}",
            self.name,
            self.id,
            self.status,
            LocalDate(&self.target_at)
        )?;
        if self.overdue {
            write!(f, " **overdue**")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Statistics")?;
        writeln!(f)?;
        writeln!(f, "- Active lists: {}", self.active_lists)?;
        writeln!(f, "- Saved lists: {}", self.saved_lists)?;
        writeln!(f, "- History lists: {}", self.history_lists)?;
        writeln!(
            f,
            "- Items completed: {}",
            progress(self.completed_items, self.total_items)
        )
    }
}

impl fmt::Display for IntegrityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Checked {} document(s).", self.checked)?;
        if self.is_healthy() {
            return writeln!(f, "No problems found.");
        }

        if !self.corrupt.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Corrupt documents")?;
            writeln!(f)?;
            for document in &self.corrupt {
                writeln!(
                    f,
                    "- `{}` ({}): {}",
                    document.path.display(),
                    document.status,
                    document.reason
                )?;
            }
        }
        if self.registry_empty {
            writeln!(f)?;
            writeln!(f, "The category registry is empty.")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use jiff::Timestamp;

    use super::*;
    use crate::models::CorruptDocument;

    fn create_test_checklist() -> Checklist {
        Checklist {
            id: "1640995200000_abc123xyz".to_string(),
            name: "Groceries".to_string(),
            description: "Weekly run".to_string(),
            category: "Shopping".to_string(),
            created_at: Timestamp::from_second(1640995200).unwrap(),
            target_at: None,
            completed_at: None,
            updated_at: Timestamp::from_second(1640995200).unwrap(),
            status: ListStatus::Active,
            continual: false,
            favorite: true,
            items: vec![
                Item::new("Milk").with_status(ItemStatus::Checked),
                Item::new("Bread")
                    .with_priority(Priority::High)
                    .with_comments("whole grain"),
            ],
        }
    }

    #[test]
    fn test_checklist_display() {
        let output = create_test_checklist().to_string();
        assert!(output.starts_with("# Groceries\n"));
        assert!(output.contains("- ID: 1640995200000_abc123xyz"));
        assert!(output.contains("- Progress: 1/2"));
        assert!(output.contains("- Favorite: yes"));
        assert!(!output.contains("Continual"));
        assert!(output.contains("- `0` [x] Milk\n"));
        assert!(output.contains("- `1` [ ] Bread *(High)*\n    > whole grain\n"));
    }

    #[test]
    fn test_empty_checklist_display() {
        let mut checklist = create_test_checklist();
        checklist.items.clear();
        assert!(checklist.to_string().contains("No items in this checklist."));
    }

    #[test]
    fn test_summary_display() {
        let summary = ChecklistSummary::from(&create_test_checklist());
        let output = summary.to_string();
        assert!(output.contains("## Groceries ★ (ID: 1640995200000_abc123xyz) (1/2)"));
        assert!(output.contains("- **Category**: Shopping"));
    }

    #[test]
    fn test_integrity_report_display() {
        let healthy = IntegrityReport {
            checked: 3,
            ..Default::default()
        };
        assert_eq!(
            healthy.to_string(),
            "Checked 3 document(s).\nNo problems found.\n"
        );

        let broken = IntegrityReport {
            checked: 1,
            corrupt: vec![CorruptDocument {
                status: ListStatus::Saved,
                path: PathBuf::from("saved/x.md"),
                reason: "metadata block is not terminated".to_string(),
            }],
            registry_empty: true,
        };
        let output = broken.to_string();
        assert!(output.contains("- `saved/x.md` (saved): metadata block is not terminated"));
        assert!(output.contains("The category registry is empty."));
    }
}
