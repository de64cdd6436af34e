//! Category model definition.

use serde::{Deserialize, Serialize};

/// Name of the category every checklist may fall back to.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A category definition as stored in the registry side-file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique key
    pub name: String,

    #[serde(rename = "descr", default)]
    pub description: String,

    /// Icon token understood by the UI
    #[serde(default)]
    pub icon: String,

    /// Hex (`#rrggbb`) or named colour
    #[serde(rename = "colorValue", default)]
    pub color: String,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}
