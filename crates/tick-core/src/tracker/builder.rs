//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Tracker;
use crate::{
    error::{Result, ResultExt, StoreError},
    store::ChecklistStore,
};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    data_dir: Option<PathBuf>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom data directory.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tick/` or `~/.local/share/tick/`
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the store, creating the directory layout and the default
    /// categories on first use.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::XdgDirectory` if no default directory can be
    /// resolved, and `StoreError::FileSystem` if the layout cannot be created
    pub async fn build(self) -> Result<Tracker> {
        let data_dir = match self.data_dir {
            Some(path) => path,
            None => Self::default_data_dir()?,
        };
        debug!("Opening checklist store at {}", data_dir.display());

        let root = data_dir.clone();
        let store = task::spawn_blocking(move || ChecklistStore::open_dir(&root))
            .await
            .with_context("Task join error")??;

        Ok(Tracker::new(store, data_dir))
    }

    /// Returns the default data directory following XDG Base Directory
    /// specification.
    fn default_data_dir() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tick")
            .create_data_directory("")
            .map_err(|e| StoreError::XdgDirectory(e.to_string()))
    }
}
