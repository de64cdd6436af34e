//! Storage primitives the checklist store is composed from.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::debug;
use tempfile::NamedTempFile;

use crate::error::{FsResultExt, Result};

/// A medium holding named documents grouped into collections.
///
/// Collections are flat: a document is addressed by `(collection, name)`.
pub trait Storage {
    /// Creates the collection if it does not exist yet.
    fn ensure(&self, collection: &str) -> Result<()>;

    /// Names of the markdown documents in `collection`, sorted.
    fn list(&self, collection: &str) -> Result<Vec<String>>;

    fn exists(&self, collection: &str, name: &str) -> Result<bool>;

    fn read(&self, collection: &str, name: &str) -> Result<String>;

    /// Replaces the document as a whole. A failed write leaves any previous
    /// content in place.
    fn write(&self, collection: &str, name: &str, contents: &str) -> Result<()>;

    fn delete(&self, collection: &str, name: &str) -> Result<()>;

    /// Location of a document, used to label errors and log lines.
    fn locate(&self, collection: &str, name: &str) -> PathBuf;
}

/// File system storage: one directory per collection under a root.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_dir(&self, collection: &str) -> PathBuf {
        self.root.join(collection)
    }
}

impl Storage for FsStorage {
    fn ensure(&self, collection: &str) -> Result<()> {
        let dir = self.collection_dir(collection);
        fs::create_dir_all(&dir).fs_context(&dir)
    }

    fn list(&self, collection: &str) -> Result<Vec<String>> {
        let dir = self.collection_dir(collection);
        let mut names = Vec::new();
        for entry in fs::read_dir(&dir).fs_context(&dir)? {
            let entry = entry.fs_context(&dir)?;
            let path = entry.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "md") {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn exists(&self, collection: &str, name: &str) -> Result<bool> {
        let path = self.locate(collection, name);
        path.try_exists().fs_context(&path)
    }

    fn read(&self, collection: &str, name: &str) -> Result<String> {
        let path = self.locate(collection, name);
        debug!("Reading {}", path.display());
        fs::read_to_string(&path).fs_context(&path)
    }

    fn write(&self, collection: &str, name: &str, contents: &str) -> Result<()> {
        let dir = self.collection_dir(collection);
        let path = dir.join(name);
        debug!("Writing {}", path.display());

        let mut file = NamedTempFile::new_in(&dir).fs_context(&dir)?;
        file.write_all(contents.as_bytes()).fs_context(&path)?;
        file.as_file().sync_all().fs_context(&path)?;
        file.persist(&path)
            .map_err(|e| e.error)
            .fs_context(&path)?;
        Ok(())
    }

    fn delete(&self, collection: &str, name: &str) -> Result<()> {
        let path = self.locate(collection, name);
        debug!("Deleting {}", path.display());
        fs::remove_file(&path).fs_context(&path)
    }

    fn locate(&self, collection: &str, name: &str) -> PathBuf {
        self.collection_dir(collection).join(name)
    }
}
