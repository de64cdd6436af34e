#![allow(dead_code)]

use std::path::Path;

use tempfile::TempDir;
use tick_core::{ChecklistStore, Tracker, TrackerBuilder};

/// Helper function to create a test tracker over a fresh data directory
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = TrackerBuilder::new()
        .with_data_dir(Some(temp_dir.path()))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

/// Helper function to open a synchronous store over a fresh data directory
pub fn create_test_store() -> (TempDir, ChecklistStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = ChecklistStore::open_dir(temp_dir.path()).expect("Failed to open store");
    (temp_dir, store)
}

/// Names of the markdown documents in one partition directory.
pub fn documents_in(root: &Path, partition: &str) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(root.join(partition))
        .expect("Failed to read partition")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".md"))
        .collect();
    names.sort();
    names
}
