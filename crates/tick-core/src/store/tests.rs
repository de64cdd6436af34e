#[cfg(test)]
mod store_tests {
    use std::{cell::RefCell, collections::BTreeMap, io, path::PathBuf};

    use jiff::{Timestamp, ToSpan};
    use tempfile::TempDir;

    use crate::{
        codec,
        error::{Result, StoreError},
        models::{
            ItemStatus, ItemUpdate, ListStatus, NewChecklist, NewItem, Priority, UNCATEGORIZED,
        },
        query::{ChecklistOrder, ChecklistQuery, ItemOrder, ItemQuery, SearchMode},
        store::{ChecklistStore, FsStorage, Storage, partition_dir},
    };

    /// In-memory storage whose reads, writes or deletes in one collection
    /// can be made to fail.
    #[derive(Default)]
    struct MemoryStorage {
        documents: RefCell<BTreeMap<(String, String), String>>,
        failing_collection: RefCell<Option<String>>,
        failing_deletes: RefCell<Option<String>>,
        failing_reads: RefCell<Option<String>>,
    }

    fn fails_in(setting: &RefCell<Option<String>>, collection: &str) -> bool {
        setting.borrow().as_deref() == Some(collection)
    }

    impl MemoryStorage {
        fn fail_writes_to(&self, collection: &str) {
            *self.failing_collection.borrow_mut() = Some(collection.to_string());
        }

        fn fail_deletes_in(&self, collection: &str) {
            *self.failing_deletes.borrow_mut() = Some(collection.to_string());
        }

        fn fail_reads_from(&self, collection: &str) {
            *self.failing_reads.borrow_mut() = Some(collection.to_string());
        }

        fn document(&self, collection: &str, name: &str) -> Option<String> {
            self.documents
                .borrow()
                .get(&(collection.to_string(), name.to_string()))
                .cloned()
        }
    }

    impl Storage for MemoryStorage {
        fn ensure(&self, _collection: &str) -> Result<()> {
            Ok(())
        }

        fn list(&self, collection: &str) -> Result<Vec<String>> {
            Ok(self
                .documents
                .borrow()
                .keys()
                .filter(|(c, name)| c == collection && name.ends_with(".md"))
                .map(|(_, name)| name.clone())
                .collect())
        }

        fn exists(&self, collection: &str, name: &str) -> Result<bool> {
            Ok(self.document(collection, name).is_some())
        }

        fn read(&self, collection: &str, name: &str) -> Result<String> {
            if fails_in(&self.failing_reads, collection) {
                return Err(StoreError::FileSystem {
                    path: self.locate(collection, name),
                    source: io::Error::new(io::ErrorKind::PermissionDenied, "unreadable"),
                });
            }
            self.document(collection, name)
                .ok_or_else(|| StoreError::FileSystem {
                    path: self.locate(collection, name),
                    source: io::Error::new(io::ErrorKind::NotFound, "no such document"),
                })
        }

        fn write(&self, collection: &str, name: &str, contents: &str) -> Result<()> {
            if fails_in(&self.failing_collection, collection) {
                return Err(StoreError::FileSystem {
                    path: self.locate(collection, name),
                    source: io::Error::other("disk full"),
                });
            }
            self.documents.borrow_mut().insert(
                (collection.to_string(), name.to_string()),
                contents.to_string(),
            );
            Ok(())
        }

        fn delete(&self, collection: &str, name: &str) -> Result<()> {
            if fails_in(&self.failing_deletes, collection) {
                return Err(StoreError::FileSystem {
                    path: self.locate(collection, name),
                    source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
                });
            }
            self.documents
                .borrow_mut()
                .remove(&(collection.to_string(), name.to_string()));
            Ok(())
        }

        fn locate(&self, collection: &str, name: &str) -> PathBuf {
            PathBuf::from(collection).join(name)
        }
    }

    fn memory_store() -> ChecklistStore<MemoryStorage> {
        ChecklistStore::open(MemoryStorage::default()).unwrap()
    }

    fn groceries() -> NewChecklist {
        NewChecklist {
            name: "Groceries".to_string(),
            category: Some("Shopping".to_string()),
            ..Default::default()
        }
    }

    fn item(name: &str, priority: Priority) -> NewItem {
        NewItem {
            name: name.to_string(),
            comments: None,
            priority,
        }
    }

    #[test]
    fn test_groceries_walkthrough() {
        let mut store = memory_store();
        let checklist = store.create(groceries()).unwrap();
        assert_eq!(checklist.status, ListStatus::Active);

        store
            .add_item(&checklist.id, item("Milk", Priority::Normal))
            .unwrap();
        let (checklist, index) = store
            .add_item(&checklist.id, item("Bread", Priority::High))
            .unwrap();
        assert_eq!(index, 1);
        assert_eq!(checklist.total_count(), 2);
        assert_eq!(checklist.completed_count(), 0);

        let (checklist, _) = store
            .update_item(&checklist.id, 0, &ItemUpdate::status(ItemStatus::Checked))
            .unwrap();
        assert_eq!(checklist.completed_count(), 1);

        let moved = store
            .move_checklist(&checklist.id, ListStatus::History)
            .unwrap();
        assert_eq!(moved.status, ListStatus::History);
        assert!(moved.completed_at.is_some());

        let active = store
            .list(ListStatus::Active, &ChecklistQuery::all())
            .unwrap();
        assert!(active.is_empty());
        let fetched = store.get(&checklist.id).unwrap();
        assert_eq!(fetched.status, ListStatus::History);
        assert_eq!(fetched.items[1].priority, Priority::High);
    }

    #[test]
    fn test_move_keeps_old_document_when_write_fails() {
        let mut store = memory_store();
        let checklist = store.create(groceries()).unwrap();
        let name = format!("{}.md", checklist.id);
        let before = store
            .storage()
            .document(partition_dir(ListStatus::Active), &name)
            .unwrap();

        store
            .storage()
            .fail_writes_to(partition_dir(ListStatus::History));
        let err = store
            .move_checklist(&checklist.id, ListStatus::History)
            .unwrap_err();
        assert!(matches!(err, StoreError::FileSystem { .. }));

        let after = store
            .storage()
            .document(partition_dir(ListStatus::Active), &name)
            .unwrap();
        assert_eq!(before, after);
        assert_eq!(store.get(&checklist.id).unwrap(), checklist);
        assert!(
            store
                .storage()
                .document(partition_dir(ListStatus::History), &name)
                .is_none()
        );
    }

    #[test]
    fn test_move_rolls_back_when_old_document_cannot_be_removed() {
        let mut store = memory_store();
        let checklist = store.create(groceries()).unwrap();
        let name = format!("{}.md", checklist.id);

        store
            .storage()
            .fail_deletes_in(partition_dir(ListStatus::Active));
        let err = store
            .move_checklist(&checklist.id, ListStatus::History)
            .unwrap_err();
        assert!(matches!(err, StoreError::FileSystem { .. }));

        assert!(
            store
                .storage()
                .document(partition_dir(ListStatus::History), &name)
                .is_none()
        );
        let current = store.get(&checklist.id).unwrap();
        assert_eq!(current.status, ListStatus::Active);
        assert_eq!(current.completed_at, None);

        let active = store
            .storage()
            .list(partition_dir(ListStatus::Active))
            .unwrap();
        assert_eq!(active, vec![name]);
    }

    #[test]
    fn test_move_out_of_history_clears_completion() {
        let mut store = memory_store();
        let checklist = store
            .create(NewChecklist {
                status: ListStatus::History,
                ..groceries()
            })
            .unwrap();
        assert!(checklist.completed_at.is_some());

        let restored = store
            .move_checklist(&checklist.id, ListStatus::Active)
            .unwrap();
        assert_eq!(restored.completed_at, None);
        assert_eq!(store.get(&checklist.id).unwrap().completed_at, None);
    }

    #[test]
    fn test_move_to_same_partition_rewrites_in_place() {
        let mut store = memory_store();
        let checklist = store.create(groceries()).unwrap();
        store
            .move_checklist(&checklist.id, ListStatus::Active)
            .unwrap();
        assert_eq!(
            store
                .list(ListStatus::Active, &ChecklistQuery::all())
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn test_consecutive_creates_have_distinct_ids() {
        let mut store = memory_store();
        let first = store.create(groceries()).unwrap();
        let second = store.create(groceries()).unwrap();
        assert_ne!(first.id, second.id);

        let (millis, suffix) = first.id.split_once('_').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), 9);
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_create_rejects_unknown_category() {
        let mut store = memory_store();
        let err = store
            .create(NewChecklist {
                category: Some("Garden".to_string()),
                ..groceries()
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::CategoryNotFound { .. }));
    }

    #[test]
    fn test_create_without_category_uses_fallback() {
        let mut store = memory_store();
        let checklist = store
            .create(NewChecklist {
                category: None,
                ..groceries()
            })
            .unwrap();
        assert_eq!(checklist.category, UNCATEGORIZED);
    }

    #[test]
    fn test_delete_item_shifts_later_items() {
        let mut store = memory_store();
        let checklist = store.create(groceries()).unwrap();
        for name in ["a", "b", "c", "d"] {
            store
                .add_item(&checklist.id, item(name, Priority::Normal))
                .unwrap();
        }

        let (checklist, removed) = store.delete_item(&checklist.id, 1).unwrap();
        assert_eq!(removed.name, "b");
        let names: Vec<&str> = checklist.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_invalid_index_leaves_document_untouched() {
        let mut store = memory_store();
        let checklist = store.create(groceries()).unwrap();
        store
            .add_item(&checklist.id, item("Milk", Priority::Normal))
            .unwrap();
        let before = store.get(&checklist.id).unwrap();

        let err = store.delete_item(&checklist.id, 5).unwrap_err();
        assert!(matches!(err, StoreError::InvalidIndex { index: 5, len: 1 }));
        let err = store
            .update_item(&checklist.id, 1, &ItemUpdate::status(ItemStatus::Checked))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidIndex { index: 1, len: 1 }));

        assert_eq!(store.get(&checklist.id).unwrap(), before);
    }

    #[test]
    fn test_not_found_operations() {
        let mut store = memory_store();
        assert!(store.get("missing").unwrap_err().is_not_found());
        assert!(store.delete("missing").unwrap_err().is_not_found());
        assert!(
            store
                .move_checklist("missing", ListStatus::Saved)
                .unwrap_err()
                .is_not_found()
        );
        assert!(store.get("../escape").unwrap_err().is_not_found());
    }

    #[test]
    fn test_malformed_documents_are_skipped_in_listings() {
        let mut store = memory_store();
        let checklist = store.create(groceries()).unwrap();
        store
            .storage()
            .write(partition_dir(ListStatus::Active), "broken.md", "no metadata")
            .unwrap();

        let active = store
            .list(ListStatus::Active, &ChecklistQuery::all())
            .unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, checklist.id);

        let report = store.integrity_report().unwrap();
        assert_eq!(report.checked, 2);
        assert_eq!(report.corrupt.len(), 1);
        assert!(!report.is_healthy());
    }

    #[test]
    fn test_reconcile_prefers_newer_copy() {
        let storage = MemoryStorage::default();
        let mut store = ChecklistStore::open(storage).unwrap();
        let checklist = store.create(groceries()).unwrap();
        let name = format!("{}.md", checklist.id);

        // Simulate a crash between the write and the delete of a move.
        let mut moved = checklist.clone();
        moved.set_status(ListStatus::Saved, Timestamp::now());
        moved.updated_at = checklist.updated_at + 1.second();
        store
            .storage()
            .write(partition_dir(ListStatus::Saved), &name, &codec::encode(&moved))
            .unwrap();

        let ChecklistStore { storage, .. } = store;
        let store = ChecklistStore::open(storage).unwrap();
        assert!(
            store
                .storage()
                .document(partition_dir(ListStatus::Active), &name)
                .is_none()
        );
        assert_eq!(store.get(&checklist.id).unwrap().status, ListStatus::Saved);
    }

    #[test]
    fn test_open_fails_when_a_document_cannot_be_read() {
        let mut store = memory_store();
        store.create(groceries()).unwrap();
        store
            .storage()
            .fail_reads_from(partition_dir(ListStatus::Active));

        let ChecklistStore { storage, .. } = store;
        let err = ChecklistStore::open(storage).err().unwrap();
        assert!(matches!(err, StoreError::FileSystem { .. }));
    }

    #[test]
    fn test_search_concatenates_partitions_in_order() {
        let mut store = memory_store();
        let history = store
            .create(NewChecklist {
                name: "Trip packing".to_string(),
                status: ListStatus::History,
                ..groceries()
            })
            .unwrap();
        let active = store
            .create(NewChecklist {
                name: "Trip plan".to_string(),
                ..groceries()
            })
            .unwrap();
        store
            .create(NewChecklist {
                name: "Chores".to_string(),
                ..groceries()
            })
            .unwrap();

        let found = store
            .search(&ChecklistQuery::search("trip", SearchMode::Default))
            .unwrap();
        let ids: Vec<&str> = found.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec![active.id.as_str(), history.id.as_str()]);

        let by_name = store
            .search(&ChecklistQuery::search("trip", SearchMode::Name).with_order(ChecklistOrder::Name))
            .unwrap();
        assert_eq!(by_name[0].name, "Trip packing");
    }

    #[test]
    fn test_items_query_keeps_stored_indices() {
        let mut store = memory_store();
        let checklist = store.create(groceries()).unwrap();
        store
            .add_item(&checklist.id, item("Low", Priority::Low))
            .unwrap();
        store
            .add_item(&checklist.id, item("High", Priority::High))
            .unwrap();

        let items = store
            .items(
                &checklist.id,
                &ItemQuery {
                    order: ItemOrder::Priority,
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(items[0].index, 1);
        assert_eq!(items[0].item.name, "High");
    }

    #[test]
    fn test_statistics_targets_and_clear_history() {
        let mut store = memory_store();
        let now = Timestamp::now();
        let overdue = store
            .create(NewChecklist {
                target_at: Some(now - 48.hours()),
                ..groceries()
            })
            .unwrap();
        store
            .create(NewChecklist {
                target_at: Some(now + 48.hours()),
                status: ListStatus::Saved,
                ..groceries()
            })
            .unwrap();
        store
            .create(NewChecklist {
                target_at: Some(now - 48.hours()),
                status: ListStatus::History,
                ..groceries()
            })
            .unwrap();
        store
            .add_item(&overdue.id, item("Milk", Priority::Normal))
            .unwrap();

        let stats = store.statistics().unwrap();
        assert_eq!(
            (stats.active_lists, stats.saved_lists, stats.history_lists),
            (1, 1, 1)
        );
        assert_eq!(stats.total_items, 1);

        let targets = store.targets(now).unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].id, overdue.id);
        assert!(targets[0].overdue);
        assert!(!targets[1].overdue);

        assert_eq!(store.clear_history().unwrap(), 1);
        assert_eq!(store.statistics().unwrap().history_lists, 0);
    }

    #[test]
    fn test_categories_persist_on_disk() {
        let dir = TempDir::new().unwrap();
        let mut store = ChecklistStore::open_dir(dir.path()).unwrap();
        assert_eq!(store.categories().len(), 4);

        let garden = store.save_category("Garden", "Outdoor work", "leaf").unwrap();
        assert!(crate::store::categories::PALETTE.contains(&garden.color.as_str()));

        let renamed = store
            .rename_category("Garden", "Yard", None, Some("tree"))
            .unwrap();
        assert_eq!(renamed.color, garden.color);
        assert_eq!(renamed.description, "Outdoor work");

        let reopened = ChecklistStore::open(FsStorage::new(dir.path())).unwrap();
        let names: Vec<&str> = reopened
            .categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Personal", "Work", "Shopping", "Uncategorized", "Yard"]);
        assert!(dir.path().join("categories/categories.json").is_file());
        assert!(dir.path().join("lists").is_dir());
    }

    #[test]
    fn test_item_names_are_validated_before_writing() {
        let mut store = memory_store();
        let checklist = store.create(groceries()).unwrap();
        store
            .add_item(&checklist.id, item("Milk", Priority::Normal))
            .unwrap();
        let name = format!("{}.md", checklist.id);
        let before = store
            .storage()
            .document(partition_dir(ListStatus::Active), &name)
            .unwrap();

        let rejected_names = ["", "   ", "Bread \u{26a1}", "Beans \u{2b07}", "Eggs\n- [x] Ghost"];
        for bad in rejected_names {
            let err = store
                .add_item(&checklist.id, item(bad, Priority::Normal))
                .unwrap_err();
            assert!(matches!(err, StoreError::InvalidInput { .. }), "{bad:?}");

            let update = ItemUpdate {
                name: Some(bad.to_string()),
                ..Default::default()
            };
            let err = store.update_item(&checklist.id, 0, &update).unwrap_err();
            assert!(matches!(err, StoreError::InvalidInput { .. }), "{bad:?}");
        }

        let after = store
            .storage()
            .document(partition_dir(ListStatus::Active), &name)
            .unwrap();
        assert_eq!(before, after);
        let reloaded = store.get(&checklist.id).unwrap();
        assert_eq!(reloaded.items.len(), 1);
        assert_eq!(reloaded.items[0].name, "Milk");
    }

    #[test]
    fn test_item_names_are_trimmed_and_keep_their_priority() {
        let mut store = memory_store();
        let checklist = store.create(groceries()).unwrap();
        let (added, _) = store
            .add_item(&checklist.id, item("  Bread\u{26a1}  ", Priority::Normal))
            .unwrap();
        assert_eq!(added.items[0].name, "Bread\u{26a1}");

        let reloaded = store.get(&checklist.id).unwrap();
        assert_eq!(reloaded.items[0].name, "Bread\u{26a1}");
        assert_eq!(reloaded.items[0].priority, Priority::Normal);
    }

    #[test]
    fn test_item_comments_are_normalized_when_added() {
        let mut store = memory_store();
        let checklist = store.create(groceries()).unwrap();
        let new = NewItem {
            name: "Bread".to_string(),
            comments: Some("whole grain\rsliced\r\nfresh".to_string()),
            priority: Priority::High,
        };
        let (added, _) = store.add_item(&checklist.id, new).unwrap();
        assert_eq!(
            added.items[0].comments.as_deref(),
            Some("whole grain\nsliced\nfresh")
        );

        let reloaded = store.get(&checklist.id).unwrap();
        assert_eq!(reloaded.items, added.items);

        let blank = NewItem {
            name: "Milk".to_string(),
            comments: Some("  ".to_string()),
            priority: Priority::Normal,
        };
        let (added, _) = store.add_item(&checklist.id, blank).unwrap();
        assert_eq!(added.items[1].comments, None);
    }
}
