#[cfg(test)]
mod query_tests {
    use jiff::Timestamp;

    use crate::{
        models::{Checklist, Item, ItemStatus, ListStatus, Priority},
        query::{
            ChecklistOrder, ChecklistQuery, ItemOrder, ItemQuery, SearchMode, SortDirection,
            sort_checklists,
        },
    };

    fn checklist(name: &str, created: i64, target: Option<i64>) -> Checklist {
        Checklist {
            id: format!("{created}_{name}"),
            name: name.to_string(),
            description: String::new(),
            category: "Personal".to_string(),
            created_at: Timestamp::from_second(created).unwrap(),
            target_at: target.map(|t| Timestamp::from_second(t).unwrap()),
            completed_at: None,
            updated_at: Timestamp::from_second(created).unwrap(),
            status: ListStatus::Active,
            continual: false,
            favorite: false,
            items: Vec::new(),
        }
    }

    fn names(checklists: &[Checklist]) -> Vec<&str> {
        checklists.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_default_order_is_newest_first() {
        let mut checklists = vec![
            checklist("old", 100, None),
            checklist("new", 300, None),
            checklist("mid", 200, None),
        ];
        sort_checklists(&mut checklists, ChecklistOrder::default(), None);
        assert_eq!(names(&checklists), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_target_order_puts_undated_last_in_both_directions() {
        let base = vec![
            checklist("none-a", 1, None),
            checklist("late", 2, Some(2000)),
            checklist("none-b", 3, None),
            checklist("early", 4, Some(1000)),
        ];

        let mut ascending = base.clone();
        sort_checklists(&mut ascending, ChecklistOrder::Target, None);
        assert_eq!(names(&ascending), vec!["early", "late", "none-a", "none-b"]);

        let mut descending = base;
        sort_checklists(
            &mut descending,
            ChecklistOrder::Target,
            Some(SortDirection::Descending),
        );
        assert_eq!(names(&descending), vec!["late", "early", "none-a", "none-b"]);

        // Already sorted input stays put.
        let mut again = ascending.clone();
        sort_checklists(&mut again, ChecklistOrder::Target, None);
        assert_eq!(names(&again), names(&ascending));
    }

    #[test]
    fn test_search_modes() {
        let mut trip = checklist("Trip", 1, None);
        trip.description = "Pack the TENT".to_string();
        let mut work = checklist("Work stuff", 2, None);
        work.category = "Work".to_string();
        let all = vec![trip, work];

        let found = ChecklistQuery::search("tent", SearchMode::Default).apply(all.clone());
        assert_eq!(names(&found), vec!["Trip"]);

        let found = ChecklistQuery::search("tent", SearchMode::Name).apply(all.clone());
        assert!(found.is_empty());

        let found = ChecklistQuery::search("WORK", SearchMode::Category).apply(all.clone());
        assert_eq!(names(&found), vec!["Work stuff"]);

        let found = ChecklistQuery::search("wor", SearchMode::Category).apply(all.clone());
        assert!(found.is_empty());

        let found = ChecklistQuery::search("   ", SearchMode::Default).apply(all);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_favorite_filter_and_unsorted_apply() {
        let mut favorite = checklist("b", 1, None);
        favorite.favorite = true;
        let all = vec![checklist("c", 2, None), favorite, checklist("a", 3, None)];

        let kept = ChecklistQuery::all().with_favorite(false).apply(all.clone());
        assert_eq!(names(&kept), vec!["c", "a"]);

        let sorted = ChecklistQuery::all()
            .with_order(ChecklistOrder::Name)
            .with_direction(SortDirection::Descending)
            .apply(all);
        assert_eq!(names(&sorted), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_order_parsing() {
        assert_eq!("target_dt".parse::<ChecklistOrder>().unwrap(), ChecklistOrder::Target);
        assert_eq!("priority".parse::<ItemOrder>().unwrap(), ItemOrder::Priority);
        assert_eq!("category".parse::<SearchMode>().unwrap(), SearchMode::Category);
        assert!("size".parse::<ChecklistOrder>().is_err());
    }

    fn items() -> Vec<Item> {
        vec![
            Item::new("Cheese").with_priority(Priority::Low),
            Item::new("Apples").with_status(ItemStatus::Checked),
            Item::new("Bread")
                .with_priority(Priority::High)
                .with_comments("sourdough"),
        ]
    }

    #[test]
    fn test_item_orders_keep_stored_index() {
        let by_name = ItemQuery {
            order: ItemOrder::Name,
            ..Default::default()
        }
        .apply(&items());
        let indices: Vec<usize> = by_name.iter().map(|i| i.index).collect();
        assert_eq!(indices, vec![1, 2, 0]);

        let by_priority = ItemQuery {
            order: ItemOrder::Priority,
            ..Default::default()
        }
        .apply(&items());
        let indices: Vec<usize> = by_priority.iter().map(|i| i.index).collect();
        assert_eq!(indices, vec![2, 1, 0]);

        let by_status = ItemQuery {
            order: ItemOrder::Status,
            ..Default::default()
        }
        .apply(&items());
        assert_eq!(by_status.last().map(|i| i.index), Some(1));

        let stored = ItemQuery::default().apply(&items());
        let indices: Vec<usize> = stored.iter().map(|i| i.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_item_filters() {
        let checked = ItemQuery {
            status: Some(ItemStatus::Checked),
            ..Default::default()
        }
        .apply(&items());
        assert_eq!(checked.len(), 1);
        assert_eq!(checked[0].item.name, "Apples");

        let by_comment = ItemQuery {
            search: Some("SOUR".to_string()),
            ..Default::default()
        }
        .apply(&items());
        assert_eq!(by_comment.len(), 1);
        assert_eq!(by_comment[0].index, 2);
    }
}
