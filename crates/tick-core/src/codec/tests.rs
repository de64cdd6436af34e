#[cfg(test)]
mod codec_tests {
    use jiff::Timestamp;

    use crate::codec::{ParseError, decode, encode, split_document};
    use crate::models::{Checklist, Item, ItemStatus, ListStatus, Priority, UNCATEGORIZED};

    fn create_test_checklist() -> Checklist {
        Checklist {
            id: "1640995200000_abc123xyz".to_string(),
            name: "Groceries".to_string(),
            description: "Weekly run".to_string(),
            category: "Shopping".to_string(),
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            target_at: Some(Timestamp::from_second(1641254400).unwrap()),
            completed_at: None,
            updated_at: Timestamp::from_second(1641081600).unwrap(),
            status: ListStatus::Active,
            continual: true,
            favorite: false,
            items: vec![
                Item::new("Milk").with_status(ItemStatus::Checked),
                Item::new("Bread")
                    .with_priority(Priority::High)
                    .with_comments("whole grain"),
                Item::new("Eggs").with_status(ItemStatus::CheckedAlt),
                Item::new("Napkins").with_priority(Priority::Low),
            ],
        }
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let checklist = create_test_checklist();
        let decoded = decode(&encode(&checklist)).unwrap();
        assert_eq!(decoded, checklist);
        assert_eq!(decoded.completed_count(), 2);
        assert_eq!(decoded.total_count(), 4);
    }

    #[test]
    fn test_encoded_layout() {
        let text = encode(&create_test_checklist());
        let expected_body = "\
# Groceries

Weekly run

## Items

- [x] Milk
- [ ] Bread ⚡
  > whole grain
- [X] Eggs
- [ ] Napkins ⬇
";
        assert!(text.starts_with("---\nid: \"1640995200000_abc123xyz\"\n"));
        assert!(text.contains("continual: 1\n"));
        assert!(text.contains("favorite: 0\n"));
        assert!(text.contains("completion_dt: \"\"\n---\n\n"));
        assert!(text.ends_with(expected_body), "unexpected body:\n{text}");
    }

    #[test]
    fn test_round_trip_escapes_metadata_strings() {
        let mut checklist = create_test_checklist();
        checklist.name = "Say \"hi\" \\ wave".to_string();
        checklist.description = "line one\nline two\twith tab".to_string();

        let decoded = decode(&encode(&checklist)).unwrap();
        assert_eq!(decoded.name, checklist.name);
        assert_eq!(decoded.description, checklist.description);
    }

    #[test]
    fn test_round_trip_multi_line_comments() {
        let mut checklist = create_test_checklist();
        checklist.items = vec![
            Item::new("Pack").with_comments("socks\n  indented line\n\nafter blank"),
            Item::new("Go"),
        ];

        let decoded = decode(&encode(&checklist)).unwrap();
        assert_eq!(
            decoded.items[0].comments.as_deref(),
            Some("socks\n  indented line\n\nafter blank")
        );
        assert_eq!(decoded.items[1].comments, None);
    }

    #[test]
    fn test_zero_items_writes_placeholder_and_decodes_empty() {
        let mut checklist = create_test_checklist();
        checklist.items.clear();

        let text = encode(&checklist);
        assert!(text.ends_with("## Items\n\n- [ ] \n"));

        let decoded = decode(&text).unwrap();
        assert!(decoded.items.is_empty());
        assert_eq!(decoded.total_count(), 0);
    }

    #[test]
    fn test_empty_description_is_omitted_from_body() {
        let mut checklist = create_test_checklist();
        checklist.description.clear();
        let text = encode(&checklist);
        assert!(text.contains("# Groceries\n\n## Items\n"));
        assert_eq!(decode(&text).unwrap().description, "");
    }

    #[test]
    fn test_history_completion_round_trips() {
        let mut checklist = create_test_checklist();
        checklist.set_status(
            ListStatus::History,
            Timestamp::from_second(1641168000).unwrap(),
        );
        let decoded = decode(&encode(&checklist)).unwrap();
        assert_eq!(decoded.status, ListStatus::History);
        assert_eq!(decoded.completed_at, checklist.completed_at);
    }

    #[test]
    fn test_checkbox_lines_in_description_are_not_items() {
        let mut checklist = create_test_checklist();
        checklist.description = "Remember:\n- [ ] not an item".to_string();
        let decoded = decode(&encode(&checklist)).unwrap();
        assert_eq!(decoded.total_count(), 4);
        assert_eq!(decoded.items[0].name, "Milk");
    }

    #[test]
    fn test_hand_written_document_with_prose() {
        let text = "\
---
id: 42
name: Trip
status: saved
creation_dt: 2024-05-01
---

# Trip

## Items

- [ ] Passport
  > check expiry
Some prose in between
  > ignored continuation
- [x] Tickets
";
        let checklist = decode(text).unwrap();
        assert_eq!(checklist.id, "42");
        assert_eq!(checklist.status, ListStatus::Saved);
        assert_eq!(checklist.category, UNCATEGORIZED);
        assert_eq!(checklist.created_at.to_string(), "2024-05-01T00:00:00Z");
        assert_eq!(checklist.updated_at, checklist.created_at);
        assert!(!checklist.favorite);
        assert_eq!(checklist.items.len(), 2);
        assert_eq!(checklist.items[0].comments.as_deref(), Some("check expiry"));
        assert_eq!(checklist.items[1].status, ItemStatus::Checked);
    }

    #[test]
    fn test_legacy_status_aliases() {
        let text = "---\nid: \"a\"\nname: \"n\"\nstatus: \"completed\"\ncreation_dt: \"2024-01-01T00:00:00Z\"\n---\n";
        assert_eq!(decode(text).unwrap().status, ListStatus::History);

        let text = text.replace("completed", "lists");
        assert_eq!(decode(&text).unwrap().status, ListStatus::Active);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let text = "---\nid: \"a\"\nname: \"n\"\nstatus: \"active\"\ncreation_dt: \"2024-01-01T00:00:00Z\"\ncolour: \"red\"\n---\n";
        assert!(decode(text).is_ok());
    }

    #[test]
    fn test_missing_metadata_is_rejected() {
        assert_eq!(
            decode("# Groceries\n\n- [ ] Milk\n"),
            Err(ParseError::MissingMetadata)
        );
        assert_eq!(decode(""), Err(ParseError::MissingMetadata));
    }

    #[test]
    fn test_unterminated_metadata_is_rejected() {
        assert_eq!(
            decode("---\nid: \"a\"\nname: \"n\"\n"),
            Err(ParseError::UnterminatedMetadata)
        );
    }

    #[test]
    fn test_missing_required_key_is_rejected() {
        let text = "---\nid: \"a\"\nstatus: \"active\"\ncreation_dt: \"2024-01-01T00:00:00Z\"\n---\n";
        assert_eq!(decode(text), Err(ParseError::MissingKey("name")));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_status = "---\nid: \"a\"\nname: \"n\"\nstatus: \"paused\"\ncreation_dt: \"2024-01-01T00:00:00Z\"\n---\n";
        assert!(matches!(
            decode(bad_status),
            Err(ParseError::InvalidValue { ref key, .. }) if key == "status"
        ));

        let bad_date = "---\nid: \"a\"\nname: \"n\"\nstatus: \"active\"\ncreation_dt: \"yesterday\"\n---\n";
        assert!(matches!(
            decode(bad_date),
            Err(ParseError::InvalidValue { ref key, .. }) if key == "creation_dt"
        ));

        let unterminated = "---\nid: \"a\nname: \"n\"\n---\n";
        assert!(matches!(
            decode(unterminated),
            Err(ParseError::InvalidValue { ref key, .. }) if key == "id"
        ));
    }

    #[test]
    fn test_line_without_separator_is_rejected() {
        let text = "---\nid: \"a\"\njust words\n---\n";
        assert_eq!(decode(text), Err(ParseError::InvalidLine { line: 3 }));
    }

    #[test]
    fn test_split_document_strips_bom_and_crlf() {
        let (metadata, body) = split_document("\u{feff}---\r\nid: 1\r\n---\r\n# T\r\n").unwrap();
        assert_eq!(metadata, vec!["id: 1"]);
        assert_eq!(body, vec!["# T"]);
    }
}
