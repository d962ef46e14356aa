use mapi_model::{CanonicalName, ModelError, SourceTable, TagEntry, TagId, TagValue};
use proptest::prelude::*;

#[test]
fn tag_value_parses_hex_and_decimal() {
    assert_eq!("0x3001".parse::<TagValue>().unwrap(), TagValue::new(0x3001));
    assert_eq!("0X0E1D".parse::<TagValue>().unwrap(), TagValue::new(0x0E1D));
    assert_eq!("12289".parse::<TagValue>().unwrap(), TagValue::new(0x3001));
    assert_eq!(
        "0xZZ".parse::<TagValue>(),
        Err(ModelError::InvalidTagValue("0xZZ".to_string()))
    );
}

#[test]
fn tag_value_renders_as_padded_hex() {
    assert_eq!(TagValue::new(0x3001).to_string(), "0x3001");
    assert_eq!(TagValue::new(0x1A).to_string(), "0x001A");
    assert_eq!(TagValue::new(0x8000_0001).to_string(), "0x80000001");
}

#[test]
fn canonical_name_rejects_bad_shapes() {
    for bad in ["", "_a", "a_", "a__b", "a-b", "dísplay", "a b"] {
        assert!(CanonicalName::new(bad).is_err(), "{bad:?} should be rejected");
    }
    assert!(CanonicalName::new("x400_deferred_delivery_cancel").is_ok());
}

#[test]
fn entry_serializes_with_orig_id_key() {
    let entry = TagEntry::from_candidates(
        &[CanonicalName::new("display_name").unwrap()],
        vec!["PR_DISPLAY_NAME".to_string(), "PidTagDisplayName".to_string()],
    );
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["id"], "display_name");
    assert_eq!(json["-orig-id"][1], "PidTagDisplayName");
}

#[test]
fn recorded_placeholder_deserializes_as_unresolved() {
    let entry: TagEntry =
        serde_json::from_str(r#"{"id": "unkn", "-orig-id": ["PR_FOO", "PR_FOO"]}"#).unwrap();
    assert_eq!(entry.id(), &TagId::Unresolved);
    assert_eq!(entry.orig_ids().len(), 2);

    let bad = serde_json::from_str::<TagEntry>(r#"{"id": "bad__id", "-orig-id": []}"#);
    assert!(bad.is_err());
}

#[test]
fn source_table_iterates_in_tag_then_source_order() {
    let mut table = SourceTable::new("mapitags.h");
    table.push(TagValue::new(0x3001), "PR_DISPLAY_NAME");
    table.push(TagValue::new(0x0FFF), "PR_ENTRYID");
    table.push(TagValue::new(0x3001), "PR_DISPLAY_NAME_W");

    let seen: Vec<(String, &str)> = table
        .identifiers()
        .map(|raw| (raw.tag.to_string(), raw.text))
        .collect();
    assert_eq!(
        seen,
        vec![
            ("0x0FFF".to_string(), "PR_ENTRYID"),
            ("0x3001".to_string(), "PR_DISPLAY_NAME"),
            ("0x3001".to_string(), "PR_DISPLAY_NAME_W"),
        ]
    );
    assert!(table.identifiers().all(|raw| raw.source == "mapitags.h"));
}

proptest! {
    #[test]
    fn grammar_accepts_exactly_well_formed_names(s in "[a-z_]{0,10}") {
        let expected = !s.is_empty()
            && !s.starts_with('_')
            && !s.ends_with('_')
            && !s.contains("__");
        prop_assert_eq!(CanonicalName::new(s.clone()).is_ok(), expected);
    }

    #[test]
    fn decimal_and_hex_spellings_agree(v in any::<u32>()) {
        let decimal: TagValue = v.to_string().parse().unwrap();
        let hex: TagValue = format!("0x{v:x}").parse().unwrap();
        prop_assert_eq!(decimal, hex);
    }
}
