use std::cell::Cell;
use std::path::Path;

use mapi_core::{CoreError, Source, SourceError, TagTable, fetch_sources, full_pipeline};
use mapi_model::{CanonicalName, SourceTable, TagEntry, TagId, TagValue};
use mapi_normalize::Normalizer;

/// A source whose parsed table is fixed up front.
struct FixedSource {
    name: &'static str,
    uri: &'static str,
    table: SourceTable,
    fetches: Cell<usize>,
}

impl FixedSource {
    fn new(name: &'static str, uri: &'static str, entries: &[(u32, &[&str])]) -> Self {
        let mut table = SourceTable::new(name);
        for (tag, raws) in entries {
            for raw in *raws {
                table.push(TagValue::new(*tag), *raw);
            }
        }
        Self {
            name,
            uri,
            table,
            fetches: Cell::new(0),
        }
    }
}

impl Source for FixedSource {
    fn name(&self) -> &str {
        self.name
    }

    fn uri(&self) -> &str {
        self.uri
    }

    fn license(&self) -> &str {
        "MIT"
    }

    fn fetch(&self, _cache_dir: &Path) -> Result<(), SourceError> {
        self.fetches.set(self.fetches.get() + 1);
        Ok(())
    }

    fn parse_enum_values(&self, _cache_dir: &Path) -> Result<SourceTable, SourceError> {
        Ok(self.table.clone())
    }
}

struct BrokenSource;

impl Source for BrokenSource {
    fn name(&self) -> &str {
        "broken"
    }

    fn uri(&self) -> &str {
        "https://example.org/broken"
    }

    fn license(&self) -> &str {
        "MIT"
    }

    fn fetch(&self, _cache_dir: &Path) -> Result<(), SourceError> {
        Ok(())
    }

    fn parse_enum_values(&self, cache_dir: &Path) -> Result<SourceTable, SourceError> {
        Err(SourceError::parse(cache_dir.join("broken.json"), "unexpected end of input"))
    }
}

fn headers() -> FixedSource {
    FixedSource::new(
        "mapitags.h",
        "https://example.org/mapitags.h",
        &[
            (0x0037, &["PR_SUBJECT", "PR_SUBJECT_W"]),
            (0x1000, &["PR_BODY"]),
            (0x8001, &["PR_EMS_AB_MANAGER_T"]),
        ],
    )
}

fn props() -> FixedSource {
    FixedSource::new(
        "ms-oxprops",
        "https://example.org/ms-oxprops",
        &[
            (0x0037, &["PidTagSubject"]),
            (0x1000, &["PidTagBody"]),
            (0x8001, &["PidTagAddressBookManager"]),
        ],
    )
}

fn ids(table: &TagTable) -> Vec<(TagValue, String)> {
    table
        .iter()
        .map(|(tag, entry)| (tag, entry.id().to_string()))
        .collect()
}

#[test]
fn merge_order_does_not_change_ids() {
    let normalizer = Normalizer::new();
    let (a, b) = (headers(), props());
    let cache = Path::new(".");

    let forward = full_pipeline(TagTable::new(), [&a as &dyn Source, &b], cache, &normalizer)
        .expect("forward merge");
    let backward = full_pipeline(TagTable::new(), [&b as &dyn Source, &a], cache, &normalizer)
        .expect("backward merge");

    assert_eq!(ids(&forward), ids(&backward));
    assert_eq!(forward.unresolved_count(), 1);
}

#[test]
fn duplicated_spelling_is_resolved_by_second_pass() {
    let normalizer = Normalizer::new();
    let mut table = TagTable::new();
    table.insert_entry(
        TagValue::new(0x0E1D),
        TagEntry::recorded(
            TagId::Unresolved,
            vec!["PR_FOO".to_string(), "PR_FOO".to_string()],
        ),
    );
    assert_eq!(table.invariant_violations(&normalizer), vec![TagValue::new(0x0E1D)]);

    assert_eq!(table.normalize_unique_names(&normalizer), 1);

    let entry = table.get(TagValue::new(0x0E1D)).expect("entry kept");
    assert_eq!(entry.id().as_str(), "foo");
    assert_eq!(entry.orig_ids(), ["PR_FOO"]);
    assert!(table.invariant_violations(&normalizer).is_empty());
}

#[test]
fn real_disagreement_survives_and_is_reported() {
    let normalizer = Normalizer::new();
    let mut table = TagTable::new();
    table.merge_tag(&normalizer, TagValue::new(0x0E1D), &["PR_FOO", "PR_BAR"]);

    assert_eq!(table.normalize_unique_names(&normalizer), 0);
    assert!(table.invariant_violations(&normalizer).is_empty());

    let report = table.non_unique_names(&normalizer, true);
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].tag, TagValue::new(0x0E1D));
    assert_eq!(report[0].orig_ids, ["PR_FOO", "PR_BAR"]);
    assert_eq!(
        report[0].candidates,
        vec![
            CanonicalName::new("bar").unwrap(),
            CanonicalName::new("foo").unwrap()
        ]
    );
    assert_eq!(report[0].disjunctive_id().as_deref(), Some("bar_or_foo"));

    let first_seen = table.non_unique_names(&normalizer, false);
    assert_eq!(first_seen[0].disjunctive_id().as_deref(), Some("foo_or_bar"));
}

#[test]
fn fetch_visits_every_source_once() {
    let (a, b) = (headers(), props());
    fetch_sources([&a as &dyn Source, &b], Path::new(".")).expect("fetch");
    assert_eq!(a.fetches.get(), 1);
    assert_eq!(b.fetches.get(), 1);
}

#[test]
fn failing_source_names_itself() {
    let a = headers();
    let err = full_pipeline(
        TagTable::new(),
        [&a as &dyn Source, &BrokenSource],
        Path::new("cache"),
        &Normalizer::new(),
    )
    .unwrap_err();

    let CoreError::Source { name, source } = &err;
    assert_eq!(name, "broken");
    assert!(matches!(source, SourceError::Parse { .. }));
    assert!(err.to_string().starts_with("source broken:"));
}

#[test]
fn aggregated_table_snapshot() {
    let normalizer = Normalizer::new();
    let mut seed = TagTable::new();
    seed.insert_entry(
        TagValue::new(0x0E1D),
        TagEntry::recorded(
            TagId::Unresolved,
            vec!["PR_FOO".to_string(), "PR_FOO_W".to_string()],
        ),
    );
    let (a, b) = (headers(), props());
    let table = full_pipeline(seed, [&a as &dyn Source, &b], Path::new("."), &normalizer)
        .expect("pipeline");

    insta::assert_json_snapshot!(table, @r#"
    {
      "sources": [
        {
          "uri": "https://example.org/mapitags.h",
          "license": "MIT"
        },
        {
          "uri": "https://example.org/ms-oxprops",
          "license": "MIT"
        }
      ],
      "tags": {
        "0x0037": {
          "id": "subject",
          "-orig-id": [
            "PR_SUBJECT",
            "PidTagSubject"
          ]
        },
        "0x0E1D": {
          "id": "foo",
          "-orig-id": [
            "PR_FOO"
          ]
        },
        "0x1000": {
          "id": "body",
          "-orig-id": [
            "PR_BODY",
            "PidTagBody"
          ]
        },
        "0x8001": {
          "id": "unkn",
          "-orig-id": [
            "PR_EMS_AB_MANAGER_T",
            "PidTagAddressBookManager"
          ]
        }
      }
    }
    "#);
}
