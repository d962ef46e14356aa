//! The canonical tag table and its two passes.
//!
//! 1. [`TagTable::merge_source`] folds each source's raw names into the
//!    table. A tag whose names disagree gets the `unkn` placeholder.
//! 2. [`TagTable::normalize_unique_names`] runs once after every source is
//!    in and clears placeholders whose disagreement was only a duplicated
//!    spelling.
//!
//! Whatever is still `unkn` afterwards needs a human; see
//! [`TagTable::non_unique_names`].

use std::collections::BTreeMap;

use mapi_model::{CanonicalName, SourceRecord, SourceTable, TagEntry, TagId, TagValue};
use mapi_normalize::{Normalizer, prepare_names_and_orig_ids};
use serde::{Deserialize, Serialize};

/// Joins candidate names in a disjunctive id (`foo_or_bar`).
pub const DISJUNCTION_SEPARATOR: &str = "_or_";

/// Counts from merging one source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Tag values the source mentioned.
    pub tags: usize,
    /// Tags added to the table by this source.
    pub new_tags: usize,
    /// Tags left unresolved after the merge.
    pub unresolved: usize,
}

/// Why a tag carries the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedReason {
    /// Two or more distinct names; a real naming conflict.
    Conflict,
    /// None of the spellings yields a valid name.
    NoCandidates,
    /// One name, but the resolution pass has not collapsed the spellings.
    SingleCandidate,
}

impl UnresolvedReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conflict => "conflict",
            Self::NoCandidates => "no candidates",
            Self::SingleCandidate => "single candidate",
        }
    }
}

/// A tag that still has no single name, with everything needed to pick one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedTag {
    pub tag: TagValue,
    pub orig_ids: Vec<String>,
    pub candidates: Vec<CanonicalName>,
}

impl UnresolvedTag {
    pub fn reason(&self) -> UnresolvedReason {
        match self.candidates.len() {
            0 => UnresolvedReason::NoCandidates,
            1 => UnresolvedReason::SingleCandidate,
            _ => UnresolvedReason::Conflict,
        }
    }

    /// `a_or_b` for two or more candidates; `None` when nothing was derivable.
    pub fn disjunctive_id(&self) -> Option<String> {
        if self.candidates.len() < 2 {
            return None;
        }
        Some(
            self.candidates
                .iter()
                .map(CanonicalName::as_str)
                .collect::<Vec<_>>()
                .join(DISJUNCTION_SEPARATOR),
        )
    }
}

/// Canonical names for every tag value, plus the sources they came from.
///
/// Entries are keyed by tag value, so iteration is always in ascending tag
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagTable {
    #[serde(default)]
    sources: Vec<SourceRecord>,
    #[serde(default)]
    tags: BTreeMap<TagValue, TagEntry>,
}

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn get(&self, tag: TagValue) -> Option<&TagEntry> {
        self.tags.get(&tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TagValue, &TagEntry)> {
        self.tags.iter().map(|(tag, entry)| (*tag, entry))
    }

    pub fn sources(&self) -> &[SourceRecord] {
        &self.sources
    }

    /// Puts back an entry recorded by an earlier run, as is.
    pub fn insert_entry(&mut self, tag: TagValue, entry: TagEntry) -> Option<TagEntry> {
        self.tags.insert(tag, entry)
    }

    /// Merges the raw names one source gives for `tag`.
    ///
    /// The entry's recorded spellings are extended with `raws` and the id is
    /// derived again from all of them, so the result does not depend on the
    /// order sources arrive in.
    pub fn merge_tag<S: AsRef<str>>(
        &mut self,
        normalizer: &Normalizer,
        tag: TagValue,
        raws: &[S],
    ) -> &TagEntry {
        let previous = self.tags.remove(&tag);
        let combined = previous
            .iter()
            .flat_map(|entry| entry.orig_ids().iter().map(String::as_str))
            .chain(raws.iter().map(AsRef::as_ref));
        let prepared = prepare_names_and_orig_ids(normalizer, combined, true);
        let entry = TagEntry::from_candidates(&prepared.names, prepared.orig_ids);
        if entry.is_unresolved() {
            tracing::debug!(
                %tag,
                candidates = prepared.names.len(),
                "tag has no single name"
            );
        }
        self.tags.entry(tag).or_insert(entry)
    }

    /// Merges every tag of one source's table.
    pub fn merge_source(&mut self, normalizer: &Normalizer, source: &SourceTable) -> MergeStats {
        let _span = tracing::debug_span!("merge_source", source = %source.source).entered();
        let mut by_tag: BTreeMap<TagValue, Vec<&str>> = BTreeMap::new();
        for raw in source.identifiers() {
            tracing::trace!(tag = %raw.tag, raw = raw.text, source = raw.source, "raw identifier");
            by_tag.entry(raw.tag).or_default().push(raw.text);
        }

        let mut stats = MergeStats {
            tags: by_tag.len(),
            ..MergeStats::default()
        };
        for (tag, raws) in by_tag {
            if !self.tags.contains_key(&tag) {
                stats.new_tags += 1;
            }
            if self.merge_tag(normalizer, tag, &raws).is_unresolved() {
                stats.unresolved += 1;
            }
        }
        stats
    }

    /// Records a source's provenance once.
    pub fn insert_source(&mut self, uri: &str, license: &str) -> bool {
        let record = SourceRecord::new(uri, license);
        if self.sources.contains(&record) {
            return false;
        }
        self.sources.push(record);
        true
    }

    /// Orders entries by tag value.
    ///
    /// Entries live in a `BTreeMap`, so this never has anything to do; it is
    /// kept so callers can state the step explicitly before dumping.
    pub fn sort_by_key(&mut self) {}

    /// Resolves placeholders whose recorded spellings collapse to one.
    ///
    /// Spellings are compared after width-marker stripping. The surviving
    /// spelling is normalized again and becomes the only recorded one.
    /// Returns how many entries were resolved.
    pub fn normalize_unique_names(&mut self, normalizer: &Normalizer) -> usize {
        let mut resolved = 0;
        for (tag, entry) in self.tags.iter_mut().filter(|(_, e)| e.is_unresolved()) {
            let prepared = prepare_names_and_orig_ids(normalizer, entry.orig_ids(), true);
            let [orig_id] = prepared.orig_ids.as_slice() else {
                continue;
            };
            let Some(name) = normalizer.normalize_canonicalized(orig_id) else {
                continue;
            };
            tracing::debug!(%tag, %name, orig_id = %orig_id, "resolved duplicated spelling");
            entry.resolve(name, orig_id.clone());
            resolved += 1;
        }
        resolved
    }

    /// Every tag still carrying the placeholder, with its candidate names.
    ///
    /// Candidates are derived again from the recorded spellings; `sort`
    /// chooses sorted order over first-seen order.
    pub fn non_unique_names(&self, normalizer: &Normalizer, sort: bool) -> Vec<UnresolvedTag> {
        self.tags
            .iter()
            .filter(|(_, entry)| entry.is_unresolved())
            .map(|(tag, entry)| {
                let prepared = prepare_names_and_orig_ids(normalizer, entry.orig_ids(), sort);
                UnresolvedTag {
                    tag: *tag,
                    orig_ids: entry.orig_ids().to_vec(),
                    candidates: prepared.names,
                }
            })
            .collect()
    }

    pub fn unresolved_count(&self) -> usize {
        self.tags.values().filter(|e| e.is_unresolved()).count()
    }

    /// Tags whose id does not match the names derivable from their spellings:
    /// a name must be the only candidate, and a placeholder must not have
    /// exactly one.
    pub fn invariant_violations(&self, normalizer: &Normalizer) -> Vec<TagValue> {
        self.tags
            .iter()
            .filter(|(_, entry)| {
                let prepared = prepare_names_and_orig_ids(normalizer, entry.orig_ids(), true);
                match entry.id() {
                    TagId::Name(name) => prepared.names.as_slice() != std::slice::from_ref(name),
                    TagId::Unresolved => prepared.names.len() == 1,
                }
            })
            .map(|(tag, _)| *tag)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(v: u32) -> TagValue {
        TagValue::new(v)
    }

    #[test]
    fn agreeing_spellings_share_one_id() {
        let mut table = TagTable::new();
        let entry = table.merge_tag(
            &Normalizer::new(),
            tag(0x3001),
            &["PR_DISPLAY_NAME", "PR_DISPLAY_NAME_W", "PidTagDisplayName"],
        );
        assert_eq!(entry.id().as_str(), "display_name");
        assert_eq!(entry.orig_ids(), ["PR_DISPLAY_NAME", "PidTagDisplayName"]);
    }

    #[test]
    fn disagreement_gets_placeholder() {
        let mut table = TagTable::new();
        let entry = table.merge_tag(&Normalizer::new(), tag(0x0E1D), &["PR_FOO", "PR_BAR"]);
        assert!(entry.is_unresolved());
        assert_eq!(entry.id().as_str(), "unkn");
    }

    #[test]
    fn later_source_extends_recorded_spellings() {
        let normalizer = Normalizer::new();
        let mut table = TagTable::new();
        table.merge_tag(&normalizer, tag(0x1000), &["PR_BODY"]);
        let entry = table.merge_tag(&normalizer, tag(0x1000), &["PidTagBody", "PR_BODY_W"]);
        assert_eq!(entry.id().as_str(), "body");
        assert_eq!(entry.orig_ids(), ["PR_BODY", "PidTagBody"]);
    }

    #[test]
    fn merge_strips_one_width_marker() {
        let mut table = TagTable::new();
        let entry = table.merge_tag(&Normalizer::new(), tag(0x0037), &["PR_SUBJECT_A_W"]);
        assert_eq!(entry.id().as_str(), "subject_a");
        assert_eq!(entry.orig_ids(), ["PR_SUBJECT_A"]);
    }

    #[test]
    fn merge_source_reports_counts() {
        let normalizer = Normalizer::new();
        let mut table = TagTable::new();
        table.merge_tag(&normalizer, tag(0x1000), &["PR_BODY"]);

        let mut source = SourceTable::new("oxprops");
        source.push(tag(0x1000), "PidTagBody");
        source.push(tag(0x0E1D), "PR_FOO");
        source.push(tag(0x0E1D), "PR_BAR");
        let stats = table.merge_source(&normalizer, &source);

        assert_eq!(
            stats,
            MergeStats {
                tags: 2,
                new_tags: 1,
                unresolved: 1,
            }
        );
    }

    #[test]
    fn provenance_is_recorded_once() {
        let mut table = TagTable::new();
        assert!(table.insert_source("https://example.org/mapitags.h", "MIT"));
        assert!(!table.insert_source("https://example.org/mapitags.h", "MIT"));
        assert_eq!(table.sources().len(), 1);
    }

    #[test]
    fn disjunctive_id_needs_two_candidates() {
        let unresolved = UnresolvedTag {
            tag: tag(1),
            orig_ids: vec!["PR_FOO".into(), "PR_BAR".into()],
            candidates: vec![
                CanonicalName::new("bar").unwrap(),
                CanonicalName::new("foo").unwrap(),
            ],
        };
        assert_eq!(unresolved.disjunctive_id().as_deref(), Some("bar_or_foo"));

        assert_eq!(unresolved.reason(), UnresolvedReason::Conflict);

        let single = UnresolvedTag {
            candidates: vec![CanonicalName::new("foo").unwrap()],
            ..unresolved.clone()
        };
        assert_eq!(single.reason(), UnresolvedReason::SingleCandidate);
        assert_eq!(single.disjunctive_id(), None);

        let empty = UnresolvedTag {
            candidates: vec![],
            ..unresolved
        };
        assert_eq!(empty.reason(), UnresolvedReason::NoCandidates);
        assert_eq!(empty.disjunctive_id(), None);
    }
}
