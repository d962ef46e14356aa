//! Candidate names for one tag value.

use std::collections::BTreeSet;

use mapi_model::CanonicalName;

use crate::cleanup::is_admissible;
use crate::decoration::canonicalize_orig_name;
use crate::pipeline::Normalizer;

/// Deduplicated raw spellings and the names derived from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreparedNames {
    /// Raw spellings after width-marker stripping, first-seen order.
    pub orig_ids: Vec<String>,
    /// Names derived from the admissible spellings.
    pub names: Vec<CanonicalName>,
}

/// Removes repeats, keeping the first occurrence of each item.
pub fn dedup_preserving_order<I, T>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Ord + Clone,
{
    let mut seen = BTreeSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Canonicalizes and deduplicates `orig_ids`, then derives a name from
/// every admissible one.
///
/// With `sort` the names come back sorted and unique; otherwise unique in
/// the order their first source spelling appeared.
pub fn prepare_names_and_orig_ids<I, S>(
    normalizer: &Normalizer,
    orig_ids: I,
    sort: bool,
) -> PreparedNames
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let orig_ids: Vec<String> = dedup_preserving_order(
        orig_ids
            .into_iter()
            .map(|raw| canonicalize_orig_name(raw.as_ref()).to_string()),
    );
    let derived = orig_ids
        .iter()
        .filter(|raw| is_admissible(raw))
        .filter_map(|raw| normalizer.normalize_canonicalized(raw));
    let names = if sort {
        derived.collect::<BTreeSet<_>>().into_iter().collect()
    } else {
        dedup_preserving_order(derived)
    };
    PreparedNames { orig_ids, names }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence() {
        assert_eq!(dedup_preserving_order([3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn width_variants_collapse_before_dedup() {
        let prepared = prepare_names_and_orig_ids(
            &Normalizer::new(),
            ["PR_DISPLAY_NAME_W", "PR_DISPLAY_NAME_A", "PR_DISPLAY_NAME"],
            true,
        );
        assert_eq!(prepared.orig_ids, vec!["PR_DISPLAY_NAME".to_string()]);
        assert_eq!(prepared.names.len(), 1);
    }

    #[test]
    fn width_marker_is_stripped_only_once() {
        let prepared =
            prepare_names_and_orig_ids(&Normalizer::new(), ["PR_SUBJECT_A_W"], true);
        assert_eq!(prepared.orig_ids, vec!["PR_SUBJECT_A".to_string()]);
        let names: Vec<&str> = prepared.names.iter().map(CanonicalName::as_str).collect();
        assert_eq!(names, vec!["subject_a"]);
    }

    #[test]
    fn inadmissible_ids_are_kept_but_not_named() {
        let prepared = prepare_names_and_orig_ids(
            &Normalizer::new(),
            ["PR_BODY", "PR_BODY (obsolete)"],
            true,
        );
        assert_eq!(prepared.orig_ids.len(), 2);
        assert_eq!(prepared.names.len(), 1);
        assert_eq!(prepared.names[0].as_str(), "body");
    }
}
