//! Separator cleanup and the final grammar check.

use std::sync::LazyLock;

use mapi_model::CanonicalName;
use regex::Regex;

static REPEATED_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("Invalid separator regex"));

/// Collapses every run of `_` into one.
pub fn collapse_separators(s: &str) -> String {
    REPEATED_SEPARATORS.replace_all(s, "_").into_owned()
}

/// Collapses runs of `_` and trims them from both ends.
pub fn clean_separators(s: &str) -> String {
    collapse_separators(s).trim_matches('_').to_string()
}

/// True when a raw identifier may be fed to the pipeline at all.
///
/// Identifiers with characters outside `[A-Za-z0-9_]` are kept for manual
/// inspection but never converted.
pub fn is_admissible(raw: &str) -> bool {
    !raw.is_empty()
        && raw
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Cleans `s` and accepts it as a [`CanonicalName`] if it fits the grammar.
pub fn finalize(s: &str) -> Option<CanonicalName> {
    CanonicalName::new(clean_separators(s)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_and_trims() {
        assert_eq!(clean_separators("__a___b_"), "a_b");
        assert_eq!(clean_separators("a_b"), "a_b");
        assert_eq!(clean_separators("___"), "");
    }

    #[test]
    fn finalize_rejects_empty_and_foreign_characters() {
        assert_eq!(finalize("__").map(CanonicalName::into_string), None);
        assert!(finalize("display name").is_none());
        assert!(finalize("x.400").is_none());
        assert_eq!(
            finalize("_display__name_").unwrap().as_str(),
            "display_name"
        );
    }

    #[test]
    fn admissibility_is_ascii_word_characters() {
        assert!(is_admissible("PR_DISPLAY_NAME"));
        assert!(is_admissible("PidTagX400Address"));
        assert!(!is_admissible("PR_DISPLAY NAME"));
        assert!(!is_admissible("PidTag:0x3001"));
        assert!(!is_admissible(""));
    }
}
