//! Width suffixes on C header constants.

use mapi_model::OriginKind;

use crate::classify::classify;

/// Wide-string (`PR_DISPLAY_NAME_W`) marker.
pub const WIDE_POSTFIX: &str = "_W";
/// Narrow-string (`PR_DISPLAY_NAME_A`) marker.
pub const NARROW_POSTFIX: &str = "_A";

/// Removes one trailing `_W` or `_A` from a `PR_` remainder.
///
/// Other conventions have no width variants and are returned unchanged.
pub fn strip_decoration(kind: OriginKind, remainder: &str) -> &str {
    if kind != OriginKind::PrTag {
        return remainder;
    }
    remainder
        .strip_suffix(WIDE_POSTFIX)
        .or_else(|| remainder.strip_suffix(NARROW_POSTFIX))
        .unwrap_or(remainder)
}

/// Collapses `PR_FOO_W`/`PR_FOO_A` to `PR_FOO`, keeping the prefix.
///
/// This is the form recorded in an entry's original ids.
pub fn canonicalize_orig_name(raw: &str) -> &str {
    let (kind, remainder) = classify(raw);
    let stripped = strip_decoration(kind, remainder);
    &raw[..raw.len() - (remainder.len() - stripped.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_width_marker() {
        assert_eq!(canonicalize_orig_name("PR_DISPLAY_NAME_W"), "PR_DISPLAY_NAME");
        assert_eq!(canonicalize_orig_name("PR_DISPLAY_NAME_A"), "PR_DISPLAY_NAME");
        assert_eq!(canonicalize_orig_name("PR_SUBJECT_A_W"), "PR_SUBJECT_A");
        assert_eq!(canonicalize_orig_name("PR_DISPLAY_NAME"), "PR_DISPLAY_NAME");
    }

    #[test]
    fn other_conventions_are_untouched() {
        assert_eq!(canonicalize_orig_name("PidTagFoo_W"), "PidTagFoo_W");
        assert_eq!(strip_decoration(OriginKind::Unknown, "FOO_A"), "FOO_A");
    }

    #[test]
    fn marker_must_follow_the_prefix() {
        assert_eq!(canonicalize_orig_name("PR_W"), "PR_W");
        assert_eq!(canonicalize_orig_name("PR__W"), "PR_");
    }
}
