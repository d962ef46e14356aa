//! Naming-convention detection.

use mapi_model::{OriginKind, PREFIX_TABLE};

/// Detects the convention of `raw` and returns the text after its prefix.
///
/// Prefixes are tried in [`PREFIX_TABLE`] order and compared
/// case-sensitively. Strings without a known prefix classify as
/// [`OriginKind::Unknown`] and are returned unchanged.
pub fn classify(raw: &str) -> (OriginKind, &str) {
    PREFIX_TABLE
        .iter()
        .find_map(|&(kind, prefix)| raw.strip_prefix(prefix).map(|rest| (kind, rest)))
        .unwrap_or((OriginKind::Unknown, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_each_known_prefix() {
        assert_eq!(
            classify("PidTagMessageClass"),
            (OriginKind::PidTag, "MessageClass")
        );
        assert_eq!(classify("ptagReplId"), (OriginKind::PTag, "ReplId"));
        assert_eq!(classify("PR_ENTRYID"), (OriginKind::PrTag, "ENTRYID"));
        assert_eq!(
            classify("InternalSchemaFolderName"),
            (OriginKind::InternalSchemaTag, "FolderName")
        );
    }

    #[test]
    fn unknown_strings_pass_through() {
        assert_eq!(classify("DisplayName"), (OriginKind::Unknown, "DisplayName"));
        assert_eq!(classify("pr_entryid"), (OriginKind::Unknown, "pr_entryid"));
        assert_eq!(classify(""), (OriginKind::Unknown, ""));
    }

    #[test]
    fn prefix_only_input_leaves_empty_remainder() {
        assert_eq!(classify("PR_"), (OriginKind::PrTag, ""));
    }
}
