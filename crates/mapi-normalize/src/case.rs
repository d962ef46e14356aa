//! Letter-case driven word segmentation.

use std::sync::LazyLock;

use regex::Regex;

/// `HTMLBody` -> `HTML_Body`
static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("Invalid acronym regex"));

/// `displayName` -> `display_Name`, `x400Address` -> `x400_Address`
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("Invalid camel-case regex"));

/// Converts a camel-case or mixed-case word to lower-case `snake_case`.
///
/// Hyphens become underscores. Already-underscored input keeps its
/// separators.
pub fn underscore(word: &str) -> String {
    let word = ACRONYM_BOUNDARY.replace_all(word, "${1}_${2}");
    let word = CAMEL_BOUNDARY.replace_all(&word, "${1}_${2}");
    word.replace('-', "_").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_camel_case() {
        assert_eq!(underscore("MessageClass"), "message_class");
        assert_eq!(underscore("displayName"), "display_name");
    }

    #[test]
    fn keeps_acronyms_together() {
        assert_eq!(underscore("HTMLBody"), "html_body");
        assert_eq!(underscore("ReplId"), "repl_id");
        assert_eq!(underscore("AddressBookX500Dn"), "address_book_x500_dn");
    }

    #[test]
    fn hyphens_and_lower_case_input() {
        assert_eq!(underscore("Send-Rich-Info"), "send_rich_info");
        assert_eq!(underscore("already_snake"), "already_snake");
    }
}
