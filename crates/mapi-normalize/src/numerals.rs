//! Re-joining numeric suffixes split off by case conversion.

use std::sync::LazyLock;

use regex::Regex;

/// A trailing `_<digits>` after a letter run of two or more letters with at
/// least one letter outside `a`-`g`. Runs made only of `a`-`g` look like hex
/// or short abbreviations and keep their separator, as do single letters
/// (`x_400` stays split).
static SPLIT_NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([h-zH-Z]+[a-zA-Z]+|[a-zA-Z]+[h-zH-Z]+)_(\d+)$")
        .expect("Invalid numeral regex")
});

/// `fax_1` -> `fax1`; `x_400` and `abc_2` are left alone.
pub fn attach_number(s: &str) -> String {
    SPLIT_NUMERAL.replace(s, "${1}${2}").into_owned()
}
