//! Naming conventions used by the MAPI documentation sources.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The naming convention a raw identifier follows.
///
/// Every convention except [`OriginKind::Unknown`] is recognised by a fixed,
/// case-sensitive prefix (see [`PREFIX_TABLE`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OriginKind {
    /// No known prefix matched.
    Unknown,
    /// `PidTagDisplayName` (MS-OXPROPS canonical names).
    PidTag,
    /// `ptagDisplayName` (Exchange protocol docs).
    PTag,
    /// `PR_DISPLAY_NAME` (C headers, `mapitags.h` and friends).
    PrTag,
    /// `InternalSchemaFoo` (Exchange internal schema dumps).
    InternalSchemaTag,
}

/// Prefixes in the order the classifier tries them. First match wins.
pub const PREFIX_TABLE: [(OriginKind, &str); 4] = [
    (OriginKind::PidTag, "PidTag"),
    (OriginKind::PTag, "ptag"),
    (OriginKind::PrTag, "PR_"),
    (OriginKind::InternalSchemaTag, "InternalSchema"),
];

impl OriginKind {
    /// Returns the fixed prefix of this convention, `None` for `Unknown`.
    pub fn prefix(self) -> Option<&'static str> {
        PREFIX_TABLE
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, prefix)| *prefix)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::PidTag => "PidTag",
            Self::PTag => "ptag",
            Self::PrTag => "PR_",
            Self::InternalSchemaTag => "InternalSchema",
        }
    }

    /// True when the source convention marks word boundaries with letter case
    /// rather than with underscores.
    pub fn is_case_delimited(self) -> bool {
        !matches!(self, Self::PrTag)
    }
}

impl fmt::Display for OriginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
