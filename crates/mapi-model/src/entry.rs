//! Per-tag aggregate entries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CanonicalName;

/// Reserved id for a tag whose sources did not agree on one name.
pub const UNRESOLVED_PLACEHOLDER: &str = "unkn";

/// The chosen id of a tag entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagId {
    /// Exactly one canonical name was derived.
    Name(CanonicalName),
    /// Zero or several distinct names were derived; rendered as `unkn`.
    Unresolved,
}

impl TagId {
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved)
    }

    pub fn name(&self) -> Option<&CanonicalName> {
        match self {
            Self::Name(name) => Some(name),
            Self::Unresolved => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Name(name) => name.as_str(),
            Self::Unresolved => UNRESOLVED_PLACEHOLDER,
        }
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TagId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TagId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s == UNRESOLVED_PLACEHOLDER {
            return Ok(Self::Unresolved);
        }
        CanonicalName::new(s)
            .map(Self::Name)
            .map_err(serde::de::Error::custom)
    }
}

/// Aggregate state for one tag value: its id and every raw spelling seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    id: TagId,
    #[serde(rename = "-orig-id")]
    orig_ids: Vec<String>,
}

impl TagEntry {
    /// Builds an entry from the candidate names derived for `orig_ids`.
    ///
    /// The id is the candidate when there is exactly one, otherwise the
    /// entry is unresolved. `orig_ids` is expected to be deduplicated.
    pub fn from_candidates(candidates: &[CanonicalName], orig_ids: Vec<String>) -> Self {
        let id = match candidates {
            [only] => TagId::Name(only.clone()),
            _ => TagId::Unresolved,
        };
        Self { id, orig_ids }
    }

    /// Restores an entry exactly as it was recorded in a previous artifact.
    ///
    /// Unlike [`TagEntry::from_candidates`] nothing is deduplicated here.
    pub fn recorded(id: TagId, orig_ids: Vec<String>) -> Self {
        Self { id, orig_ids }
    }

    pub fn id(&self) -> &TagId {
        &self.id
    }

    pub fn orig_ids(&self) -> &[String] {
        &self.orig_ids
    }

    pub fn is_unresolved(&self) -> bool {
        self.id.is_unresolved()
    }

    /// Replaces the placeholder with `name`, keeping `orig_id` as the only
    /// raw spelling.
    pub fn resolve(&mut self, name: CanonicalName, orig_id: String) {
        self.id = TagId::Name(name);
        self.orig_ids = vec![orig_id];
    }
}
