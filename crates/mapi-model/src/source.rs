//! What a documentation source contributes to the aggregate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::TagValue;

/// A raw spelling observed for a tag value in one source. Never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawIdentifier<'a> {
    pub text: &'a str,
    pub tag: TagValue,
    pub source: &'a str,
}

/// Provenance of a merged source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRecord {
    pub uri: String,
    pub license: String,
}

impl SourceRecord {
    pub fn new(uri: impl Into<String>, license: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            license: license.into(),
        }
    }
}

/// One source's parsed output: raw spellings grouped by tag value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTable {
    pub source: String,
    pub tags: BTreeMap<TagValue, Vec<String>>,
}

impl SourceTable {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            tags: BTreeMap::new(),
        }
    }

    /// Appends a raw spelling for `tag`.
    pub fn push(&mut self, tag: TagValue, raw: impl Into<String>) {
        self.tags.entry(tag).or_default().push(raw.into());
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterates every raw spelling in tag order, then source order.
    pub fn identifiers(&self) -> impl Iterator<Item = RawIdentifier<'_>> {
        self.tags.iter().flat_map(move |(tag, names)| {
            names.iter().map(move |text| RawIdentifier {
                text,
                tag: *tag,
                source: &self.source,
            })
        })
    }
}
