//! Results handed from the commands to the summary printer.

use std::path::PathBuf;

use mapi_core::UnresolvedTag;
use mapi_model::{CanonicalName, OriginKind, TagValue};

/// One row of `mapi-tags normalize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    pub raw: String,
    pub kind: OriginKind,
    pub name: Option<CanonicalName>,
}

#[derive(Debug, Clone)]
pub struct FetchResult {
    pub cache_dir: PathBuf,
    pub fetched: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// `None` when the table went to stdout.
    pub output: Option<PathBuf>,
    pub source_count: usize,
    pub tag_count: usize,
    pub unresolved: Vec<UnresolvedTag>,
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub table: PathBuf,
    pub tag_count: usize,
    pub unresolved: Vec<UnresolvedTag>,
    /// Tags whose recorded id disagrees with what their spellings give today.
    pub stale: Vec<TagValue>,
}

impl CheckResult {
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }
}
