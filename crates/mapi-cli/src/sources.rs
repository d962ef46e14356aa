//! Sources backed by JSON documents in the cache directory.
//!
//! ```json
//! {
//!   "uri": "https://example.org/mapitags.h",
//!   "license": "MIT",
//!   "tags": { "0x3001": ["PR_DISPLAY_NAME", "PR_DISPLAY_NAME_W"] }
//! }
//! ```
//!
//! Tag values may be written in hex (`0x3001`) or decimal (`12289`).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use mapi_core::{Source, SourceError};
use mapi_model::{SourceTable, TagValue};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct SourceDocument {
    uri: String,
    license: String,
    #[serde(default)]
    tags: BTreeMap<String, Vec<String>>,
}

/// A source whose raw names were already scraped into a JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    name: String,
    /// Path relative to the cache directory.
    relative: PathBuf,
    document: SourceDocument,
}

impl JsonFileSource {
    /// Reads the document at `cache_dir/relative`.
    pub fn open(cache_dir: &Path, relative: impl Into<PathBuf>) -> Result<Self, SourceError> {
        let relative = relative.into();
        let path = cache_dir.join(&relative);
        let document = read_document(&path)?;
        let name = relative
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| relative.display().to_string());
        Ok(Self {
            name,
            relative,
            document,
        })
    }

    pub fn path(&self, cache_dir: &Path) -> PathBuf {
        cache_dir.join(&self.relative)
    }
}

fn read_document(path: &Path) -> Result<SourceDocument, SourceError> {
    let text = fs::read_to_string(path).map_err(|e| SourceError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| SourceError::parse(path, e.to_string()))
}

impl Source for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn uri(&self) -> &str {
        &self.document.uri
    }

    fn license(&self) -> &str {
        &self.document.license
    }

    /// Documents are produced outside this tool; fetching only checks that
    /// the file is still there.
    fn fetch(&self, cache_dir: &Path) -> Result<(), SourceError> {
        let path = self.path(cache_dir);
        fs::metadata(&path)
            .map(|_| ())
            .map_err(|e| SourceError::io(path, e))
    }

    fn parse_enum_values(&self, cache_dir: &Path) -> Result<SourceTable, SourceError> {
        let mut table = SourceTable::new(self.name.clone());
        for (key, raws) in &self.document.tags {
            let tag: TagValue = key.parse().map_err(|e| {
                SourceError::parse(self.path(cache_dir), format!("tag key {key:?}: {e}"))
            })?;
            for raw in raws {
                table.push(tag, raw.clone());
            }
        }
        Ok(table)
    }
}
