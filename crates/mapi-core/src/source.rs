//! The boundary to documentation scrapers.

use std::path::Path;

use mapi_model::SourceTable;

use crate::error::SourceError;

/// A documentation source of MAPI tag names.
///
/// Fetching and parsing the native document format are the implementor's
/// business; the aggregator only sees the resulting [`SourceTable`].
pub trait Source {
    /// Short name used in logs and errors.
    fn name(&self) -> &str;

    fn uri(&self) -> &str;

    fn license(&self) -> &str;

    /// Ensures the raw documents exist under `cache_dir`.
    fn fetch(&self, cache_dir: &Path) -> Result<(), SourceError>;

    /// Parses the cached documents into raw names grouped by tag value.
    fn parse_enum_values(&self, cache_dir: &Path) -> Result<SourceTable, SourceError>;
}
