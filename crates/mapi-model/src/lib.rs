//! Data model for canonical MAPI property tag names.
//!
//! The types here are shared by the normalization pipeline
//! (`mapi-normalize`) and the aggregator (`mapi-core`).

pub mod entry;
pub mod error;
pub mod ids;
pub mod options;
pub mod origin;
pub mod source;

pub use entry::{TagEntry, TagId, UNRESOLVED_PLACEHOLDER};
pub use error::{ModelError, Result};
pub use ids::{CanonicalName, TagValue};
pub use options::NormalizationOptions;
pub use origin::{OriginKind, PREFIX_TABLE};
pub use source::{RawIdentifier, SourceRecord, SourceTable};
