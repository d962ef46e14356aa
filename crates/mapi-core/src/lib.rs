//! Aggregation of MAPI tag names across documentation sources.

pub mod error;
pub mod pipeline;
pub mod source;
pub mod table;

pub use error::{CoreError, SourceError};
pub use pipeline::{fetch_sources, full_pipeline, merge_source_into_table};
pub use source::Source;
pub use table::{DISJUNCTION_SEPARATOR, MergeStats, TagTable, UnresolvedReason, UnresolvedTag};
