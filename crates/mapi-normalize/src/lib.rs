//! Canonical names for MAPI property tags.
//!
//! Raw names from different documentation sources (`PR_DISPLAY_NAME`,
//! `PidTagDisplayName`, `ptagDisplayName`) are reduced to one readable
//! `snake_case` identifier (`display_name`).

pub mod case;
pub mod classify;
pub mod cleanup;
pub mod decoration;
#[cfg(feature = "segmentation")]
pub mod dictionary;
pub mod error;
pub mod filters;
pub mod numerals;
pub mod pipeline;
pub mod prepare;
pub mod segment;
pub mod tables;

pub use classify::classify;
pub use cleanup::{finalize, is_admissible};
pub use decoration::{canonicalize_orig_name, strip_decoration};
#[cfg(feature = "segmentation")]
pub use dictionary::DictionarySegmenter;
pub use error::NormalizeError;
pub use filters::{FilterBank, FilterRule};
pub use numerals::attach_number;
pub use pipeline::{Normalizer, convert_name};
pub use prepare::{PreparedNames, dedup_preserving_order, prepare_names_and_orig_ids};
pub use segment::{FALSE_POSITIVES, Segmenter, fix_after_segmentation};
pub use tables::{ABBREVIATION_BANK, WORD_SPLITTER_BANK};
