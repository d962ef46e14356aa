//! The per-identifier normalization pipeline.
//!
//! ```text
//! raw -> classify -> strip _W/_A -> case conversion
//!     -> abbreviations (scoped)
//!        -> [PR_: numeral reattachment] -> lower-case
//!        -> word splits (scoped) -> [segmenter] -> word splits (any) -> trim
//!     -> abbreviations (any) -> cleanup -> grammar check
//! ```
//!
//! Abbreviation expansion must see the still-joined word, so the word
//! splitter runs nested inside the abbreviation bank rather than after it.

use std::fmt;
use std::sync::{Arc, LazyLock};

use mapi_model::{CanonicalName, NormalizationOptions, OriginKind};

use crate::case::underscore;
use crate::classify::classify;
use crate::cleanup::{clean_separators, finalize};
use crate::decoration::strip_decoration;
use crate::error::NormalizeError;
use crate::numerals::attach_number;
use crate::segment::{Segmenter, fix_after_segmentation};
use crate::tables::{ABBREVIATION_BANK, WORD_SPLITTER_BANK};

static DEFAULT_NORMALIZER: LazyLock<Normalizer> = LazyLock::new(Normalizer::new);

/// Converts raw identifiers to canonical names.
///
/// Holds no mutable state: the same input always yields the same output.
/// The segmenter, when present, is shared read-only.
#[derive(Clone, Default)]
pub struct Normalizer {
    segmenter: Option<Arc<dyn Segmenter>>,
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("segmenter", &self.segmenter.is_some())
            .finish()
    }
}

impl Normalizer {
    /// The deterministic pipeline with no dictionary segmenter.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segmenter(segmenter: Arc<dyn Segmenter>) -> Self {
        Self {
            segmenter: Some(segmenter),
        }
    }

    /// Builds a normalizer from options, loading the segmentation model if
    /// one is configured.
    pub fn from_options(options: &NormalizationOptions) -> Result<Self, NormalizeError> {
        match &options.segmentation_model {
            None => Ok(Self::new()),
            #[cfg(feature = "segmentation")]
            Some(path) => {
                let segmenter = crate::dictionary::DictionarySegmenter::load(path)?;
                Ok(Self::with_segmenter(Arc::new(segmenter)))
            }
            #[cfg(not(feature = "segmentation"))]
            Some(path) => Err(NormalizeError::SegmentationUnavailable { path: path.clone() }),
        }
    }

    pub fn has_segmenter(&self) -> bool {
        self.segmenter.is_some()
    }

    /// Runs the rewrite stages without the final grammar check.
    pub fn convert_name(&self, raw: &str) -> String {
        convert(raw, Decoration::Strip, self.segmenter.as_deref())
    }

    /// Runs the whole pipeline. `None` when the result is not a valid
    /// identifier; that is a soft outcome, never an error.
    pub fn normalize(&self, raw: &str) -> Option<CanonicalName> {
        finish(raw, &self.convert_name(raw))
    }

    /// Like [`Normalizer::normalize`], for a spelling that already went
    /// through [`canonicalize_orig_name`](crate::canonicalize_orig_name).
    ///
    /// The width marker is not stripped a second time, so `PR_SUBJECT_A`
    /// (from `PR_SUBJECT_A_W`) keeps its `_A`.
    pub fn normalize_canonicalized(&self, orig_id: &str) -> Option<CanonicalName> {
        let converted = convert(orig_id, Decoration::Keep, self.segmenter.as_deref());
        finish(orig_id, &converted)
    }
}

/// Normalizes `raw` with the default (segmenter-less) pipeline.
pub fn convert_name(raw: &str) -> Option<CanonicalName> {
    DEFAULT_NORMALIZER.normalize(raw)
}

fn finish(raw: &str, converted: &str) -> Option<CanonicalName> {
    let name = finalize(converted);
    if name.is_none() {
        tracing::debug!(
            raw,
            converted,
            "derived name does not fit identifier grammar"
        );
    }
    name
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Decoration {
    Strip,
    Keep,
}

fn convert(raw: &str, decoration: Decoration, segmenter: Option<&dyn Segmenter>) -> String {
    let (kind, remainder) = classify(raw);
    let remainder = match decoration {
        Decoration::Strip => strip_decoration(kind, remainder),
        Decoration::Keep => remainder,
    };
    let cased = if kind.is_case_delimited() {
        underscore(remainder)
    } else {
        remainder.to_lowercase()
    };

    ABBREVIATION_BANK.apply_with(kind, &cased, |name| {
        let name = if kind == OriginKind::PrTag {
            attach_number(&name)
        } else {
            name
        };
        split_joined_words(kind, &name.to_lowercase(), segmenter)
    })
}

fn split_joined_words(kind: OriginKind, name: &str, segmenter: Option<&dyn Segmenter>) -> String {
    let split = WORD_SPLITTER_BANK.apply_with(kind, name, |name| match segmenter {
        Some(segmenter) => {
            let guess = fix_after_segmentation(&segmenter.segment(&name));
            convert(&guess, Decoration::Keep, None)
        }
        None => name,
    });
    clean_separators(&split)
}
