//! Configuration options for name normalization.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for the normalization pipeline and the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationOptions {
    /// Word list for the dictionary segmenter. `None` keeps the segmenter off.
    pub segmentation_model: Option<PathBuf>,

    /// Return candidate names sorted and unique rather than in first-seen
    /// order. Default: true.
    pub sort_candidates: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            segmentation_model: None,
            sort_candidates: true,
        }
    }
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segmentation_model(mut self, path: Option<PathBuf>) -> Self {
        self.segmentation_model = path;
        self
    }

    pub fn with_sort_candidates(mut self, sort: bool) -> Self {
        self.sort_candidates = sort;
        self
    }

    pub fn segmentation_enabled(&self) -> bool {
        self.segmentation_model.is_some()
    }
}
