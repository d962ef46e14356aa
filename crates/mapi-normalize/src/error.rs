#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("failed to read segmentation model {path}: {source}")]
    ModelRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("segmentation model has no words: {path}")]
    EmptyModel { path: PathBuf },

    #[error("segmentation model {path} given, but built without the `segmentation` feature")]
    SegmentationUnavailable { path: PathBuf },
}
