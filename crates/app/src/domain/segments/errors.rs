//! Segment lookup errors.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while talking to the segment service.
#[derive(Debug, Error)]
pub enum SegmentServiceError {
    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The segment service returned a non-2xx, non-404 response.
    #[error("unexpected response from segment service: {0}")]
    UnexpectedResponse(String),
}

/// Errors raised while loading a fixed segment mapping from disk.
#[derive(Debug, Error)]
pub enum SegmentFileError {
    #[error("failed to read segments file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse segments file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_norway::Error,
    },
}

/// Errors raised while building a segment source.
#[derive(Debug, Error)]
pub enum SegmentSourceError {
    #[error("failed to build segment service client")]
    Service(#[from] SegmentServiceError),

    #[error(transparent)]
    File(#[from] SegmentFileError),
}
