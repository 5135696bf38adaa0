//! Segment source selection.

use std::{future::Future, path::PathBuf};

use cartoffer::prelude::{Segment, SegmentResolver, StaticSegmentResolver, UserId};

use crate::domain::segments::{
    HttpSegmentResolver, SegmentServiceConfig, SegmentServiceError, SegmentSourceError,
    load_segments_file,
};

/// Where user segments come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentSourceConfig {
    /// Query the segment service over HTTP.
    Service(SegmentServiceConfig),

    /// Use a fixed mapping loaded from a YAML file.
    File(PathBuf),

    /// No segmentation: every user resolves to no segment.
    Unsegmented,
}

/// The configured segment resolver.
#[derive(Debug, Clone)]
pub enum SegmentSource {
    /// Segment service over HTTP.
    Service(HttpSegmentResolver),

    /// Fixed in-memory mapping.
    Fixed(StaticSegmentResolver),

    /// Every user resolves to no segment.
    Unsegmented,
}

impl SegmentSource {
    /// Build the segment source described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the segments file cannot be loaded.
    pub fn load(config: SegmentSourceConfig) -> Result<Self, SegmentSourceError> {
        match config {
            SegmentSourceConfig::Service(service) => {
                Ok(Self::Service(HttpSegmentResolver::new(service)?))
            }
            SegmentSourceConfig::File(path) => Ok(Self::Fixed(load_segments_file(&path)?)),
            SegmentSourceConfig::Unsegmented => Ok(Self::Unsegmented),
        }
    }

    /// Short name of the source kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            SegmentSource::Service(_) => "service",
            SegmentSource::Fixed(_) => "fixed",
            SegmentSource::Unsegmented => "unsegmented",
        }
    }
}

impl SegmentResolver for SegmentSource {
    type Error = SegmentServiceError;

    fn resolve(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<Option<Segment>, Self::Error>> + Send {
        async move {
            match self {
                SegmentSource::Service(resolver) => resolver.fetch(user).await,
                SegmentSource::Fixed(resolver) => match resolver.resolve(user).await {
                    Ok(segment) => Ok(segment),
                    Err(never) => match never {},
                },
                SegmentSource::Unsegmented => Ok(None),
            }
        }
    }
}
