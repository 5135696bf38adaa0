//! Segment Source Config

use std::{path::PathBuf, time::Duration};

use clap::Args;

use cartoffer_app::domain::segments::{SegmentServiceConfig, SegmentSourceConfig};

/// User segment lookup settings.
///
/// The segment service URL wins over the segments file. With neither set,
/// every user is treated as unsegmented.
#[derive(Debug, Args)]
pub struct SegmentsConfig {
    /// Segment service base URL
    #[arg(long, env = "SEGMENT_SERVICE_URL")]
    pub segment_service_url: Option<String>,

    /// Segment service request timeout in milliseconds
    #[arg(long, env = "SEGMENT_SERVICE_TIMEOUT_MS", default_value_t = 2_000_u64)]
    pub segment_service_timeout_ms: u64,

    /// YAML file mapping user ids to segments
    #[arg(long, env = "SEGMENTS_FILE")]
    pub segments_file: Option<PathBuf>,
}

impl SegmentsConfig {
    /// Resolve the configured segment source.
    #[must_use]
    pub fn source_config(&self) -> SegmentSourceConfig {
        let url = self
            .segment_service_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty());

        match (url, &self.segments_file) {
            (Some(url), _) => SegmentSourceConfig::Service(SegmentServiceConfig {
                base_url: url.to_owned(),
                timeout: Duration::from_millis(self.segment_service_timeout_ms),
            }),
            (None, Some(path)) => SegmentSourceConfig::File(path.clone()),
            (None, None) => SegmentSourceConfig::Unsegmented,
        }
    }
}
