//! Segment service HTTP client.

use std::{future::Future, time::Duration};

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use cartoffer::prelude::{Segment, SegmentResolver, UserId};

use crate::domain::segments::SegmentServiceError;

const USER_SEGMENT_PATH: &str = "/api/v1/user_segment";

/// Configuration for connecting to the segment service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentServiceConfig {
    /// Service base URL, e.g. `"http://localhost:1080"`.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

/// HTTP client resolving user segments from the segment service.
#[derive(Debug, Clone)]
pub struct HttpSegmentResolver {
    config: SegmentServiceConfig,
    http: Client,
}

impl HttpSegmentResolver {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: SegmentServiceConfig) -> Result<Self, SegmentServiceError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    /// Fetch the segment for `user`.
    ///
    /// A `404` means the segment service has no data for the user and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, an unexpected status, or an unexpected body.
    pub async fn fetch(&self, user: UserId) -> Result<Option<Segment>, SegmentServiceError> {
        let url = format!(
            "{}{USER_SEGMENT_PATH}",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .http
            .get(&url)
            .query(&[("user_id", user.0)])
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!(user_id = %user, "segment service has no segment for user");

            return Ok(None);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(SegmentServiceError::UnexpectedResponse(format!(
                "segment request failed with status {status}: {text}"
            )));
        }

        let parsed: SegmentResponse = response.json().await?;

        Ok(parsed
            .segment
            .filter(|code| !code.trim().is_empty())
            .map(Segment::from))
    }
}

impl SegmentResolver for HttpSegmentResolver {
    type Error = SegmentServiceError;

    fn resolve(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<Option<Segment>, Self::Error>> + Send {
        self.fetch(user)
    }
}

#[derive(Debug, Deserialize)]
struct SegmentResponse {
    segment: Option<String>,
}
