//! Observability startup.

use crate::config::ServerConfig;

use super::{ObservabilityError, logging, settings};

/// Apply runtime observability settings and install the global subscriber.
pub(crate) fn init(config: &ServerConfig) -> Result<(), ObservabilityError> {
    settings::apply_runtime_config(config);

    logging::init_subscriber(config)
}
