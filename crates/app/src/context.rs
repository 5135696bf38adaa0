//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use cartoffer::prelude::InMemoryOfferStore;

use crate::domain::{
    carts::{CartsService, InMemoryCartsService},
    offers::{InMemoryOffersService, OffersService},
    segments::{SegmentSource, SegmentSourceConfig, SegmentSourceError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to set up segment source")]
    Segments(#[source] SegmentSourceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub offers: Arc<dyn OffersService>,
    pub carts: Arc<dyn CartsService>,
}

impl AppContext {
    /// Build application context around a fresh offer store.
    #[must_use]
    pub fn new(segments: SegmentSource) -> Self {
        let store = Arc::new(InMemoryOfferStore::new());

        Self {
            offers: Arc::new(InMemoryOffersService::new(Arc::clone(&store))),
            carts: Arc::new(InMemoryCartsService::new(store, segments)),
        }
    }

    /// Build application context from segment source configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the segment source cannot be set up.
    pub fn from_segment_config(config: SegmentSourceConfig) -> Result<Self, AppInitError> {
        let segments = SegmentSource::load(config).map_err(AppInitError::Segments)?;

        info!(segment_source = segments.kind(), "initialised segment source");

        Ok(Self::new(segments))
    }
}

#[cfg(test)]
mod tests {
    use cartoffer::prelude::{
        CartRequest, Discount, RestaurantId, SegmentSet, StaticSegmentResolver,
    };

    use crate::domain::offers::data::NewOffer;

    use super::*;

    #[tokio::test]
    async fn services_share_one_store() {
        let app = AppContext::new(SegmentSource::Fixed(
            StaticSegmentResolver::new().with(1, "p1"),
        ));

        app.offers
            .register_offer(NewOffer {
                restaurant_id: RestaurantId(1),
                discount: Discount::FlatAmount { amount: 10 },
                segments: SegmentSet::from_strs(&["p1"]),
            })
            .await;

        let evaluation = app.carts.apply_offer(CartRequest::new(200, 1, 1)).await;

        assert_eq!(evaluation.result.cart_value, 190);
    }

    #[test]
    fn from_segment_config_surfaces_file_errors() {
        let result = AppContext::from_segment_config(SegmentSourceConfig::File(
            "/definitely/not/here.yaml".into(),
        ));

        assert!(
            matches!(result, Err(AppInitError::Segments(_))),
            "expected Segments error"
        );
    }
}
