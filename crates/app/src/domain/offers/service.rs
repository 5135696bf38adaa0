//! Offers service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use cartoffer::prelude::{InMemoryOfferStore, Offer, OfferStore};

use crate::domain::offers::{data::NewOffer, records::OfferRecord};

#[derive(Debug, Clone)]
pub struct InMemoryOffersService {
    store: Arc<InMemoryOfferStore>,
}

impl InMemoryOffersService {
    #[must_use]
    pub fn new(store: Arc<InMemoryOfferStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OffersService for InMemoryOffersService {
    #[tracing::instrument(
        name = "offers.service.register_offer",
        skip(self, offer),
        fields(
            restaurant_id = %offer.restaurant_id,
            offer_type = %offer.discount.offer_type(),
            offer_value = offer.discount.offer_value(),
            segment_count = offer.segments.len()
        )
    )]
    async fn register_offer(&self, offer: NewOffer) -> OfferRecord {
        let offer = Offer::from(offer);
        let position = self.store.register(offer.clone());

        info!(
            position,
            offer_count = self.store.offer_count(),
            "registered offer"
        );

        OfferRecord { position, offer }
    }
}

#[automock]
#[async_trait]
pub trait OffersService: Send + Sync {
    /// Appends an offer to its restaurant's sequence.
    async fn register_offer(&self, offer: NewOffer) -> OfferRecord;
}

#[cfg(test)]
mod tests {
    use cartoffer::prelude::{Discount, RestaurantId, SegmentSet};

    use super::*;

    fn new_offer(restaurant: i64, amount: u64, segment: &str) -> NewOffer {
        NewOffer {
            restaurant_id: RestaurantId(restaurant),
            discount: Discount::FlatAmount { amount },
            segments: SegmentSet::from_strs(&[segment]),
        }
    }

    #[tokio::test]
    async fn register_offer_returns_position() {
        let store = Arc::new(InMemoryOfferStore::new());
        let service = InMemoryOffersService::new(Arc::clone(&store));

        let first = service.register_offer(new_offer(1, 10, "p1")).await;
        let second = service.register_offer(new_offer(1, 20, "p2")).await;
        let other = service.register_offer(new_offer(2, 5, "p1")).await;

        assert_eq!(first.position, 0);
        assert_eq!(second.position, 1);
        assert_eq!(other.position, 0);
        assert_eq!(second.offer.offer_value(), 20);
    }

    #[tokio::test]
    async fn register_offer_writes_to_shared_store() {
        let store = Arc::new(InMemoryOfferStore::new());
        let service = InMemoryOffersService::new(Arc::clone(&store));

        service.register_offer(new_offer(3, 10, "p1")).await;

        assert_eq!(store.lookup(RestaurantId(3)).len(), 1);
    }

    #[tokio::test]
    async fn register_offer_accepts_duplicates() {
        let store = Arc::new(InMemoryOfferStore::new());
        let service = InMemoryOffersService::new(Arc::clone(&store));

        service.register_offer(new_offer(1, 10, "p1")).await;
        service.register_offer(new_offer(1, 10, "p1")).await;

        assert_eq!(store.offer_count(), 2);
    }
}
