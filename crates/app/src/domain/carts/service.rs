//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, debug, warn};

use cartoffer::prelude::{
    CartRequest, Evaluation, InMemoryOfferStore, OfferEvaluator, SegmentOutcome,
};

use crate::domain::segments::SegmentSource;

#[derive(Debug)]
pub struct InMemoryCartsService {
    evaluator: OfferEvaluator<Arc<InMemoryOfferStore>, SegmentSource>,
}

impl InMemoryCartsService {
    #[must_use]
    pub fn new(store: Arc<InMemoryOfferStore>, segments: SegmentSource) -> Self {
        Self {
            evaluator: OfferEvaluator::new(store, segments),
        }
    }
}

#[async_trait]
impl CartsService for InMemoryCartsService {
    #[tracing::instrument(
        name = "carts.service.apply_offer",
        skip(self, request),
        fields(
            restaurant_id = %request.restaurant_id,
            user_id = %request.user_id,
            cart_value = request.cart_value,
            segment = tracing::field::Empty,
            offer_position = tracing::field::Empty
        )
    )]
    async fn apply_offer(&self, request: CartRequest) -> Evaluation {
        let evaluation = self.evaluator.evaluate(&request).await;

        let span = Span::current();

        span.record("segment", tracing::field::display(&evaluation.segment));

        if let SegmentOutcome::LookupFailed(reason) = &evaluation.segment {
            warn!(%reason, "segment lookup failed, treating user as unsegmented");
        }

        match &evaluation.applied {
            Some(matched) => {
                span.record("offer_position", matched.position);

                debug!(
                    offer_type = %matched.offer.offer_type(),
                    offer_value = matched.offer.offer_value(),
                    discounted = evaluation.result.cart_value,
                    "applied offer"
                );
            }
            None => debug!("no offer applies"),
        }

        evaluation
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Applies the earliest registered matching offer to a cart.
    async fn apply_offer(&self, request: CartRequest) -> Evaluation;
}

#[cfg(test)]
mod tests {
    use cartoffer::prelude::{Offer, OfferStore, Segment, SegmentSet, StaticSegmentResolver};

    use super::*;

    fn service(segments: SegmentSource) -> InMemoryCartsService {
        let store = Arc::new(InMemoryOfferStore::new());

        store.register(Offer::flat_amount(1, 10, SegmentSet::from_strs(&["p1"])));
        store.register(Offer::flat_percent(1, 10, SegmentSet::from_strs(&["p3"])));

        InMemoryCartsService::new(store, segments)
    }

    #[tokio::test]
    async fn apply_offer_discounts_matching_cart() {
        let service = service(SegmentSource::Fixed(
            StaticSegmentResolver::new().with(3, "p3"),
        ));

        let evaluation = service.apply_offer(CartRequest::new(400, 1, 3)).await;

        assert_eq!(evaluation.result.cart_value, 360);
        assert_eq!(
            evaluation.segment,
            SegmentOutcome::Resolved(Segment::from("p3"))
        );
    }

    #[tokio::test]
    async fn apply_offer_unsegmented_is_unchanged() {
        let service = service(SegmentSource::Unsegmented);

        let evaluation = service.apply_offer(CartRequest::new(400, 1, 3)).await;

        assert_eq!(evaluation.result.cart_value, 400);
        assert!(evaluation.applied.is_none());
    }

    #[tokio::test]
    async fn apply_offer_sees_offers_registered_later() {
        let store = Arc::new(InMemoryOfferStore::new());
        let service = InMemoryCartsService::new(
            Arc::clone(&store),
            SegmentSource::Fixed(StaticSegmentResolver::new().with(2, "p2")),
        );

        let before = service.apply_offer(CartRequest::new(300, 1, 2)).await;

        store.register(Offer::flat_amount(1, 20, SegmentSet::from_strs(&["p2"])));

        let after = service.apply_offer(CartRequest::new(300, 1, 2)).await;

        assert_eq!(before.result.cart_value, 300);
        assert_eq!(after.result.cart_value, 280);
    }
}
