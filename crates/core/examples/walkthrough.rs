//! Offer Walkthrough Example
//!
//! Registers a handful of offers for one restaurant and prints the discounted
//! cart value for users in different segments.

use std::sync::Arc;

use cartoffer::prelude::*;

/// Offer Walkthrough Example
#[tokio::main]
#[expect(clippy::print_stdout, reason = "Example program output to user")]
pub async fn main() {
    let store = Arc::new(InMemoryOfferStore::new());

    store.register(Offer::flat_amount(1, 10, SegmentSet::from_strs(&["p1"])));
    store.register(Offer::flat_percent(1, 10, SegmentSet::from_strs(&["p2", "p3"])));
    store.register(Offer::flat_amount(1, 50, SegmentSet::from_strs(&["p3"])));

    let resolver = StaticSegmentResolver::new()
        .with(1, "p1")
        .with(2, "p2")
        .with(3, "p3");

    let evaluator = OfferEvaluator::new(Arc::clone(&store), resolver);

    println!(
        "{} offers registered across {} restaurant(s)\n",
        store.offer_count(),
        store.restaurant_count()
    );

    for user in 1_i64..=4 {
        let request = CartRequest::new(400, 1, user);
        let evaluation = evaluator.evaluate(&request).await;

        let applied = evaluation.applied.as_ref().map_or_else(
            || "none".to_owned(),
            |matched| {
                format!(
                    "#{} {} {}",
                    matched.position,
                    matched.offer.offer_type(),
                    matched.offer.offer_value()
                )
            },
        );

        println!(
            "user {user:<2} segment {:<14} offer {applied:<14} cart {} -> {}",
            evaluation.segment.to_string(),
            request.cart_value,
            evaluation.result.cart_value
        );
    }
}
