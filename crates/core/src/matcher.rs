//! Offer Matcher

use crate::{
    ids::RestaurantId,
    offers::Offer,
    segments::Segment,
    store::{OfferPosition, OfferStore},
};

/// First offer in `offers` targeting `segment`, with its position.
///
/// First registered wins: later offers are never considered once one matches, regardless of
/// their discount size. No segment never matches.
pub fn first_match<'a>(
    offers: &'a [Offer],
    segment: Option<&Segment>,
) -> Option<(OfferPosition, &'a Offer)> {
    let segment = segment?;

    offers
        .iter()
        .enumerate()
        .find(|(_, offer)| offer.target_segments().contains(segment))
}

/// An offer selected for a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedOffer {
    /// Position of the offer in its restaurant's sequence.
    pub position: OfferPosition,

    /// The matched offer.
    pub offer: Offer,
}

/// Selects offers from an [`OfferStore`].
#[derive(Debug, Clone)]
pub struct OfferMatcher<S> {
    store: S,
}

impl<S: OfferStore> OfferMatcher<S> {
    /// Create a matcher reading from `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Earliest registered offer for `restaurant` targeting `segment`.
    pub fn find(
        &self,
        restaurant: RestaurantId,
        segment: Option<&Segment>,
    ) -> Option<MatchedOffer> {
        let segment = segment?;
        let offers = self.store.lookup(restaurant);

        first_match(&offers, Some(segment)).map(|(position, offer)| MatchedOffer {
            position,
            offer: offer.clone(),
        })
    }
}
