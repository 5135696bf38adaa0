//! Prelude

pub use crate::{
    cart::{CartRequest, CartResult, CartValue},
    discounts::{apply_discount, apply_optional_discount},
    evaluator::{Evaluation, OfferEvaluator, SegmentOutcome},
    ids::{RestaurantId, UserId},
    matcher::{MatchedOffer, OfferMatcher, first_match},
    offers::{Discount, Offer, OfferType, UnknownOfferType},
    segments::{Segment, SegmentResolver, SegmentSet, StaticSegmentResolver},
    store::{InMemoryOfferStore, OfferPosition, OfferStore},
};
