//! Apply-Offer Orchestrator
//!
//! Composes segment resolution, offer matching and discount calculation into one decision.
//! Evaluation holds no state between calls and never fails: unknown restaurants, users without
//! a segment, and failed segment lookups all pass the cart value through unchanged.

use std::fmt;

use crate::{
    cart::{CartRequest, CartResult},
    discounts::apply_discount,
    matcher::{MatchedOffer, OfferMatcher},
    segments::{Segment, SegmentResolver},
    store::OfferStore,
};

/// How the user's segment was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentOutcome {
    /// The user belongs to this segment.
    Resolved(Segment),

    /// The user belongs to no segment.
    Unresolved,

    /// The segment lookup failed; treated the same as [`SegmentOutcome::Unresolved`].
    LookupFailed(String),
}

impl SegmentOutcome {
    /// The resolved segment, if any.
    pub fn segment(&self) -> Option<&Segment> {
        match self {
            SegmentOutcome::Resolved(segment) => Some(segment),
            SegmentOutcome::Unresolved | SegmentOutcome::LookupFailed(_) => None,
        }
    }
}

impl fmt::Display for SegmentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentOutcome::Resolved(segment) => write!(f, "resolved({segment})"),
            SegmentOutcome::Unresolved => f.write_str("unresolved"),
            SegmentOutcome::LookupFailed(_) => f.write_str("lookup_failed"),
        }
    }
}

/// Result of evaluating a cart, with the details that led to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Cart value after any discount.
    pub result: CartResult,

    /// Segment resolution outcome for the user.
    pub segment: SegmentOutcome,

    /// The offer that was applied, if any.
    pub applied: Option<MatchedOffer>,
}

/// Decides which offer, if any, applies to a cart and computes the new value.
#[derive(Debug, Clone)]
pub struct OfferEvaluator<S, R> {
    matcher: OfferMatcher<S>,
    resolver: R,
}

impl<S, R> OfferEvaluator<S, R>
where
    S: OfferStore,
    R: SegmentResolver,
{
    /// Create an evaluator over `store`, resolving segments with `resolver`.
    pub fn new(store: S, resolver: R) -> Self {
        Self {
            matcher: OfferMatcher::new(store),
            resolver,
        }
    }

    /// The offer store read by this evaluator.
    pub fn store(&self) -> &S {
        self.matcher.store()
    }

    /// The segment resolver used by this evaluator.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Evaluate `request` against the registered offers.
    pub async fn evaluate(&self, request: &CartRequest) -> Evaluation {
        let segment = match self.resolver.resolve(request.user_id).await {
            Ok(Some(segment)) => SegmentOutcome::Resolved(segment),
            Ok(None) => SegmentOutcome::Unresolved,
            Err(error) => SegmentOutcome::LookupFailed(error.to_string()),
        };

        let applied = self
            .matcher
            .find(request.restaurant_id, segment.segment());

        let cart_value = applied.as_ref().map_or(request.cart_value, |matched| {
            apply_discount(matched.offer.discount(), request.cart_value)
        });

        Evaluation {
            result: CartResult::new(cart_value),
            segment,
            applied,
        }
    }
}
