//! Offer Store
//!
//! Append-only, per-restaurant collection of registered offers. Iteration order is
//! registration order, which is the tie-break used when matching.

use std::sync::{Arc, PoisonError, RwLock};

use rustc_hash::FxHashMap;

use crate::{ids::RestaurantId, offers::Offer};

/// Zero-based position of an offer within its restaurant's sequence.
pub type OfferPosition = usize;

/// Ordered, appendable offer collection keyed by restaurant.
///
/// Implementations must allow concurrent readers, and an append must never be observed
/// half-done by a concurrent [`lookup`](OfferStore::lookup).
pub trait OfferStore: Send + Sync {
    /// Append `offer` to its restaurant's sequence, creating the sequence if absent.
    fn register(&self, offer: Offer) -> OfferPosition;

    /// Snapshot of a restaurant's offers in registration order; empty when unknown.
    fn lookup(&self, restaurant: RestaurantId) -> Vec<Offer>;
}

impl<S: OfferStore> OfferStore for Arc<S> {
    fn register(&self, offer: Offer) -> OfferPosition {
        (**self).register(offer)
    }

    fn lookup(&self, restaurant: RestaurantId) -> Vec<Offer> {
        (**self).lookup(restaurant)
    }
}

/// In-memory [`OfferStore`] guarded by a single read/write lock.
#[derive(Debug, Default)]
pub struct InMemoryOfferStore {
    offers: RwLock<FxHashMap<RestaurantId, Vec<Offer>>>,
}

impl InMemoryOfferStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of restaurants with at least one offer.
    pub fn restaurant_count(&self) -> usize {
        self.offers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Total number of registered offers.
    pub fn offer_count(&self) -> usize {
        self.offers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(Vec::len)
            .sum()
    }
}

impl OfferStore for InMemoryOfferStore {
    fn register(&self, offer: Offer) -> OfferPosition {
        let mut offers = self.offers.write().unwrap_or_else(PoisonError::into_inner);

        let sequence = offers.entry(offer.restaurant_id()).or_default();

        sequence.push(offer);

        sequence.len() - 1
    }

    fn lookup(&self, restaurant: RestaurantId) -> Vec<Offer> {
        self.offers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&restaurant)
            .cloned()
            .unwrap_or_default()
    }
}
