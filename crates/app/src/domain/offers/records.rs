//! Offer Records

use cartoffer::prelude::{Offer, OfferPosition};

/// A registered offer and where it sits in its restaurant's sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferRecord {
    pub position: OfferPosition,
    pub offer: Offer,
}
