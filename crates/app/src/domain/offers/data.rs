//! Offers Data

use cartoffer::prelude::{Discount, Offer, RestaurantId, SegmentSet};

/// New Offer Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOffer {
    pub restaurant_id: RestaurantId,
    pub discount: Discount,
    pub segments: SegmentSet,
}

impl From<NewOffer> for Offer {
    fn from(offer: NewOffer) -> Self {
        Offer::new(offer.restaurant_id, offer.discount, offer.segments)
    }
}
