//! Offers

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ids::RestaurantId, segments::SegmentSet};

/// Offer kind, without its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfferType {
    /// Subtract a fixed amount from the cart value.
    #[serde(rename = "FLATX")]
    FlatAmount,

    /// Subtract a percentage of the cart value.
    #[serde(rename = "FLAT%")]
    FlatPercent,
}

impl OfferType {
    /// Wire code for this offer type.
    pub fn code(self) -> &'static str {
        match self {
            OfferType::FlatAmount => "FLATX",
            OfferType::FlatPercent => "FLAT%",
        }
    }
}

impl fmt::Display for OfferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when an offer type code is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown offer type: {0:?}")]
pub struct UnknownOfferType(pub String);

impl FromStr for OfferType {
    type Err = UnknownOfferType;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "FLATX" => Ok(OfferType::FlatAmount),
            "FLAT%" => Ok(OfferType::FlatPercent),
            other => Err(UnknownOfferType(other.to_string())),
        }
    }
}

/// Discount carried by an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Discount {
    /// Subtract `amount` from the cart value (e.g. "10 off").
    FlatAmount {
        /// Amount to subtract, in minor units.
        amount: u64,
    },

    /// Subtract `percentage` percent of the cart value, truncated (e.g. "10% off").
    FlatPercent {
        /// Whole percentage points.
        percentage: u64,
    },
}

impl Discount {
    /// Build a discount from its kind and raw value.
    pub fn new(offer_type: OfferType, offer_value: u64) -> Self {
        match offer_type {
            OfferType::FlatAmount => Discount::FlatAmount {
                amount: offer_value,
            },
            OfferType::FlatPercent => Discount::FlatPercent {
                percentage: offer_value,
            },
        }
    }

    /// Kind of this discount.
    pub fn offer_type(&self) -> OfferType {
        match self {
            Discount::FlatAmount { .. } => OfferType::FlatAmount,
            Discount::FlatPercent { .. } => OfferType::FlatPercent,
        }
    }

    /// Raw value of this discount.
    pub fn offer_value(&self) -> u64 {
        match *self {
            Discount::FlatAmount { amount } => amount,
            Discount::FlatPercent { percentage } => percentage,
        }
    }
}

/// A discount rule scoped to one restaurant and a set of customer segments.
///
/// Offers are immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    restaurant_id: RestaurantId,
    discount: Discount,
    target_segments: SegmentSet,
}

impl Offer {
    /// Create a new offer.
    pub fn new(
        restaurant_id: impl Into<RestaurantId>,
        discount: Discount,
        target_segments: SegmentSet,
    ) -> Self {
        Self {
            restaurant_id: restaurant_id.into(),
            discount,
            target_segments,
        }
    }

    /// Convenience constructor for a flat amount offer.
    pub fn flat_amount(
        restaurant_id: impl Into<RestaurantId>,
        amount: u64,
        target_segments: SegmentSet,
    ) -> Self {
        Self::new(
            restaurant_id,
            Discount::FlatAmount { amount },
            target_segments,
        )
    }

    /// Convenience constructor for a flat percentage offer.
    pub fn flat_percent(
        restaurant_id: impl Into<RestaurantId>,
        percentage: u64,
        target_segments: SegmentSet,
    ) -> Self {
        Self::new(
            restaurant_id,
            Discount::FlatPercent { percentage },
            target_segments,
        )
    }

    /// Restaurant this offer belongs to.
    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    /// The discount applied when this offer matches.
    pub fn discount(&self) -> &Discount {
        &self.discount
    }

    /// Kind of discount.
    pub fn offer_type(&self) -> OfferType {
        self.discount.offer_type()
    }

    /// Raw discount value.
    pub fn offer_value(&self) -> u64 {
        self.discount.offer_value()
    }

    /// Segments this offer targets.
    pub fn target_segments(&self) -> &SegmentSet {
        &self.target_segments
    }
}
