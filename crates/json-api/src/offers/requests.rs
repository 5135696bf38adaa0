//! Offer Requests

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use cartoffer::prelude::{Discount, OfferType, RestaurantId, Segment};
use cartoffer_app::domain::offers::data::NewOffer;

/// Offer type as sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) enum OfferTypeRequest {
    /// Subtract a fixed amount.
    #[serde(rename = "FLATX")]
    FlatAmount,

    /// Subtract a percentage of the cart value.
    #[serde(rename = "FLAT%")]
    FlatPercent,
}

impl From<OfferTypeRequest> for OfferType {
    fn from(request: OfferTypeRequest) -> Self {
        match request {
            OfferTypeRequest::FlatAmount => OfferType::FlatAmount,
            OfferTypeRequest::FlatPercent => OfferType::FlatPercent,
        }
    }
}

/// Create Offer Request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOfferRequest {
    /// Restaurant the offer belongs to
    pub restaurant_id: i64,

    /// Discount kind
    pub offer_type: OfferTypeRequest,

    /// Amount for `FLATX`, percentage for `FLAT%`
    pub offer_value: u64,

    /// Segments the offer targets
    #[serde(alias = "customer_segments")]
    pub customer_segment: Vec<String>,
}

impl From<CreateOfferRequest> for NewOffer {
    fn from(request: CreateOfferRequest) -> Self {
        NewOffer {
            restaurant_id: RestaurantId(request.restaurant_id),
            discount: Discount::new(request.offer_type.into(), request.offer_value),
            segments: request.customer_segment.into_iter().map(Segment::from).collect(),
        }
    }
}
