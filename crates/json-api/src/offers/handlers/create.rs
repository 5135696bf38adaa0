//! Create Offer Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{extensions::*, offers::requests::CreateOfferRequest, state::State};

const SUCCESS_MESSAGE: &str = "success";

/// Offer Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OfferCreatedResponse {
    /// Always `"success"`
    pub response_msg: String,
}

/// Create Offer Handler
///
/// Appends the offer to its restaurant's offer sequence.
#[endpoint(
    tags("offers"),
    summary = "Register Offer",
    responses(
        (status_code = StatusCode::OK, description = "Offer registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::METHOD_NOT_ALLOWED, description = "Method Not Allowed"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOfferRequest>,
    depot: &mut Depot,
) -> Result<Json<OfferCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let record = state
        .app
        .offers
        .register_offer(json.into_inner().into())
        .await;

    info!(
        restaurant_id = %record.offer.restaurant_id(),
        position = record.position,
        "offer registered"
    );

    Ok(Json(OfferCreatedResponse {
        response_msg: SUCCESS_MESSAGE.to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use cartoffer::prelude::{Discount, RestaurantId, SegmentSet};
    use cartoffer_app::domain::offers::{MockOffersService, data::NewOffer, records::OfferRecord};

    use crate::test_helpers::offers_service;

    use super::*;

    fn make_service(offers: MockOffersService) -> Service {
        offers_service(offers, Router::with_path("offer").post(handler))
    }

    #[tokio::test]
    async fn test_create_offer_success() -> TestResult {
        let expected = NewOffer {
            restaurant_id: RestaurantId(1),
            discount: Discount::FlatAmount { amount: 10 },
            segments: SegmentSet::from_strs(&["p1"]),
        };

        let mut offers = MockOffersService::new();

        offers
            .expect_register_offer()
            .once()
            .withf(move |offer| *offer == expected)
            .return_once(|offer| OfferRecord {
                position: 0,
                offer: offer.into(),
            });

        let mut res = TestClient::post("http://example.com/offer")
            .json(&json!({
                "restaurant_id": 1,
                "offer_type": "FLATX",
                "offer_value": 10,
                "customer_segment": ["p1"],
            }))
            .send(&make_service(offers))
            .await;

        let body: OfferCreatedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.response_msg, "success");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_percent_offer_with_plural_segments() -> TestResult {
        let expected = NewOffer {
            restaurant_id: RestaurantId(2),
            discount: Discount::FlatPercent { percentage: 15 },
            segments: SegmentSet::from_strs(&["p2", "p3"]),
        };

        let mut offers = MockOffersService::new();

        offers
            .expect_register_offer()
            .once()
            .withf(move |offer| *offer == expected)
            .return_once(|offer| OfferRecord {
                position: 3,
                offer: offer.into(),
            });

        let res = TestClient::post("http://example.com/offer")
            .json(&json!({
                "restaurant_id": 2,
                "offer_type": "FLAT%",
                "offer_value": 15,
                "customer_segments": ["p3", "p2"],
            }))
            .send(&make_service(offers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_offer_unknown_type_returns_400() {
        let mut offers = MockOffersService::new();

        offers.expect_register_offer().never();

        let res = TestClient::post("http://example.com/offer")
            .json(&json!({
                "restaurant_id": 1,
                "offer_type": "BOGO",
                "offer_value": 10,
                "customer_segment": ["p1"],
            }))
            .send(&make_service(offers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_create_offer_missing_fields_returns_400() {
        let mut offers = MockOffersService::new();

        offers.expect_register_offer().never();

        let res = TestClient::post("http://example.com/offer")
            .json(&json!({ "restaurant_id": 1 }))
            .send(&make_service(offers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
