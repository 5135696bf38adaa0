//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{
    carts, fallback::method_not_allowed, healthcheck, observability::metrics_handler, offers,
    state::State,
};

/// Offer and cart endpoints under `/api/v1`.
pub(crate) fn api_router() -> Router {
    Router::with_path("api/v1")
        .push(
            Router::with_path("offer")
                .post(offers::create::handler)
                .goal(method_not_allowed),
        )
        .push(
            Router::with_path("cart/apply_offer")
                .post(carts::apply::handler)
                .goal(method_not_allowed),
        )
}

/// The whole server surface, with shared state injected.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(api_router())
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use cartoffer::prelude::{
        CartRequest, CartResult, CartValue, Evaluation, SegmentOutcome, StaticSegmentResolver,
    };
    use cartoffer_app::{
        context::AppContext,
        domain::{carts::MockCartsService, offers::MockOffersService, segments::SegmentSource},
    };

    use crate::test_helpers::{state_with, strict_app_service};

    use super::*;

    #[tokio::test]
    async fn get_on_apply_offer_returns_405() {
        let res = TestClient::get("http://example.com/api/v1/cart/apply_offer")
            .send(&strict_app_service())
            .await;

        let allow = res.headers().get("allow").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::METHOD_NOT_ALLOWED));
        assert_eq!(allow, Some("POST"));
    }

    #[tokio::test]
    async fn put_on_offer_returns_405() {
        let res = TestClient::put("http://example.com/api/v1/offer")
            .json(&json!({}))
            .send(&strict_app_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::METHOD_NOT_ALLOWED));
    }

    #[tokio::test]
    async fn unknown_path_returns_404() {
        let res = TestClient::get("http://example.com/api/v1/cart/nope")
            .send(&strict_app_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn apply_offer_routes_through_state() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_apply_offer()
            .once()
            .withf(|request| *request == CartRequest::new(300, 1, 3))
            .return_once(|_| Evaluation {
                result: CartResult::new(270),
                segment: SegmentOutcome::Unresolved,
                applied: None,
            });

        let mut offers = MockOffersService::new();

        offers.expect_register_offer().never();

        let service = Service::new(app_router(state_with(offers, carts)));

        let body: serde_json::Value =
            TestClient::post("http://example.com/api/v1/cart/apply_offer")
                .json(&json!({ "cart_value": 300, "restaurant_id": 1, "user_id": 3 }))
                .send(&service)
                .await
                .take_json()
                .await?;

        assert_eq!(body, json!({ "cart_value": 270 }));

        Ok(())
    }

    fn live_service() -> Service {
        let segments = StaticSegmentResolver::new()
            .with(1, "p1")
            .with(2, "p2")
            .with(3, "p3");

        let app = AppContext::new(SegmentSource::Fixed(segments));

        Service::new(app_router(State::from_app_context(app)))
    }

    async fn apply_offer(
        service: &Service,
        cart_value: CartValue,
        restaurant_id: i64,
        user_id: i64,
    ) -> TestResult<CartValue> {
        let mut res = TestClient::post("http://example.com/api/v1/cart/apply_offer")
            .json(&json!({
                "cart_value": cart_value,
                "restaurant_id": restaurant_id,
                "user_id": user_id,
            }))
            .send(service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: serde_json::Value = res.take_json().await?;

        Ok(body["cart_value"].as_i64().unwrap_or(CartValue::MIN))
    }

    #[tokio::test]
    async fn registered_offers_apply_through_the_full_stack() -> TestResult {
        let service = live_service();

        let offers = [
            json!({ "restaurant_id": 1, "offer_type": "FLATX", "offer_value": 10, "customer_segment": ["p1"] }),
            json!({ "restaurant_id": 1, "offer_type": "FLATX", "offer_value": 20, "customer_segment": ["p2"] }),
            json!({ "restaurant_id": 1, "offer_type": "FLAT%", "offer_value": 10, "customer_segment": ["p3"] }),
            json!({ "restaurant_id": 2, "offer_type": "FLAT%", "offer_value": 22, "customer_segment": ["p3"] }),
            json!({ "restaurant_id": 2, "offer_type": "FLATX", "offer_value": 10, "customer_segment": ["p3"] }),
        ];

        for offer in &offers {
            let body: serde_json::Value = TestClient::post("http://example.com/api/v1/offer")
                .json(offer)
                .send(&service)
                .await
                .take_json()
                .await?;

            assert_eq!(body, json!({ "response_msg": "success" }));
        }

        let cases: [(CartValue, i64, i64, CartValue); 10] = [
            (200, 1, 1, 190),
            (300, 1, 2, 280),
            (400, 1, 3, 360),
            (100, 2, 3, 78),
            (1_000_000, 1, 3, 900_000),
            (0, 1, 1, -10),
            (10, 1, 1, 0),
            (500, 1, 4, 500),
            (-100, 1, 2, -120),
            (100, 99, 2, 100),
        ];

        for (cart_value, restaurant_id, user_id, expected) in cases {
            assert_eq!(
                apply_offer(&service, cart_value, restaurant_id, user_id).await?,
                expected,
                "cart {cart_value} at restaurant {restaurant_id} for user {user_id}"
            );
        }

        let res = TestClient::get("http://example.com/api/v1/cart/apply_offer")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::METHOD_NOT_ALLOWED));

        Ok(())
    }
}
