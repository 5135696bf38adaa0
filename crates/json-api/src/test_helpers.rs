//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use cartoffer_app::{
    context::AppContext,
    domain::{carts::MockCartsService, offers::MockOffersService},
};

use crate::{router, state::State};

fn strict_offers_mock() -> MockOffersService {
    let mut offers = MockOffersService::new();

    offers.expect_register_offer().never();

    offers
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_apply_offer().never();

    carts
}

pub(crate) fn state_with(offers: MockOffersService, carts: MockCartsService) -> Arc<State> {
    State::from_app_context(AppContext {
        offers: Arc::new(offers),
        carts: Arc::new(carts),
    })
}

pub(crate) fn offers_service(offers: MockOffersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(offers, strict_carts_mock())))
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(strict_offers_mock(), carts)))
            .push(route),
    )
}

/// The full application router around strict mocks that reject any call.
pub(crate) fn strict_app_service() -> Service {
    Service::new(router::app_router(state_with(
        strict_offers_mock(),
        strict_carts_mock(),
    )))
}
