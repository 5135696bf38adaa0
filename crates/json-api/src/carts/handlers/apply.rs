//! Apply Offer Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use cartoffer::prelude::{CartRequest, CartValue};

use crate::{extensions::*, observability::observe_evaluation, state::State};

/// Apply Offer Request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ApplyOfferRequest {
    /// Cart value before any discount
    pub cart_value: CartValue,

    /// Restaurant the cart belongs to
    pub restaurant_id: i64,

    /// User placing the order
    pub user_id: i64,
}

impl From<ApplyOfferRequest> for CartRequest {
    fn from(request: ApplyOfferRequest) -> Self {
        CartRequest::new(request.cart_value, request.restaurant_id, request.user_id)
    }
}

/// Apply Offer Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ApplyOfferResponse {
    /// Cart value after the applicable offer, if any
    pub cart_value: CartValue,
}

/// Apply Offer Handler
///
/// Returns the cart value after applying the earliest registered offer that
/// targets the user's segment. Carts with no applicable offer come back
/// unchanged.
#[endpoint(
    tags("carts"),
    summary = "Apply Offer",
    responses(
        (status_code = StatusCode::OK, description = "Discounted cart value"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::METHOD_NOT_ALLOWED, description = "Method Not Allowed"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ApplyOfferRequest>,
    depot: &mut Depot,
) -> Result<Json<ApplyOfferResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let evaluation = state.app.carts.apply_offer(json.into_inner().into()).await;

    observe_evaluation(&evaluation);

    Ok(Json(ApplyOfferResponse {
        cart_value: evaluation.result.cart_value,
    }))
}
