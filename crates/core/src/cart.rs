//! Cart requests and results

use serde::{Deserialize, Serialize};

use crate::ids::{RestaurantId, UserId};

/// Cart value in minor units. Zero and negative values are accepted as-is.
pub type CartValue = i64;

/// A request to apply the best matching offer to a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartRequest {
    /// Cart value before any discount.
    pub cart_value: CartValue,

    /// Restaurant the cart belongs to.
    pub restaurant_id: RestaurantId,

    /// User placing the order.
    pub user_id: UserId,
}

impl CartRequest {
    /// Create a new cart request.
    pub fn new(
        cart_value: CartValue,
        restaurant_id: impl Into<RestaurantId>,
        user_id: impl Into<UserId>,
    ) -> Self {
        Self {
            cart_value,
            restaurant_id: restaurant_id.into(),
            user_id: user_id.into(),
        }
    }
}

/// Outcome of applying an offer: the possibly unchanged, possibly negative cart value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartResult {
    /// Cart value after the discount.
    pub cart_value: CartValue,
}

impl CartResult {
    /// Wrap a cart value.
    pub fn new(cart_value: CartValue) -> Self {
        Self { cart_value }
    }
}
