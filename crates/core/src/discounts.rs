//! Discount Calculator
//!
//! Pure arithmetic over [`Discount`]. The calculation is total: it never fails for any cart
//! value sign or magnitude. Intermediate results are computed in `i128` and saturated into the
//! [`CartValue`] range.

use crate::{cart::CartValue, offers::Discount};

/// Compute the cart value after applying `discount`.
///
/// - Flat amount: `cart_value - amount`, with no floor at zero.
/// - Flat percent: `cart_value - cart_value * percentage / 100`, truncating toward zero.
pub fn apply_discount(discount: &Discount, cart_value: CartValue) -> CartValue {
    let cart = i128::from(cart_value);

    let discounted = match *discount {
        Discount::FlatAmount { amount } => cart - i128::from(amount),
        Discount::FlatPercent { percentage } => cart - percent_of(cart, percentage),
    };

    saturate(discounted)
}

/// Compute the cart value after applying an optional discount; no discount is the identity.
pub fn apply_optional_discount(discount: Option<&Discount>, cart_value: CartValue) -> CartValue {
    discount.map_or(cart_value, |discount| apply_discount(discount, cart_value))
}

/// Truncated `percentage` percent of `value`.
///
/// `i64 * u64` always fits in `i128`, so only the final subtraction can leave the `i64` range.
fn percent_of(value: i128, percentage: u64) -> i128 {
    value * i128::from(percentage) / 100
}

fn saturate(value: i128) -> CartValue {
    CartValue::try_from(value).unwrap_or(if value.is_negative() {
        CartValue::MIN
    } else {
        CartValue::MAX
    })
}
