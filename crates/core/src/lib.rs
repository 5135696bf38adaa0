//! Cart Offer
//!
//! Cart Offer is the decision engine behind restaurant cart discounts: it keeps the offers
//! registered per restaurant, resolves which customer segment a user belongs to, picks the
//! earliest registered offer targeting that segment and computes the discounted cart value.

pub mod cart;
pub mod discounts;
pub mod evaluator;
pub mod ids;
pub mod matcher;
pub mod offers;
pub mod prelude;
pub mod segments;
pub mod store;
