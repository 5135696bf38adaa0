//! Shared application services for the cart offer engine.

pub mod context;
pub mod domain;
