//! Carts

mod handlers;

pub(crate) use handlers::*;
