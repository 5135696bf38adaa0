//! Cart Handlers

pub(crate) mod apply;
