//! Method fallback for API resources.

use salvo::{
    http::header::{ALLOW, HeaderValue},
    prelude::*,
};

/// Rejects any method other than POST on a POST-only resource.
#[handler]
pub(crate) async fn method_not_allowed(res: &mut Response) -> StatusError {
    res.headers_mut()
        .insert(ALLOW, HeaderValue::from_static("POST"));

    StatusError::method_not_allowed().brief("Only POST is supported on this resource")
}
