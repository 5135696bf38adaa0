//! Route labels for request metrics.

use salvo::http::StatusCode;

const UNMATCHED_ROUTE: &str = "{unmatched}";

/// Label a request path for metrics, folding unrouted paths into one label.
pub(super) fn metric_route(path: &str, status: StatusCode) -> &str {
    if status == StatusCode::NOT_FOUND {
        return UNMATCHED_ROUTE;
    }

    let trimmed = path.trim_end_matches('/');

    if trimmed.is_empty() { "/" } else { trimmed }
}
