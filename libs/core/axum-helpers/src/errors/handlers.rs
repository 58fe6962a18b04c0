use axum::extract::OriginalUri;

use super::AppError;

/// Fallback for requests that match no route, or match a path but not its
/// method.
///
/// ```rust,ignore
/// Router::new()
///     .fallback(route_not_matched)
///     .method_not_allowed_fallback(route_not_matched)
/// ```
pub async fn route_not_matched(OriginalUri(uri): OriginalUri) -> AppError {
    let url = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_else(|| uri.path().to_owned());

    AppError::RouteNotMatched(url)
}
