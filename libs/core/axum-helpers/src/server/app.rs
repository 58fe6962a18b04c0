use super::shutdown::shutdown_signal;
use crate::errors::handlers::route_not_matched;
use crate::http::{cors_layer_from_env, security_headers};
use axum::{Json, Router, middleware, routing::get};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Path the OpenAPI document is served at
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - the OpenAPI JSON document at [`OPENAPI_PATH`]
/// - the given routes at the root
/// - a fallback answering unmatched paths and methods with the
///   route-not-matched 404
/// - tracing, security headers and, when `CORS_ALLOWED_ORIGIN` is set, CORS
///
/// Routes must already have their state applied.
///
/// # Errors
/// Returns `InvalidInput` if `CORS_ALLOWED_ORIGIN` is set but holds no valid
/// origin.
///
/// # Example
/// ```ignore
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let routes = Router::new().nest("/products", products_router);
/// let router = create_router::<ApiDoc>(routes)?;
/// ```
pub fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors_layer = cors_layer_from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let openapi = T::openapi();

    let router = Router::new()
        .route(
            OPENAPI_PATH,
            get(move || {
                let openapi = openapi.clone();
                async move { Json(openapi) }
            }),
        )
        .merge(apis)
        .fallback(route_not_matched)
        .method_not_allowed_fallback(route_not_matched)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    Ok(match cors_layer {
        Some(cors) => router.layer(cors),
        None => router,
    })
}

/// Serves the router until SIGINT/SIGTERM, then runs `cleanup`.
///
/// In-flight requests are drained before `cleanup` starts. `cleanup` gets at
/// most `shutdown_timeout` to finish.
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     client.shutdown().await;
/// };
///
/// create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => tracing::warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test api"))]
    struct TestDoc;

    fn router() -> Router {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            create_router::<TestDoc>(Router::new().route("/ping", get(|| async { "pong" })))
                .unwrap()
        })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_serves_openapi_document() {
        let response = router()
            .oneshot(Request::get(OPENAPI_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["info"]["title"], "test api");
    }

    #[tokio::test]
    async fn test_unknown_path_uses_fallback() {
        let response = router()
            .oneshot(Request::get("/nonexistent").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await["error"],
            "The URL you requested: /nonexistent is NOT found on Server!"
        );
    }

    #[tokio::test]
    async fn test_wrong_method_uses_fallback() {
        let response = router()
            .oneshot(Request::post("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_cors_is_error() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some(" , "), || {
            let err = create_router::<TestDoc>(Router::new()).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        });
    }
}
