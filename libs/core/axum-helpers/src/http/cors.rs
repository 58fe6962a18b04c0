use axum::http::{HeaderValue, Method, header};
use core_config::ConfigError;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Environment variable holding comma-separated allowed origins
pub const CORS_ALLOWED_ORIGIN: &str = "CORS_ALLOWED_ORIGIN";

/// Builds a CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// Unset means no CORS layer. A set value must contain at least one valid
/// origin, e.g. `http://localhost:3000,https://shop.example.com`.
pub fn cors_layer_from_env() -> Result<Option<CorsLayer>, ConfigError> {
    match std::env::var(CORS_ALLOWED_ORIGIN) {
        Ok(raw) => {
            let origins = parse_origins(&raw)?;
            tracing::info!("CORS configured with allowed origins: {}", raw);
            Ok(Some(create_cors_layer(origins)))
        }
        Err(_) => Ok(None),
    }
}

/// Creates a CORS layer for the catalog API's methods and headers.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(HeaderValue::from_str)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ConfigError::ParseError {
            key: CORS_ALLOWED_ORIGIN.to_string(),
            details: e.to_string(),
        })?;

    if origins.is_empty() {
        return Err(ConfigError::ParseError {
            key: CORS_ALLOWED_ORIGIN.to_string(),
            details: "no origins given".to_string(),
        });
    }

    Ok(origins)
}
