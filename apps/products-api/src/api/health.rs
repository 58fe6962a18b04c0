//! Liveness and readiness endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use axum_helpers::server::{health_router, run_health_checks, HealthCheckFuture};
use database::mongodb::check_health;
use serde_json::Value;

use crate::state::AppState;

/// `/ready`: 200 when MongoDB answers a ping, 503 otherwise
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            check_health(&state.mongo_client)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await.unwrap_or_else(|failed| failed)
}

pub fn router(state: &AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state.clone())
        .merge(health_router(state.config.app))
}
