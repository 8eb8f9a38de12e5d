//! Liveness endpoint, mounted at the root rather than under `/api`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use carcatalog_db::repositories::BrandRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Number of registered brands; absent when the database is unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brands: Option<i64>,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let brands = match carcatalog_db::health_check(&state.pool).await {
        Ok(()) => BrandRepo::count(&state.pool).await.ok(),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            None
        }
    };
    let db_healthy = brands.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        brands,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
