//! Liveness endpoint for the catalogue.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use movieshelf_db::repositories::MovieRepo;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the `movie` table answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Rows in the `movie` table; `null` when it could not be read.
    pub movie_count: Option<i64>,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let movie_count = match MovieRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(err) => {
            tracing::warn!(error = %err, "Movie table unreachable during health check");
            None
        }
    };
    let db_healthy = movie_count.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        movie_count,
    })
}

/// `GET /health`, mounted next to the movie routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
