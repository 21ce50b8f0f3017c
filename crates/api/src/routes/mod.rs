pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree, mounted at the server root.
///
/// ```text
/// /health                     service + database health
/// /movies                     list, create
/// /movies/{id}                get, update (PUT/PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(movie::router())
}
