pub mod health;
pub mod users;
pub mod wiki;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the application route tree (without middleware).
///
/// ```text
/// /health          service health, page/user counts, schema version
/// /wiki/...        pages (see [`wiki::router`])
/// /users/...       submitters (see [`users::router`])
/// ```
pub fn app_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/wiki", wiki::router(config.max_page_bytes))
        .nest("/users", users::router())
}
