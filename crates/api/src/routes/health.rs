//! `GET /health`: liveness plus a snapshot of what the wiki holds.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use wikistack_db::models::stats::WikiStats;
use wikistack_db::repositories::StatsRepo;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the stats query succeeds, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// Page/user counts and schema version; `null` if the database is down.
    pub wiki: Option<WikiStats>,
}

/// Always answers 200 so load balancers can tell a slow database from a
/// dead process. The body carries the difference.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let wiki = match StatsRepo::wiki_stats(&state.pool).await {
        Ok(stats) => Some(stats),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not read wiki stats");
            None
        }
    };

    Json(HealthResponse {
        status: if wiki.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        wiki,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
