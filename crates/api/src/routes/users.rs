//! Route definitions for page submitters.
//!
//! Registered under `/users`.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// ```text
/// GET    /        list_users
/// GET    /{id}    get_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users))
        .route("/{id}", get(users::get_user))
}
