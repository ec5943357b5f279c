//! Handlers for page submitters.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use wikistack_core::error::CoreError;
use wikistack_core::types::DbId;
use wikistack_db::models::page::PageSummary;
use wikistack_db::models::user::UserPages;
use wikistack_db::repositories::{PageRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}

/// GET /users/{id}
///
/// A user and the pages they submitted.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", id)))?;
    let pages = PageRepo::find_by_author(&state.pool, user.id).await?;

    Ok(Json(DataResponse {
        data: UserPages {
            user,
            pages: pages.into_iter().map(PageSummary::from).collect(),
        },
    }))
}
