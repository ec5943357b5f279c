//! Handlers for wiki pages.
//!
//! Provides listing, the add/edit form descriptors, tag search, page detail,
//! similar pages, and create/update/delete. Writes answer with `302 Found`.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use wikistack_core::error::CoreError;
use wikistack_core::page::VALID_STATUSES;
use wikistack_db::models::page::{
    NewPage, Page, PageDetail, PageDraft, PageForm, PageSummary, SimilarPages, UpdatePage,
};
use wikistack_db::models::user::NewUser;
use wikistack_db::repositories::{PageRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::response::{found, DataResponse};
use crate::state::AppState;

/// Fields accepted by the add/edit forms.
pub const PAGE_FORM_FIELDS: &[&str] = &["name", "email", "title", "content", "tags", "status"];

/* --------------------------------------------------------------------------
Request types
-------------------------------------------------------------------------- */

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub tag: Option<String>,
}

/// Body of `POST /wiki`.
#[derive(Debug, Deserialize)]
pub struct CreatePageRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
    pub status: Option<String>,
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Fetch a page by slug or return 404.
async fn ensure_page_by_url_title(pool: &sqlx::PgPool, url_title: &str) -> AppResult<Page> {
    PageRepo::find_by_url_title(pool, url_title)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Page", url_title)))
}

fn summaries(pages: Vec<Page>) -> Vec<PageSummary> {
    pages.into_iter().map(PageSummary::from).collect()
}

/* --------------------------------------------------------------------------
Views
-------------------------------------------------------------------------- */

/// GET /wiki
///
/// List every page, newest first.
pub async fn list_pages(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pages = PageRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: summaries(pages),
    }))
}

/// GET /wiki/add
pub async fn add_form() -> impl IntoResponse {
    Json(DataResponse {
        data: PageForm {
            action: "/wiki".to_string(),
            fields: PAGE_FORM_FIELDS,
            statuses: VALID_STATUSES,
            page: None,
        },
    })
}

/// GET /wiki/search?tag=...
///
/// Pages whose tags contain `tag` as a case-sensitive substring, padding
/// included. Without a tag the result is empty.
pub async fn search_pages(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let tag = params.tag.unwrap_or_default();
    if tag.trim().is_empty() {
        return Ok(Json(DataResponse {
            data: Vec::<PageSummary>::new(),
        }));
    }

    let pages = PageRepo::find_by_tag(&state.pool, &tag).await?;
    Ok(Json(DataResponse {
        data: summaries(pages),
    }))
}

/// GET /wiki/{url_title}
///
/// Page detail with rendered HTML and the submitting user.
pub async fn get_page(
    State(state): State<AppState>,
    Path(url_title): Path<String>,
) -> AppResult<impl IntoResponse> {
    let page = ensure_page_by_url_title(&state.pool, &url_title).await?;
    let author = match page.author_id {
        Some(id) => UserRepo::find_by_id(&state.pool, id).await?,
        None => None,
    };
    Ok(Json(DataResponse {
        data: PageDetail::new(page, author),
    }))
}

/// GET /wiki/{url_title}/similar
pub async fn similar_pages(
    State(state): State<AppState>,
    Path(url_title): Path<String>,
) -> AppResult<impl IntoResponse> {
    let page = ensure_page_by_url_title(&state.pool, &url_title).await?;
    let similar = PageRepo::find_similar(&state.pool, &page).await?;
    Ok(Json(DataResponse {
        data: SimilarPages {
            page: PageSummary::from(page),
            similar: summaries(similar),
        },
    }))
}

/// GET /wiki/{url_title}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(url_title): Path<String>,
) -> AppResult<impl IntoResponse> {
    let page = ensure_page_by_url_title(&state.pool, &url_title).await?;
    Ok(Json(DataResponse {
        data: PageForm {
            action: page.route(),
            fields: PAGE_FORM_FIELDS,
            statuses: VALID_STATUSES,
            page: Some(PageSummary::from(page)),
        },
    }))
}

/* --------------------------------------------------------------------------
Writes
-------------------------------------------------------------------------- */

/// POST /wiki
///
/// Record the submitter (looked up by email) when a name or email is given,
/// create the page, and redirect to it. Both writes share one transaction.
pub async fn create_page(
    State(state): State<AppState>,
    Json(input): Json<CreatePageRequest>,
) -> AppResult<impl IntoResponse> {
    let mut draft = PageDraft::build(NewPage {
        title: input.title,
        content: input.content,
        tags: input.tags,
        status: input.status,
        author_id: None,
    });
    // Reject a bad page before recording anyone as its author.
    draft.validate()?;

    let mut tx = state.pool.begin().await?;

    if input.name.is_some() || input.email.is_some() {
        let user = NewUser {
            name: input.name.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
        };
        draft.author_id = Some(UserRepo::find_or_create_in(&mut tx, &user).await?.id);
    }

    let page = PageRepo::save_in(&mut tx, &mut draft).await?;
    tx.commit().await?;

    tracing::info!(
        page_id = page.id,
        url_title = %page.url_title,
        author_id = ?page.author_id,
        "Page created"
    );

    Ok(found(page.route()))
}

/// POST /wiki/{url_title}
///
/// Apply edits and redirect to the (possibly renamed) page.
pub async fn update_page(
    State(state): State<AppState>,
    Path(url_title): Path<String>,
    Json(input): Json<UpdatePage>,
) -> AppResult<impl IntoResponse> {
    let page = ensure_page_by_url_title(&state.pool, &url_title).await?;

    let mut draft = PageDraft::from(&page);
    input.apply(&mut draft);

    let updated = PageRepo::update(&state.pool, page.id, &mut draft)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Page", &url_title)))?;

    tracing::info!(
        page_id = updated.id,
        from = %url_title,
        to = %updated.url_title,
        "Page updated"
    );

    Ok(found(updated.route()))
}

/// GET /wiki/{url_title}/delete
///
/// Delete the page and redirect to the listing.
pub async fn delete_page(
    State(state): State<AppState>,
    Path(url_title): Path<String>,
) -> AppResult<impl IntoResponse> {
    let page = ensure_page_by_url_title(&state.pool, &url_title).await?;
    PageRepo::delete(&state.pool, page.id).await?;

    tracing::info!(page_id = page.id, url_title = %url_title, "Page deleted");

    Ok(found("/wiki".to_string()))
}
