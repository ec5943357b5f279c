//! Route definitions for wiki pages.
//!
//! Registered under `/wiki`.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::wiki;
use crate::state::AppState;

/// Wiki page routes, registered as `/wiki`.
///
/// Static segments (`add`, `search`) take priority over `{url_title}`.
/// The two write routes reject bodies larger than `max_page_bytes`.
///
/// ```text
/// GET    /                        list_pages
/// POST   /                        create_page
/// GET    /add                     add_form
/// GET    /search                  search_pages
/// GET    /{url_title}             get_page
/// POST   /{url_title}             update_page
/// GET    /{url_title}/similar     similar_pages
/// GET    /{url_title}/edit        edit_form
/// GET    /{url_title}/delete      delete_page
/// ```
pub fn router(max_page_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(wiki::list_pages)
                .post(wiki::create_page)
                .layer(DefaultBodyLimit::max(max_page_bytes)),
        )
        .route("/add", get(wiki::add_form))
        .route("/search", get(wiki::search_pages))
        .route(
            "/{url_title}",
            get(wiki::get_page)
                .post(wiki::update_page)
                .layer(DefaultBodyLimit::max(max_page_bytes)),
        )
        .route("/{url_title}/similar", get(wiki::similar_pages))
        .route("/{url_title}/edit", get(wiki::edit_form))
        .route("/{url_title}/delete", get(wiki::delete_page))
}
