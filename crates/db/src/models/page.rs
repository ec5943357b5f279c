//! Wiki page model, the unsaved draft with its slug hook, and response DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wikistack_core::error::ValidationError;
use wikistack_core::markdown::render_markdown;
use wikistack_core::page::{
    route_for, split_tags, url_title_from, validate_page_fields, STATUS_CLOSED, STATUS_OPEN,
};
use wikistack_core::types::{DbId, Timestamp};

use crate::models::user::User;

/// Mirrors the `enum_pages_status` PostgreSQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "enum_pages_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Open,
    Closed,
}

impl PageStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PageStatus::Open => STATUS_OPEN,
            PageStatus::Closed => STATUS_CLOSED,
        }
    }
}

/// A row from the `pages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Page {
    pub id: DbId,
    pub title: String,
    pub url_title: String,
    pub content: String,
    pub tags: Option<String>,
    pub status: Option<PageStatus>,
    pub author_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Page {
    /// `/wiki/<url_title>`, computed on every call.
    pub fn route(&self) -> String {
        route_for(&self.url_title)
    }

    /// HTML rendering of `content`, computed on every call.
    pub fn rendered_content(&self) -> String {
        render_markdown(&self.content)
    }

    /// Parsed tag tokens.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags.as_deref().map(split_tags).unwrap_or_default()
    }
}

/// DTO for creating a page.
///
/// Every field is optional so that missing values reach validation instead
/// of failing deserialization. `status` stays a raw string; the database
/// decides whether it is a member of the enum.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPage {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
    pub status: Option<String>,
    pub author_id: Option<DbId>,
}

/// An unsaved (or about-to-be-updated) page.
///
/// `title` is private so the slug hook cannot be bypassed: every way of
/// setting it re-derives `url_title`.
#[derive(Debug, Clone, Default)]
pub struct PageDraft {
    title: Option<String>,
    url_title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
    pub status: Option<String>,
    pub author_id: Option<DbId>,
}

impl PageDraft {
    /// Build a draft from input, running the slug hook.
    pub fn build(input: NewPage) -> Self {
        let mut draft = Self {
            title: input.title,
            url_title: None,
            content: input.content,
            tags: input.tags,
            status: input.status,
            author_id: input.author_id,
        };
        draft.derive_url_title();
        draft
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn url_title(&self) -> Option<&str> {
        self.url_title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
        self.derive_url_title();
    }

    /// Route of the draft once saved, if it has a slug.
    pub fn route(&self) -> Option<String> {
        self.url_title.as_deref().map(route_for)
    }

    pub fn rendered_content(&self) -> Option<String> {
        self.content.as_deref().map(render_markdown)
    }

    /// Run the slug hook, then check required fields.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.derive_url_title();
        validate_page_fields(
            self.title.as_deref(),
            self.url_title.as_deref(),
            self.content.as_deref(),
        )
    }

    fn derive_url_title(&mut self) {
        self.url_title = self.title.as_deref().map(url_title_from);
    }
}

impl From<&Page> for PageDraft {
    fn from(page: &Page) -> Self {
        Self {
            title: Some(page.title.clone()),
            url_title: Some(page.url_title.clone()),
            content: Some(page.content.clone()),
            tags: page.tags.clone(),
            status: page.status.map(|s| s.as_str().to_string()),
            author_id: page.author_id,
        }
    }
}

/// DTO for editing a page. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePage {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
    pub status: Option<String>,
}

impl UpdatePage {
    /// Apply the changes to a draft; a new title re-derives the slug.
    pub fn apply(self, draft: &mut PageDraft) {
        if let Some(title) = self.title {
            draft.set_title(Some(title));
        }
        if let Some(content) = self.content {
            draft.content = Some(content);
        }
        if let Some(tags) = self.tags {
            draft.tags = Some(tags);
        }
        if let Some(status) = self.status {
            draft.status = Some(status);
        }
    }
}

/// A page plus its route, used in listings.
#[derive(Debug, Serialize)]
pub struct PageSummary {
    #[serde(flatten)]
    pub page: Page,
    pub route: String,
}

impl From<Page> for PageSummary {
    fn from(page: Page) -> Self {
        let route = page.route();
        Self { page, route }
    }
}

/// Full page view with derived fields and author.
#[derive(Debug, Serialize)]
pub struct PageDetail {
    #[serde(flatten)]
    pub page: Page,
    pub route: String,
    pub rendered_content: String,
    pub tag_list: Vec<String>,
    pub author: Option<User>,
}

impl PageDetail {
    pub fn new(page: Page, author: Option<User>) -> Self {
        Self {
            route: page.route(),
            rendered_content: page.rendered_content(),
            tag_list: page.tag_list(),
            page,
            author,
        }
    }
}

/// Response for the similar-pages lookup.
#[derive(Debug, Serialize)]
pub struct SimilarPages {
    pub page: PageSummary,
    pub similar: Vec<PageSummary>,
}

/// Descriptor for the add/edit form views.
#[derive(Debug, Serialize)]
pub struct PageForm {
    pub action: String,
    pub fields: &'static [&'static str],
    pub statuses: &'static [&'static str],
    pub page: Option<PageSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikistack_core::page::VALID_STATUSES;

    fn new_page() -> NewPage {
        NewPage {
            title: Some("testing testing 1 2 3".into()),
            content: Some("Mic check.".into()),
            ..Default::default()
        }
    }

    #[test]
    fn build_derives_url_title() {
        let draft = PageDraft::build(new_page());
        assert_eq!(draft.url_title(), Some("testing_testing_1_2_3"));
    }

    #[test]
    fn set_title_rederives_url_title() {
        let mut draft = PageDraft::build(new_page());
        draft.set_title(Some("Other Title".into()));
        assert_eq!(draft.url_title(), Some("other_title"));
        draft.set_title(None);
        assert_eq!(draft.url_title(), None);
    }

    #[test]
    fn draft_route_uses_prefix() {
        let draft = PageDraft::build(NewPage {
            title: Some("testisfun".into()),
            ..Default::default()
        });
        assert_eq!(draft.route().as_deref(), Some("/wiki/testisfun"));
    }

    #[test]
    fn draft_renders_markdown() {
        let mut draft = PageDraft::default();
        draft.content = Some("I am using __markdown__.".into());
        assert_eq!(
            draft.rendered_content().unwrap().trim(),
            "<p>I am using <strong>markdown</strong>.</p>"
        );
    }

    #[test]
    fn validate_reports_missing_title() {
        let mut draft = PageDraft::build(new_page());
        draft.set_title(None);
        let err = draft.validate().unwrap_err();
        assert_eq!(err.first_path(), Some("title"));
    }

    #[test]
    fn validate_reports_missing_content() {
        let mut draft = PageDraft::build(new_page());
        draft.content = None;
        let err = draft.validate().unwrap_err();
        assert_eq!(err.first_path(), Some("content"));
    }

    #[test]
    fn validate_ignores_status() {
        let mut draft = PageDraft::build(new_page());
        draft.status = Some("not valid".into());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn update_applies_only_given_fields() {
        let mut draft = PageDraft::build(new_page());
        UpdatePage {
            title: Some("Renamed Page".into()),
            ..Default::default()
        }
        .apply(&mut draft);
        assert_eq!(draft.url_title(), Some("renamed_page"));
        assert_eq!(draft.content.as_deref(), Some("Mic check."));
    }

    #[test]
    fn status_labels_match_core_constants() {
        let labels: Vec<&str> = [PageStatus::Open, PageStatus::Closed]
            .into_iter()
            .map(PageStatus::as_str)
            .collect();
        assert_eq!(labels, VALID_STATUSES);
    }
}
