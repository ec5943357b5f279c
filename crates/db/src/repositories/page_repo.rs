//! Repository for the `pages` table.
//!
//! Writes go through [`PageDraft::validate`] first; only a draft that passes
//! in-memory validation reaches the database.

use sqlx::{PgPool, Postgres, Transaction};
use wikistack_core::page::{split_tags, TAG_PADDING};
use wikistack_core::types::DbId;

use crate::error::SaveError;
use crate::models::page::{NewPage, Page, PageDraft};

/// Column list for pages queries.
const COLUMNS: &str = "id, title, url_title, content, tags, status, author_id, \
    created_at, updated_at";

/// Provides CRUD and query operations for pages.
pub struct PageRepo;

impl PageRepo {
    /// Build, validate and insert a page in one call.
    pub async fn create(pool: &PgPool, input: NewPage) -> Result<Page, SaveError> {
        let mut draft = PageDraft::build(input);
        Self::save(pool, &mut draft).await
    }

    /// Validate a draft, then insert it.
    ///
    /// `status` is bound as text and cast to `enum_pages_status` in SQL, so
    /// an unknown value is rejected by PostgreSQL rather than here.
    pub async fn save(pool: &PgPool, draft: &mut PageDraft) -> Result<Page, SaveError> {
        let mut tx = pool.begin().await?;
        let page = Self::save_in(&mut tx, draft).await?;
        tx.commit().await?;
        Ok(page)
    }

    /// Validate a draft, then insert it within an existing transaction.
    ///
    /// Nothing is visible to other connections until the caller commits.
    pub async fn save_in(
        tx: &mut Transaction<'_, Postgres>,
        draft: &mut PageDraft,
    ) -> Result<Page, SaveError> {
        draft.validate()?;

        let query = format!(
            "INSERT INTO pages (title, url_title, content, tags, status, author_id)
             VALUES ($1, $2, $3, $4, $5::enum_pages_status, $6)
             RETURNING {COLUMNS}"
        );
        let page = sqlx::query_as::<_, Page>(&query)
            .bind(draft.title())
            .bind(draft.url_title())
            .bind(&draft.content)
            .bind(&draft.tags)
            .bind(&draft.status)
            .bind(draft.author_id)
            .fetch_one(&mut **tx)
            .await?;

        tracing::debug!(page_id = page.id, url_title = %page.url_title, "Page saved");
        Ok(page)
    }

    /// Validate a draft, then overwrite the page with the given id.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &mut PageDraft,
    ) -> Result<Option<Page>, SaveError> {
        draft.validate()?;

        let query = format!(
            "UPDATE pages SET
                title = $2,
                url_title = $3,
                content = $4,
                tags = $5,
                status = $6::enum_pages_status
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let page = sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(draft.title())
            .bind(draft.url_title())
            .bind(&draft.content)
            .bind(&draft.tags)
            .bind(&draft.status)
            .fetch_optional(pool)
            .await?;
        Ok(page)
    }

    /// Find a page by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE id = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a page by slug. Slugs are not unique; the oldest match wins.
    pub async fn find_by_url_title(
        pool: &PgPool,
        url_title: &str,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pages WHERE url_title = $1 ORDER BY id ASC LIMIT 1"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(url_title)
            .fetch_optional(pool)
            .await
    }

    /// List all pages, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Page>(&query).fetch_all(pool).await
    }

    /// List the pages submitted by one user, newest first.
    pub async fn find_by_author(pool: &PgPool, author_id: DbId) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pages
             WHERE author_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(author_id)
            .fetch_all(pool)
            .await
    }

    /// Pages whose `tags` string contains `tag` (case-sensitive substring).
    pub async fn find_by_tag(pool: &PgPool, tag: &str) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pages
             WHERE strpos(tags, $1) > 0
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(tag)
            .fetch_all(pool)
            .await
    }

    /// Other pages sharing at least one exact tag token with `page`.
    ///
    /// Never includes `page` itself.
    pub async fn find_similar(pool: &PgPool, page: &Page) -> Result<Vec<Page>, sqlx::Error> {
        let tokens = page.tags.as_deref().map(split_tags).unwrap_or_default();
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT {COLUMNS} FROM pages
             WHERE id <> $1
               AND EXISTS (
                   SELECT 1 FROM unnest(string_to_array(tags, ',')) AS t(tag)
                   WHERE btrim(t.tag, $3) = ANY($2)
               )
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(page.id)
            .bind(&tokens)
            .bind(TAG_PADDING)
            .fetch_all(pool)
            .await
    }

    /// Delete a page by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every page whose title matches a SQL `LIKE` pattern.
    ///
    /// Returns the number of rows removed.
    pub async fn destroy_by_title_like(pool: &PgPool, pattern: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pages WHERE title LIKE $1")
            .bind(pattern)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
