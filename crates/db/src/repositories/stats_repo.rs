//! Read-only aggregates across `pages` and `users`.

use sqlx::PgPool;

use crate::models::stats::WikiStats;

pub struct StatsRepo;

impl StatsRepo {
    /// Count pages by status and users, and read the applied schema version.
    pub async fn wiki_stats(pool: &PgPool) -> Result<WikiStats, sqlx::Error> {
        let query = "\
            SELECT \
                COUNT(*) AS pages, \
                COUNT(*) FILTER (WHERE status = 'open') AS open_pages, \
                COUNT(*) FILTER (WHERE status = 'closed') AS closed_pages, \
                (SELECT COUNT(*) FROM users) AS users, \
                (SELECT MAX(version) FROM _sqlx_migrations WHERE success) AS schema_version \
            FROM pages";
        sqlx::query_as::<_, WikiStats>(query).fetch_one(pool).await
    }
}
