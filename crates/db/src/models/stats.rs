//! Aggregate counts reported by the health endpoint.

use serde::Serialize;
use sqlx::FromRow;

/// Page and user totals plus the newest applied migration.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WikiStats {
    pub pages: i64,
    pub open_pages: i64,
    pub closed_pages: i64,
    pub users: i64,
    /// Version of the newest successful migration, `None` before the first.
    pub schema_version: Option<i64>,
}
