//! User (page submitter) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wikistack_core::types::{DbId, Timestamp};

use crate::models::page::PageSummary;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a submitter.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// A user together with the pages they submitted.
#[derive(Debug, Serialize)]
pub struct UserPages {
    pub user: User,
    pub pages: Vec<PageSummary>,
}
