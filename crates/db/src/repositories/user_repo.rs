//! Repository for the `users` table.

use sqlx::{PgPool, Postgres, Transaction};
use wikistack_core::types::DbId;
use wikistack_core::user::validate_user_fields;

use crate::error::SaveError;
use crate::models::user::{NewUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Return the user with `input.email`, inserting one if none exists.
    ///
    /// An existing user keeps their stored name.
    pub async fn find_or_create(pool: &PgPool, input: &NewUser) -> Result<User, SaveError> {
        let mut tx = pool.begin().await?;
        let user = Self::find_or_create_in(&mut tx, input).await?;
        tx.commit().await?;
        Ok(user)
    }

    /// [`UserRepo::find_or_create`] within an existing transaction, so a new
    /// user is rolled back with the rest of the caller's writes.
    pub async fn find_or_create_in(
        tx: &mut Transaction<'_, Postgres>,
        input: &NewUser,
    ) -> Result<User, SaveError> {
        validate_user_fields(&input.name, &input.email)?;

        let email = input.email.trim();
        let query = format!(
            "INSERT INTO users (name, email)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_users_email DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, User>(&query)
            .bind(input.name.trim())
            .bind(email)
            .fetch_optional(&mut **tx)
            .await?;

        if let Some(user) = inserted {
            tracing::debug!(user_id = user.id, "User created");
            return Ok(user);
        }

        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        let existing = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_one(&mut **tx)
            .await?;
        Ok(existing)
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Delete the user with the given email. Their pages lose their author.
    pub async fn destroy_by_email(pool: &PgPool, email: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE email = $1")
            .bind(email)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
