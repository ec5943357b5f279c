use wikistack_core::error::ValidationError;

/// Failure of a validate-then-write operation.
///
/// In-memory checks fail with [`SaveError::Validation`] before any SQL runs.
/// Constraints only the database knows about (e.g. the `enum_pages_status`
/// type) surface as [`SaveError::Database`].
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl SaveError {
    /// Error class name, stable across messages.
    pub fn name(&self) -> &'static str {
        match self {
            SaveError::Validation(_) => "ValidationError",
            SaveError::Database(_) => "DatabaseError",
        }
    }

    /// PostgreSQL SQLSTATE code, when the database rejected the write.
    pub fn code(&self) -> Option<String> {
        match self {
            SaveError::Database(sqlx::Error::Database(db_err)) => {
                db_err.code().map(|c| c.into_owned())
            }
            _ => None,
        }
    }
}
