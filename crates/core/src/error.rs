use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} '{key}'")]
    NotFound { entity: &'static str, key: String },
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] keyed by anything displayable.
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending field, e.g. `title`.
    pub path: &'static str,
    pub message: String,
}

/// In-memory validation failure carrying every failed field, in check order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed: {}", describe(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Path of the first failing field, if any.
    pub fn first_path(&self) -> Option<&'static str> {
        self.errors.first().map(|e| e.path)
    }
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.path, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Accumulates [`FieldError`]s and turns them into a result at the end.
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            path,
            message: message.into(),
        });
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors: self.0 })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_accumulator_is_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn errors_keep_insertion_order() {
        let mut errs = FieldErrors::new();
        errs.push("title", "must not be empty");
        errs.push("content", "must not be empty");
        let err = errs.into_result().unwrap_err();
        assert_eq!(err.first_path(), Some("title"));
        assert_eq!(err.errors[1].path, "content");
        assert_eq!(
            err.to_string(),
            "Validation failed: title: must not be empty; content: must not be empty"
        );
    }

    #[test]
    fn not_found_display() {
        let err = CoreError::not_found("Page", "missing_page");
        assert_eq!(err.to_string(), "Entity not found: Page 'missing_page'");
    }
}
