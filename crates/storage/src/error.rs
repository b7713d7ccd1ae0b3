use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A name given in a payload does not resolve to an existing row.
    #[error("{entity} '{name}' not found")]
    RelatedNotFound { entity: &'static str, name: String },
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        self.database_error()
            .is_some_and(|e| matches!(e.kind(), ErrorKind::UniqueViolation))
    }

    /// Name of the constraint reported by the database, if any.
    pub fn constraint(&self) -> Option<&str> {
        self.database_error().and_then(|e| e.constraint())
    }

    /// Rewrites a unique violation of `constraint` into a `ConstraintViolation`
    /// with the given message. Every other error passes through untouched.
    pub fn on_unique_violation<F>(self, constraint: &str, message: F) -> Self
    where
        F: FnOnce() -> String,
    {
        if self.is_unique_violation() && self.constraint() == Some(constraint) {
            Self::ConstraintViolation(message())
        } else {
            self
        }
    }

    fn database_error(&self) -> Option<&dyn DatabaseError> {
        match self {
            Self::Database(sqlx::Error::Database(e)) => Some(&**e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn related_not_found_names_the_entity() {
        let err = StorageError::RelatedNotFound {
            entity: "Category",
            name: "crossfit".to_string(),
        };

        assert_eq!(err.to_string(), "Category 'crossfit' not found");
    }

    #[test]
    fn non_database_errors_are_not_constraint_violations() {
        let err = StorageError::Database(sqlx::Error::RowNotFound);

        assert!(!err.is_unique_violation());
        assert_eq!(err.constraint(), None);
    }

    #[test]
    fn on_unique_violation_leaves_other_errors_alone() {
        let err = StorageError::NotFound.on_unique_violation("athletes_cpf_key", || {
            unreachable!("message must not be built for unrelated errors")
        });

        assert!(matches!(err, StorageError::NotFound));
    }
}
