/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
/// Variants raised by the store carry its diagnostic detail.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// Unique constraint rejected the write.
    #[error("repository.duplicated")]
    Duplicated(String),
    /// Any other integrity constraint (foreign key, check, not null).
    #[error("repository.constraint_violation")]
    ConstraintViolation(String),
    #[error("repository.database_error")]
    DatabaseError(String),
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn duplicated(detail: impl Into<String>) -> Self {
        RepositoryError::Duplicated(detail.into())
    }
    pub fn constraint_violation(detail: impl Into<String>) -> Self {
        RepositoryError::ConstraintViolation(detail.into())
    }
    pub fn database_error(detail: impl Into<String>) -> Self {
        RepositoryError::DatabaseError(detail.into())
    }

    /// True when the store refused the write because of an integrity constraint.
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            RepositoryError::Duplicated(_) | RepositoryError::ConstraintViolation(_)
        )
    }

    /// Store-reported detail, or the error code when there is none.
    pub fn detail(&self) -> String {
        match self {
            RepositoryError::Duplicated(detail)
            | RepositoryError::ConstraintViolation(detail)
            | RepositoryError::DatabaseError(detail) => detail.clone(),
            RepositoryError::NotFound => self.to_string(),
        }
    }
}
