use business::domain::errors::RepositoryError;

const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE class 23 covers every integrity constraint violation.
const INTEGRITY_CONSTRAINT_CLASS: &str = "23";

/// Maps a sqlx error onto the domain repository error, keeping the
/// store-reported message as diagnostic detail.
pub fn map_sqlx_error(operation: &str, err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(db_err) => {
            let detail = match db_err.constraint() {
                Some(constraint) => format!(
                    "{} (constraint: {})",
                    db_err.message(),
                    constraint
                ),
                None => db_err.message().to_string(),
            };
            classify(db_err.code().as_deref(), detail)
        }
        other => RepositoryError::database_error(format!("{}: {}", operation, other)),
    }
}

/// Chooses the repository error for a SQLSTATE code.
pub fn classify(code: Option<&str>, detail: String) -> RepositoryError {
    match code {
        Some(UNIQUE_VIOLATION) => RepositoryError::duplicated(detail),
        Some(code) if code.starts_with(INTEGRITY_CONSTRAINT_CLASS) => {
            RepositoryError::constraint_violation(detail)
        }
        _ => RepositoryError::database_error(detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_unique_violation_as_duplicated() {
        let err = classify(Some("23505"), "duplicate key".to_string());
        assert!(matches!(err, RepositoryError::Duplicated(ref d) if d == "duplicate key"));
    }

    #[test]
    fn should_classify_foreign_key_and_check_violations_as_constraint_errors() {
        for code in ["23503", "23514", "23502"] {
            let err = classify(Some(code), "violation".to_string());
            assert!(matches!(err, RepositoryError::ConstraintViolation(_)), "{code}");
        }
    }

    #[test]
    fn should_classify_other_codes_as_database_errors() {
        assert!(matches!(
            classify(Some("40001"), "serialization failure".to_string()),
            RepositoryError::DatabaseError(_)
        ));
        assert!(matches!(
            classify(None, "no code".to_string()),
            RepositoryError::DatabaseError(_)
        ));
    }

    #[test]
    fn should_prefix_non_database_errors_with_operation() {
        let err = map_sqlx_error("commit", sqlx::Error::PoolClosed);
        match err {
            RepositoryError::DatabaseError(detail) => assert!(detail.starts_with("commit: ")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
