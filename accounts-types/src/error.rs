//! Error types for the account service.

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Balance cannot be negative")]
    NegativeBalance,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Repository-level errors (data access failures).
///
/// Write failures are split into narrow kinds rather than one catch-all, but
/// every kind still surfaces to clients as a bad request with the store's
/// message forwarded verbatim.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Entity not found")]
    NotFound,

    #[error("Validation rejected: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    IoFailure(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(e) => AppError::BadRequest(e.to_string()),
            RepoError::NotFound => AppError::NotFound("Resource not found".into()),
            RepoError::Validation(msg) => AppError::BadRequest(msg),
            RepoError::Conflict(msg) => AppError::BadRequest(msg),
            RepoError::IoFailure(msg) => AppError::BadRequest(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_failures_become_bad_request_verbatim() {
        for err in [
            RepoError::Validation("CHECK constraint failed".into()),
            RepoError::Conflict("UNIQUE constraint failed".into()),
            RepoError::IoFailure("disk I/O error".into()),
        ] {
            let msg = match &err {
                RepoError::Validation(m) | RepoError::Conflict(m) | RepoError::IoFailure(m) => {
                    m.clone()
                }
                _ => unreachable!(),
            };
            assert!(matches!(AppError::from(err), AppError::BadRequest(m) if m == msg));
        }
    }

    #[test]
    fn test_not_found_maps_to_not_found() {
        assert!(matches!(
            AppError::from(RepoError::NotFound),
            AppError::NotFound(_)
        ));
    }
}
