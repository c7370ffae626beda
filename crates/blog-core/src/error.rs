//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A lookup by id matched no row. The message format is relied on by clients.
    #[error("{entity} not found with id: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    pub fn author_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: "Author",
            id,
        }
    }

    pub fn post_not_found(id: i64) -> Self {
        Self::NotFound { entity: "Post", id }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages() {
        assert_eq!(
            DomainError::author_not_found(42).to_string(),
            "Author not found with id: 42"
        );
        assert_eq!(
            DomainError::post_not_found(7).to_string(),
            "Post not found with id: 7"
        );
    }

    #[test]
    fn repository_errors_pass_through() {
        let err: DomainError = RepoError::Query("boom".to_string()).into();
        assert_eq!(err.to_string(), "Query execution failed: boom");
    }
}
