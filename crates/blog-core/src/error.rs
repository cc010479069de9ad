//! Domain-level error types.

use thiserror::Error;

/// Name used for posts in not-found messages.
pub const POST_ENTITY: &str = "publicacao";

/// Name used for comments in not-found messages.
pub const COMMENT_ENTITY: &str = "comentário";

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Id {id} de {entity_type} não encontrado!")]
    NotFound { entity_type: &'static str, id: i64 },

    #[error("Id {comment_id} de comentário não encontrado na publicacao de Id {post_id}")]
    CommentNotFoundForPost { comment_id: i64, post_id: i64 },

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    pub fn post_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: POST_ENTITY,
            id,
        }
    }

    pub fn comment_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: COMMENT_ENTITY,
            id,
        }
    }

    /// Single-violation validation error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Validation(vec![message.into()])
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
