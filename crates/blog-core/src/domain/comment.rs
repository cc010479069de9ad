use serde::{Deserialize, Serialize};

use super::audit::Audit;
use super::validation::Violations;
use crate::error::DomainError;
use crate::pagination::SortField;

/// Comment entity - always owned by exactly one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub text: String,
    pub audit: Audit,
}

/// A comment about to be inserted under an existing post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: i64,
    pub text: String,
}

/// Unvalidated comment payload as received from a client.
#[derive(Debug, Clone, Default)]
pub struct CommentInput {
    pub text: Option<String>,
}

impl CommentInput {
    /// Returns the comment text once it passes the required-field rule.
    pub fn validate(self) -> Result<String, DomainError> {
        let mut violations = Violations::default();
        let text = violations.required("texto", self.text);
        violations.into_result().map_err(DomainError::Validation)?;
        text.ok_or_else(|| DomainError::invalid("texto é obrigatório"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentSortField {
    Id,
    Text,
    CreatedAt,
    UpdatedAt,
}

impl SortField for CommentSortField {
    fn from_property(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "texto" => Some(Self::Text),
            "dataCriacao" => Some(Self::CreatedAt),
            "dataAtualizacao" => Some(Self::UpdatedAt),
            _ => None,
        }
    }

    fn property(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Text => "texto",
            Self::CreatedAt => "dataCriacao",
            Self::UpdatedAt => "dataAtualizacao",
        }
    }
}
