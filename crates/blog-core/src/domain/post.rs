use serde::{Deserialize, Serialize};

use super::audit::Audit;
use super::validation::{SHORT_TEXT_MAX, Violations};
use crate::error::DomainError;
use crate::pagination::SortField;

/// Post entity - a blog publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub audit: Audit,
}

impl Post {
    /// Overwrite the client-editable fields. Id and audit are left alone.
    pub fn apply(&mut self, data: PostData) {
        self.title = data.title;
        self.description = data.description;
        self.content = data.content;
    }
}

/// Unvalidated post payload as received from a client.
#[derive(Debug, Clone, Default)]
pub struct PostInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
}

/// Validated, client-editable post fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostData {
    pub title: String,
    pub description: Option<String>,
    pub content: String,
}

impl PostInput {
    /// Check required fields and lengths, reporting every violation at once.
    pub fn validate(self) -> Result<PostData, DomainError> {
        let mut violations = Violations::default();

        violations.max_chars("titulo", self.title.as_deref(), SHORT_TEXT_MAX);
        violations.max_chars("descricao", self.description.as_deref(), SHORT_TEXT_MAX);
        let title = violations.required("titulo", self.title);
        let content = violations.required("conteudo", self.content);

        violations.into_result().map_err(DomainError::Validation)?;

        match (title, content) {
            (Some(title), Some(content)) => Ok(PostData {
                title,
                description: self.description,
                content,
            }),
            _ => Err(DomainError::invalid("titulo e conteudo são obrigatórios")),
        }
    }
}

/// Sortable post properties, named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSortField {
    Id,
    Title,
    Description,
    Content,
    CreatedAt,
    UpdatedAt,
}

impl SortField for PostSortField {
    fn from_property(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "titulo" => Some(Self::Title),
            "descricao" => Some(Self::Description),
            "conteudo" => Some(Self::Content),
            "dataCriacao" => Some(Self::CreatedAt),
            "dataAtualizacao" => Some(Self::UpdatedAt),
            _ => None,
        }
    }

    fn property(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "titulo",
            Self::Description => "descricao",
            Self::Content => "conteudo",
            Self::CreatedAt => "dataCriacao",
            Self::UpdatedAt => "dataAtualizacao",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: Option<&str>, content: Option<&str>) -> PostInput {
        PostInput {
            title: title.map(String::from),
            description: None,
            content: content.map(String::from),
        }
    }

    #[test]
    fn valid_input_keeps_fields_as_submitted() {
        let data = PostInput {
            title: Some("A".into()),
            description: Some("  resumo ".into()),
            content: Some("B".into()),
        }
        .validate()
        .unwrap();

        assert_eq!(data.title, "A");
        assert_eq!(data.description.as_deref(), Some("  resumo "));
        assert_eq!(data.content, "B");
    }

    #[test]
    fn missing_and_blank_fields_are_all_reported() {
        let err = input(None, Some("   ")).validate().unwrap_err();
        match err {
            DomainError::Validation(violations) => {
                assert_eq!(violations.len(), 2);
                assert!(violations[0].starts_with("titulo"));
                assert!(violations[1].starts_with("conteudo"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn description_is_optional() {
        assert!(input(Some("A"), Some("B")).validate().is_ok());
    }

    #[test]
    fn long_title_is_rejected() {
        let long = "x".repeat(SHORT_TEXT_MAX + 1);
        let err = input(Some(&long), Some("B")).validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(v) if v.len() == 1));
    }

    #[test]
    fn apply_leaves_identity_untouched() {
        let now = chrono::Utc::now();
        let mut post = Post {
            id: 4,
            title: "old".into(),
            description: Some("d".into()),
            content: "c".into(),
            audit: Audit::created(now),
        };

        post.apply(PostData {
            title: "new".into(),
            description: None,
            content: "c2".into(),
        });

        assert_eq!(post.id, 4);
        assert_eq!(post.audit.created_at, now);
        assert_eq!(post.title, "new");
        assert_eq!(post.description, None);
    }

    #[test]
    fn sort_properties_round_trip() {
        for field in [
            PostSortField::Id,
            PostSortField::Title,
            PostSortField::Description,
            PostSortField::Content,
            PostSortField::CreatedAt,
            PostSortField::UpdatedAt,
        ] {
            assert_eq!(PostSortField::from_property(field.property()), Some(field));
        }
        assert_eq!(PostSortField::from_property("title"), None);
    }
}
