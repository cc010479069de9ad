//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{Set, Unchanged};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "publicacoes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "titulo")]
    pub title: String,
    #[sea_orm(column_name = "descricao")]
    pub description: Option<String>,
    #[sea_orm(column_name = "conteudo", column_type = "Text")]
    pub content: String,
    #[sea_orm(column_name = "data_criacao")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_name = "data_atualizacao")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Stamp audit columns: both on insert, the update time on every save.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            let now = super::now();
            self.created_at = Set(now);
            self.updated_at = Set(now);
        } else {
            self.updated_at = Set(super::touched(&self.updated_at));
        }
        Ok(self)
    }
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for blog_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            content: model.content,
            audit: blog_core::domain::Audit {
                created_at: model.created_at.to_utc(),
                updated_at: model.updated_at.to_utc(),
            },
        }
    }
}

/// Conversion from Domain Post to an ActiveModel that updates the editable
/// columns of an existing row.
impl From<blog_core::domain::Post> for ActiveModel {
    fn from(post: blog_core::domain::Post) -> Self {
        Self {
            id: Unchanged(post.id),
            title: Set(post.title),
            description: Set(post.description),
            content: Set(post.content),
            created_at: Unchanged(post.audit.created_at.fixed_offset()),
            updated_at: Unchanged(post.audit.updated_at.fixed_offset()),
        }
    }
}

/// ActiveModel for inserting a new post; id and audit columns are left to
/// the database and `before_save`.
impl From<blog_core::domain::PostData> for ActiveModel {
    fn from(data: blog_core::domain::PostData) -> Self {
        Self {
            title: Set(data.title),
            description: Set(data.description),
            content: Set(data.content),
            ..Default::default()
        }
    }
}
