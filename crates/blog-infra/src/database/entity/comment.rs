//! Comment entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{Set, Unchanged};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comentarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "texto", column_type = "Text")]
    pub text: String,
    #[sea_orm(column_name = "publicacao_id", indexed)]
    pub post_id: i64,
    #[sea_orm(column_name = "data_criacao")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_name = "data_atualizacao")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
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

/// Conversion from SeaORM Model to Domain Comment.
impl From<Model> for blog_core::domain::Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            text: model.text,
            audit: blog_core::domain::Audit {
                created_at: model.created_at.to_utc(),
                updated_at: model.updated_at.to_utc(),
            },
        }
    }
}

/// Only the text of an existing comment is ever rewritten.
impl From<blog_core::domain::Comment> for ActiveModel {
    fn from(comment: blog_core::domain::Comment) -> Self {
        Self {
            id: Unchanged(comment.id),
            text: Set(comment.text),
            post_id: Unchanged(comment.post_id),
            created_at: Unchanged(comment.audit.created_at.fixed_offset()),
            updated_at: Unchanged(comment.audit.updated_at.fixed_offset()),
        }
    }
}

impl From<blog_core::domain::NewComment> for ActiveModel {
    fn from(comment: blog_core::domain::NewComment) -> Self {
        Self {
            text: Set(comment.text),
            post_id: Set(comment.post_id),
            ..Default::default()
        }
    }
}
