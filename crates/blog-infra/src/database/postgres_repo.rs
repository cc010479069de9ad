//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use blog_core::domain::{Comment, CommentSortField, NewComment, Post, PostData, PostSortField};
use blog_core::error::RepoError;
use blog_core::pagination::{Page, PageRequest};
use blog_core::ports::{CommentRepository, PostRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err, order};

/// PostgreSQL post repository.
///
/// Comments go away with their post through the `ON DELETE CASCADE`
/// foreign key on `comentarios.publicacao_id`.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

fn post_column(field: PostSortField) -> post::Column {
    match field {
        PostSortField::Id => post::Column::Id,
        PostSortField::Title => post::Column::Title,
        PostSortField::Description => post::Column::Description,
        PostSortField::Content => post::Column::Content,
        PostSortField::CreatedAt => post::Column::CreatedAt,
        PostSortField::UpdatedAt => post::Column::UpdatedAt,
    }
}

fn comment_column(field: CommentSortField) -> comment::Column {
    match field {
        CommentSortField::Id => comment::Column::Id,
        CommentSortField::Text => comment::Column::Text,
        CommentSortField::CreatedAt => comment::Column::CreatedAt,
        CommentSortField::UpdatedAt => comment::Column::UpdatedAt,
    }
}

/// Posts in the requested order. Ties and unsorted listings fall back to
/// insertion order.
pub(crate) fn post_page_query(request: &PageRequest<PostSortField>) -> Select<PostEntity> {
    let mut query = PostEntity::find();
    if let Some(sort) = request.sort {
        query = query.order_by(post_column(sort.field), order(sort.direction));
    }
    query.order_by_asc(post::Column::Id)
}

/// Comments of one post, ordered like [`post_page_query`].
pub(crate) fn comment_page_query(
    post_id: i64,
    request: &PageRequest<CommentSortField>,
) -> Select<CommentEntity> {
    let mut query = CommentEntity::find().filter(comment::Column::PostId.eq(post_id));
    if let Some(sort) = request.sort {
        query = query.order_by(comment_column(sort.field), order(sort.direction));
    }
    query.order_by_asc(comment::Column::Id)
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_page(
        &self,
        request: &PageRequest<PostSortField>,
    ) -> Result<Page<Post>, RepoError> {
        let paginator = post_page_query(request).paginate(&self.db, request.size);
        let total = paginator.num_items().await.map_err(map_db_err)?;
        let rows = paginator
            .fetch_page(request.page)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(page = request.page, size = request.size, total, "Listed posts");

        Ok(Page::new(
            rows.into_iter().map(Into::into).collect(),
            total,
            request.page,
            request.size,
        ))
    }

    async fn create(&self, data: PostData) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(data)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_page_by_post_id(
        &self,
        post_id: i64,
        request: &PageRequest<CommentSortField>,
    ) -> Result<Page<Comment>, RepoError> {
        let paginator = comment_page_query(post_id, request).paginate(&self.db, request.size);
        let total = paginator.num_items().await.map_err(map_db_err)?;
        let rows = paginator
            .fetch_page(request.page)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id, page = request.page, total, "Listed comments");

        Ok(Page::new(
            rows.into_iter().map(Into::into).collect(),
            total,
            request.page,
            request.size,
        ))
    }

    async fn find_by_id_and_post_id(
        &self,
        id: i64,
        post_id: i64,
    ) -> Result<Option<Comment>, RepoError> {
        let result = CommentEntity::find_by_id(id)
            .filter(comment::Column::PostId.eq(post_id))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, new_comment: NewComment) -> Result<Comment, RepoError> {
        let model = comment::ActiveModel::from(new_comment)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }
}
