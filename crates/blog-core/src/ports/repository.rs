use async_trait::async_trait;

use crate::domain::{Comment, CommentSortField, NewComment, Post, PostData, PostSortField};
use crate::error::RepoError;
use crate::pagination::{Page, PageRequest};

/// Generic repository trait defining standard CRUD operations.
///
/// Implementations own the audit timestamps: inserts stamp both, `save`
/// refreshes `updated_at`.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Check whether an entity with this ID exists.
    async fn exists_by_id(&self, id: ID) -> Result<bool, RepoError>;

    /// Persist changes to an existing entity. `RepoError::NotFound` if the
    /// row is gone.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. `RepoError::NotFound` if nothing matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
///
/// Deleting a post also deletes its comments.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    async fn find_page(&self, request: &PageRequest<PostSortField>)
    -> Result<Page<Post>, RepoError>;

    /// Insert a new post; the store assigns the id.
    async fn create(&self, data: PostData) -> Result<Post, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, i64> {
    async fn find_page_by_post_id(
        &self,
        post_id: i64,
        request: &PageRequest<CommentSortField>,
    ) -> Result<Page<Comment>, RepoError>;

    /// Find a comment only if it belongs to the given post.
    async fn find_by_id_and_post_id(
        &self,
        id: i64,
        post_id: i64,
    ) -> Result<Option<Comment>, RepoError>;

    /// Insert a new comment; the store assigns the id.
    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError>;
}
