use std::sync::Arc;

use crate::domain::{Comment, CommentInput, CommentSortField, NewComment};
use crate::error::{DomainError, RepoError};
use crate::pagination::{Page, PageRequest};
use crate::ports::{CommentRepository, PostRepository};

/// Comment service - comments always live under an existing post.
#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { comments, posts }
    }

    /// List the comments of a post.
    ///
    /// The post itself is not checked: an unknown id yields an empty page.
    pub async fn list_by_post(
        &self,
        post_id: i64,
        request: &PageRequest<CommentSortField>,
    ) -> Result<Page<Comment>, DomainError> {
        Ok(self.comments.find_page_by_post_id(post_id, request).await?)
    }

    pub async fn get(&self, id: i64) -> Result<Comment, DomainError> {
        self.comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::comment_not_found(id))
    }

    pub async fn create(&self, post_id: i64, input: CommentInput) -> Result<Comment, DomainError> {
        let text = input.validate()?;
        self.require_post(post_id).await?;

        let comment = self
            .comments
            .create(NewComment { post_id, text })
            .await
            .map_err(|e| match e {
                // The post was deleted between the check and the insert.
                RepoError::Constraint(_) => DomainError::post_not_found(post_id),
                other => other.into(),
            })?;

        tracing::info!(comment_id = comment.id, post_id, "Comment created");
        Ok(comment)
    }

    /// Replace the text of a comment.
    ///
    /// The post must exist, but the comment is looked up by its own id only
    /// and is not required to belong to that post.
    pub async fn update(
        &self,
        comment_id: i64,
        post_id: i64,
        input: CommentInput,
    ) -> Result<Comment, DomainError> {
        let text = input.validate()?;
        self.require_post(post_id).await?;

        let mut comment = self.comments.find_by_id(comment_id).await?.ok_or_else(|| {
            tracing::debug!(comment_id, "Update of unknown comment");
            DomainError::comment_not_found(comment_id)
        })?;
        comment.text = text;

        let comment = self.comments.save(comment).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::comment_not_found(comment_id),
            other => other.into(),
        })?;

        tracing::info!(comment_id, post_id, "Comment updated");
        Ok(comment)
    }

    /// Delete a comment, only if it belongs to the given post.
    pub async fn delete(&self, comment_id: i64, post_id: i64) -> Result<(), DomainError> {
        let not_found = || DomainError::CommentNotFoundForPost {
            comment_id,
            post_id,
        };

        let comment = self
            .comments
            .find_by_id_and_post_id(comment_id, post_id)
            .await?
            .ok_or_else(|| {
                tracing::debug!(comment_id, post_id, "Delete of unknown comment/post pair");
                not_found()
            })?;

        self.comments.delete(comment.id).await.map_err(|e| match e {
            RepoError::NotFound => not_found(),
            other => other.into(),
        })?;

        tracing::info!(comment_id, post_id, "Comment deleted");
        Ok(())
    }

    async fn require_post(&self, post_id: i64) -> Result<(), DomainError> {
        if self.posts.exists_by_id(post_id).await? {
            Ok(())
        } else {
            tracing::debug!(post_id, "Comment refers to unknown post");
            Err(DomainError::post_not_found(post_id))
        }
    }
}
