use std::sync::Arc;

use crate::domain::{Post, PostInput, PostSortField};
use crate::error::{DomainError, RepoError};
use crate::pagination::{Page, PageRequest};
use crate::ports::PostRepository;

/// Post service - list, create, update and delete posts.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// List posts, unfiltered, in the requested order.
    pub async fn list(
        &self,
        request: &PageRequest<PostSortField>,
    ) -> Result<Page<Post>, DomainError> {
        Ok(self.posts.find_page(request).await?)
    }

    pub async fn get(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    pub async fn create(&self, input: PostInput) -> Result<Post, DomainError> {
        let data = input.validate()?;
        let post = self.posts.create(data).await?;
        tracing::info!(post_id = post.id, "Post created");
        Ok(post)
    }

    /// Replace title, description and content of an existing post.
    pub async fn update(&self, id: i64, input: PostInput) -> Result<Post, DomainError> {
        let data = input.validate()?;

        let mut post = self.posts.find_by_id(id).await?.ok_or_else(|| {
            tracing::debug!(post_id = id, "Update of unknown post");
            DomainError::post_not_found(id)
        })?;
        post.apply(data);

        let post = self.posts.save(post).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::post_not_found(id),
            other => other.into(),
        })?;
        tracing::info!(post_id = id, "Post updated");
        Ok(post)
    }

    /// Delete a post together with all of its comments.
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.posts.exists_by_id(id).await? {
            tracing::debug!(post_id = id, "Delete of unknown post");
            return Err(DomainError::post_not_found(id));
        }

        self.posts.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::post_not_found(id),
            other => other.into(),
        })?;
        tracing::info!(post_id = id, "Post deleted with its comments");
        Ok(())
    }
}
