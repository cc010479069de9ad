//! Service behaviour against stub repositories that record every call.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use super::{CommentService, PostService};
use crate::domain::{
    Audit, Comment, CommentInput, CommentSortField, NewComment, Post, PostData, PostInput,
    PostSortField,
};
use crate::error::{DomainError, RepoError};
use crate::pagination::{Page, PageRequest};
use crate::ports::{BaseRepository, CommentRepository, PostRepository};

/// Post store holding at most one post; `save` reports the row as gone.
#[derive(Default)]
struct StubPosts {
    existing: Option<Post>,
    calls: AtomicUsize,
}

impl StubPosts {
    fn with(post: Post) -> Self {
        Self {
            existing: Some(post),
            calls: AtomicUsize::new(0),
        }
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for StubPosts {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        self.hit();
        Ok(self.existing.clone().filter(|p| p.id == id))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepoError> {
        self.hit();
        Ok(self.existing.as_ref().is_some_and(|p| p.id == id))
    }

    async fn save(&self, _entity: Post) -> Result<Post, RepoError> {
        self.hit();
        Err(RepoError::NotFound)
    }

    async fn delete(&self, _id: i64) -> Result<(), RepoError> {
        self.hit();
        Err(RepoError::Connection("refused".into()))
    }
}

#[async_trait]
impl PostRepository for StubPosts {
    async fn find_page(
        &self,
        request: &PageRequest<PostSortField>,
    ) -> Result<Page<Post>, RepoError> {
        self.hit();
        Ok(Page::new(Vec::new(), 0, request.page, request.size))
    }

    async fn create(&self, _data: PostData) -> Result<Post, RepoError> {
        self.hit();
        Err(RepoError::Query("unexpected insert".into()))
    }
}

/// Comment store whose insert fails on the foreign key.
#[derive(Default)]
struct StubComments {
    calls: AtomicUsize,
}

#[async_trait]
impl BaseRepository<Comment, i64> for StubComments {
    async fn find_by_id(&self, _id: i64) -> Result<Option<Comment>, RepoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }

    async fn exists_by_id(&self, _id: i64) -> Result<bool, RepoError> {
        Ok(false)
    }

    async fn save(&self, entity: Comment) -> Result<Comment, RepoError> {
        Ok(entity)
    }

    async fn delete(&self, _id: i64) -> Result<(), RepoError> {
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for StubComments {
    async fn find_page_by_post_id(
        &self,
        _post_id: i64,
        request: &PageRequest<CommentSortField>,
    ) -> Result<Page<Comment>, RepoError> {
        Ok(Page::new(Vec::new(), 0, request.page, request.size))
    }

    async fn find_by_id_and_post_id(
        &self,
        _id: i64,
        _post_id: i64,
    ) -> Result<Option<Comment>, RepoError> {
        Ok(None)
    }

    async fn create(&self, _comment: NewComment) -> Result<Comment, RepoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RepoError::Constraint("comentarios_publicacao_id_fkey".into()))
    }
}

fn sample_post(id: i64) -> Post {
    Post {
        id,
        title: "A".into(),
        description: None,
        content: "B".into(),
        audit: Audit::created(Utc::now()),
    }
}

fn post_input() -> PostInput {
    PostInput {
        title: Some("A".into()),
        description: None,
        content: Some("B".into()),
    }
}

#[tokio::test]
async fn invalid_post_never_reaches_the_store() {
    let posts = Arc::new(StubPosts::with(sample_post(1)));
    let service = PostService::new(posts.clone());

    let err = service.create(PostInput::default()).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    let err = service.update(1, PostInput::default()).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    assert_eq!(posts.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn post_vanishing_before_save_is_not_found() {
    let service = PostService::new(Arc::new(StubPosts::with(sample_post(1))));

    let err = service.update(1, post_input()).await.unwrap_err();
    assert_eq!(err.to_string(), DomainError::post_not_found(1).to_string());
}

#[tokio::test]
async fn store_failures_are_surfaced() {
    let service = PostService::new(Arc::new(StubPosts::with(sample_post(1))));

    let err = service.delete(1).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Repository(RepoError::Connection(_))
    ));
}

#[tokio::test]
async fn comment_on_post_deleted_mid_request_is_not_found() {
    let comments = Arc::new(StubComments::default());
    let service = CommentService::new(
        comments.clone(),
        Arc::new(StubPosts::with(sample_post(1))),
    );

    let input = CommentInput {
        text: Some("hi".into()),
    };
    let err = service.create(1, input).await.unwrap_err();

    assert!(matches!(err, DomainError::NotFound { id: 1, .. }));
    assert_eq!(comments.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn comment_update_checks_post_before_comment() {
    let comments = Arc::new(StubComments::default());
    let service = CommentService::new(comments.clone(), Arc::new(StubPosts::default()));

    let input = CommentInput {
        text: Some("edit".into()),
    };
    let err = service.update(5, 1, input).await.unwrap_err();

    assert_eq!(err.to_string(), "Id 1 de publicacao não encontrado!");
    assert_eq!(comments.calls.load(Ordering::SeqCst), 0);
}
