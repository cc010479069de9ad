//! In-memory storage - used when no database is configured, and in tests.
//!
//! Both tables live behind one async `RwLock`, so multi-row writes such as
//! the post/comment cascade are atomic for concurrent requests.
//! Note: Data is lost on process restart.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use blog_core::domain::{
    Audit, Comment, CommentSortField, NewComment, Post, PostData, PostSortField,
};
use blog_core::error::RepoError;
use blog_core::pagination::{Direction, Page, PageRequest, SortField};
use blog_core::ports::{BaseRepository, CommentRepository, PostRepository};

#[derive(Default)]
struct Tables {
    posts: BTreeMap<i64, Post>,
    comments: BTreeMap<i64, Comment>,
    last_post_id: i64,
    last_comment_id: i64,
}

/// Shared in-memory tables for posts and comments.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn posts(self: &Arc<Self>) -> InMemoryPostRepository {
        InMemoryPostRepository {
            store: Arc::clone(self),
        }
    }

    pub fn comments(self: &Arc<Self>) -> InMemoryCommentRepository {
        InMemoryCommentRepository {
            store: Arc::clone(self),
        }
    }
}

/// Sort `rows` (already in id order) and cut out the requested page.
fn page_of<T, F>(
    mut rows: Vec<T>,
    request: &PageRequest<F>,
    compare: impl Fn(&T, &T, F) -> Ordering,
) -> Page<T>
where
    F: SortField,
{
    if let Some(sort) = request.sort {
        // Stable sort: equal keys stay in id order, as in the SQL adapter.
        rows.sort_by(|a, b| {
            let ord = compare(a, b, sort.field);
            match sort.direction {
                Direction::Asc => ord,
                Direction::Desc => ord.reverse(),
            }
        });
    }

    let total = rows.len() as u64;
    let items = rows
        .into_iter()
        .skip(usize::try_from(request.offset()).unwrap_or(usize::MAX))
        .take(usize::try_from(request.size).unwrap_or(usize::MAX))
        .collect();

    Page::new(items, total, request.page, request.size)
}

fn compare_posts(a: &Post, b: &Post, field: PostSortField) -> Ordering {
    match field {
        PostSortField::Id => a.id.cmp(&b.id),
        PostSortField::Title => a.title.cmp(&b.title),
        PostSortField::Description => a.description.cmp(&b.description),
        PostSortField::Content => a.content.cmp(&b.content),
        PostSortField::CreatedAt => a.audit.created_at.cmp(&b.audit.created_at),
        PostSortField::UpdatedAt => a.audit.updated_at.cmp(&b.audit.updated_at),
    }
}

fn compare_comments(a: &Comment, b: &Comment, field: CommentSortField) -> Ordering {
    match field {
        CommentSortField::Id => a.id.cmp(&b.id),
        CommentSortField::Text => a.text.cmp(&b.text),
        CommentSortField::CreatedAt => a.audit.created_at.cmp(&b.audit.created_at),
        CommentSortField::UpdatedAt => a.audit.updated_at.cmp(&b.audit.updated_at),
    }
}

/// In-memory post repository.
pub struct InMemoryPostRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.posts.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.posts.contains_key(&id))
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut tables = self.store.tables.write().await;
        let stored = tables.posts.get_mut(&post.id).ok_or(RepoError::NotFound)?;

        stored.title = post.title;
        stored.description = post.description;
        stored.content = post.content;
        stored.audit.touch(Utc::now());

        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        if !tables.posts.contains_key(&id) {
            return Err(RepoError::NotFound);
        }

        // No foreign keys here: drop the children first, then the post.
        tables.comments.retain(|_, c| c.post_id != id);
        tables.posts.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_page(
        &self,
        request: &PageRequest<PostSortField>,
    ) -> Result<Page<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        let rows: Vec<Post> = tables.posts.values().cloned().collect();
        Ok(page_of(rows, request, compare_posts))
    }

    async fn create(&self, data: PostData) -> Result<Post, RepoError> {
        let mut tables = self.store.tables.write().await;
        tables.last_post_id += 1;

        let post = Post {
            id: tables.last_post_id,
            title: data.title,
            description: data.description,
            content: data.content,
            audit: Audit::created(Utc::now()),
        };
        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }
}

/// In-memory comment repository.
pub struct InMemoryCommentRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl BaseRepository<Comment, i64> for InMemoryCommentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.comments.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.comments.contains_key(&id))
    }

    async fn save(&self, comment: Comment) -> Result<Comment, RepoError> {
        let mut tables = self.store.tables.write().await;
        let stored = tables
            .comments
            .get_mut(&comment.id)
            .ok_or(RepoError::NotFound)?;

        stored.text = comment.text;
        stored.audit.touch(Utc::now());

        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        tables
            .comments
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_page_by_post_id(
        &self,
        post_id: i64,
        request: &PageRequest<CommentSortField>,
    ) -> Result<Page<Comment>, RepoError> {
        let tables = self.store.tables.read().await;
        let rows: Vec<Comment> = tables
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        Ok(page_of(rows, request, compare_comments))
    }

    async fn find_by_id_and_post_id(
        &self,
        id: i64,
        post_id: i64,
    ) -> Result<Option<Comment>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .comments
            .get(&id)
            .filter(|c| c.post_id == post_id)
            .cloned())
    }

    async fn create(&self, new_comment: NewComment) -> Result<Comment, RepoError> {
        let mut tables = self.store.tables.write().await;
        if !tables.posts.contains_key(&new_comment.post_id) {
            return Err(RepoError::Constraint(format!(
                "publicacao {} does not exist",
                new_comment.post_id
            )));
        }
        tables.last_comment_id += 1;

        let comment = Comment {
            id: tables.last_comment_id,
            post_id: new_comment.post_id,
            text: new_comment.text,
            audit: Audit::created(Utc::now()),
        };
        tables.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::pagination::Sort;

    fn data(title: &str) -> PostData {
        PostData {
            title: title.to_string(),
            description: None,
            content: "body".to_string(),
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_in_sequence() {
        let store = InMemoryStore::new();
        let posts = store.posts();

        let first = posts.create(data("a")).await.unwrap();
        let second = posts.create(data("b")).await.unwrap();

        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(first.audit.created_at, first.audit.updated_at);
    }

    #[tokio::test]
    async fn sorts_and_pages() {
        let store = InMemoryStore::new();
        let posts = store.posts();
        for title in ["b", "c", "a"] {
            posts.create(data(title)).await.unwrap();
        }

        let request = PageRequest::new(0, 2).sorted(Sort::desc(PostSortField::Title));
        let page = posts.find_page(&request).await.unwrap();
        let titles: Vec<_> = page.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["c", "b"]);
        assert_eq!(page.total, 3);

        let page = posts.find_page(&PageRequest::new(1, 2)).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "a");
    }

    #[tokio::test]
    async fn comment_needs_an_existing_post() {
        let store = InMemoryStore::new();
        let err = store
            .comments()
            .create(NewComment {
                post_id: 1,
                text: "orphan".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::Constraint(_)));
    }

    #[tokio::test]
    async fn deleting_a_post_removes_its_comments_only() {
        let store = InMemoryStore::new();
        let (posts, comments) = (store.posts(), store.comments());
        let keep = posts.create(data("keep")).await.unwrap();
        let gone = posts.create(data("gone")).await.unwrap();

        for post_id in [keep.id, gone.id, gone.id] {
            comments
                .create(NewComment {
                    post_id,
                    text: "x".into(),
                })
                .await
                .unwrap();
        }

        posts.delete(gone.id).await.unwrap();

        let left = comments
            .find_page_by_post_id(keep.id, &PageRequest::new(0, 10))
            .await
            .unwrap();
        assert_eq!(left.total, 1);
        assert!(!comments.exists_by_id(2).await.unwrap());
        assert!(!comments.exists_by_id(3).await.unwrap());
    }

    #[tokio::test]
    async fn save_ignores_client_audit_values() {
        let store = InMemoryStore::new();
        let posts = store.posts();
        let created = posts.create(data("a")).await.unwrap();

        let mut edited = created.clone();
        edited.title = "b".into();
        edited.audit.created_at = created.audit.created_at - chrono::Duration::days(1);

        let saved = posts.save(edited).await.unwrap();
        assert_eq!(saved.title, "b");
        assert_eq!(saved.audit.created_at, created.audit.created_at);
        assert!(saved.audit.updated_at >= created.audit.updated_at);
    }
}
