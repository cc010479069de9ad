//! Post and comment services running on the in-memory store.

use std::sync::Arc;

use blog_core::domain::{CommentInput, CommentSortField, PostInput, PostSortField};
use blog_core::{CommentService, DomainError, PageRequest, PostService, Sort};
use blog_infra::InMemoryStore;

struct Blog {
    posts: PostService,
    comments: CommentService,
}

fn setup() -> Blog {
    let store = InMemoryStore::new();
    let posts = Arc::new(store.posts());
    Blog {
        posts: PostService::new(posts.clone()),
        comments: CommentService::new(Arc::new(store.comments()), posts),
    }
}

fn post(title: &str, content: &str) -> PostInput {
    PostInput {
        title: Some(title.to_string()),
        description: None,
        content: Some(content.to_string()),
    }
}

fn comment(text: &str) -> CommentInput {
    CommentInput {
        text: Some(text.to_string()),
    }
}

fn all_comments() -> PageRequest<CommentSortField> {
    PageRequest::new(0, 100)
}

#[tokio::test]
async fn created_post_reads_back_as_submitted() {
    let blog = setup();
    let input = PostInput {
        title: Some("Rust".into()),
        description: Some("notas".into()),
        content: Some("ownership".into()),
    };

    let created = blog.posts.create(input).await.unwrap();
    let fetched = blog.posts.get(created.id).await.unwrap();

    assert_eq!(fetched.title, "Rust");
    assert_eq!(fetched.description.as_deref(), Some("notas"));
    assert_eq!(fetched.content, "ownership");
    assert!(fetched.id > 0);
    assert_eq!(fetched.audit.created_at, created.audit.created_at);
}

#[tokio::test]
async fn update_keeps_identity_and_refreshes_timestamp() {
    let blog = setup();
    let created = blog.posts.create(post("A", "B")).await.unwrap();

    let updated = blog
        .posts
        .update(
            created.id,
            PostInput {
                title: Some("A2".into()),
                description: Some("d".into()),
                content: Some("B2".into()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.audit.created_at, created.audit.created_at);
    assert!(updated.audit.updated_at >= created.audit.updated_at);
    assert_eq!(
        (updated.title.as_str(), updated.content.as_str()),
        ("A2", "B2")
    );
}

#[tokio::test]
async fn update_and_delete_of_missing_post_name_the_id() {
    let blog = setup();

    let err = blog.posts.update(41, post("A", "B")).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { id: 41, .. }));
    assert!(err.to_string().contains("41"));

    let err = blog.posts.delete(42).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { id: 42, .. }));
}

#[tokio::test]
async fn deleting_a_post_cascades_to_its_comments() {
    let blog = setup();
    let p = blog.posts.create(post("A", "B")).await.unwrap();
    let mut ids = Vec::new();
    for text in ["c1", "c2", "c3"] {
        ids.push(blog.comments.create(p.id, comment(text)).await.unwrap().id);
    }

    blog.posts.delete(p.id).await.unwrap();

    assert!(blog.posts.get(p.id).await.is_err());
    let page = blog
        .comments
        .list_by_post(p.id, &all_comments())
        .await
        .unwrap();
    assert!(page.items.is_empty());
    for id in ids {
        assert!(blog.comments.get(id).await.is_err());
    }
}

#[tokio::test]
async fn comment_under_unknown_post_is_rejected_without_writing() {
    let blog = setup();
    let p = blog.posts.create(post("A", "B")).await.unwrap();
    blog.comments.create(p.id, comment("first")).await.unwrap();

    let err = blog.comments.create(9999, comment("x")).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { id: 9999, .. }));

    // Ids are not consumed by the failed insert.
    let next = blog.comments.create(p.id, comment("second")).await.unwrap();
    assert_eq!(next.id, 2);
    assert!(blog.comments.get(3).await.is_err());
}

#[tokio::test]
async fn listing_comments_never_fails_on_empty_or_unknown_posts() {
    let blog = setup();
    let p = blog.posts.create(post("A", "B")).await.unwrap();

    let page = blog
        .comments
        .list_by_post(p.id, &all_comments())
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);

    let page = blog
        .comments
        .list_by_post(12345, &all_comments())
        .await
        .unwrap();
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn delete_with_wrong_post_keeps_the_comment() {
    let blog = setup();
    let p1 = blog.posts.create(post("A", "B")).await.unwrap();
    let p2 = blog.posts.create(post("C", "D")).await.unwrap();
    let c = blog.comments.create(p1.id, comment("hi")).await.unwrap();

    let err = blog.comments.delete(c.id, p2.id).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::CommentNotFoundForPost { comment_id, post_id }
            if comment_id == c.id && post_id == p2.id
    ));
    assert_eq!(blog.comments.get(c.id).await.unwrap().text, "hi");

    blog.comments.delete(c.id, p1.id).await.unwrap();
    assert!(blog.comments.get(c.id).await.is_err());
}

#[tokio::test]
async fn post_comment_lifecycle() {
    let blog = setup();

    let p = blog.posts.create(post("A", "B")).await.unwrap();
    assert_eq!(p.id, 1);

    let c = blog.comments.create(1, comment("hi")).await.unwrap();
    assert_eq!(c.id, 1);
    let page = blog.comments.list_by_post(1, &all_comments()).await.unwrap();
    assert_eq!(page.items.len(), 1);

    blog.posts.delete(1).await.unwrap();

    let page = blog.comments.list_by_post(1, &all_comments()).await.unwrap();
    assert!(page.items.is_empty());
    let err = blog.comments.get(1).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { id: 1, .. }));
}

#[tokio::test]
async fn comment_update_on_missing_post_names_the_post() {
    let blog = setup();

    let err = blog.comments.update(5, 1, comment("x")).await.unwrap_err();

    assert!(matches!(err, DomainError::NotFound { id: 1, .. }));
    assert_eq!(err.to_string(), "Id 1 de publicacao não encontrado!");
}

#[tokio::test]
async fn comment_update_looks_up_comment_by_its_own_id() {
    let blog = setup();
    let p1 = blog.posts.create(post("A", "B")).await.unwrap();
    let p2 = blog.posts.create(post("C", "D")).await.unwrap();
    let c = blog.comments.create(p1.id, comment("old")).await.unwrap();

    // Post 2 exists, so the update goes through even though the comment
    // belongs to post 1.
    let updated = blog
        .comments
        .update(c.id, p2.id, comment("new"))
        .await
        .unwrap();
    assert_eq!(updated.text, "new");
    assert_eq!(updated.post_id, p1.id);
    assert!(updated.audit.updated_at >= c.audit.updated_at);

    let err = blog
        .comments
        .update(77, p1.id, comment("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { id: 77, .. }));
}

#[tokio::test]
async fn list_posts_honours_sort_and_paging() {
    let blog = setup();
    for title in ["b", "a", "c"] {
        blog.posts.create(post(title, "x")).await.unwrap();
    }

    let request = PageRequest::new(0, 2).sorted(Sort::asc(PostSortField::Title));
    let page = blog.posts.list(&request).await.unwrap();
    let titles: Vec<_> = page.items.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["a", "b"]);
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages(), 2);

    let page = blog.posts.list(&PageRequest::new(1, 2)).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title, "c");
}
