//! Unit tests for the blog use cases, driven by an in-memory repository.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use auth::domain::value_object::{user_id::UserId, user_role::UserRole};
use uuid::Uuid;

use crate::application::{
    AddCommentUseCase, CreateArticleInput, CreateArticleUseCase, DeleteArticleUseCase,
    GetArticleUseCase, ListArticlesUseCase, UpdateArticleInput, UpdateArticleUseCase,
};
use crate::domain::entity::{article::Article, comment::Comment};
use crate::domain::repository::{
    ArticleDetail, ArticleRepository, CommentRepository, CommentWithAuthor,
};
use crate::domain::value_object::{article_id::ArticleId, comment_id::CommentId};
use crate::error::{BlogError, BlogResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct InMemoryBlogRepo {
    inner: Arc<Mutex<Store>>,
}

#[derive(Default)]
struct Store {
    articles: Vec<Article>,
    comments: Vec<Comment>,
    author_names: HashMap<Uuid, String>,
}

impl InMemoryBlogRepo {
    fn with_author(&self, user_id: &UserId, name: &str) {
        self.inner
            .lock()
            .unwrap()
            .author_names
            .insert(*user_id.as_uuid(), name.to_string());
    }

    fn detail(store: &Store, article: &Article) -> ArticleDetail {
        let author_name = store
            .author_names
            .get(article.author_id.as_uuid())
            .cloned()
            .unwrap_or_default();

        let comments = store
            .comments
            .iter()
            .filter(|c| c.article_id == article.article_id)
            .map(|c| CommentWithAuthor {
                comment: c.clone(),
                author_name: store
                    .author_names
                    .get(c.author_id.as_uuid())
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect();

        ArticleDetail {
            article: article.clone(),
            author_name,
            comments,
        }
    }
}

impl ArticleRepository for InMemoryBlogRepo {
    async fn create(&self, article: &Article) -> BlogResult<()> {
        self.inner.lock().unwrap().articles.push(article.clone());
        Ok(())
    }

    async fn find_by_id(&self, article_id: ArticleId) -> BlogResult<Option<Article>> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .articles
            .iter()
            .find(|a| a.article_id == article_id)
            .cloned())
    }

    async fn list_all(&self) -> BlogResult<Vec<ArticleDetail>> {
        let store = self.inner.lock().unwrap();
        let mut articles: Vec<&Article> = store.articles.iter().collect();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(articles
            .into_iter()
            .map(|a| Self::detail(&store, a))
            .collect())
    }

    async fn list_by_author(&self, author_id: &UserId) -> BlogResult<Vec<ArticleDetail>> {
        let store = self.inner.lock().unwrap();
        let mut articles: Vec<&Article> = store
            .articles
            .iter()
            .filter(|a| a.author_id == *author_id)
            .collect();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(articles
            .into_iter()
            .map(|a| Self::detail(&store, a))
            .collect())
    }

    async fn get_detail(&self, article_id: ArticleId) -> BlogResult<Option<ArticleDetail>> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .articles
            .iter()
            .find(|a| a.article_id == article_id)
            .map(|a| Self::detail(&store, a)))
    }

    async fn update(&self, article: &Article) -> BlogResult<()> {
        let mut store = self.inner.lock().unwrap();
        if let Some(existing) = store
            .articles
            .iter_mut()
            .find(|a| a.article_id == article.article_id)
        {
            *existing = article.clone();
        }
        Ok(())
    }

    async fn delete_with_comments(&self, article_id: ArticleId) -> BlogResult<u64> {
        let mut store = self.inner.lock().unwrap();
        let before = store.comments.len();
        store.comments.retain(|c| c.article_id != article_id);
        let deleted = (before - store.comments.len()) as u64;
        store.articles.retain(|a| a.article_id != article_id);
        Ok(deleted)
    }
}

impl CommentRepository for InMemoryBlogRepo {
    async fn create(&self, comment: &Comment) -> BlogResult<()> {
        self.inner.lock().unwrap().comments.push(comment.clone());
        Ok(())
    }

    async fn find_by_id(&self, comment_id: CommentId) -> BlogResult<Option<Comment>> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .comments
            .iter()
            .find(|c| c.comment_id == comment_id)
            .cloned())
    }

    async fn delete_all_for_article(&self, article_id: ArticleId) -> BlogResult<u64> {
        let mut store = self.inner.lock().unwrap();
        let before = store.comments.len();
        store.comments.retain(|c| c.article_id != article_id);
        Ok((before - store.comments.len()) as u64)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn create_input(
    author_id: UserId,
    author_role: UserRole,
    title: &str,
    content: &str,
    tags: &str,
) -> CreateArticleInput {
    CreateArticleInput {
        author_id,
        author_role,
        title: title.to_string(),
        content: content.to_string(),
        tags: tags.to_string(),
        image: None,
    }
}

fn update_input(title: &str, content: &str, tags: &str) -> UpdateArticleInput {
    UpdateArticleInput {
        title: title.to_string(),
        content: content.to_string(),
        tags: tags.to_string(),
        image: None,
    }
}

async fn create_article(
    repo: &Arc<InMemoryBlogRepo>,
    author_id: UserId,
    title: &str,
) -> Article {
    CreateArticleUseCase::new(repo.clone())
        .execute(create_input(author_id, UserRole::Admin, title, "World", ""))
        .await
        .unwrap()
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn admin_creates_article_with_tags() {
    let repo = Arc::new(InMemoryBlogRepo::default());
    let alice = UserId::new();
    repo.with_author(&alice, "alice");

    let article = CreateArticleUseCase::new(repo.clone())
        .execute(create_input(alice, UserRole::Admin, "Hello", "World", "a,b, b"))
        .await
        .unwrap();

    // Duplicates are preserved; entries are trimmed
    assert_eq!(article.tags, vec!["a", "b", "b"]);

    let listed = ListArticlesUseCase::new(repo.clone()).list_all().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].article.title, "Hello");
    assert_eq!(listed[0].author_name, "alice");
}

#[tokio::test]
async fn non_admin_cannot_create() {
    let repo = Arc::new(InMemoryBlogRepo::default());

    let err = CreateArticleUseCase::new(repo.clone())
        .execute(create_input(UserId::new(), UserRole::User, "Hello", "World", ""))
        .await
        .unwrap_err();

    assert!(matches!(err, BlogError::Forbidden(_)));
}

#[tokio::test]
async fn create_requires_title_and_content() {
    let repo = Arc::new(InMemoryBlogRepo::default());
    let admin = UserId::new();

    let err = CreateArticleUseCase::new(repo.clone())
        .execute(create_input(admin, UserRole::Admin, "", "World", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, BlogError::Validation(_)));

    let err = CreateArticleUseCase::new(repo.clone())
        .execute(create_input(admin, UserRole::Admin, "Hello", "   ", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, BlogError::Validation(_)));
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn only_owner_can_update() {
    let repo = Arc::new(InMemoryBlogRepo::default());
    let alice = UserId::new();
    let bob = UserId::new();

    let article = create_article(&repo, alice, "Hello").await;

    let err = UpdateArticleUseCase::new(repo.clone())
        .execute(article.article_id, &bob, update_input("Hijack", "X", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, BlogError::Forbidden(_)));

    let updated = UpdateArticleUseCase::new(repo.clone())
        .execute(article.article_id, &alice, update_input("Hello 2", "World 2", "x,y"))
        .await
        .unwrap();
    assert_eq!(updated.title, "Hello 2");
    assert_eq!(updated.tags, vec!["x", "y"]);
    assert!(updated.updated_at >= article.updated_at);
}

#[tokio::test]
async fn update_missing_article_is_not_found() {
    let repo = Arc::new(InMemoryBlogRepo::default());

    let err = UpdateArticleUseCase::new(repo.clone())
        .execute(ArticleId::new(), &UserId::new(), update_input("T", "C", ""))
        .await
        .unwrap_err();

    assert!(matches!(err, BlogError::NotFound));
}

#[tokio::test]
async fn update_retains_image_unless_replaced() {
    let repo = Arc::new(InMemoryBlogRepo::default());
    let alice = UserId::new();

    let article = CreateArticleUseCase::new(repo.clone())
        .execute(CreateArticleInput {
            image: Some("/uploads/old.png".to_string()),
            ..create_input(alice, UserRole::Admin, "Hello", "World", "")
        })
        .await
        .unwrap();

    // No new upload: old image survives
    let updated = UpdateArticleUseCase::new(repo.clone())
        .execute(article.article_id, &alice, update_input("Hello", "World", ""))
        .await
        .unwrap();
    assert_eq!(updated.image.as_deref(), Some("/uploads/old.png"));

    // New upload replaces it
    let updated = UpdateArticleUseCase::new(repo.clone())
        .execute(
            article.article_id,
            &alice,
            UpdateArticleInput {
                image: Some("/uploads/new.png".to_string()),
                ..update_input("Hello", "World", "")
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.image.as_deref(), Some("/uploads/new.png"));
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn only_owner_can_delete() {
    let repo = Arc::new(InMemoryBlogRepo::default());
    let alice = UserId::new();
    let bob = UserId::new();

    let article = create_article(&repo, alice, "Hello").await;

    let err = DeleteArticleUseCase::new(repo.clone())
        .execute(article.article_id, &bob)
        .await
        .unwrap_err();
    assert!(matches!(err, BlogError::Forbidden(_)));

    DeleteArticleUseCase::new(repo.clone())
        .execute(article.article_id, &alice)
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_cascades_to_comments() {
    let repo = Arc::new(InMemoryBlogRepo::default());
    let alice = UserId::new();
    let reader = UserId::new();

    let article = create_article(&repo, alice, "Hello").await;

    let add = AddCommentUseCase::new(repo.clone(), repo.clone());
    let first = add.execute(article.article_id, &reader, "First!".to_string()).await.unwrap();
    let second = add.execute(article.article_id, &reader, "Second".to_string()).await.unwrap();

    DeleteArticleUseCase::new(repo.clone())
        .execute(article.article_id, &alice)
        .await
        .unwrap();

    // The article is gone from listings and direct lookup
    assert!(ListArticlesUseCase::new(repo.clone()).list_all().await.unwrap().is_empty());
    let err = GetArticleUseCase::new(repo.clone())
        .execute(article.article_id)
        .await
        .unwrap_err();
    assert!(matches!(err, BlogError::NotFound));

    // Former comment ids no longer resolve
    assert!(CommentRepository::find_by_id(&*repo, first.comment_id).await.unwrap().is_none());
    assert!(CommentRepository::find_by_id(&*repo, second.comment_id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_article_is_not_found() {
    let repo = Arc::new(InMemoryBlogRepo::default());

    let err = DeleteArticleUseCase::new(repo.clone())
        .execute(ArticleId::new(), &UserId::new())
        .await
        .unwrap_err();

    assert!(matches!(err, BlogError::NotFound));
}

// ============================================================================
// Comments
// ============================================================================

#[tokio::test]
async fn comment_on_missing_article_is_not_found() {
    let repo = Arc::new(InMemoryBlogRepo::default());

    let err = AddCommentUseCase::new(repo.clone(), repo.clone())
        .execute(ArticleId::new(), &UserId::new(), "hi".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, BlogError::NotFound));
}

#[tokio::test]
async fn empty_comment_is_accepted() {
    let repo = Arc::new(InMemoryBlogRepo::default());
    let alice = UserId::new();
    let article = create_article(&repo, alice, "Hello").await;

    // No length validation on comment content
    let comment = AddCommentUseCase::new(repo.clone(), repo.clone())
        .execute(article.article_id, &alice, String::new())
        .await
        .unwrap();
    assert_eq!(comment.content, "");

    let detail = GetArticleUseCase::new(repo.clone())
        .execute(article.article_id)
        .await
        .unwrap();
    assert_eq!(detail.comments.len(), 1);
}

// ============================================================================
// Listings
// ============================================================================

#[tokio::test]
async fn listings_are_newest_first_and_scoped_to_author() {
    let repo = Arc::new(InMemoryBlogRepo::default());
    let alice = UserId::new();
    let bob = UserId::new();

    let first = create_article(&repo, alice, "First").await;
    let second = create_article(&repo, bob, "Second").await;
    let third = create_article(&repo, alice, "Third").await;

    let all = ListArticlesUseCase::new(repo.clone()).list_all().await.unwrap();
    let titles: Vec<&str> = all.iter().map(|d| d.article.title.as_str()).collect();
    assert_eq!(titles, vec!["Third", "Second", "First"]);

    let mine = ListArticlesUseCase::new(repo.clone())
        .list_by_author(&alice)
        .await
        .unwrap();
    let ids: Vec<_> = mine.iter().map(|d| d.article.article_id).collect();
    assert_eq!(ids, vec![third.article_id, first.article_id]);
    assert!(!ids.contains(&second.article_id));
}
