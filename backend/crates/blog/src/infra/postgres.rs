//! PostgreSQL Repository Implementations
//!
//! Listings resolve authors by join and comments by one batched query,
//! so there is no denormalized id array to keep consistent. Deletion of
//! an article and its comments runs in one transaction.

use std::collections::HashMap;

use auth::domain::value_object::user_id::UserId;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{article::Article, comment::Comment};
use crate::domain::repository::{
    ArticleDetail, ArticleRepository, CommentRepository, CommentWithAuthor,
};
use crate::domain::value_object::{article_id::ArticleId, comment_id::CommentId};
use crate::error::BlogResult;

/// PostgreSQL-backed blog repository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

const ARTICLE_SELECT: &str = r#"
    SELECT
        a.article_id,
        a.author_id,
        a.title,
        a.content,
        a.image,
        a.tags,
        a.created_at,
        a.updated_at,
        u.user_name
    FROM articles a
    JOIN users u ON u.user_id = a.author_id
"#;

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolve comments (with authors) for a batch of article rows and
    /// assemble the detail views, preserving the row order.
    async fn assemble_details(&self, rows: Vec<ArticleRow>) -> BlogResult<Vec<ArticleDetail>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let article_ids: Vec<Uuid> = rows.iter().map(|r| r.article_id).collect();

        let comment_rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT
                c.comment_id,
                c.article_id,
                c.author_id,
                c.content,
                c.created_at,
                u.user_name
            FROM comments c
            JOIN users u ON u.user_id = c.author_id
            WHERE c.article_id = ANY($1)
            ORDER BY c.created_at
            "#,
        )
        .bind(&article_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_article: HashMap<Uuid, Vec<CommentWithAuthor>> = HashMap::new();
        for row in comment_rows {
            by_article
                .entry(row.article_id)
                .or_default()
                .push(row.into_comment_with_author());
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let comments = by_article.remove(&row.article_id).unwrap_or_default();
                row.into_detail(comments)
            })
            .collect())
    }
}

// ============================================================================
// Article Repository Implementation
// ============================================================================

impl ArticleRepository for PgBlogRepository {
    async fn create(&self, article: &Article) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO articles (
                article_id,
                author_id,
                title,
                content,
                image,
                tags,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(article.article_id.as_uuid())
        .bind(article.author_id.as_uuid())
        .bind(&article.title)
        .bind(&article.content)
        .bind(&article.image)
        .bind(&article.tags)
        .bind(article.created_at)
        .bind(article.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, article_id: ArticleId) -> BlogResult<Option<Article>> {
        let row = sqlx::query_as::<_, BareArticleRow>(
            r#"
            SELECT
                article_id,
                author_id,
                title,
                content,
                image,
                tags,
                created_at,
                updated_at
            FROM articles
            WHERE article_id = $1
            "#,
        )
        .bind(article_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_article()))
    }

    async fn list_all(&self) -> BlogResult<Vec<ArticleDetail>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "{ARTICLE_SELECT} ORDER BY a.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        self.assemble_details(rows).await
    }

    async fn list_by_author(&self, author_id: &UserId) -> BlogResult<Vec<ArticleDetail>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "{ARTICLE_SELECT} WHERE a.author_id = $1 ORDER BY a.created_at DESC"
        ))
        .bind(author_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        self.assemble_details(rows).await
    }

    async fn get_detail(&self, article_id: ArticleId) -> BlogResult<Option<ArticleDetail>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "{ARTICLE_SELECT} WHERE a.article_id = $1"
        ))
        .bind(article_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(self.assemble_details(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn update(&self, article: &Article) -> BlogResult<()> {
        sqlx::query(
            r#"
            UPDATE articles SET
                title = $2,
                content = $3,
                image = $4,
                tags = $5,
                updated_at = $6
            WHERE article_id = $1
            "#,
        )
        .bind(article.article_id.as_uuid())
        .bind(&article.title)
        .bind(&article.content)
        .bind(&article.image)
        .bind(&article.tags)
        .bind(article.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_with_comments(&self, article_id: ArticleId) -> BlogResult<u64> {
        let mut tx = self.pool.begin().await?;

        let comments_deleted = sqlx::query("DELETE FROM comments WHERE article_id = $1")
            .bind(article_id.as_uuid())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM articles WHERE article_id = $1")
            .bind(article_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(comments_deleted)
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgBlogRepository {
    async fn create(&self, comment: &Comment) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (
                comment_id,
                article_id,
                author_id,
                content,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.comment_id.as_uuid())
        .bind(comment.article_id.as_uuid())
        .bind(comment.author_id.as_uuid())
        .bind(&comment.content)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, comment_id: CommentId) -> BlogResult<Option<Comment>> {
        let row = sqlx::query_as::<_, BareCommentRow>(
            r#"
            SELECT
                comment_id,
                article_id,
                author_id,
                content,
                created_at
            FROM comments
            WHERE comment_id = $1
            "#,
        )
        .bind(comment_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_comment()))
    }

    async fn delete_all_for_article(&self, article_id: ArticleId) -> BlogResult<u64> {
        let deleted = sqlx::query("DELETE FROM comments WHERE article_id = $1")
            .bind(article_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct BareArticleRow {
    article_id: Uuid,
    author_id: Uuid,
    title: String,
    content: String,
    image: Option<String>,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BareArticleRow {
    fn into_article(self) -> Article {
        Article {
            article_id: ArticleId::from_uuid(self.article_id),
            author_id: UserId::from_uuid(self.author_id),
            title: self.title,
            content: self.content,
            image: self.image,
            tags: self.tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ArticleRow {
    article_id: Uuid,
    author_id: Uuid,
    title: String,
    content: String,
    image: Option<String>,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_name: String,
}

impl ArticleRow {
    fn into_detail(self, comments: Vec<CommentWithAuthor>) -> ArticleDetail {
        ArticleDetail {
            article: Article {
                article_id: ArticleId::from_uuid(self.article_id),
                author_id: UserId::from_uuid(self.author_id),
                title: self.title,
                content: self.content,
                image: self.image,
                tags: self.tags,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            author_name: self.user_name,
            comments,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BareCommentRow {
    comment_id: Uuid,
    article_id: Uuid,
    author_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
}

impl BareCommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            comment_id: CommentId::from_uuid(self.comment_id),
            article_id: ArticleId::from_uuid(self.article_id),
            author_id: UserId::from_uuid(self.author_id),
            content: self.content,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    comment_id: Uuid,
    article_id: Uuid,
    author_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
    user_name: String,
}

impl CommentRow {
    fn into_comment_with_author(self) -> CommentWithAuthor {
        CommentWithAuthor {
            comment: Comment {
                comment_id: CommentId::from_uuid(self.comment_id),
                article_id: ArticleId::from_uuid(self.article_id),
                author_id: UserId::from_uuid(self.author_id),
                content: self.content,
                created_at: self.created_at,
            },
            author_name: self.user_name,
        }
    }
}
