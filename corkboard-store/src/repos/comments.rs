//! Comment repository.
//!
//! Parallels the message repository, including soft invalidation: the
//! validity counter decrements without a floor.

use sqlx::PgPool;

use crate::error::Result;
use crate::models::Comment;
use crate::outcome::ExecOutcome;
use crate::statements;

pub struct CommentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CommentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a comment, returning its server-assigned id.
    pub async fn insert(&self, email: &str, comment: &str) -> Result<i32> {
        let (id,): (i32,) = sqlx::query_as(statements::INSERT_COMMENT)
            .bind(email)
            .bind(comment)
            .fetch_one(self.pool)
            .await?;
        tracing::debug!(comment_id = id, "comment inserted");
        Ok(id)
    }

    pub async fn select_all(&self) -> Result<Vec<Comment>> {
        let rows = sqlx::query_as(statements::SELECT_ALL_COMMENTS)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Comments whose validity counter has reached zero.
    pub async fn select_invalid(&self) -> Result<Vec<Comment>> {
        let rows = sqlx::query_as(statements::SELECT_INVALID_COMMENTS)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn select_one(&self, comment_id: i32) -> Result<Option<Comment>> {
        let row = sqlx::query_as(statements::SELECT_ONE_COMMENT)
            .bind(comment_id)
            .fetch_optional(self.pool)
            .await?;
        Ok(row)
    }

    /// Full-row update of every mutable field.
    pub async fn update(&self, comment_id: i32, email: &str, comment: &str) -> Result<ExecOutcome> {
        let done = sqlx::query(statements::UPDATE_COMMENT)
            .bind(email)
            .bind(comment)
            .bind(comment_id)
            .execute(self.pool)
            .await?;
        Ok(ExecOutcome::from_rows_affected(done.rows_affected()))
    }

    pub async fn delete(&self, comment_id: i32) -> Result<ExecOutcome> {
        let done = sqlx::query(statements::DELETE_COMMENT)
            .bind(comment_id)
            .execute(self.pool)
            .await?;
        Ok(ExecOutcome::from_rows_affected(done.rows_affected()))
    }

    /// Soft-invalidate: decrement the validity counter. No floor check.
    pub async fn invalidate(&self, comment_id: i32) -> Result<ExecOutcome> {
        let done = sqlx::query(statements::INVALIDATE_COMMENT)
            .bind(comment_id)
            .execute(self.pool)
            .await?;
        Ok(ExecOutcome::from_rows_affected(done.rows_affected()))
    }
}
