//! Message repository.
//!
//! Beyond plain CRUD, messages carry two integer counters mutated in place
//! at the store (`likes = likes + 1`, `isValid = isValid - 1`) so concurrent
//! adjustments never race through a read-modify-write in this layer. Neither
//! counter has a floor: unlikes can drive `likes` negative and repeated
//! invalidation drives `isValid` below zero. That matches the deployed
//! store's behavior and is asserted by the integration tests.

use sqlx::PgPool;

use crate::error::Result;
use crate::models::Message;
use crate::outcome::ExecOutcome;
use crate::statements;

pub struct MessageRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> MessageRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a message, returning its server-assigned id.
    pub async fn insert(&self, subject: &str, message: &str) -> Result<i32> {
        let (id,): (i32,) = sqlx::query_as(statements::INSERT_MESSAGE)
            .bind(subject)
            .bind(message)
            .fetch_one(self.pool)
            .await?;
        tracing::debug!(id, "message inserted");
        Ok(id)
    }

    /// All messages, in store order. Empty is a valid answer.
    pub async fn select_all(&self) -> Result<Vec<Message>> {
        let rows = sqlx::query_as(statements::SELECT_ALL_MESSAGES)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Messages whose validity counter has reached zero.
    pub async fn select_invalid(&self) -> Result<Vec<Message>> {
        let rows = sqlx::query_as(statements::SELECT_INVALID_MESSAGES)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// One message by id. `Ok(None)` means no such row; `Err` is a store
    /// failure - the two are never conflated.
    pub async fn select_one(&self, id: i32) -> Result<Option<Message>> {
        let row = sqlx::query_as(statements::SELECT_ONE_MESSAGE)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(row)
    }

    /// Replace the body of a message.
    pub async fn update(&self, id: i32, message: &str) -> Result<ExecOutcome> {
        let done = sqlx::query(statements::UPDATE_MESSAGE)
            .bind(message)
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(ExecOutcome::from_rows_affected(done.rows_affected()))
    }

    /// Physically remove a message.
    pub async fn delete(&self, id: i32) -> Result<ExecOutcome> {
        let done = sqlx::query(statements::DELETE_MESSAGE)
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(ExecOutcome::from_rows_affected(done.rows_affected()))
    }

    /// Atomically add one like.
    pub async fn increment_likes(&self, id: i32) -> Result<ExecOutcome> {
        let done = sqlx::query(statements::LIKE_MESSAGE)
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(ExecOutcome::from_rows_affected(done.rows_affected()))
    }

    /// Atomically remove one like. No floor check.
    pub async fn decrement_likes(&self, id: i32) -> Result<ExecOutcome> {
        let done = sqlx::query(statements::UNLIKE_MESSAGE)
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(ExecOutcome::from_rows_affected(done.rows_affected()))
    }

    /// Soft-invalidate: decrement the validity counter. No floor check.
    pub async fn invalidate(&self, id: i32) -> Result<ExecOutcome> {
        let done = sqlx::query(statements::INVALIDATE_MESSAGE)
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(ExecOutcome::from_rows_affected(done.rows_affected()))
    }
}
