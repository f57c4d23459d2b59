//! Vote repository.
//!
//! A vote row records an email (denormalized copy, no relation to `users`)
//! and raw upvote/downvote tallies. Rows are not tied to a message id in the
//! current model; that coupling is the routing layer's concern, if anyone's.

use sqlx::PgPool;

use crate::error::Result;
use crate::models::Vote;
use crate::outcome::ExecOutcome;
use crate::statements;

pub struct VoteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> VoteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a vote record, returning its server-assigned id.
    pub async fn insert(&self, email: &str, upvote: i32, downvote: i32) -> Result<i32> {
        let (id,): (i32,) = sqlx::query_as(statements::INSERT_VOTE)
            .bind(email)
            .bind(upvote)
            .bind(downvote)
            .fetch_one(self.pool)
            .await?;
        tracing::debug!(vote_id = id, "vote inserted");
        Ok(id)
    }

    pub async fn select_all(&self) -> Result<Vec<Vote>> {
        let rows = sqlx::query_as(statements::SELECT_ALL_VOTES)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn select_one(&self, vote_id: i32) -> Result<Option<Vote>> {
        let row = sqlx::query_as(statements::SELECT_ONE_VOTE)
            .bind(vote_id)
            .fetch_optional(self.pool)
            .await?;
        Ok(row)
    }

    /// Full-row update of every mutable field.
    pub async fn update(
        &self,
        vote_id: i32,
        email: &str,
        upvote: i32,
        downvote: i32,
    ) -> Result<ExecOutcome> {
        let done = sqlx::query(statements::UPDATE_VOTE)
            .bind(email)
            .bind(upvote)
            .bind(downvote)
            .bind(vote_id)
            .execute(self.pool)
            .await?;
        Ok(ExecOutcome::from_rows_affected(done.rows_affected()))
    }

    pub async fn delete(&self, vote_id: i32) -> Result<ExecOutcome> {
        let done = sqlx::query(statements::DELETE_VOTE)
            .bind(vote_id)
            .execute(self.pool)
            .await?;
        Ok(ExecOutcome::from_rows_affected(done.rows_affected()))
    }
}
