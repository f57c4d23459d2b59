//! User repository.
//!
//! Profiles: everything except the id is mutable through a full-row update.
//! No uniqueness is enforced on email at this layer; a caller that needs it
//! must check before inserting.

use sqlx::PgPool;

use crate::error::Result;
use crate::models::User;
use crate::outcome::ExecOutcome;
use crate::statements;

pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a profile, returning its server-assigned id.
    pub async fn insert(
        &self,
        username: &str,
        email: &str,
        gender_identity: &str,
        sexual_orientation: &str,
        note: &str,
    ) -> Result<i32> {
        let (id,): (i32,) = sqlx::query_as(statements::INSERT_USER)
            .bind(username)
            .bind(email)
            .bind(gender_identity)
            .bind(sexual_orientation)
            .bind(note)
            .fetch_one(self.pool)
            .await?;
        tracing::debug!(user_id = id, "user inserted");
        Ok(id)
    }

    pub async fn select_all(&self) -> Result<Vec<User>> {
        let rows = sqlx::query_as(statements::SELECT_ALL_USERS)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn select_one(&self, user_id: i32) -> Result<Option<User>> {
        let row = sqlx::query_as(statements::SELECT_ONE_USER)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?;
        Ok(row)
    }

    /// Full-row update of every mutable field.
    pub async fn update(
        &self,
        user_id: i32,
        username: &str,
        email: &str,
        gender_identity: &str,
        sexual_orientation: &str,
        note: &str,
    ) -> Result<ExecOutcome> {
        let done = sqlx::query(statements::UPDATE_USER)
            .bind(username)
            .bind(email)
            .bind(gender_identity)
            .bind(sexual_orientation)
            .bind(note)
            .bind(user_id)
            .execute(self.pool)
            .await?;
        Ok(ExecOutcome::from_rows_affected(done.rows_affected()))
    }

    pub async fn delete(&self, user_id: i32) -> Result<ExecOutcome> {
        let done = sqlx::query(statements::DELETE_USER)
            .bind(user_id)
            .execute(self.pool)
            .await?;
        Ok(ExecOutcome::from_rows_affected(done.rows_affected()))
    }
}
