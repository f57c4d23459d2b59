//! Schema management: create and drop the four entity tables.
//!
//! Deliberately no `IF NOT EXISTS` and no migrations: creating a table that
//! exists, or dropping one that doesn't, fails at the store level and the
//! error propagates. The caller decides whether that is fatal.

use sqlx::PgPool;

use crate::error::Result;

const CREATE_MESSAGES: &str = "CREATE TABLE messages (id SERIAL PRIMARY KEY, subject TEXT, \
     message TEXT, likes INTEGER DEFAULT 0, isValid INTEGER DEFAULT 1)";
const DROP_MESSAGES: &str = "DROP TABLE messages";

const CREATE_USERS: &str = "CREATE TABLE users (user_id SERIAL PRIMARY KEY, username TEXT, \
     email TEXT, gender_identity TEXT, sexual_orientation TEXT, note TEXT)";
const DROP_USERS: &str = "DROP TABLE users";

const CREATE_VOTES: &str = "CREATE TABLE votes (vote_id SERIAL PRIMARY KEY, email TEXT, \
     upvote INTEGER, downvote INTEGER)";
const DROP_VOTES: &str = "DROP TABLE votes";

const CREATE_COMMENTS: &str = "CREATE TABLE comments (comment_id SERIAL PRIMARY KEY, \
     email TEXT, comment TEXT, isValid INTEGER DEFAULT 1)";
const DROP_COMMENTS: &str = "DROP TABLE comments";

async fn execute(pool: &PgPool, sql: &str) -> Result<()> {
    sqlx::query(sql).execute(pool).await?;
    tracing::info!(sql, "schema statement applied");
    Ok(())
}

pub async fn create_message_table(pool: &PgPool) -> Result<()> {
    execute(pool, CREATE_MESSAGES).await
}

pub async fn drop_message_table(pool: &PgPool) -> Result<()> {
    execute(pool, DROP_MESSAGES).await
}

pub async fn create_user_table(pool: &PgPool) -> Result<()> {
    execute(pool, CREATE_USERS).await
}

pub async fn drop_user_table(pool: &PgPool) -> Result<()> {
    execute(pool, DROP_USERS).await
}

pub async fn create_vote_table(pool: &PgPool) -> Result<()> {
    execute(pool, CREATE_VOTES).await
}

pub async fn drop_vote_table(pool: &PgPool) -> Result<()> {
    execute(pool, DROP_VOTES).await
}

pub async fn create_comment_table(pool: &PgPool) -> Result<()> {
    execute(pool, CREATE_COMMENTS).await
}

pub async fn drop_comment_table(pool: &PgPool) -> Result<()> {
    execute(pool, DROP_COMMENTS).await
}

/// Create all four tables, stopping at the first failure.
pub async fn create_all(pool: &PgPool) -> Result<()> {
    create_message_table(pool).await?;
    create_user_table(pool).await?;
    create_vote_table(pool).await?;
    create_comment_table(pool).await?;
    Ok(())
}

/// Drop all four tables, stopping at the first failure.
pub async fn drop_all(pool: &PgPool) -> Result<()> {
    drop_message_table(pool).await?;
    drop_user_table(pool).await?;
    drop_vote_table(pool).await?;
    drop_comment_table(pool).await?;
    Ok(())
}
