//! Row types for the four entity tables.
//!
//! Shapes mirror the persisted layout exactly; ids are server-assigned
//! serial integers, immutable once assigned. `is_valid` and `likes` are
//! plain integer counters, not booleans - invalidation decrements.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of `messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: i32,
    pub subject: String,
    pub message: String,
    pub likes: i32,
    pub is_valid: i32,
}

/// One row of `users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub gender_identity: String,
    pub sexual_orientation: String,
    pub note: String,
}

/// One row of `votes`. The email is a stored copy, not a relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Vote {
    pub vote_id: i32,
    pub email: String,
    pub upvote: i32,
    pub downvote: i32,
}

/// One row of `comments`. The email is a stored copy, not a relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub email: String,
    pub comment: String,
    pub is_valid: i32,
}
