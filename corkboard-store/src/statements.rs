//! The fixed, enumerated set of parameterized operations.
//!
//! Repositories and the connect-time preflight share these constants: what
//! gets prepared at startup is exactly what runs at request time. The column
//! name `isValid` is unquoted on purpose - Postgres folds it to `isvalid`,
//! matching the table shape the original store was created with.

pub const INSERT_MESSAGE: &str =
    "INSERT INTO messages (subject, message) VALUES ($1, $2) RETURNING id";
pub const SELECT_ALL_MESSAGES: &str =
    "SELECT id, subject, message, likes, isValid AS is_valid FROM messages";
pub const SELECT_INVALID_MESSAGES: &str =
    "SELECT id, subject, message, likes, isValid AS is_valid FROM messages WHERE isValid = 0";
pub const SELECT_ONE_MESSAGE: &str =
    "SELECT id, subject, message, likes, isValid AS is_valid FROM messages WHERE id = $1";
pub const UPDATE_MESSAGE: &str = "UPDATE messages SET message = $1 WHERE id = $2";
pub const DELETE_MESSAGE: &str = "DELETE FROM messages WHERE id = $1";
pub const LIKE_MESSAGE: &str = "UPDATE messages SET likes = likes + 1 WHERE id = $1";
pub const UNLIKE_MESSAGE: &str = "UPDATE messages SET likes = likes - 1 WHERE id = $1";
pub const INVALIDATE_MESSAGE: &str = "UPDATE messages SET isValid = isValid - 1 WHERE id = $1";

pub const INSERT_USER: &str =
    "INSERT INTO users (username, email, gender_identity, sexual_orientation, note) \
     VALUES ($1, $2, $3, $4, $5) RETURNING user_id";
pub const SELECT_ALL_USERS: &str =
    "SELECT user_id, username, email, gender_identity, sexual_orientation, note FROM users";
pub const SELECT_ONE_USER: &str =
    "SELECT user_id, username, email, gender_identity, sexual_orientation, note \
     FROM users WHERE user_id = $1";
pub const UPDATE_USER: &str =
    "UPDATE users SET username = $1, email = $2, gender_identity = $3, \
     sexual_orientation = $4, note = $5 WHERE user_id = $6";
pub const DELETE_USER: &str = "DELETE FROM users WHERE user_id = $1";

pub const INSERT_VOTE: &str =
    "INSERT INTO votes (email, upvote, downvote) VALUES ($1, $2, $3) RETURNING vote_id";
pub const SELECT_ALL_VOTES: &str = "SELECT vote_id, email, upvote, downvote FROM votes";
pub const SELECT_ONE_VOTE: &str =
    "SELECT vote_id, email, upvote, downvote FROM votes WHERE vote_id = $1";
pub const UPDATE_VOTE: &str =
    "UPDATE votes SET email = $1, upvote = $2, downvote = $3 WHERE vote_id = $4";
pub const DELETE_VOTE: &str = "DELETE FROM votes WHERE vote_id = $1";

pub const INSERT_COMMENT: &str =
    "INSERT INTO comments (email, comment) VALUES ($1, $2) RETURNING comment_id";
pub const SELECT_ALL_COMMENTS: &str =
    "SELECT comment_id, email, comment, isValid AS is_valid FROM comments";
pub const SELECT_INVALID_COMMENTS: &str =
    "SELECT comment_id, email, comment, isValid AS is_valid FROM comments WHERE isValid = 0";
pub const SELECT_ONE_COMMENT: &str =
    "SELECT comment_id, email, comment, isValid AS is_valid FROM comments WHERE comment_id = $1";
pub const UPDATE_COMMENT: &str =
    "UPDATE comments SET email = $1, comment = $2 WHERE comment_id = $3";
pub const DELETE_COMMENT: &str = "DELETE FROM comments WHERE comment_id = $1";
pub const INVALIDATE_COMMENT: &str =
    "UPDATE comments SET isValid = isValid - 1 WHERE comment_id = $1";

/// Everything the preflight prepares, in one place. Adding a statement to a
/// repository without listing it here means it skips startup validation.
pub const ALL: &[&str] = &[
    INSERT_MESSAGE,
    SELECT_ALL_MESSAGES,
    SELECT_INVALID_MESSAGES,
    SELECT_ONE_MESSAGE,
    UPDATE_MESSAGE,
    DELETE_MESSAGE,
    LIKE_MESSAGE,
    UNLIKE_MESSAGE,
    INVALIDATE_MESSAGE,
    INSERT_USER,
    SELECT_ALL_USERS,
    SELECT_ONE_USER,
    UPDATE_USER,
    DELETE_USER,
    INSERT_VOTE,
    SELECT_ALL_VOTES,
    SELECT_ONE_VOTE,
    UPDATE_VOTE,
    DELETE_VOTE,
    INSERT_COMMENT,
    SELECT_ALL_COMMENTS,
    SELECT_INVALID_COMMENTS,
    SELECT_ONE_COMMENT,
    UPDATE_COMMENT,
    DELETE_COMMENT,
    INVALIDATE_COMMENT,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_statements_are_listed_once() {
        let mut seen = std::collections::HashSet::new();
        for sql in ALL {
            assert!(seen.insert(*sql), "duplicate statement: {sql}");
        }
        assert_eq!(ALL.len(), 26);
    }

    #[test]
    fn no_statement_interpolates_text() {
        // Every WHERE/VALUES value must be a positional placeholder.
        for sql in ALL {
            assert!(!sql.contains('\''), "literal in statement: {sql}");
        }
    }
}
