//! Route modules, one per entity plus authentication.

pub mod auth;
pub mod comments;
pub mod messages;
pub mod users;
pub mod votes;
