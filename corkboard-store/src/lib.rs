//! corkboard-store: PostgreSQL data-access layer for the corkboard message board
//!
//! # Design Principles
//!
//! - Connection pool - no shared single connection
//! - Every parameterized operation lives in [`statements`] and is prepared
//!   once at connect time; a preparation failure fails the whole connect
//! - Tagged results instead of sentinel return codes:
//!   [`ExecOutcome::NotFound`] is zero rows affected, `Err` is a store failure
//! - All values are positionally bound, never interpolated into SQL

pub mod config;
pub mod error;
pub mod models;
pub mod outcome;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod session;
pub mod statements;

pub use config::{StoreConfig, DEFAULT_PG_PORT};
pub use error::{Result, StoreError};
pub use models::{Comment, Message, User, Vote};
pub use outcome::ExecOutcome;
pub use pool::Store;
pub use repos::{CommentRepo, MessageRepo, UserRepo, VoteRepo};
pub use session::SessionRegistry;
