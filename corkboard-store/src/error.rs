//! Store error taxonomy.
//!
//! Three failure classes matter to callers:
//! - [`StoreError::MalformedUrl`] / [`StoreError::Config`] / [`StoreError::Connect`]:
//!   no connection could be obtained; fatal to startup
//! - [`StoreError::Prepare`]: a statement failed to compile against the
//!   schema (usually a missing table); fatal to startup
//! - [`StoreError::Query`]: an individual CRUD round trip failed; recovered
//!   per call, the caller decides whether to retry

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The connection URL could not be decomposed into user/pass/host/port/path.
    #[error("malformed connection url: {0}")]
    MalformedUrl(String),

    /// Connection parameters could not be resolved from the environment.
    #[error("invalid store configuration: {0}")]
    Config(String),

    /// The driver could not establish a connection.
    #[error("failed to connect to the database: {0}")]
    Connect(#[source] sqlx::Error),

    /// A statement in the enumerated set failed to prepare.
    #[error("failed to prepare statement `{statement}`: {source}")]
    Prepare {
        statement: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A CRUD operation failed at the store level.
    #[error("database operation failed: {0}")]
    Query(#[from] sqlx::Error),
}
