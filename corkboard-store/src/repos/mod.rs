//! Entity repositories.
//!
//! One repository per table, structurally parallel: insert returns the
//! server-assigned id, select_one distinguishes absent from failed,
//! update/delete report [`ExecOutcome`]. Each borrows the pool for the
//! duration of a call; one call is one store round trip.
//!
//! [`ExecOutcome`]: crate::ExecOutcome

pub mod comments;
pub mod messages;
pub mod users;
pub mod votes;

pub use comments::CommentRepo;
pub use messages::MessageRepo;
pub use users::UserRepo;
pub use votes::VoteRepo;
