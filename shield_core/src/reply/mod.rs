//! Canned fallback replies and checks on generated ones.

pub mod dto;
pub mod handler;
pub mod helpers;

pub use dto::{RejectReason, ReplyBucket, ReplyIntent, ReplyTemplates, ReplyVerdict};
pub use handler::ReplyDesk;
pub use helpers::strip_addressee;
