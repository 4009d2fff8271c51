//! Greeting short-circuit, lexicon/pattern/spaced/combination scans.

pub mod dto;
pub mod handler;
pub mod helpers;

pub use dto::{AnalysisResult, FlagReason};
pub use handler::Moderator;
