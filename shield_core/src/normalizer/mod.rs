//! Text canonicalisation shared by the matcher and the heuristics.

pub mod helpers;
pub mod normalizer;
pub mod script;

pub use normalizer::normalize;
