//! Candidate-driven generation built on trained adjacency state

/// Memoization cache for alias and neighbor expansion queries
pub mod cache;
/// Bitset over flags for candidate and expansion sets
pub mod flagset;
/// The cell-by-cell generation algorithm and its request/outcome types
pub mod generator;

pub use cache::QueryCache;
pub use flagset::FlagSet;
pub use generator::{Generation, GenerationMode, GenerationRequest};
