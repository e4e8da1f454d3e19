//! Adjacency-learning tile grid synthesis
//!
//! The system learns which tile-like elements were observed next to which in
//! example 2D grids, then synthesizes new grids of arbitrary size that
//! respect those adjacency constraints, using deterministic seeded
//! randomness and reporting a completion-quality score. Learning is
//! existence-only: an adjacency either happened in the examples or it did
//! not, and ties during generation break by seeded shuffle.

#![forbid(unsafe_code)]

/// Generation algorithm, candidate sets, and query memoization
pub mod algorithm;
/// Error types shared across the crate
pub mod error;
/// Flag identifiers and adjacency graph primitives
pub mod graph;
/// Deterministic seeded randomness
pub mod math;
/// Row-major grid container
pub mod spatial;
/// Element registry, trainer, and the dataset contract
pub mod training;

pub use algorithm::{FlagSet, Generation, GenerationMode, GenerationRequest, QueryCache};
pub use error::{Error, Result};
pub use graph::{Axis, Flag, NO_FLAG, Relation};
pub use spatial::Grid;
pub use training::{AliasGroup, Dataset, ElementRegistry, Trainer};
