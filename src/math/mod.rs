//! Mathematical utilities for the algorithm

/// Deterministic seeded mixing, shuffling, and sampling
pub mod random;
