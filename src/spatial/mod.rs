//! Spatial data structures
//!
//! The fixed-size row-major grid used for training examples, embedded flag
//! grids, and generation output.

/// Bounds-checked row-major 2D container
pub mod grid;

pub use grid::Grid;
