//! Training state: element registry, trainer, and the dataset contract

/// Plain-data serialized form of trained state
pub mod dataset;
/// Bidirectional element-to-flag table
pub mod registry;
/// Adjacency and alias accumulation over example grids
pub mod trainer;

pub use dataset::Dataset;
pub use registry::ElementRegistry;
pub use trainer::{AliasGroup, Trainer};
