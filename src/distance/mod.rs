//! Weighted Damerau-Levenshtein distance under optimal string alignment.

pub mod config;
pub mod engine;
pub mod symbols;
pub mod weights;

// Re-export commonly used types
pub use config::DistanceConfig;
pub use engine::{DistanceEngine, SubstitutionMode, distance, osa_distance};
pub use symbols::SymbolMode;
pub use weights::{CostWeights, Operation, Weight, WeightOverrides};
