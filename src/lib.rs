//! # osadist
//!
//! Weighted Damerau-Levenshtein edit distance, restricted to optimal string
//! alignment: each substring is touched by at most one adjacent swap.
//!
//! ## Features
//!
//! - Independent weights for swap, substitution, insertion and deletion
//! - Integer or floating point costs
//! - O(len(target)) memory using three rolling rows
//! - Byte, char or grapheme symbol segmentation
//! - Deferred delivery through a pluggable scheduler
//! - Parallel batch evaluation
//!
//! ```
//! use osadist::distance::{DistanceEngine, WeightOverrides, distance};
//!
//! let engine = DistanceEngine::<u32>::default();
//! assert_eq!(engine.distance_str("Floor", "Flower"), 3);
//!
//! let source: Vec<char> = "ab".chars().collect();
//! let target: Vec<char> = "ba".chars().collect();
//! assert_eq!(distance(&source, &target, &WeightOverrides::<u32>::new().swap(0)), 0);
//! ```

pub mod batch;
pub mod cli;
pub mod deferred;
pub mod distance;
pub mod error;

pub mod prelude {
    pub use crate::distance::{
        CostWeights, DistanceConfig, DistanceEngine, SubstitutionMode, SymbolMode,
        WeightOverrides,
    };
    pub use crate::error::{EditDistanceError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
