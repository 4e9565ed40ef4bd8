//! Batch evaluation of many independent source/target pairs.
//!
//! Every pair is a separate distance call with its own working rows; the
//! pairs are spread over a rayon thread pool and the results come back in
//! input order.

pub mod config;
pub mod engine;

pub use config::BatchConfig;
pub use engine::{BatchEngine, StringPair};
