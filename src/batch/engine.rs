//! Parallel batch engine.

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::batch::config::BatchConfig;
use crate::distance::{DistanceEngine, Weight};
use crate::error::{EditDistanceError, Result};

/// One source/target pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringPair {
    pub source: String,
    pub target: String,
}

impl StringPair {
    pub fn new<S: Into<String>, T: Into<String>>(source: S, target: T) -> Self {
        StringPair {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Computes distances for many pairs on a dedicated thread pool.
pub struct BatchEngine<W> {
    /// Distance engine shared by all workers.
    engine: DistanceEngine<W>,

    /// Configuration for the batch engine.
    config: BatchConfig,

    /// Thread pool for parallel execution.
    thread_pool: Arc<ThreadPool>,
}

impl<W: Weight> BatchEngine<W> {
    /// Create a new batch engine.
    pub fn new(engine: DistanceEngine<W>, config: BatchConfig) -> Result<Self> {
        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(config.effective_threads())
            .thread_name(|i| format!("osadist-batch-{i}"))
            .build()
            .map_err(|e| {
                EditDistanceError::ThreadPool(format!("Failed to create thread pool: {e}"))
            })?;

        Ok(BatchEngine {
            engine,
            config,
            thread_pool: Arc::new(thread_pool),
        })
    }

    pub fn engine(&self) -> &DistanceEngine<W> {
        &self.engine
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Distances for every pair, in input order.
    pub fn distances(&self, pairs: &[StringPair]) -> Vec<W> {
        debug!(
            "Computing {} distances on {} threads",
            pairs.len(),
            self.thread_pool.current_num_threads()
        );
        let engine = &self.engine;
        let min_len = self.config.min_chunk_len.max(1);
        self.thread_pool.install(|| {
            pairs
                .par_iter()
                .with_min_len(min_len)
                .map(|pair| engine.distance_str(&pair.source, &pair.target))
                .collect()
        })
    }
}
