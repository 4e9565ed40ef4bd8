//! Configuration for batch evaluation.

use serde::{Deserialize, Serialize};

/// Configuration for the batch engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Thread pool size for parallel execution.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,

    /// Minimum number of pairs handed to a worker at once.
    pub min_chunk_len: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            thread_pool_size: None,
            min_chunk_len: 64,
        }
    }
}

impl BatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the thread pool size.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.thread_pool_size = Some(threads);
        self
    }

    pub fn with_min_chunk_len(mut self, min_chunk_len: usize) -> Self {
        self.min_chunk_len = min_chunk_len;
        self
    }

    /// Number of worker threads the pool will be built with.
    pub fn effective_threads(&self) -> usize {
        self.thread_pool_size.unwrap_or_else(num_cpus::get).max(1)
    }
}
