//! Error types for the osadist library.
//!
//! The distance core is a total function and never fails. Errors only arise at
//! the boundary: validating weights, loading configuration, running deferred
//! work and driving the CLI. All of them are represented by
//! [`EditDistanceError`].
//!
//! # Examples
//!
//! ```
//! use osadist::error::{EditDistanceError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(EditDistanceError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::distance::weights::Operation;

/// The main error type for osadist operations.
#[derive(Error, Debug)]
pub enum EditDistanceError {
    /// A cost weight outside the documented domain (negative or NaN).
    #[error("Invalid {operation} weight: {value}")]
    InvalidWeight {
        operation: Operation,
        value: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A deferred computation could not be joined
    #[error("Task join error: {0}")]
    TaskJoin(String),

    /// Thread pool construction errors
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with EditDistanceError.
pub type Result<T> = std::result::Result<T, EditDistanceError>;

impl EditDistanceError {
    /// Create a new invalid weight error.
    pub fn invalid_weight<V: std::fmt::Debug>(operation: Operation, value: V) -> Self {
        EditDistanceError::InvalidWeight {
            operation,
            value: format!("{value:?}"),
        }
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        EditDistanceError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        EditDistanceError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new task join error.
    pub fn task_join<S: Into<String>>(msg: S) -> Self {
        EditDistanceError::TaskJoin(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        EditDistanceError::Other(msg.into())
    }
}
