//! Error types for algokit
//!
//! Provides a unified error type for all fallible operations.

use thiserror::Error;

/// Result type alias using AlgoError
pub type Result<T> = std::result::Result<T, AlgoError>;

/// Unified error type for algokit operations
#[derive(Debug, Error)]
pub enum AlgoError {
    // -------------------------------------------------------------------------
    // Structure Errors
    // -------------------------------------------------------------------------
    #[error("Priority queue is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("Priority queue is empty")]
    EmptyQueue,

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Unknown sort algorithm: {0}")]
    InvalidAlgorithm(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
