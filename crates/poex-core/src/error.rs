//! Error types for the poex-core library.
//!
//! Extraction itself is infallible by contract: missing fields degrade to
//! empty values and are reported through warnings and the `tracing`
//! diagnostic channel. The error type here covers the fallible edges of the
//! library, configuration loading in particular.

use thiserror::Error;

/// Main error type for the poex library.
#[derive(Error, Debug)]
pub enum PoexError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the poex library.
pub type Result<T> = std::result::Result<T, PoexError>;
