//! Unified error types for catalog loading and the browse shell.
//!
//! The catalog core itself never fails: empty results and unknown references
//! are ordinary values. Errors only come from loading configuration, from
//! outbound collaborators, and from the shell.

use thiserror::Error;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// Catalog file or environment configuration is unusable
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what is wrong
        message: String,
    },

    /// A product id that is not in the catalog
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The id that was looked up
        id: u32,
    },

    /// A category name that does not match any known category
    #[error("Unknown category: {name}")]
    UnknownCategory {
        /// The name as typed
        name: String,
    },

    /// A shell command that could not be parsed
    #[error("Invalid command: {message}")]
    InvalidCommand {
        /// What was wrong with the input
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Formatting a reply failed
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
