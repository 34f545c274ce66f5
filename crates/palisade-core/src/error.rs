//! Error types for the Palisade core library.

use thiserror::Error;

/// Result type alias using the Palisade Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Palisade operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Command descriptor failed registration-time validation
    #[error("Invalid command descriptor: {0}")]
    InvalidDescriptor(String),

    /// Re-parenting would make a command its own ancestor
    #[error("Cyclic command tree: '{0}' cannot become its own ancestor")]
    CyclicCommandTree(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
