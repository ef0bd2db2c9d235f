//! Error types for edgeport

/// Result type alias using edgeport's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for edgeport operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Weights acquisition errors
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Export engine errors
    #[error("export error: {0}")]
    Export(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Capability compiled out of this build
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create a new export error
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new unsupported-capability error
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }
}
