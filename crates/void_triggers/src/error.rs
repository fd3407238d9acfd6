//! Error types for area triggers

use thiserror::Error;
use void_core::ObjectId;

/// Area trigger errors
#[derive(Debug, Error)]
pub enum TriggerError {
    /// Failed to read a configuration file
    #[error("Failed to read trigger config: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is not valid TOML
    #[error("Failed to parse trigger config: {0}")]
    Parse(#[from] toml::de::Error),

    /// No monitor is registered for this owner
    #[error("No area monitor registered for owner {0}")]
    UnknownOwner(ObjectId),

    /// Target name does not resolve to an object
    #[error("Unknown trigger target: {0}")]
    UnknownTarget(String),

    /// An area references an event the bank does not describe
    #[error("Area '{area}' of monitor '{monitor}' references unknown event '{event}'")]
    UnknownEvent {
        monitor: String,
        area: String,
        event: String,
    },
}

/// Result type for trigger operations
pub type Result<T> = std::result::Result<T, TriggerError>;
