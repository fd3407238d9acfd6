//! Audio error types

use thiserror::Error;

/// Audio error types
#[derive(Debug, Error)]
pub enum AudioError {
    /// Failed to initialize audio device
    #[error("Failed to initialize audio device: {0}")]
    DeviceInit(String),

    /// Failed to decode audio
    #[error("Failed to load audio: {0}")]
    LoadError(String),

    /// File not found
    #[error("Audio file not found: {0}")]
    FileNotFound(String),

    /// Event is not described in the bank
    #[error("Unknown audio event: {0}")]
    UnknownEvent(String),

    /// Failed to read a bank file
    #[error("Failed to read event bank: {0}")]
    Io(#[from] std::io::Error),

    /// Bank file is not valid TOML
    #[error("Failed to parse event bank: {0}")]
    Parse(#[from] toml::de::Error),
}
