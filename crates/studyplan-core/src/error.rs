//! Core error types for studyplan-core.
//!
//! Schedule generation itself never fails on bad data; unrecognized values
//! fall back to defaults and are reported as [`crate::Fallback`] diagnostics.
//! The errors below cover malformed input shape, configuration and I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studyplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dotted key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Home/config directory could not be prepared
    #[error("Configuration directory unavailable: {0}")]
    DirectoryUnavailable(String),
}

/// Validation errors for caller contract violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The preferences document is not a JSON object
    #[error("Malformed preferences: {0}")]
    MalformedPreferences(String),

    /// A field has the wrong shape (e.g. a string where a list is expected)
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// A rendered 12-hour time could not be parsed
    #[error("Invalid clock time: {0}")]
    InvalidClockTime(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
