//! Core error types for featherbook-core.
//!
//! This module defines the error hierarchy using thiserror. Expected
//! empty/duplicate conditions (an exhausted catalog, a flip on a matched
//! card) are not fatal anywhere in the application; callers absorb them
//! or surface them as ordinary command output.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for featherbook-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Collection engine errors
    #[error("Collection error: {0}")]
    Collection(#[from] CollectionError),

    /// Minigame errors
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Session storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Collection-engine errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CollectionError {
    /// Every feather in the catalog is already owned (or on its way to
    /// being owned). Recoverable; callers treat a draw that fails this
    /// way as a silent no-op.
    #[error("No feathers remaining to collect")]
    NoneRemaining,

    /// Announce was called with an id that is not in the catalog.
    #[error("Unknown feather: {0}")]
    UnknownFeather(String),

    /// Announce was called with an id that is already owned.
    #[error("Feather already collected: {0}")]
    AlreadyOwned(String),
}

/// Minigame configuration errors.
///
/// These are setup-time faults: a grid is validated when the engine is
/// constructed, never silently truncated at play time.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    /// rows x cols must be even so every card has a partner.
    #[error("Grid of {rows}x{cols} has an odd card count")]
    OddCardCount { rows: u32, cols: u32 },

    /// The face catalog is too small for the requested pair count.
    #[error("Grid needs {needed} distinct faces but the catalog has {available}")]
    NotEnoughFaces { needed: usize, available: usize },
}

/// Configuration load/save errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Could not determine the configuration directory
    #[error("Could not determine a configuration directory")]
    NoConfigDir,
}

/// Session snapshot storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read or decode the session snapshot
    #[error("Failed to load session from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to write the session snapshot
    #[error("Failed to save session to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Could not determine the data directory
    #[error("Could not determine a data directory")]
    NoDataDir,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
