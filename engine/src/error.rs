//! Level Errors
//!
//! Errors raised while loading configuration or touching level bookkeeping.
//! The per-frame update itself never fails.

use thiserror::Error;

/// Errors that can occur while building or mutating a level.
#[derive(Debug, Error)]
pub enum LevelError {
    /// Standard I/O error while reading a config file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A config value is out of its allowed range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// No collectible with this id is alive in the world.
    #[error("unknown collectible: {0}")]
    UnknownCollectible(u32),
    /// No sphere with this index is alive in the world.
    #[error("unknown sphere: {0}")]
    UnknownSphere(u32),
}
