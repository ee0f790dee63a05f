//! The `error` module defines the error type used within the `iotsim`
//! application.
//!
//! Errors are not handled locally anywhere in this crate; they propagate
//! to the invoking runtime, which decides the user-visible outcome.

use thiserror::Error;

/// Unified error for configuration, transport, and serialization failures.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("broker transport error: {0}")]
    Transport(#[from] tungstenite::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
