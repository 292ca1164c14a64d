// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Atrio site backend.

use thiserror::Error;

/// The primary error type used across all Atrio crates.
#[derive(Debug, Error)]
pub enum AtrioError {
    /// Configuration errors (invalid TOML, missing required fields, absent credentials).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, migration failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Chat-completion provider errors (API failure, bad status, malformed response).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AtrioError {
    /// Build a storage error from any underlying error.
    pub fn storage<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AtrioError::Storage {
            source: Box::new(source),
        }
    }

    /// Build a provider error with a message and no underlying source.
    pub fn provider(message: impl Into<String>) -> Self {
        AtrioError::Provider {
            message: message.into(),
            source: None,
        }
    }
}
