// SPDX-License-Identifier: Apache-2.0

//! Error types for Twig.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.
//!
//! Tree building never fails: inconsistent comment data is reported as
//! [`Diagnostic`](crate::tree::Diagnostic) values next to the result instead.

use thiserror::Error;

/// Errors that can occur during Twig operations.
#[derive(Error, Debug)]
pub enum TwigError {
    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// Comment input could not be decoded.
    #[error("Invalid comment input: {0}")]
    InvalidInput(#[source] serde_json::Error),

    /// Reading comment input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for TwigError {
    fn from(err: config::ConfigError) -> Self {
        TwigError::Config {
            message: err.to_string(),
        }
    }
}
