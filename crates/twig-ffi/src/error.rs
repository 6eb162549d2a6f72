// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;
use twig_core::TwigError;

#[derive(Error, Debug, uniffi::Error)]
pub enum TwigFfiError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl From<TwigError> for TwigFfiError {
    fn from(err: TwigError) -> Self {
        match err {
            TwigError::InvalidInput(_) => TwigFfiError::InvalidInput {
                message: err.to_string(),
            },
            TwigError::Config { message } => TwigFfiError::ConfigError { message },
            TwigError::Io(_) => TwigFfiError::InternalError {
                message: err.to_string(),
            },
        }
    }
}
