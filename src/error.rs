use thiserror::Error;

use crate::transport::TransportError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The envelope carried a non-success `resultCode`.
    #[error("upstream error {code}: {message}")]
    Upstream { code: String, message: String },

    /// The envelope parsed but lacks a structure the operation needs.
    #[error("malformed envelope: {0}")]
    Envelope(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, ApiError>;
