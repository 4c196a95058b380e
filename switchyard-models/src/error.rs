//! Error types for model routing.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during model routing.
///
/// Resolution itself never fails; these surface from the opt-in strict
/// helpers and from parsing caller input.
#[derive(Debug, Error)]
pub enum Error {
    /// No registered provider has usable credentials.
    #[error("no available provider for model: {0}")]
    NoProviderAvailable(String),

    /// Provider not found in registry.
    #[error("provider not found: {0}")]
    ProviderNotFound(String),

    /// Model kind was not one of `big`, `small`, or `auto`.
    #[error("unknown model kind: {0}")]
    UnknownModelKind(String),

    /// Outgoing request payload is malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
