//! Error types for stealth key operations.

use thiserror::Error;

/// Errors that can occur during stealth derivation.
#[derive(Debug, Error)]
pub enum StealthError {
    /// The master secret is not in `[1, N)`.
    #[error("invalid secret key")]
    InvalidSecret,

    /// The counter-party public key is missing or not a usable curve point.
    #[error("public key is missing or not a valid curve point")]
    InvalidPoint,

    /// A derived key failed its post-condition.
    #[error("stealth derivation failed: {0}")]
    Derivation(String),
}
