//! Error types for curve operations.

use thiserror::Error;

/// Errors that can occur in the curve backend.
#[derive(Debug, Error)]
pub enum CurveError {
    /// The coordinates do not describe a point on the curve.
    #[error("point is not on the curve")]
    InvalidPoint,

    /// The scalar is zero or not below the group order.
    #[error("scalar is out of range")]
    InvalidScalar,

    /// A point or scalar encoding could not be parsed.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// The identity has no affine encoding and must not be serialized.
    #[error("the identity point has no canonical encoding")]
    IdentityMarshal,

    /// The entropy source failed.
    #[error("randomness source failed: {0}")]
    Randomness(String),
}
