//! Error types for ring signature operations.

use cloak_curve::CurveError;
use thiserror::Error;

/// Errors that can occur while building or checking ring signatures.
#[derive(Debug, Error)]
pub enum RingError {
    /// The signing secret is not in `[1, N)`.
    #[error("invalid secret key")]
    InvalidSecret,

    /// The signer index does not address a ring member.
    #[error("signer index {index} out of range for ring of {len}")]
    SignerOutOfRange { index: usize, len: usize },

    /// The signature does not carry one (c, t) pair per ring member.
    #[error("signature carries {actual} scalars, ring of {len} requires {expected}")]
    MalformedSignature {
        expected: usize,
        actual: usize,
        len: usize,
    },

    /// A curve-level failure, e.g. the entropy source.
    #[error(transparent)]
    Curve(#[from] CurveError),
}
