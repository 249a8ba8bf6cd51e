//! Key pair generation.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::{random_scalar, CurveError, CurvePoint, CurveScalar};

/// A secret scalar together with its derived public point.
///
/// Invariant: `public == [secret]G`.
#[derive(Clone, Copy)]
pub struct KeyPair {
    /// The public point.
    pub public: CurvePoint,
    /// The secret scalar, uniform in `[1, N)`.
    pub secret: CurveScalar,
}

impl KeyPair {
    /// Generate a fresh pair from the operating system RNG.
    pub fn generate() -> Result<Self, CurveError> {
        Self::generate_with_rng(&mut OsRng)
    }

    /// Generate a fresh pair from the supplied RNG.
    pub fn generate_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, CurveError> {
        let secret = random_scalar(rng)?;
        Ok(Self {
            public: CurvePoint::generator_mul(&secret),
            secret,
        })
    }

    /// Build a pair from an existing secret, rejecting invalid values.
    pub fn from_secret(secret: CurveScalar) -> Result<Self, CurveError> {
        if !secret.is_valid_secret() {
            return Err(CurveError::InvalidScalar);
        }
        Ok(Self {
            public: CurvePoint::generator_mul(&secret),
            secret,
        })
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .finish()
    }
}
