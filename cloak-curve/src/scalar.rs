//! Scalars modulo the secp256k1 group order.

use k256::elliptic_curve::bigint::U256;
use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, Scalar};
use rand::{CryptoRng, RngCore};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

use crate::CurveError;

/// An integer modulo the group order N.
///
/// Values are always reduced before storage, so every `CurveScalar` lies in
/// `[0, N)`. Secret keys additionally require the value to be nonzero; see
/// [`CurveScalar::is_valid_secret`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CurveScalar(pub(crate) Scalar);

impl CurveScalar {
    /// The zero scalar.
    pub const ZERO: Self = Self(Scalar::ZERO);

    /// The one scalar.
    pub const ONE: Self = Self(Scalar::ONE);

    /// Parse a 32-byte big-endian integer, rejecting values `>= N`.
    ///
    /// This is the strict boundary for imported secret keys: a value that is
    /// not already canonical is refused rather than silently reduced.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Result<Self, CurveError> {
        Option::<Scalar>::from(Scalar::from_repr(FieldBytes::from(*bytes)))
            .map(Self)
            .ok_or(CurveError::InvalidScalar)
    }

    /// Interpret a 32-byte big-endian integer and reduce it modulo N.
    ///
    /// The single place raw hash outputs become scalars.
    pub fn from_be_bytes_reduced(bytes: &[u8; 32]) -> Self {
        Self(<Scalar as Reduce<U256>>::reduce_bytes(FieldBytes::from_slice(
            bytes,
        )))
    }

    /// Big-endian 32-byte encoding, zero padded.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes().into()
    }

    /// Minimal big-endian encoding: leading zero bytes stripped, empty for
    /// zero. Distinct values always encode to distinct byte strings.
    pub fn to_minimal_bytes(&self) -> Vec<u8> {
        let bytes = self.to_bytes();
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        bytes[start..].to_vec()
    }

    /// Parse from a hex string of at most 64 chars (no `0x` prefix, odd
    /// lengths accepted), reducing modulo N.
    pub fn from_hex(s: &str) -> Result<Self, CurveError> {
        if s.is_empty() || s.len() > 64 {
            return Err(CurveError::InvalidEncoding(format!(
                "scalar hex must be 1..=64 chars, got {}",
                s.len()
            )));
        }
        let padded = if s.len() % 2 == 1 {
            format!("0{s}")
        } else {
            s.to_owned()
        };
        let raw = hex::decode(&padded)
            .map_err(|e| CurveError::InvalidEncoding(e.to_string()))?;
        let mut bytes = [0u8; 32];
        bytes[32 - raw.len()..].copy_from_slice(&raw);
        Ok(Self::from_be_bytes_reduced(&bytes))
    }

    /// Minimal hex encoding: no leading zeros, `"0"` for zero.
    pub fn to_hex(&self) -> String {
        let full = hex::encode(self.to_bytes());
        let trimmed = full.trim_start_matches('0');
        if trimmed.is_empty() {
            "0".to_owned()
        } else {
            trimmed.to_owned()
        }
    }

    /// Whether the scalar is zero.
    pub fn is_zero(&self) -> bool {
        bool::from(self.0.is_zero())
    }

    /// Whether the value can serve as a secret key, i.e. lies in `[1, N)`.
    ///
    /// The upper bound is enforced by the reduced representation; what
    /// remains to check is that the value is nonzero.
    pub fn is_valid_secret(&self) -> bool {
        !self.is_zero()
    }
}

impl From<u64> for CurveScalar {
    fn from(value: u64) -> Self {
        Self(Scalar::from(value))
    }
}

impl std::ops::Add for CurveScalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for CurveScalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for CurveScalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl std::fmt::Debug for CurveScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CurveScalar({})", self.to_hex())
    }
}

impl Serialize for CurveScalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for CurveScalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}

/// Sample a uniform scalar in `[1, N)`.
///
/// Rejection-samples 32-byte candidates until one is canonical and nonzero,
/// so the range guarantee holds for every draw.
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<CurveScalar, CurveError> {
    let mut bytes = [0u8; 32];
    loop {
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| CurveError::Randomness(e.to_string()))?;
        if let Some(scalar) = Option::<Scalar>::from(Scalar::from_repr(FieldBytes::from(bytes))) {
            if !bool::from(scalar.is_zero()) {
                bytes.zeroize();
                return Ok(CurveScalar(scalar));
            }
        }
    }
}
