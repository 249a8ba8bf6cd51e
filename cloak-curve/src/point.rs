//! Points on the secp256k1 curve.

use k256::elliptic_curve::group::Group;
use k256::elliptic_curve::ops::LinearCombination;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint};
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{CurveError, CurveScalar};

/// A validated point on the curve.
///
/// Can only be constructed from encodings that pass the on-curve check, so
/// a held value is always a group element. The identity is representable in
/// memory (it arises from arithmetic) but has no wire encoding; the JSON
/// boundary refuses to serialize it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CurvePoint(pub(crate) ProjectivePoint);

impl CurvePoint {
    /// The base point G.
    pub fn generator() -> Self {
        Self(ProjectivePoint::GENERATOR)
    }

    /// The identity element.
    pub fn identity() -> Self {
        Self(ProjectivePoint::IDENTITY)
    }

    /// Whether this is the identity element.
    pub fn is_identity(&self) -> bool {
        bool::from(self.0.is_identity())
    }

    /// `[k]G`.
    pub fn generator_mul(k: &CurveScalar) -> Self {
        Self(ProjectivePoint::GENERATOR * k.0)
    }

    /// `[k]P`.
    pub fn scalar_mul(&self, k: &CurveScalar) -> Self {
        Self(self.0 * k.0)
    }

    /// `[t]G + [c]P`, the verifier-side combination for a ring slot.
    pub fn mul_base_then_add(&self, t: &CurveScalar, c: &CurveScalar) -> Self {
        Self(ProjectivePoint::lincomb(
            &ProjectivePoint::GENERATOR,
            &t.0,
            &self.0,
            &c.0,
        ))
    }

    /// `[t]P + [c]Q`, the same combination against an arbitrary base.
    pub fn mul_add(&self, other: &Self, t: &CurveScalar, c: &CurveScalar) -> Self {
        Self(ProjectivePoint::lincomb(&self.0, &t.0, &other.0, &c.0))
    }

    /// Canonical 64-byte encoding: big-endian affine x followed by y.
    ///
    /// The identity has no affine coordinates and maps to 64 zero bytes,
    /// which is not on the curve and therefore never round-trips; hash
    /// chains over adversarial inputs stay total without panicking.
    pub fn marshal(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        let encoded = self.0.to_affine().to_encoded_point(false);
        if let (Some(x), Some(y)) = (encoded.x(), encoded.y()) {
            out[..32].copy_from_slice(x.as_slice());
            out[32..].copy_from_slice(y.as_slice());
        }
        out
    }

    /// Parse the canonical 64-byte encoding, rejecting off-curve coordinates.
    pub fn unmarshal(bytes: &[u8; 64]) -> Result<Self, CurveError> {
        let x = FieldBytes::from_slice(&bytes[..32]);
        let y = FieldBytes::from_slice(&bytes[32..]);
        let encoded = EncodedPoint::from_affine_coordinates(x, y, false);
        Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .map(|affine| Self(affine.into()))
            .ok_or(CurveError::InvalidPoint)
    }

    /// Parse a 128-char hex encoding of [`CurvePoint::marshal`].
    pub fn from_hex(s: &str) -> Result<Self, CurveError> {
        let raw = hex::decode(s).map_err(|e| CurveError::InvalidEncoding(e.to_string()))?;
        let bytes: [u8; 64] = raw.try_into().map_err(|_| {
            CurveError::InvalidEncoding("point hex must encode 64 bytes".to_owned())
        })?;
        Self::unmarshal(&bytes)
    }

    /// Hex encoding of [`CurvePoint::marshal`].
    pub fn to_hex(&self) -> String {
        hex::encode(self.marshal())
    }
}

impl std::ops::Add for CurvePoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::fmt::Debug for CurvePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CurvePoint({})", self.to_hex())
    }
}

impl Serialize for CurvePoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_identity() {
            return Err(S::Error::custom(CurveError::IdentityMarshal));
        }
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for CurvePoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}
