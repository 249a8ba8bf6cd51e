//! Deterministic digest-to-point mapping.

use k256::elliptic_curve::point::DecompressPoint;
use k256::elliptic_curve::subtle::Choice;
use k256::{AffinePoint, FieldBytes};

use crate::CurvePoint;

/// Map a 32-byte digest to a curve point by try-and-increment.
///
/// The digest is taken as a candidate big-endian x coordinate and
/// decompressed with even y parity; on failure the candidate is incremented
/// (mod 2^256) and retried. Roughly half of all candidates succeed, so the
/// loop terminates after a couple of iterations in practice.
///
/// Signer and verifier must agree on this construction bit for bit; the
/// resulting point has no known discrete log relative to G.
pub fn hash_to_curve(digest: &[u8; 32]) -> CurvePoint {
    let mut candidate = *digest;
    loop {
        let x = FieldBytes::from(candidate);
        if let Some(affine) =
            Option::<AffinePoint>::from(AffinePoint::decompress(&x, Choice::from(0)))
        {
            return CurvePoint(affine.into());
        }
        increment_be(&mut candidate);
    }
}

fn increment_be(bytes: &mut [u8; 32]) {
    for byte in bytes.iter_mut().rev() {
        let (value, carry) = byte.overflowing_add(1);
        *byte = value;
        if !carry {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let digest = [7u8; 32];
        assert_eq!(hash_to_curve(&digest), hash_to_curve(&digest));
    }

    #[test]
    fn test_distinct_digests_distinct_points() {
        let a = hash_to_curve(&[1u8; 32]);
        let b = hash_to_curve(&[2u8; 32]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_output_is_marshalable() {
        let point = hash_to_curve(&[0u8; 32]);
        assert!(!point.is_identity());
        assert_eq!(CurvePoint::unmarshal(&point.marshal()).unwrap(), point);
    }

    #[test]
    fn test_increment_carries() {
        let mut bytes = [0xffu8; 32];
        increment_be(&mut bytes);
        assert_eq!(bytes, [0u8; 32]);

        let mut bytes = [0u8; 32];
        bytes[31] = 0xff;
        increment_be(&mut bytes);
        assert_eq!(bytes[30], 1);
        assert_eq!(bytes[31], 0);
    }
}
