//! Stealth key derivation, following IACR ePrint 2017/881 §2.1.

use cloak_curve::{CurvePoint, CurveScalar};
use sha2::{Digest, Sha256};

use crate::StealthError;

/// Derive a counter-party stealth public key from their master public key
/// and an arbitrary shared secret:
///
/// ```text
/// spk = mpk + [H(secret)]G
/// ```
///
/// Only the holder of the matching master secret can produce the spending
/// key for the result.
pub fn stealth_pub_derive(
    mpk: &CurvePoint,
    secret: &[u8],
) -> Result<CurvePoint, StealthError> {
    if mpk.is_identity() {
        return Err(StealthError::InvalidPoint);
    }

    let x = CurveScalar::from_be_bytes_reduced(&sha256(secret));
    Ok(*mpk + CurvePoint::generator_mul(&x))
}

/// Derive a stealth secret key from your master secret key and the same
/// shared secret:
///
/// ```text
/// ssk = msk + H(secret)  (mod N)
/// ```
///
/// `[ssk]G` equals the counter-party's [`stealth_pub_derive`] output for
/// `mpk = [msk]G`, so the two sides agree on the address.
pub fn stealth_priv_derive(
    msk: &CurveScalar,
    secret: &[u8],
) -> Result<CurveScalar, StealthError> {
    if !msk.is_valid_secret() {
        return Err(StealthError::InvalidSecret);
    }

    let x = CurveScalar::from_be_bytes_reduced(&sha256(secret));
    let ssk = *msk + x;

    // A valid scalar cannot land on the identity unless msk + x wrapped to
    // zero; treat that as a failed derivation rather than handing out an
    // unspendable key.
    if CurvePoint::generator_mul(&ssk).is_identity() {
        return Err(StealthError::Derivation(
            "derived key has no public counterpart".to_owned(),
        ));
    }

    Ok(ssk)
}

/// ECDH shared secret between our secret and their public key.
///
/// Returns the big-endian x coordinate of `[my_secret]·their_public`; the y
/// coordinate is discarded per RFC 5903 §9.
pub fn derive_shared_secret(my_secret: &CurveScalar, their_public: &CurvePoint) -> [u8; 32] {
    let point = their_public.scalar_mul(my_secret);
    let marshaled = point.marshal();
    let mut shared = [0u8; 32];
    shared.copy_from_slice(&marshaled[..32]);
    shared
}

pub(crate) fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}
