//! LSAG signing and verification.

use cloak_curve::{hash_to_curve, random_scalar, CurvePoint, CurveScalar};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{Ring, RingError};

/// A linkable ring signature.
///
/// `tau` is the key image `[x]·Hp(m)`: deterministic in the signer's secret
/// and the message, so two signatures by the same member over the same
/// message carry the same tag. `ct` interleaves one challenge/response pair
/// per ring slot: `ct[2j]` is `c_j`, `ct[2j + 1]` is `t_j`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingSignature {
    /// The key image.
    pub tau: CurvePoint,
    /// Interleaved `(c_j, t_j)` pairs, two scalars per ring member.
    #[serde(rename = "ctlist")]
    pub ct: Vec<CurveScalar>,
}

impl Ring {
    /// Sign a 32-byte message digest as member `signer`.
    ///
    /// Proves knowledge of `secret` with `[secret]G == pub_keys[signer]`
    /// without revealing which member signed.
    pub fn sign(
        &self,
        secret: &CurveScalar,
        message: &[u8; 32],
        signer: usize,
    ) -> Result<RingSignature, RingError> {
        self.sign_with_rng(secret, message, signer, &mut OsRng)
    }

    /// Sign with the supplied RNG; see [`Ring::sign`].
    pub fn sign_with_rng<R: RngCore + CryptoRng>(
        &self,
        secret: &CurveScalar,
        message: &[u8; 32],
        signer: usize,
        rng: &mut R,
    ) -> Result<RingSignature, RingError> {
        let n = self.pub_keys.len();
        if signer >= n {
            return Err(RingError::SignerOutOfRange {
                index: signer,
                len: n,
            });
        }
        if !secret.is_valid_secret() {
            return Err(RingError::InvalidSecret);
        }

        let hp = hash_to_curve(message);
        let tau = hp.scalar_mul(secret);
        let mut acc = chain_seed(&hp, &tau);

        let mut ct = vec![CurveScalar::ZERO; 2 * n];
        let mut c_sum = CurveScalar::ZERO;
        let r = random_scalar(rng)?;

        // The accumulator must be folded in strict index order; the signer
        // slot contributes commitments to r and is back-filled below.
        for (j, pk) in self.pub_keys.iter().enumerate() {
            let (a, b) = if j == signer {
                (CurvePoint::generator_mul(&r), hp.scalar_mul(&r))
            } else {
                let c = random_scalar(rng)?;
                let t = random_scalar(rng)?;
                ct[2 * j] = c;
                ct[2 * j + 1] = t;
                c_sum = c_sum + c;
                (pk.mul_base_then_add(&t, &c), hp.mul_add(&tau, &t, &c))
            };
            acc = chain_step(&acc, &a, &b);
        }

        let h = CurveScalar::from_be_bytes_reduced(&acc);
        let c_signer = h - c_sum;
        let t_signer = r - c_signer * *secret;
        ct[2 * signer] = c_signer;
        ct[2 * signer + 1] = t_signer;

        Ok(RingSignature { tau, ct })
    }

    /// Check a signature over a 32-byte message digest.
    ///
    /// Returns `Ok(false)` on cryptographic mismatch; an error is raised
    /// only for structurally malformed input.
    pub fn verify(
        &self,
        message: &[u8; 32],
        signature: &RingSignature,
    ) -> Result<bool, RingError> {
        let n = self.pub_keys.len();
        if signature.ct.len() != 2 * n {
            return Err(RingError::MalformedSignature {
                expected: 2 * n,
                actual: signature.ct.len(),
                len: n,
            });
        }

        let hp = hash_to_curve(message);
        let mut acc = chain_seed(&hp, &signature.tau);
        let mut c_sum = CurveScalar::ZERO;

        for (j, pk) in self.pub_keys.iter().enumerate() {
            let c = signature.ct[2 * j];
            let t = signature.ct[2 * j + 1];
            let a = pk.mul_base_then_add(&t, &c);
            let b = hp.mul_add(&signature.tau, &t, &c);
            acc = chain_step(&acc, &a, &b);
            c_sum = c_sum + c;
        }

        Ok(c_sum == CurveScalar::from_be_bytes_reduced(&acc))
    }

    /// Produce one signature per owned secret, each signing as the member
    /// it runs parallel to. The first failure fails the whole batch.
    pub fn sign_all(&self, message: &[u8; 32]) -> Result<Vec<RingSignature>, RingError> {
        self.sign_all_with_rng(message, &mut OsRng)
    }

    /// [`Ring::sign_all`] with the supplied RNG.
    pub fn sign_all_with_rng<R: RngCore + CryptoRng>(
        &self,
        message: &[u8; 32],
        rng: &mut R,
    ) -> Result<Vec<RingSignature>, RingError> {
        self.priv_keys
            .iter()
            .enumerate()
            .map(|(i, secret)| self.sign_with_rng(secret, message, i, rng))
            .collect()
    }
}

/// Seed of the challenge chain: `H(marshal(Hp)[..32] || marshal(tau))`.
///
/// Only the x coordinate of Hp anchors the first step; the truncation to 32
/// bytes is part of the wire contract.
fn chain_seed(hp: &CurvePoint, tau: &CurvePoint) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(&hp.marshal()[..32]);
    hasher.update(tau.marshal());
    hasher.finalize().into()
}

/// One chain step: `H(acc || marshal(a) || marshal(b))`.
fn chain_step(acc: &[u8; 32], a: &CurvePoint, b: &CurvePoint) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(acc);
    hasher.update(a.marshal());
    hasher.update(b.marshal());
    hasher.finalize().into()
}
