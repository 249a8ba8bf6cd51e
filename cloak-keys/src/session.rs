//! Stealth session construction.

use cloak_curve::{CurvePoint, CurveScalar};
use zeroize::Zeroize;

use crate::derivation::{derive_shared_secret, stealth_priv_derive, stealth_pub_derive};
use crate::{PrivateStealthAddress, StealthAddress, StealthError, StealthSession};

impl StealthSession {
    /// Derive everything needed to exchange `count` one-time addresses with
    /// a counter-party, starting at `nonce_offset`.
    ///
    /// For each nonce the derivation secret is the ECDH x coordinate
    /// followed by the nonce's minimal big-endian bytes (empty for nonce
    /// zero). Their column holds addresses only the counter-party can
    /// spend; our column carries the matching spending keys.
    pub fn new(
        my_secret: &CurveScalar,
        their_public: &CurvePoint,
        nonce_offset: u64,
        count: usize,
    ) -> Result<Self, StealthError> {
        if !my_secret.is_valid_secret() {
            return Err(StealthError::InvalidSecret);
        }
        if their_public.is_identity() {
            return Err(StealthError::InvalidPoint);
        }

        let shared_secret = derive_shared_secret(my_secret, their_public);
        let mut their_addresses = Vec::with_capacity(count);
        let mut my_addresses = Vec::with_capacity(count);

        for i in 0..count {
            let nonce = CurveScalar::from(nonce_offset + i as u64);
            let mut secret = Vec::with_capacity(32 + 8);
            secret.extend_from_slice(&shared_secret);
            secret.extend_from_slice(&nonce.to_minimal_bytes());

            let result = Self::derive_pair(my_secret, their_public, nonce, &secret);
            secret.zeroize();

            let (their_sa, my_sa) = result.map_err(|e| {
                StealthError::Derivation(format!("stealth address {i}: {e}"))
            })?;
            their_addresses.push(their_sa);
            my_addresses.push(my_sa);
        }

        Ok(Self {
            my_public: CurvePoint::generator_mul(my_secret),
            their_public: *their_public,
            shared_secret,
            their_addresses,
            my_addresses,
        })
    }

    fn derive_pair(
        my_secret: &CurveScalar,
        their_public: &CurvePoint,
        nonce: CurveScalar,
        secret: &[u8],
    ) -> Result<(StealthAddress, PrivateStealthAddress), StealthError> {
        let their_stealth_pub = stealth_pub_derive(their_public, secret)?;
        let their_sa = StealthAddress {
            public: their_stealth_pub,
            nonce,
        };

        let my_stealth_priv = stealth_priv_derive(my_secret, secret)?;
        let my_sa = PrivateStealthAddress {
            public: CurvePoint::generator_mul(&my_stealth_priv),
            nonce,
            private: my_stealth_priv,
        };

        Ok((their_sa, my_sa))
    }
}
