//! The ring: an ordered anonymity set of public keys.

use cloak_curve::{CurvePoint, CurveScalar, KeyPair};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::RingError;

/// An ordered set of public keys, optionally with the secrets we own.
///
/// The order of `pub_keys` is part of the ring's identity: it determines
/// [`Ring::public_keys_hashed`] and the slot order of every signature over
/// the ring. `priv_keys` runs parallel to `pub_keys`; `priv_keys[i]` signs
/// as member `i`, and the list may be empty or shorter when we own only
/// some (or none) of the members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ring {
    /// The anonymity set, in hash order.
    #[serde(rename = "pubkeys")]
    pub pub_keys: Vec<CurvePoint>,
    /// Secrets we own, parallel to `pub_keys`. Present only when the owner
    /// exports them.
    #[serde(rename = "privkeys", default)]
    pub priv_keys: Vec<CurveScalar>,
}

impl Ring {
    /// An empty ring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `n` freshly generated members, keeping their secrets.
    pub fn generate(&mut self, n: usize) -> Result<(), RingError> {
        self.generate_with_rng(n, &mut OsRng)
    }

    /// Append `n` freshly generated members using the supplied RNG.
    pub fn generate_with_rng<R: RngCore + CryptoRng>(
        &mut self,
        n: usize,
        rng: &mut R,
    ) -> Result<(), RingError> {
        for _ in 0..n {
            let pair = KeyPair::generate_with_rng(rng)?;
            self.pub_keys.push(pair.public);
            self.priv_keys.push(pair.secret);
        }
        Ok(())
    }

    /// The number of ring members.
    pub fn len(&self) -> usize {
        self.pub_keys.len()
    }

    /// Whether the ring has no members.
    pub fn is_empty(&self) -> bool {
        self.pub_keys.is_empty()
    }

    /// The index of a public key, if it is a member.
    pub fn index_of(&self, public: &CurvePoint) -> Option<usize> {
        self.pub_keys.iter().position(|pk| pk == public)
    }

    /// The ring's canonical identity: a SHA-256 chain over the members.
    ///
    /// Starts from 32 zero bytes and folds `h = H(h || marshal(pk))` in
    /// member order, so any reordering changes the result.
    pub fn public_keys_hashed(&self) -> [u8; 32] {
        let mut acc = [0u8; 32];
        for pk in &self.pub_keys {
            let mut hasher = Sha256::new();
            hasher.update(acc);
            hasher.update(pk.marshal());
            acc = hasher.finalize().into();
        }
        acc
    }
}
