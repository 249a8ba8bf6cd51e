//! Stealth address derivation for the cloak privacy primitives.
//!
//! Implements the stealth address construction from IACR ePrint 2017/881
//! §2.1: a sender derives a one-time public key from a recipient's master
//! public key plus a shared secret, and only the holder of the master
//! secret can derive the matching one-time spending key.
//!
//! # Overview
//!
//! Both parties compute an ECDH shared secret, then derive a nonce-indexed
//! series of address pairs:
//!
//! ```text
//! spk = mpk + [H(shared || nonce)]G        (sender side)
//! ssk = msk + H(shared || nonce)  (mod N)  (recipient side)
//! ```
//!
//! # Example
//!
//! ```rust
//! use cloak_curve::{CurvePoint, KeyPair};
//! use cloak_keys::StealthSession;
//!
//! let alice = KeyPair::generate().unwrap();
//! let bob = KeyPair::generate().unwrap();
//!
//! let session = StealthSession::new(&alice.secret, &bob.public, 0, 4).unwrap();
//! for address in &session.my_addresses {
//!     assert_eq!(CurvePoint::generator_mul(&address.private), address.public);
//! }
//! ```

mod derivation;
mod error;
mod session;
mod types;

pub use derivation::{derive_shared_secret, stealth_priv_derive, stealth_pub_derive};
pub use error::StealthError;
pub use types::{PrivateStealthAddress, StealthAddress, StealthSession};

#[cfg(test)]
mod tests;
