//! Linkable ring signatures (LSAG) for the cloak privacy primitives.
//!
//! A ring signature proves that one member of an ordered set of public
//! keys signed a message, without revealing which one. The signature
//! carries a key image `tau = [x]·Hp(m)` that is deterministic in the
//! signer's secret and the message, so two signatures by the same member
//! over the same message are linkable while the member stays anonymous.
//!
//! # Example
//!
//! ```rust
//! use cloak_ring::Ring;
//!
//! let mut ring = Ring::new();
//! ring.generate(5).unwrap();
//!
//! let message = [1u8; 32];
//! let signature = ring.sign(&ring.priv_keys[2], &message, 2).unwrap();
//! assert!(ring.verify(&message, &signature).unwrap());
//! ```

mod error;
mod ring;
mod signature;

pub use error::RingError;
pub use ring::Ring;
pub use signature::RingSignature;

#[cfg(test)]
mod tests;
