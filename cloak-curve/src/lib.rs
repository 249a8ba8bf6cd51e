//! secp256k1 backend for the cloak privacy primitives.
//!
//! This crate wraps the `k256` arithmetic behind the two types the rest of
//! the workspace is written against:
//!
//! - [`CurvePoint`]: a validated group element with the canonical 64-byte
//!   big-endian `x || y` wire encoding
//! - [`CurveScalar`]: an integer modulo the group order N
//!
//! plus uniform scalar sampling, key-pair generation, and the deterministic
//! [`hash_to_curve`] map used to anchor ring signatures to their message.
//!
//! # Example
//!
//! ```rust
//! use cloak_curve::{CurvePoint, KeyPair};
//!
//! let pair = KeyPair::generate().unwrap();
//! assert!(pair.secret.is_valid_secret());
//! assert_eq!(pair.public, CurvePoint::generator_mul(&pair.secret));
//!
//! // The wire encoding round-trips through 64 bytes.
//! let bytes = pair.public.marshal();
//! assert_eq!(CurvePoint::unmarshal(&bytes).unwrap(), pair.public);
//! ```

mod error;
mod hash_to_curve;
mod keypair;
mod point;
mod scalar;

pub use error::CurveError;
pub use hash_to_curve::hash_to_curve;
pub use keypair::KeyPair;
pub use point::CurvePoint;
pub use scalar::{random_scalar, CurveScalar};
