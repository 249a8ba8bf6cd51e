//! Stealth address types.

use cloak_curve::{CurvePoint, CurveScalar};
use serde::{Deserialize, Serialize};

/// A one-time address belonging to a counter-party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StealthAddress {
    /// The derived one-time public key.
    pub public: CurvePoint,
    /// The nonce this address was derived under.
    pub nonce: CurveScalar,
}

/// A one-time address we own, including the spending key.
///
/// Invariant: `public == [private]G`.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateStealthAddress {
    /// The derived one-time public key.
    pub public: CurvePoint,
    /// The nonce this address was derived under.
    pub nonce: CurveScalar,
    /// The one-time secret key.
    pub private: CurveScalar,
}

impl std::fmt::Debug for PrivateStealthAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateStealthAddress")
            .field("public", &self.public)
            .field("nonce", &self.nonce)
            .finish()
    }
}

/// Everything two parties need to exchange a series of one-time addresses.
///
/// Built once by [`StealthSession::new`](crate::StealthSession::new) and
/// immutable afterwards. The two address lists are index-aligned and share
/// nonces; each party holds spending keys only for their own column.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StealthSession {
    /// Our master public key.
    #[serde(rename = "myPublic")]
    pub my_public: CurvePoint,
    /// The counter-party master public key.
    #[serde(rename = "theirPublic")]
    pub their_public: CurvePoint,
    /// The ECDH x coordinate both sides derive.
    #[serde(rename = "sharedSecret", with = "hex_bytes_32")]
    pub shared_secret: [u8; 32],
    /// One-time addresses the counter-party can spend.
    #[serde(rename = "theirStealthAddresses")]
    pub their_addresses: Vec<StealthAddress>,
    /// One-time addresses we can spend.
    #[serde(rename = "myStealthAddresses")]
    pub my_addresses: Vec<PrivateStealthAddress>,
}

impl std::fmt::Debug for StealthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StealthSession")
            .field("my_public", &self.my_public)
            .field("their_public", &self.their_public)
            .field("their_addresses", &self.their_addresses.len())
            .field("my_addresses", &self.my_addresses.len())
            .finish()
    }
}

mod hex_bytes_32 {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 32], D::Error> {
        let s = String::deserialize(deserializer)?;
        let raw = hex::decode(&s).map_err(D::Error::custom)?;
        raw.try_into()
            .map_err(|_| D::Error::custom("expected 32 hex-encoded bytes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloak_curve::KeyPair;

    #[test]
    fn test_stealth_address_json_layout() {
        let pair = KeyPair::generate().unwrap();
        let address = StealthAddress {
            public: pair.public,
            nonce: CurveScalar::from(10u64),
        };

        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json["public"].as_str().unwrap().len(), 128);
        assert_eq!(json["nonce"], "a");
    }

    #[test]
    fn test_private_stealth_address_roundtrip() {
        let pair = KeyPair::generate().unwrap();
        let address = PrivateStealthAddress {
            public: pair.public,
            nonce: CurveScalar::ZERO,
            private: pair.secret,
        };

        let json = serde_json::to_string(&address).unwrap();
        let back: PrivateStealthAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(address, back);
    }

    #[test]
    fn test_private_debug_hides_spending_key() {
        let pair = KeyPair::generate().unwrap();
        let address = PrivateStealthAddress {
            public: pair.public,
            nonce: CurveScalar::from(1u64),
            private: pair.secret,
        };
        assert!(!format!("{address:?}").contains(&pair.secret.to_hex()));
    }
}
