//! Integration tests for the cloak-ring crate.

use crate::*;
use cloak_curve::KeyPair;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_signer_hides_among_exported_ring() {
    // The owner signs, exports only the public half, and a third party
    // verifies against the public ring.
    let mut ring = Ring::new();
    ring.generate(6).unwrap();
    let message = [42u8; 32];

    let signature = ring.sign(&ring.priv_keys[4], &message, 4).unwrap();

    let exported = Ring {
        pub_keys: ring.pub_keys.clone(),
        priv_keys: Vec::new(),
    };
    let json = serde_json::to_string(&exported).unwrap();
    let public_ring: Ring = serde_json::from_str(&json).unwrap();

    assert!(public_ring.verify(&message, &signature).unwrap());
}

#[test]
fn test_outsider_cannot_sign_into_ring() {
    let mut ring = Ring::new();
    ring.generate(4).unwrap();
    let message = [3u8; 32];

    // A secret whose public key is not in the ring produces a signature
    // that the ring rejects.
    let outsider = KeyPair::generate().unwrap();
    let forged = ring.sign(&outsider.secret, &message, 1).unwrap();
    assert!(!ring.verify(&message, &forged).unwrap());
}

#[test]
fn test_deterministic_signing_with_pinned_rng() {
    let mut ring = Ring::new();
    ring.generate_with_rng(5, &mut StdRng::seed_from_u64(99)).unwrap();
    let message = [5u8; 32];

    let a = ring
        .sign_with_rng(&ring.priv_keys[1], &message, 1, &mut StdRng::seed_from_u64(7))
        .unwrap();
    let b = ring
        .sign_with_rng(&ring.priv_keys[1], &message, 1, &mut StdRng::seed_from_u64(7))
        .unwrap();

    assert_eq!(a, b);
    assert!(ring.verify(&message, &a).unwrap());
}

#[test]
fn test_ring_hash_pins_member_order() {
    let mut ring = Ring::new();
    ring.generate(5).unwrap();
    let message = [8u8; 32];

    let signature = ring.sign(&ring.priv_keys[0], &message, 0).unwrap();

    // Reordering the ring invalidates existing signatures even though the
    // member set is unchanged.
    let mut reordered = ring.clone();
    reordered.pub_keys.swap(1, 2);
    assert_ne!(reordered.public_keys_hashed(), ring.public_keys_hashed());
    assert!(!reordered.verify(&message, &signature).unwrap());
}

#[test]
fn test_flipping_any_pub_key_bit_fails_verification() {
    let mut ring = Ring::new();
    ring.generate(3).unwrap();
    let message = [9u8; 32];

    let signature = ring.sign(&ring.priv_keys[1], &message, 1).unwrap();

    let mut tampered = ring.clone();
    let replacement = KeyPair::generate().unwrap();
    tampered.pub_keys[2] = replacement.public;
    assert!(!tampered.verify(&message, &signature).unwrap());
}
