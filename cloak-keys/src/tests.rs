//! Integration tests for the cloak-keys crate.

use crate::*;
use cloak_curve::{CurvePoint, KeyPair};

#[test]
fn test_counterpart_sessions_mirror_each_other() {
    let alice = KeyPair::generate().unwrap();
    let bob = KeyPair::generate().unwrap();

    let alice_session = StealthSession::new(&alice.secret, &bob.public, 5, 4).unwrap();
    let bob_session = StealthSession::new(&bob.secret, &alice.public, 5, 4).unwrap();

    // ECDH gives both sides the same shared secret.
    assert_eq!(alice_session.shared_secret, bob_session.shared_secret);

    // The addresses Alice derives for Bob are exactly the ones Bob can
    // spend, and vice versa.
    for (theirs, mine) in alice_session
        .their_addresses
        .iter()
        .zip(&bob_session.my_addresses)
    {
        assert_eq!(theirs.public, mine.public);
        assert_eq!(theirs.nonce, mine.nonce);
    }
    for (theirs, mine) in bob_session
        .their_addresses
        .iter()
        .zip(&alice_session.my_addresses)
    {
        assert_eq!(theirs.public, mine.public);
    }
}

#[test]
fn test_every_spending_key_unlocks_its_address() {
    let alice = KeyPair::generate().unwrap();
    let bob = KeyPair::generate().unwrap();

    let session = StealthSession::new(&alice.secret, &bob.public, 10, 3).unwrap();
    for address in &session.my_addresses {
        assert!(address.private.is_valid_secret());
        assert_eq!(CurvePoint::generator_mul(&address.private), address.public);
    }
}

#[test]
fn test_distinct_nonces_distinct_addresses() {
    let alice = KeyPair::generate().unwrap();
    let bob = KeyPair::generate().unwrap();

    let session = StealthSession::new(&alice.secret, &bob.public, 0, 8).unwrap();
    for i in 0..session.their_addresses.len() {
        for j in (i + 1)..session.their_addresses.len() {
            assert_ne!(
                session.their_addresses[i].public,
                session.their_addresses[j].public
            );
            assert_ne!(
                session.my_addresses[i].public,
                session.my_addresses[j].public
            );
        }
    }
}

#[test]
fn test_session_json_roundtrip() {
    let alice = KeyPair::generate().unwrap();
    let bob = KeyPair::generate().unwrap();

    let session = StealthSession::new(&alice.secret, &bob.public, 3, 2).unwrap();
    let json = serde_json::to_string(&session).unwrap();
    let back: StealthSession = serde_json::from_str(&json).unwrap();
    assert_eq!(session, back);
}

#[test]
fn test_session_json_layout() {
    let alice = KeyPair::generate().unwrap();
    let bob = KeyPair::generate().unwrap();

    let session = StealthSession::new(&alice.secret, &bob.public, 0, 1).unwrap();
    let json = serde_json::to_value(&session).unwrap();

    assert!(json["myPublic"].is_string());
    assert!(json["theirPublic"].is_string());
    assert_eq!(json["sharedSecret"].as_str().unwrap().len(), 64);
    assert_eq!(json["theirStealthAddresses"].as_array().unwrap().len(), 1);
    assert!(json["myStealthAddresses"][0]["private"].is_string());
}
