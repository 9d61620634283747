//! tests/batch_ops_tests.rs
//! Parallel batch operations (feature "batch-ops")

#![cfg(feature = "batch-ops")]

mod common;
use common::TEST_KEY_HEX;

use aescbc_rs::{decrypt_batch, encrypt_batch, AescbcError};
use std::io::Cursor;

#[test]
fn batch_roundtrip_preserves_every_element() {
    let inputs: Vec<Vec<u8>> = (0..8)
        .map(|i| vec![i as u8; 100 * (i + 1)])
        .collect();

    let mut encrypt_pairs: Vec<(Cursor<&[u8]>, Vec<u8>)> = inputs
        .iter()
        .map(|data| (Cursor::new(data.as_slice()), Vec::new()))
        .collect();
    encrypt_batch(&mut encrypt_pairs, TEST_KEY_HEX).unwrap();

    let sealed: Vec<Vec<u8>> = encrypt_pairs.into_iter().map(|(_, out)| out).collect();

    // One key, many elements — every element still gets its own IV
    for (i, a) in sealed.iter().enumerate() {
        for b in &sealed[i + 1..] {
            assert_ne!(a[..16], b[..16], "IVs must be distinct across the batch");
        }
    }

    let mut decrypt_pairs: Vec<(Cursor<&[u8]>, Vec<u8>)> = sealed
        .iter()
        .map(|data| (Cursor::new(data.as_slice()), Vec::new()))
        .collect();
    decrypt_batch(&mut decrypt_pairs, TEST_KEY_HEX).unwrap();

    for (recovered, original) in decrypt_pairs.iter().zip(&inputs) {
        assert_eq!(&recovered.1, original);
    }
}

#[test]
fn batch_surfaces_first_failure() {
    // Second element is a malformed container
    let good = aescbc_rs::encrypt_bytes(b"fine", TEST_KEY_HEX).unwrap();
    let bad = vec![0u8; 4];

    let mut pairs: Vec<(Cursor<&[u8]>, Vec<u8>)> = vec![
        (Cursor::new(good.as_slice()), Vec::new()),
        (Cursor::new(bad.as_slice()), Vec::new()),
    ];

    let err = decrypt_batch(&mut pairs, TEST_KEY_HEX).unwrap_err();
    assert!(matches!(err, AescbcError::Container(_)), "got {err:?}");
}
