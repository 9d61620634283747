//! tests/hex_tests.rs
//! Hex codec laws over the public API

use aescbc_rs::hex::{bytes_to_hex, hex_to_bytes};
use aescbc_rs::AescbcError;

#[test]
fn round_trip_bytes_to_hex_to_bytes() {
    let cases: Vec<Vec<u8>> = vec![
        vec![],
        vec![0x00],
        vec![0x0a],
        vec![0xff; 16],
        (0..=255).collect(),
        (0..1000).map(|i| (i * 7 % 256) as u8).collect(),
    ];

    for bytes in cases {
        let hex = bytes_to_hex(&bytes);
        assert_eq!(hex.len(), bytes.len() * 2);
        assert_eq!(hex_to_bytes(&hex).unwrap(), bytes);
    }
}

#[test]
fn round_trip_hex_to_bytes_to_hex_lowercases() {
    for s in ["", "00", "DEADbeef", "0A0b0C0d", "ffffffffffffffff"] {
        let bytes = hex_to_bytes(s).unwrap();
        assert_eq!(bytes_to_hex(&bytes), s.to_lowercase());
    }
}

#[test]
fn every_byte_renders_as_two_digits() {
    for b in 0..=255u8 {
        let hex = bytes_to_hex(&[b]);
        assert_eq!(hex.len(), 2, "byte {b} rendered as {hex:?}");
    }
}

#[test]
fn malformed_inputs_fail_with_format_error() {
    for bad in ["a", "abc", "zz11", "0g", "12 34", "0x12"] {
        let err = hex_to_bytes(bad).unwrap_err();
        assert!(matches!(err, AescbcError::Format(_)), "{bad:?}: {err:?}");
    }
}
