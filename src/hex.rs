// src/hex.rs

//! Lowercase hex codec for raw byte sequences.
//!
//! The hex string is the only form in which a key leaves this crate: two
//! digits per byte, no separators, no prefix. Decoding accepts mixed case;
//! encoding always emits lowercase.

use crate::error::AescbcError;
use hex::FromHexError;

/// Encode bytes as a lowercase hex string, two digits per byte.
///
/// Byte value `10` renders as `"0a"`, never `"a"`. Total: never fails,
/// output length is exactly twice the input length.
#[inline]
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string into bytes, two digits per byte, in order.
///
/// Mixed case is accepted on input. Round-trip law:
/// `hex_to_bytes(&bytes_to_hex(b))? == b` for every byte sequence `b`.
///
/// # Errors
///
/// Returns [`AescbcError::Format`] if the input has odd length or contains
/// a character outside `[0-9a-fA-F]`.
pub fn hex_to_bytes(hex_str: &str) -> Result<Vec<u8>, AescbcError> {
    hex::decode(hex_str).map_err(|e| match e {
        FromHexError::OddLength => {
            AescbcError::Format("hex string has odd length".into())
        }
        FromHexError::InvalidHexCharacter { c, index } => AescbcError::Format(format!(
            "invalid hex digit {c:?} at position {index}"
        )),
        FromHexError::InvalidStringLength => {
            AescbcError::Format("invalid hex string length".into())
        }
    })
}
