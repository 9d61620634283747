// src/key.rs

//! Symmetric key lifecycle: generation, raw import/export, hex import/export.
//!
//! A [`SymmetricKey`] is an opaque 128-bit value scoped to one encrypt or
//! decrypt call. It is never persisted by this crate; the 32-character
//! lowercase hex string produced by [`SymmetricKey::to_hex`] is its only
//! external form. Key material is zeroized when the handle is dropped.

use crate::consts::{KEY_HEX_LEN, KEY_SIZE};
use crate::error::AescbcError;
use crate::hex::{bytes_to_hex, hex_to_bytes};
use rand::rngs::OsRng;
use rand::TryRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Opaque handle to 128-bit AES key material.
///
/// Usable only through the cipher engine's encrypt/decrypt entry points.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey([u8; KEY_SIZE]);

impl SymmetricKey {
    /// Generate a fresh random key from the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`AescbcError::KeyGeneration`] if the OS random facility is
    /// unavailable or refuses to produce bytes.
    pub fn generate() -> Result<Self, AescbcError> {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| AescbcError::KeyGeneration(format!("OS RNG unavailable: {e}")))?;
        Ok(Self(bytes))
    }

    /// Construct a key handle from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AescbcError::KeyImport`] unless `raw` is exactly
    /// [`KEY_SIZE`] (16) bytes.
    pub fn import(raw: &[u8]) -> Result<Self, AescbcError> {
        let bytes: [u8; KEY_SIZE] = raw.try_into().map_err(|_| {
            AescbcError::KeyImport(format!(
                "key material must be exactly {KEY_SIZE} bytes, got {}",
                raw.len()
            ))
        })?;
        Ok(Self(bytes))
    }

    /// Export the key to raw bytes (always exactly 16).
    ///
    /// # Errors
    ///
    /// In-memory keys are always exportable; [`AescbcError::KeyExport`] is
    /// reserved for backends with non-extractable handles.
    pub fn export(&self) -> Result<[u8; KEY_SIZE], AescbcError> {
        Ok(self.0)
    }

    /// Parse a key from its 32-character hex representation.
    ///
    /// # Errors
    ///
    /// Returns [`AescbcError::Format`] for malformed hex and
    /// [`AescbcError::KeyImport`] for valid hex of the wrong length.
    pub fn from_hex(key_hex: &str) -> Result<Self, AescbcError> {
        let raw = hex_to_bytes(key_hex)?;
        Self::import(&raw)
    }

    /// Render the key as its canonical lowercase hex string.
    ///
    /// Output length is always [`KEY_HEX_LEN`] (32) characters.
    pub fn to_hex(&self) -> String {
        debug_assert_eq!(bytes_to_hex(&self.0).len(), KEY_HEX_LEN);
        bytes_to_hex(&self.0)
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

// Key material never appears in debug output.
impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SymmetricKey(..)")
    }
}
