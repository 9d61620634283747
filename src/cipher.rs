// src/cipher.rs

//! AES-128-CBC transform with PKCS#7 padding.
//!
//! Thin wrapper over the RustCrypto `aes`/`cbc` primitives; this module owns
//! the mode and parameter contract (128-bit key, 16-byte IV, PKCS#7), not
//! the cipher arithmetic. Fixed-size key and IV types make bad parameter
//! lengths unrepresentable, so encryption is total; all remaining failure
//! modes live on the decrypt path.

use crate::consts::{BLOCK_SIZE, IV_SIZE};
use crate::error::AescbcError;
use crate::key::SymmetricKey;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::TryRngCore;

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// 16-byte CBC initialization vector.
///
/// Drawn fresh from the OS CSPRNG for every encryption ([`Iv::random`]) and
/// recovered — never regenerated — from the container front on decryption.
/// Reusing an IV under the same key breaks the confidentiality of the mode,
/// so no constructor for a caller-chosen IV is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iv([u8; IV_SIZE]);

impl Iv {
    /// Draw a fresh random IV from the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`AescbcError::Cipher`] if the OS random facility refuses;
    /// the encryption stage cannot proceed without a fresh IV.
    pub fn random() -> Result<Self, AescbcError> {
        let mut bytes = [0u8; IV_SIZE];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| AescbcError::Cipher(format!("IV generation failed: {e}")))?;
        Ok(Self(bytes))
    }

    pub(crate) fn from_bytes(bytes: [u8; IV_SIZE]) -> Self {
        Self(bytes)
    }

    /// The raw IV bytes, as written to the container front.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; IV_SIZE] {
        &self.0
    }
}

/// Encrypt `plaintext` with AES-128-CBC under `key` and `iv`.
///
/// The plaintext is PKCS#7-padded, so the ciphertext is the plaintext length
/// rounded up to the next multiple of [`BLOCK_SIZE`] — plus one full block
/// when the plaintext is empty or already block-aligned. Deterministic for
/// identical `(key, iv, plaintext)`; the orchestrator guarantees a `(key,
/// iv)` pair is never reused by drawing a fresh IV per call.
#[must_use]
pub fn encrypt_blocks(key: &SymmetricKey, iv: &Iv, plaintext: &[u8]) -> Vec<u8> {
    Aes128CbcEnc::new(key.as_bytes().into(), iv.as_bytes().into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Decrypt `ciphertext` with AES-128-CBC under `key` and `iv`, validating
/// and stripping the PKCS#7 padding.
///
/// # Errors
///
/// Returns [`AescbcError::Cipher`] if the ciphertext is empty or not a
/// multiple of [`BLOCK_SIZE`], or if padding validation fails. A wrong key
/// or corrupted ciphertext manifests as the latter — unauthenticated CBC
/// gives no separate "wrong key" signal, and none is invented here.
pub fn decrypt_blocks(
    key: &SymmetricKey,
    iv: &Iv,
    ciphertext: &[u8],
) -> Result<Vec<u8>, AescbcError> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(AescbcError::Cipher(format!(
            "ciphertext length {} is not a non-zero multiple of {BLOCK_SIZE}",
            ciphertext.len()
        )));
    }

    Aes128CbcDec::new(key.as_bytes().into(), iv.as_bytes().into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| {
            AescbcError::Cipher(
                "padding validation failed (wrong key or corrupted ciphertext)".into(),
            )
        })
}
