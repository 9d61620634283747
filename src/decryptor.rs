// src/decryptor.rs

//! Decryption orchestrators.
//!
//! Pipeline: parse hex key → import → unpack `IV ‖ ciphertext` → CBC
//! decrypt with padding validation. The IV is recovered from the container
//! front, never regenerated.

use crate::cipher::decrypt_blocks;
use crate::consts::DECRYPTED_SUFFIX;
use crate::container;
use crate::encryptor::suffixed_path;
use crate::error::AescbcError;
use crate::key::SymmetricKey;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Decrypt a container back into plaintext under the hex-encoded key.
///
/// # Errors
///
/// Returns [`AescbcError::Format`] or [`AescbcError::KeyImport`] for a bad
/// key string, [`AescbcError::Container`] if the container is shorter than
/// one IV, and [`AescbcError::Cipher`] for unaligned ciphertext or failed
/// padding validation (the symptom of a wrong key or corrupted data).
pub fn decrypt_bytes(sealed: &[u8], key_hex: &str) -> Result<Vec<u8>, AescbcError> {
    let key = SymmetricKey::from_hex(key_hex)?;
    let (iv, ciphertext) = container::unpack(sealed)?;
    decrypt_blocks(&key, &iv, ciphertext)
}

/// Decrypt a full container read from `input` and write the plaintext to
/// `output`.
///
/// Nothing is written until decryption — padding validation included — has
/// succeeded.
///
/// # Errors
///
/// As [`decrypt_bytes`], plus [`AescbcError::Io`] for read/write failures.
pub fn decrypt<R, W>(mut input: R, mut output: W, key_hex: &str) -> Result<(), AescbcError>
where
    R: Read,
    W: Write,
{
    let mut sealed = Vec::new();
    input.read_to_end(&mut sealed)?;

    let plaintext = decrypt_bytes(&sealed, key_hex)?;
    output.write_all(&plaintext)?;
    Ok(())
}

/// Decrypt the file at `path`, writing `<original-name>.decrypted` next to
/// it and returning the output path.
///
/// # Errors
///
/// As [`decrypt`]; the output file is not created if any earlier stage fails.
pub fn decrypt_path(path: &Path, key_hex: &str) -> Result<PathBuf, AescbcError> {
    let sealed = fs::read(path)?;
    let plaintext = decrypt_bytes(&sealed, key_hex)?;

    let output_path = suffixed_path(path, DECRYPTED_SUFFIX);
    fs::write(&output_path, plaintext)?;
    Ok(output_path)
}
