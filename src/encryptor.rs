// src/encryptor.rs

//! Encryption orchestrators.
//!
//! Pipeline: parse hex key → import → fresh random IV → CBC encrypt →
//! pack `IV ‖ ciphertext`. Each call owns its key, IV, and buffers; there
//! is no shared state, so independent calls may run concurrently.

use crate::cipher::{encrypt_blocks, Iv};
use crate::consts::ENCRYPTED_SUFFIX;
use crate::container;
use crate::error::AescbcError;
use crate::key::SymmetricKey;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Encrypt a plaintext buffer into a container under the hex-encoded key.
///
/// # Errors
///
/// Returns [`AescbcError::Format`] or [`AescbcError::KeyImport`] for a bad
/// key string and [`AescbcError::Cipher`] if the IV cannot be drawn.
pub fn encrypt_bytes(plaintext: &[u8], key_hex: &str) -> Result<Vec<u8>, AescbcError> {
    let key = SymmetricKey::from_hex(key_hex)?;
    let iv = Iv::random()?;
    let ciphertext = encrypt_blocks(&key, &iv, plaintext);
    Ok(container::pack(&iv, &ciphertext))
}

/// Encrypt everything readable from `input` and write the container to
/// `output`.
///
/// The input is buffered in full: the container format is whole-message
/// CBC, so nothing is written until encryption has succeeded.
///
/// # Errors
///
/// As [`encrypt_bytes`], plus [`AescbcError::Io`] for read/write failures.
pub fn encrypt<R, W>(mut input: R, mut output: W, key_hex: &str) -> Result<(), AescbcError>
where
    R: Read,
    W: Write,
{
    let mut plaintext = Vec::new();
    input.read_to_end(&mut plaintext)?;

    let sealed = encrypt_bytes(&plaintext, key_hex)?;
    output.write_all(&sealed)?;
    Ok(())
}

/// Encrypt the file at `path`, writing `<original-name>.encrypted` next to
/// it and returning the output path.
///
/// # Errors
///
/// As [`encrypt`]; the output file is not created if any earlier stage fails.
pub fn encrypt_path(path: &Path, key_hex: &str) -> Result<PathBuf, AescbcError> {
    let plaintext = fs::read(path)?;
    let sealed = encrypt_bytes(&plaintext, key_hex)?;

    let output_path = suffixed_path(path, ENCRYPTED_SUFFIX);
    fs::write(&output_path, sealed)?;
    Ok(output_path)
}

/// `<path>` + suffix, keeping the original extension ("notes.txt" →
/// "notes.txt.encrypted").
pub(crate) fn suffixed_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
