// src/batch_ops.rs

//! Parallel batch encryption/decryption (feature `batch-ops`).
//!
//! Each element is one independent encrypt/decrypt call with its own key
//! handle, IV, and buffers, so the batch needs no coordination beyond the
//! rayon fan-out. The first failing element aborts the batch.

use rayon::prelude::*;
use std::io::{Read, Write};

use crate::{decrypt, encrypt, AescbcError};

/// Encrypt every `(source, destination)` pair in parallel under one key.
///
/// Every element still draws its own fresh IV, so identical sources produce
/// distinct containers.
///
/// # Errors
///
/// The first error from any element, as [`encrypt`].
pub fn encrypt_batch<R, W>(batch: &mut [(R, W)], key_hex: &str) -> Result<(), AescbcError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| encrypt(src, dst, key_hex))
}

/// Decrypt every `(source, destination)` pair in parallel under one key.
///
/// # Errors
///
/// The first error from any element, as [`decrypt`].
pub fn decrypt_batch<R, W>(batch: &mut [(R, W)], key_hex: &str) -> Result<(), AescbcError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| decrypt(src, dst, key_hex))
}
