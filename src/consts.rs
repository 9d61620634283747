//! # Constants
//!
//! This module defines the byte-layout constants shared by the key, cipher,
//! and container modules.

/// Key length in bytes (AES-128).
///
/// Raw key material is always exactly this long; import rejects anything else.
pub const KEY_SIZE: usize = 16;

/// Length of the hex-encoded key: two lowercase hex digits per key byte.
///
/// This 32-character string is the only external representation of a key.
pub const KEY_HEX_LEN: usize = 2 * KEY_SIZE;

/// Initialization vector length in bytes.
///
/// One IV is drawn fresh from the OS CSPRNG per encryption and stored as the
/// first [`IV_SIZE`] bytes of the container.
pub const IV_SIZE: usize = 16;

/// AES block size in bytes.
///
/// Ciphertext length is always a non-zero multiple of this; PKCS#7 padding
/// grows block-aligned (and empty) plaintext by one full block.
pub const BLOCK_SIZE: usize = 16;

/// Suffix appended to the source file name by [`crate::encrypt_path`].
pub const ENCRYPTED_SUFFIX: &str = ".encrypted";

/// Suffix appended to the source file name by [`crate::decrypt_path`].
pub const DECRYPTED_SUFFIX: &str = ".decrypted";
