// src/lib.rs

//! AES-128-CBC file encryption with an IV-prefixed container format.
//!
//! The output of encryption is a single self-describing byte sequence:
//!
//! ```text
//! IV (16 bytes) ‖ ciphertext (PKCS#7-padded, multiple of 16 bytes)
//! ```
//!
//! The key travels as a 32-character lowercase hex string and nothing else;
//! it is held in memory only for the duration of one call and zeroized on
//! drop.
//!
//! The format carries no authentication tag. A wrong key or corrupted
//! ciphertext surfaces as a padding-validation failure, not a distinct
//! "wrong key" signal. Callers that need integrity should layer
//! encrypt-then-MAC on top of the container.

#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod cipher;
pub mod consts;
pub mod container;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod hex;
pub mod key;

// High-level API — this is what 99% of users import
pub use decryptor::{decrypt, decrypt_bytes, decrypt_path};
pub use encryptor::{encrypt, encrypt_bytes, encrypt_path};
pub use error::AescbcError;

pub use cipher::Iv;
pub use key::SymmetricKey;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};
