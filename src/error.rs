//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T, AescbcError>`](AescbcError).

use thiserror::Error;

/// The error type for all container encryption/decryption operations.
///
/// Every component fails fast: the first error aborts the call with no
/// partial output, and nothing is retried. Variants carry a human-readable
/// message naming the stage that failed; the orchestrators propagate them
/// unchanged in kind.
#[derive(Error, Debug)]
pub enum AescbcError {
    /// I/O error occurred during file or stream operations.
    ///
    /// This variant wraps [`std::io::Error`] and is automatically created
    /// when reading input or writing output fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed hex string: odd length or a non-hex digit.
    #[error("Hex format error: {0}")]
    Format(String),

    /// The OS secure random facility was unavailable or refused to
    /// produce key material.
    #[error("Key generation error: {0}")]
    KeyGeneration(String),

    /// Raw key material was rejected on import (wrong length).
    #[error("Key import error: {0}")]
    KeyImport(String),

    /// The key could not be exported to raw bytes.
    ///
    /// In-memory keys are always exportable, so this does not occur today;
    /// the variant keeps the taxonomy stable for backends with
    /// non-extractable key handles.
    #[error("Key export error: {0}")]
    KeyExport(String),

    /// Container shorter than one IV (16 bytes).
    #[error("Container format error: {0}")]
    Container(String),

    /// Cipher transform failed.
    ///
    /// On decrypt this covers ciphertext that is not block-aligned and
    /// padding validation failures. A mismatched key or corrupted
    /// ciphertext shows up here as bad padding — unauthenticated CBC has
    /// no distinct "wrong key" signal.
    #[error("Cipher error: {0}")]
    Cipher(String),
}
