// src/container.rs

//! The on-disk container layout: `IV (16 bytes) ‖ ciphertext`.
//!
//! There is no magic, no length field, no version marker, and no
//! authentication tag — the format is exactly "IV then ciphertext".
//! Integrity rests entirely on the cipher mode and out-of-band key secrecy.

use crate::cipher::Iv;
use crate::consts::IV_SIZE;
use crate::error::AescbcError;

/// Assemble a container from an IV and its ciphertext.
///
/// Plain concatenation; always succeeds.
#[must_use]
pub fn pack(iv: &Iv, ciphertext: &[u8]) -> Vec<u8> {
    let mut container = Vec::with_capacity(IV_SIZE + ciphertext.len());
    container.extend_from_slice(iv.as_bytes());
    container.extend_from_slice(ciphertext);
    container
}

/// Split a container back into its IV and ciphertext.
///
/// The IV is the first [`IV_SIZE`] bytes, the ciphertext everything after.
/// The ciphertext slice may be empty here; block alignment is the cipher
/// engine's contract, not the container's.
///
/// # Errors
///
/// Returns [`AescbcError::Container`] if `container` is shorter than one IV.
pub fn unpack(container: &[u8]) -> Result<(Iv, &[u8]), AescbcError> {
    if container.len() < IV_SIZE {
        return Err(AescbcError::Container(format!(
            "container of {} bytes is shorter than the {IV_SIZE}-byte IV",
            container.len()
        )));
    }

    let (iv_bytes, ciphertext) = container.split_at(IV_SIZE);
    let iv = Iv::from_bytes(iv_bytes.try_into().expect("split_at yields IV_SIZE bytes"));
    Ok((iv, ciphertext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack_round_trip() {
        let iv = Iv::from_bytes([7u8; IV_SIZE]);
        let ciphertext = [0xcd; 32];

        let container = pack(&iv, &ciphertext);
        assert_eq!(container.len(), IV_SIZE + ciphertext.len());

        let (recovered_iv, recovered_ct) = unpack(&container).unwrap();
        assert_eq!(recovered_iv, iv);
        assert_eq!(recovered_ct, ciphertext);
    }

    #[test]
    fn unpack_accepts_bare_iv() {
        let (iv, ciphertext) = unpack(&[1u8; IV_SIZE]).unwrap();
        assert_eq!(iv.as_bytes(), &[1u8; IV_SIZE]);
        assert!(ciphertext.is_empty());
    }

    #[test]
    fn unpack_rejects_short_container() {
        for len in [0usize, 1, 15] {
            let err = unpack(&vec![0u8; len]).unwrap_err();
            assert!(matches!(err, AescbcError::Container(_)), "len {len}: {err:?}");
        }
    }
}
