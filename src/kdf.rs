//! Legacy OpenSSL password-based key derivation (`EVP_BytesToKey`).
//!
//! The firmware derives its AES key and IV from a fixed passphrase and salt with SHA-1 and an
//! iteration count of 5. Key and IV come out of the same digest stream: the key is the first 32
//! bytes and the IV the 16 bytes that follow. This is far too weak for anything new and exists
//! only to stay byte-compatible with devices in the field.

use log::debug;
use openssl::hash::MessageDigest;
use openssl::pkcs5::bytes_to_key;
use openssl::symm::Cipher;
use std::fmt;

use crate::error::{Error, Result};

pub const KEY_LEN: usize = 32;
pub const IV_LEN: usize = 16;

/// Key and IV for one decryption. Recomputed for every call and never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct DerivedKeys {
    pub key: [u8; KEY_LEN],
    pub iv: [u8; IV_LEN],
}

impl fmt::Debug for DerivedKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKeys").finish_non_exhaustive()
    }
}

/// Runs `EVP_BytesToKey` for AES-256-CBC with SHA-1 over `passphrase` and the 8-byte `salt`.
pub fn derive(passphrase: &[u8], salt: &[u8; 8], iterations: i32) -> Result<DerivedKeys> {
    let pair = bytes_to_key(
        Cipher::aes_256_cbc(),
        MessageDigest::sha1(),
        passphrase,
        Some(&salt[..]),
        iterations,
    )
    .map_err(Error::Digest)?;

    let iv = pair.iv.unwrap_or_default();
    if pair.key.len() != KEY_LEN || iv.len() != IV_LEN {
        return Err(Error::KeyDerivation {
            key_len: pair.key.len(),
            iv_len: iv.len(),
            expected_key: KEY_LEN,
            expected_iv: IV_LEN,
        });
    }

    let mut keys = DerivedKeys {
        key: [0u8; KEY_LEN],
        iv: [0u8; IV_LEN],
    };
    keys.key.copy_from_slice(&pair.key);
    keys.iv.copy_from_slice(&iv);
    debug!("derived aes-256-cbc key and iv ({} sha1 rounds)", iterations);

    Ok(keys)
}
