//! AES-256-CBC over whole in-memory buffers.

use log::debug;
use openssl::symm::{Cipher, Crypter, Mode};

use crate::error::{Error, Result};
use crate::kdf::DerivedKeys;
use crate::padding::{self, Padding};

/// AES block size, in bytes.
pub const BLOCK_SIZE: usize = 16;

/// One-shot cipher context. Consumed by [`Transform::run`], so a context is never reused across
/// buffers.
struct Transform {
    cipher: Cipher,
    crypter: Crypter,
}

impl Transform {
    fn new(mode: Mode, keys: &DerivedKeys, pad: bool) -> Result<Self> {
        let cipher = Cipher::aes_256_cbc();
        debug_assert_eq!(cipher.block_size(), BLOCK_SIZE);

        let mut crypter =
            Crypter::new(cipher, mode, &keys.key, Some(&keys.iv[..])).map_err(Error::CipherInit)?;
        crypter.pad(pad);

        Ok(Self { cipher, crypter })
    }

    fn run(mut self, input: &[u8]) -> Result<Vec<u8>> {
        // Crypter::update() requires the output buffer to be at least `input.len() + block_size`
        // in length, which also leaves finalize() the full block it asks for.
        let mut output = vec![0u8; input.len() + self.cipher.block_size()];

        let mut written = self
            .crypter
            .update(input, &mut output)
            .map_err(Error::Cipher)?;
        written += self
            .crypter
            .finalize(&mut output[written..])
            .map_err(Error::Cipher)?;

        output.truncate(written);
        Ok(output)
    }
}

/// Decrypts a block-aligned `ciphertext` and removes its PKCS#7 padding.
///
/// The length is checked before a cipher context is created. OpenSSL's own padding handling is
/// disabled; padding is checked by [`padding::strip`] according to `mode`.
pub fn decrypt(ciphertext: &[u8], keys: &DerivedKeys, mode: Padding) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(Error::Length {
            len: ciphertext.len(),
            block_size: BLOCK_SIZE,
        });
    }

    let mut plaintext = Transform::new(Mode::Decrypt, keys, false)?.run(ciphertext)?;
    debug_assert_eq!(plaintext.len(), ciphertext.len());

    let removed = padding::strip(&mut plaintext, BLOCK_SIZE, mode)?;
    debug!(
        "decrypted {} blocks, removed {} padding bytes",
        ciphertext.len() / BLOCK_SIZE,
        removed
    );

    Ok(plaintext)
}

/// Encrypts `plaintext`, appending PKCS#7 padding. The output is always a whole number of blocks
/// and at least one block long.
pub fn encrypt(plaintext: &[u8], keys: &DerivedKeys) -> Result<Vec<u8>> {
    let ciphertext = Transform::new(Mode::Encrypt, keys, true)?.run(plaintext)?;
    debug!(
        "encrypted {} bytes into {} blocks",
        plaintext.len(),
        ciphertext.len() / BLOCK_SIZE
    );
    Ok(ciphertext)
}
