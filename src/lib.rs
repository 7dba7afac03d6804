//! The `zycrypt` crate reverses the obfuscation ZyXEL VMG3925-series routers apply to secrets in
//! their configuration files (values written as `_encrypt_<base64>`).
//!
//! A stored value is decoded in two stages:
//!
//! * [`encoding::decode`]: the text after the `_encrypt_` marker is standard, padded base64 and
//! decodes to raw AES-256-CBC ciphertext.
//! * [`decrypt`]: the AES key and IV are derived from a passphrase baked into the firmware with
//! OpenSSL's legacy `EVP_BytesToKey` ([`kdf`]), the ciphertext is decrypted ([`symm`]) and the
//! PKCS#7 padding is validated and removed ([`padding`]).
//!
//! [`decrypt_text`] runs the whole pipeline on a value as found in a configuration dump, and
//! [`encrypt_text`] produces a value the firmware will accept back.
//!
//! The salt, passphrase and iteration count are fixed by the firmware and are bundled in
//! [`Scheme::FIRMWARE`]; nothing is cached between calls and every function here is safe to call
//! from multiple threads at once.

pub mod encoding;
pub mod error;
pub mod kdf;
pub mod padding;
pub mod symm;

/// Re-exported so callers inspecting the cipher do not need their own `openssl` dependency.
pub use openssl::symm::Cipher;

pub use error::{Error, Result};
pub use kdf::DerivedKeys;
pub use padding::{Padding, PaddingError};

/// Salt the firmware feeds to `EVP_BytesToKey`.
pub const SALT: [u8; 8] = [0x00, 0x00, 0x30, 0x39, 0x00, 0x00, 0xD4, 0x31];

/// Passphrase the firmware feeds to `EVP_BytesToKey`. Not the AES key itself.
pub const PASSPHRASE: &[u8] = b"ThiSISEncryptioNKeY";

/// SHA-1 rounds per digest block.
pub const ITERATIONS: i32 = 5;

/// Inputs to the key derivation. The firmware's values are in [`Scheme::FIRMWARE`]; other values
/// only exist for experimenting with related firmware.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheme<'a> {
    pub passphrase: &'a [u8],
    pub salt: [u8; 8],
    pub iterations: i32,
}

impl Scheme<'static> {
    pub const FIRMWARE: Scheme<'static> = Scheme {
        passphrase: PASSPHRASE,
        salt: SALT,
        iterations: ITERATIONS,
    };
}

impl<'a> Scheme<'a> {
    /// The firmware scheme with a different passphrase.
    pub fn with_passphrase(passphrase: &'a [u8]) -> Self {
        Scheme {
            passphrase,
            salt: SALT,
            iterations: ITERATIONS,
        }
    }

    pub fn derive_keys(&self) -> Result<DerivedKeys> {
        kdf::derive(self.passphrase, &self.salt, self.iterations)
    }

    /// Derives fresh keys and decrypts `ciphertext`. No plaintext is returned unless every stage
    /// succeeds.
    pub fn decrypt(&self, ciphertext: &[u8], mode: Padding) -> Result<Vec<u8>> {
        let keys = self.derive_keys()?;
        symm::decrypt(ciphertext, &keys, mode)
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let keys = self.derive_keys()?;
        symm::encrypt(plaintext, &keys)
    }
}

impl Default for Scheme<'static> {
    fn default() -> Self {
        Scheme::FIRMWARE
    }
}

/// Decrypts raw `ciphertext` with a key derived from `passphrase` and the firmware salt, checking
/// the padding strictly.
pub fn decrypt(ciphertext: &[u8], passphrase: &[u8]) -> Result<Vec<u8>> {
    Scheme::with_passphrase(passphrase).decrypt(ciphertext, Padding::Strict)
}

/// Inverse of [`decrypt`].
pub fn encrypt(plaintext: &[u8], passphrase: &[u8]) -> Result<Vec<u8>> {
    Scheme::with_passphrase(passphrase).encrypt(plaintext)
}

/// Decodes and decrypts a stored value with the firmware passphrase. `_encrypt_` markers and
/// surrounding whitespace are tolerated.
pub fn decrypt_text(text: &str) -> Result<Vec<u8>> {
    decrypt_text_with(text, Padding::Strict)
}

/// [`decrypt_text`] with an explicit padding mode.
pub fn decrypt_text_with(text: &str, mode: Padding) -> Result<Vec<u8>> {
    let ciphertext = encoding::decode(encoding::strip_markers(text))?;
    Scheme::FIRMWARE.decrypt(&ciphertext, mode)
}

/// Encrypts `plaintext` with the firmware passphrase and encodes it. The result carries no
/// `_encrypt_` marker.
pub fn encrypt_text(plaintext: &[u8]) -> Result<String> {
    let ciphertext = Scheme::FIRMWARE.encrypt(plaintext)?;
    Ok(encoding::encode(&ciphertext))
}
