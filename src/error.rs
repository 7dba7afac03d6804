//! The error type shared by every stage of the decode pipeline.

use openssl::error::ErrorStack;

pub use crate::padding::PaddingError;

/// Every way decoding or decrypting a stored secret can fail. Each variant names the stage it
/// came from, so the `Display` output is usable as-is for a one-line diagnostic.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("base64 decoding failed: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("ciphertext length {len} is not a positive multiple of the {block_size}-byte block size")]
    Length { len: usize, block_size: usize },

    #[error("key derivation produced {key_len} key bytes and {iv_len} iv bytes, expected {expected_key} and {expected_iv}")]
    KeyDerivation {
        key_len: usize,
        iv_len: usize,
        expected_key: usize,
        expected_iv: usize,
    },

    #[error("key derivation failed: {0}")]
    Digest(#[source] ErrorStack),

    #[error("cannot initialize the cipher: {0}")]
    CipherInit(#[source] ErrorStack),

    #[error("cipher operation failed: {0}")]
    Cipher(#[source] ErrorStack),

    #[error("invalid padding: {0}")]
    Padding(#[from] PaddingError),
}

pub type Result<T> = std::result::Result<T, Error>;
