//! PKCS#7 padding removal.
//!
//! The cipher context is always run with OpenSSL's own padding disabled so that a bad final block
//! can be reported as a [`PaddingError`] (rather than an opaque `ErrorStack`) and so that the
//! lenient compatibility mode has something to relax.

/// How strictly the trailing padding of a decrypted buffer is checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Padding {
    /// The last byte `p` must be in `1..=block_size` and the last `p` bytes must all equal `p`.
    Strict,
    /// Only the range of the last byte is checked. Matches what the router firmware tooling has
    /// always accepted, which never looked at the padding content.
    Lenient,
}

impl Default for Padding {
    fn default() -> Self {
        Padding::Strict
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PaddingError {
    #[error("no final block to remove padding from")]
    Empty,

    #[error("final byte {0:#04x} is not a valid padding length")]
    OutOfRange(u8),

    #[error("expected padding byte {expected:#04x} at offset {position}, found {found:#04x}")]
    Inconsistent {
        expected: u8,
        position: usize,
        found: u8,
    },
}

/// Strips PKCS#7 padding from `buf` in place, returning the number of bytes removed.
///
/// `buf` is left untouched on error.
pub fn strip(buf: &mut Vec<u8>, block_size: usize, mode: Padding) -> Result<usize, PaddingError> {
    let pad = *buf.last().ok_or(PaddingError::Empty)?;
    let pad_len = pad as usize;
    if pad_len == 0 || pad_len > block_size || pad_len > buf.len() {
        return Err(PaddingError::OutOfRange(pad));
    }

    let start = buf.len() - pad_len;
    if mode == Padding::Strict {
        if let Some(offset) = buf[start..].iter().position(|&b| b != pad) {
            return Err(PaddingError::Inconsistent {
                expected: pad,
                position: start + offset,
                found: buf[start + offset],
            });
        }
    }

    buf.truncate(start);
    Ok(pad_len)
}
