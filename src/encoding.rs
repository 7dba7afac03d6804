//! Base64 handling for the stored value.
//!
//! The firmware writes standard-alphabet, padded base64 on a single line. Decoding is strict:
//! anything outside the alphabet, a missing or misplaced `=`, or an embedded newline is an error.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::debug;

use crate::error::Result;

/// Marker the firmware puts around encrypted values in its configuration files.
pub const MARKER: &str = "_encrypt_";

/// Decodes `text` into raw ciphertext bytes.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let bytes = STANDARD.decode(text)?;
    debug!("decoded {} base64 characters into {} bytes", text.len(), bytes.len());
    Ok(bytes)
}

/// Encodes `bytes` as a single line of padded standard base64.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Trims surrounding whitespace and removes a leading and/or trailing [`MARKER`], so values can be
/// pasted straight out of a configuration dump.
pub fn strip_markers(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix(MARKER).unwrap_or(text);
    text.strip_suffix(MARKER).unwrap_or(text)
}

/// Wraps an encoded value in the firmware's [`MARKER`].
pub fn add_marker(encoded: &str) -> String {
    format!("{}{}", MARKER, encoded)
}
