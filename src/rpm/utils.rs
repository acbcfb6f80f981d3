//! Low-level byte decoding utilities

use crate::rpm::error::{Result, RpmError};

/// Decode a big-endian unsigned integer from a byte slice.
///
/// Used throughout the RPM format for tag, count, and size fields.
/// The slice length selects the integer width (1, 2, 4, or 8 bytes).
pub fn decode_be(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8, "integer field wider than 8 bytes");
    bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Decode a little-endian unsigned integer from a byte slice.
///
/// The RPM wire format is big-endian throughout; this is the mirror
/// decoder, equivalent to [`decode_be`] over the reversed slice.
pub fn decode_le(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8, "integer field wider than 8 bytes");
    bytes.iter().rev().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Compare already-read bytes against an expected magic number.
///
/// Only the first `expected.len()` bytes of `actual` take part in the
/// comparison. On mismatch, returns [`RpmError::BadMagic`] carrying the
/// `section` label and the observed bytes as uppercase hex, so the
/// diagnostic needs no second read of the stream.
pub fn check_magic(actual: &[u8], expected: &[u8], section: &'static str) -> Result<()> {
    let actual = &actual[..expected.len()];
    if actual == expected {
        Ok(())
    } else {
        Err(RpmError::BadMagic {
            section,
            actual_hex: hex::encode_upper(actual),
        })
    }
}
