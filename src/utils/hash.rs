//! Content fingerprints using blake3.
//!
//! # Usage
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let fp = hash::fingerprint(b"body {}", 6); // -> "a1b2c3"
//! ```

/// Compute the full blake3 digest as lowercase hex (64 chars).
#[inline]
pub fn digest_hex<T: AsRef<[u8]> + ?Sized>(data: &T) -> String {
    hex::encode(blake3::hash(data.as_ref()).as_bytes())
}

/// Compute a short fingerprint: the first `len` hex chars of the digest.
///
/// `len` is clamped to the digest length.
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(data: &T, len: usize) -> String {
    let mut hex = digest_hex(data);
    hex.truncate(len);
    hex
}
