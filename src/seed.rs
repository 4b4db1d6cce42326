//! Key to seed derivation.
//!
//! The permutation seed is the only thing the key is ever used for; the key
//! itself is never stored. Hashing makes the seed collision resistant, so
//! distinct keys select distinct carrier positions with overwhelming
//! probability.

use byteorder::{ByteOrder, LittleEndian};
use sha2::{Digest, Sha256};

/// Derive the permutation seed from a key.
///
/// The seed is the first 8 bytes of `SHA-256(key)` interpreted little-endian.
/// Pure and total: identical keys always yield identical seeds, and any byte
/// string is a valid key, including the empty one.
pub fn derive_seed(key: &[u8]) -> u64 {
    let digest = Sha256::digest(key);
    LittleEndian::read_u64(&digest[..8])
}
