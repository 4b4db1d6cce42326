//! Optional CRC-32 integrity layer.
//!
//! The checksum is appended to the payload before bit packing, so it rides
//! through the carrier like any other payload byte. On extraction a mismatch
//! almost always means a corrupted carrier or a wrong key; either way no
//! partial data is returned.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Result, SynapseError};

/// Length of the appended CRC-32 in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Append the CRC-32 (IEEE) of `payload`, little-endian.
pub fn seal(payload: &[u8]) -> Vec<u8> {
    let mut sealed = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    sealed.extend_from_slice(payload);

    let mut crc = [0u8; CHECKSUM_LEN];
    LittleEndian::write_u32(&mut crc, crc32fast::hash(payload));
    sealed.extend_from_slice(&crc);

    sealed
}

/// Verify the checksum over the first `payload_len` bytes of `sealed`.
///
/// Returns the payload slice on success. Fails with
/// [`SynapseError::ChecksumMismatch`] when stored and recomputed CRC differ,
/// or [`SynapseError::TruncatedPayload`] when `sealed` cannot even contain
/// `payload_len` bytes plus the checksum word.
pub fn verify(sealed: &[u8], payload_len: usize) -> Result<&[u8]> {
    if sealed.len() < payload_len.saturating_add(CHECKSUM_LEN) {
        return Err(SynapseError::TruncatedPayload {
            len: sealed.len(),
            expected: payload_len,
        });
    }

    let payload = &sealed[..payload_len];
    let stored = LittleEndian::read_u32(&sealed[payload_len..payload_len + CHECKSUM_LEN]);
    let computed = crc32fast::hash(payload);
    if stored != computed {
        return Err(SynapseError::ChecksumMismatch { stored, computed });
    }

    Ok(payload)
}
