//! Error types for weight steganography operations.

use std::fmt;
use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, SynapseError>;

/// Errors that can occur during hiding/extraction.
#[derive(Error)]
pub enum SynapseError {
    /// Payload needs more bit slots than the carrier provides.
    #[error("capacity exceeded: payload requires {required} bits but carrier holds only {available}")]
    CapacityExceeded { required: usize, available: usize },

    /// Bit sequence length is not byte aligned during unpacking.
    #[error("bit stream length {len} is not a multiple of 8")]
    MalformedBitStream { len: usize },

    /// Stored CRC-32 does not match the recomputed one (corrupted carrier or wrong key).
    #[error("checksum mismatch: stored {stored:#010x}, computed {computed:#010x}")]
    ChecksumMismatch { stored: u32, computed: u32 },

    /// Sealed payload is too short to contain the declared payload plus its checksum.
    #[error("sealed payload of {len} bytes is too short for {expected} payload bytes plus checksum")]
    TruncatedPayload { len: usize, expected: usize },

    /// The fixed-point scale must be a positive integer.
    #[error("fixed-point scale must be a positive integer")]
    InvalidScale,

    /// API builder was executed without a carrier.
    #[error("API Error: Missing carrier")]
    MissingCarrier,

    /// API builder was executed without a payload (hide) or payload size (unveil).
    #[error("API Error: Missing payload")]
    MissingPayload,

    /// API builder was executed without a key.
    #[error("API Error: Missing key")]
    MissingKey,

    /// I/O error during bit operations.
    #[error("bit I/O error: {0}")]
    BitIo(#[from] std::io::Error),
}

impl fmt::Debug for SynapseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Use Display for Debug so unwrap() shows user-friendly messages
        write!(f, "{self}")
    }
}
