//! Decoder - recovers a payload from encoded float weights.
//!
//! The decoder rebuilds the same permutation from the key, reads the
//! fixed-point LSB of each selected weight, reassembles the bytes and, when
//! the checksum layer is enabled, verifies the trailing CRC-32 before handing
//! anything back.

use crate::error::{Result, SynapseError};
use crate::fixed_point::FixedPointCodec;
use crate::options::CodecOptions;
use crate::permutation::Permutation;
use crate::{bits, integrity, seed};

/// Decoder for extracting payload bytes from a weight tensor.
///
/// Stateless, like the encoder. Extraction with a wrong key does not fail by
/// itself: it deterministically reads different weight positions and yields
/// unrelated bytes. With the checksum layer enabled that almost certainly
/// surfaces as [`SynapseError::ChecksumMismatch`]; without it the garbage is
/// returned as-is, which callers must treat as a known pitfall of the scheme.
#[derive(Debug, Default)]
pub struct SynapseDecoder {
    options: CodecOptions,
}

impl SynapseDecoder {
    /// Create a decoder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with explicit options.
    ///
    /// Must match the options used for hiding; a differing scale or checksum
    /// setting is an incompatible configuration the engine cannot detect.
    pub fn with_options(options: CodecOptions) -> Self {
        SynapseDecoder { options }
    }

    /// Extract `payload_len` payload bytes from `carrier`.
    ///
    /// `payload_len` is the original payload size declared by the caller; the
    /// checksum word, when enabled, is read on top of it and stripped before
    /// returning.
    pub fn extract(
        &self,
        carrier: &[f64],
        payload_len: usize,
        key: impl AsRef<[u8]>,
    ) -> Result<Vec<u8>> {
        if self.options.scale == 0 {
            return Err(SynapseError::InvalidScale);
        }

        // saturating: an absurd caller-supplied length must fail the capacity
        // check instead of wrapping past it
        let bit_count = payload_len
            .saturating_add(self.options.checksum_overhead())
            .saturating_mul(8);
        if bit_count > carrier.len() {
            return Err(SynapseError::CapacityExceeded {
                required: bit_count,
                available: carrier.len(),
            });
        }

        let seed = seed::derive_seed(key.as_ref());
        let permutation = Permutation::from_seed(seed, carrier.len());
        let codec = FixedPointCodec::new(self.options.scale);

        log::debug!(
            "extracting {} bits from {} weights (checksum: {})",
            bit_count,
            carrier.len(),
            self.options.checksum
        );

        let payload_bits: Vec<bool> = permutation
            .select(bit_count)
            .iter()
            .map(|&idx| codec.extract(carrier[idx]))
            .collect();
        let data = bits::from_bits(&payload_bits)?;

        if self.options.checksum {
            integrity::verify(&data, payload_len).map(<[u8]>::to_vec)
        } else {
            Ok(data)
        }
    }
}
