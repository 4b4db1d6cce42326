//! Encoder - hides a payload inside float weights.
//!
//! The encoder seals and packs the payload into bits, selects one weight per
//! bit through the key-seeded permutation, and adjusts the fixed-point LSB of
//! each selected weight. Everything else in the carrier stays bit-for-bit
//! identical.

use crate::error::{Result, SynapseError};
use crate::fixed_point::FixedPointCodec;
use crate::options::CodecOptions;
use crate::permutation::Permutation;
use crate::{bits, integrity, seed};

/// Encoder for embedding payload bytes into a weight tensor.
///
/// Stateless: every call to [`hide`](Self::hide) is a pure function of the
/// carrier, payload, key and options, so one encoder value can serve
/// concurrent calls.
///
/// # Note
///
/// The encoder does NOT encrypt. Payload bytes are embedded as provided;
/// confidentiality beyond the key-dependent bit placement is an outer-layer
/// concern.
#[derive(Debug, Default)]
pub struct SynapseEncoder {
    options: CodecOptions,
}

impl SynapseEncoder {
    /// Create an encoder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with explicit options.
    ///
    /// The same options must be used for extraction; scale and checksum are
    /// not self-describing in the carrier.
    pub fn with_options(options: CodecOptions) -> Self {
        SynapseEncoder { options }
    }

    /// Hide `payload` inside a copy of `carrier`.
    ///
    /// Returns the encoded carrier; the input is never mutated. Fails with
    /// [`SynapseError::CapacityExceeded`] before any embedding work when the
    /// payload (plus checksum, if enabled) needs more bits than the carrier
    /// has weights.
    pub fn hide(
        &self,
        carrier: &[f64],
        payload: &[u8],
        key: impl AsRef<[u8]>,
    ) -> Result<Vec<f64>> {
        if self.options.scale == 0 {
            return Err(SynapseError::InvalidScale);
        }

        let data = if self.options.checksum {
            integrity::seal(payload)
        } else {
            payload.to_vec()
        };
        let payload_bits = bits::to_bits(&data)?;

        if payload_bits.len() > carrier.len() {
            return Err(SynapseError::CapacityExceeded {
                required: payload_bits.len(),
                available: carrier.len(),
            });
        }

        let seed = seed::derive_seed(key.as_ref());
        let permutation = Permutation::from_seed(seed, carrier.len());
        let codec = FixedPointCodec::new(self.options.scale);

        log::debug!(
            "embedding {} bits into {} weights (checksum: {})",
            payload_bits.len(),
            carrier.len(),
            self.options.checksum
        );

        let mut encoded = carrier.to_vec();
        for (&bit, &idx) in payload_bits.iter().zip(permutation.select(payload_bits.len())) {
            encoded[idx] = codec.embed(encoded[idx], bit);
        }

        Ok(encoded)
    }

    /// Payload capacity in bytes for a carrier of `carrier_len` weights.
    ///
    /// One bit per weight, minus the checksum overhead when enabled.
    pub fn capacity(&self, carrier_len: usize) -> usize {
        (carrier_len / 8).saturating_sub(self.options.checksum_overhead())
    }
}
