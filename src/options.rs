/// Default fixed-point scale (10^7).
///
/// Weights of trained layers typically live in [-1, 1]; at this scale the
/// embedding perturbs a weight by at most 10^-7, well below training noise.
pub const DEFAULT_SCALE: u32 = 10_000_000;

/// Options for fixed-point LSB weight encoding.
///
/// Both sides of a round trip must agree on `scale` and `checksum`; neither is
/// self-describing in the carrier. Extracting with a different scale or
/// checksum setting than was used for hiding is an incompatible configuration
/// and yields garbage (or a checksum mismatch), not an error the engine can
/// name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Fixed-point scale applied before the LSB parity check.
    /// Must be a positive integer.
    pub scale: u32,

    /// If true a CRC-32 of the payload is appended before embedding and
    /// verified on extraction.
    pub checksum: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            checksum: true,
        }
    }
}

impl CodecOptions {
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_checksum(mut self, checksum: bool) -> Self {
        self.checksum = checksum;
        self
    }

    /// Bytes of overhead the checksum layer adds to every payload.
    pub(crate) fn checksum_overhead(&self) -> usize {
        if self.checksum {
            crate::integrity::CHECKSUM_LEN
        } else {
            0
        }
    }
}
