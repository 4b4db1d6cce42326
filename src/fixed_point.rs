//! Fixed-point LSB codec for a single weight.
//!
//! A float carries one bit in the parity of its fixed-point representation:
//! `scaled = round(value * scale)` moves the weight into an integer domain
//! where the least significant bit is stable under the tiny perturbation the
//! embedding applies. `round` is Rust's `f64::round`, i.e. ties round half
//! away from zero.
//!
//! Parity of a negative `scaled` is defined as the parity of its absolute
//! value. Language-native `%` disagrees about negative operands across
//! ecosystems, so the convention is pinned here once; `|n|` and `n` share a
//! low bit in two's complement, which keeps embed and extract consistent for
//! every sign.
//!
//! Supported domain: finite values with `|value * scale| <= 2^53`. Within it
//! every grid integer is exactly representable in f64 and the cast to `i64`
//! is lossless. Outside it (huge magnitudes, infinities, NaN) the cast
//! saturates: nothing panics, but the value is clamped onto the edge of the
//! grid and the 1/scale perturbation bound no longer holds. Trained weights
//! sit many orders of magnitude inside the supported range.

/// Embeds/extracts one bit per f64 value at a fixed scale.
#[derive(Debug, Clone, Copy)]
pub struct FixedPointCodec {
    scale: u32,
}

impl FixedPointCodec {
    pub fn new(scale: u32) -> Self {
        FixedPointCodec { scale }
    }

    /// Return `value` adjusted so its fixed-point LSB equals `bit`.
    ///
    /// The adjustment moves the scaled integer by at most 1, so the returned
    /// weight differs from the input by at most `1 / scale`. The step can
    /// cross zero (scaled -1 becomes 0 for a 0-bit); that slight nonuniformity
    /// in perturbation direction is accepted. The precision loss from rounding
    /// to the fixed-point grid is permanent.
    ///
    /// The perturbation bound only holds inside the supported domain (see the
    /// module docs); non-finite or out-of-range values are clamped onto the
    /// grid edge without error.
    pub fn embed(&self, value: f64, bit: bool) -> f64 {
        let scale = f64::from(self.scale);
        let mut scaled = (value * scale).round() as i64;
        if (scaled.unsigned_abs() & 1 == 1) != bit {
            scaled += if bit { 1 } else { -1 };
        }
        scaled as f64 / scale
    }

    /// Read the fixed-point LSB of `value`.
    ///
    /// Inverse of [`embed`](Self::embed) as long as the value was not modified
    /// in between and the scale matches the embedding side.
    pub fn extract(&self, value: f64) -> bool {
        let scaled = (value * f64::from(self.scale)).round() as i64;
        scaled.unsigned_abs() & 1 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALE: u32 = 10_000_000;

    #[test]
    fn embed_then_extract_returns_the_bit() {
        let codec = FixedPointCodec::new(SCALE);
        for &value in &[0.0, 0.123_456_7, -0.987_654_3, 1.0, -1.0, 0.333_333_33] {
            for bit in [false, true] {
                assert_eq!(codec.extract(codec.embed(value, bit)), bit);
            }
        }
    }

    #[test]
    fn perturbation_is_bounded_by_one_over_scale() {
        let codec = FixedPointCodec::new(SCALE);
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..1000 {
            let value = rng.f64() * 2.0 - 1.0;
            for bit in [false, true] {
                let embedded = codec.embed(value, bit);
                // rounding to the grid plus the parity step: at most 1.5/scale
                assert!((embedded - value).abs() <= 1.5 / SCALE as f64);
            }
        }
    }

    #[test]
    fn negative_values_use_absolute_parity() {
        let codec = FixedPointCodec::new(SCALE);
        // -3 scaled units is odd by absolute value
        let value = -3.0 / SCALE as f64;
        assert!(codec.extract(value));
        // embedding a 0-bit moves it to an even neighbour
        assert!(!codec.extract(codec.embed(value, false)));
    }

    #[test]
    fn adjustment_may_cross_zero() {
        let codec = FixedPointCodec::new(SCALE);
        // scaled -1 with a 0-bit steps to -2; scaled 1 with a 0-bit steps to 0
        let value = 1.0 / SCALE as f64;
        let embedded = codec.embed(value, false);
        assert_eq!(embedded, 0.0);
        assert!(!codec.extract(embedded));
    }

    #[test]
    fn even_values_keep_zero_bit_unchanged() {
        let codec = FixedPointCodec::new(SCALE);
        let value = 42.0 / SCALE as f64;
        assert_eq!(codec.embed(value, false), value);
    }

    #[test]
    fn out_of_range_values_clamp_without_fault() {
        let codec = FixedPointCodec::new(SCALE);

        // outside the supported domain the cast saturates onto the grid edge;
        // no panic, and the result stays on the grid
        for &value in &[1e300, -1e300, f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            for bit in [false, true] {
                let embedded = codec.embed(value, bit);
                assert!(embedded.is_finite());
                let _ = codec.extract(embedded);
            }
        }

        // NaN scales to 0, so a 1-bit lands on the first odd grid point
        assert_eq!(codec.embed(f64::NAN, true), 1.0 / SCALE as f64);
    }

    #[test]
    fn half_way_values_round_away_from_zero() {
        let codec = FixedPointCodec::new(10);
        // 0.25 * 10 = 2.5 rounds to 3 (away from zero), which is odd
        assert!(codec.extract(0.25));
        // -0.25 * 10 = -2.5 rounds to -3, odd by absolute value
        assert!(codec.extract(-0.25));
    }
}
