//! Permutation for carrier index selection.
//!
//! Spreading the payload bits over a key-seeded permutation of the weight
//! indices avoids clustering the perturbations at the start of the tensor and
//! makes the bit positions unrecoverable without the key.

use fastrand::Rng;

/// Pseudo-random permutation of carrier indices.
///
/// The permutation is a pure function of `(seed, length)`: the full ordering
/// is built once with a descending Fisher-Yates shuffle driven by a
/// `fastrand::Rng` constructed from the seed. `fastrand` implements wyrand,
/// a fixed, portable algorithm, so the same seed reproduces the same ordering
/// on every platform. A fresh generator is built per permutation; no
/// process-global RNG state is touched, so concurrent calls never interfere.
///
/// Bit slots for k bits are the first k entries of the full ordering, which
/// makes selections prefix stable: the slots for k1 < k2 bits are a literal
/// prefix of the slots for k2.
#[derive(Debug, Clone)]
pub struct Permutation {
    indices: Vec<usize>,
}

impl Permutation {
    /// Build the full index permutation for a carrier of `length` elements.
    pub fn from_seed(seed: u64, length: usize) -> Self {
        let mut rng = Rng::with_seed(seed);

        let mut indices: Vec<usize> = (0..length).collect();

        // Fisher-Yates shuffle
        for i in (1..length).rev() {
            let j = rng.usize(0..=i);
            indices.swap(i, j);
        }

        Permutation { indices }
    }

    /// The first `count` indices of the permutation, one per payload bit.
    ///
    /// Callers must ensure `count <= len()`; the engine rejects oversized
    /// payloads before ever selecting slots.
    pub fn select(&self, count: usize) -> &[usize] {
        &self.indices[..count]
    }

    /// The full index ordering.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
