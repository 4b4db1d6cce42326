//! Fixed-Point LSB Steganography for Neural Network Weights
//!
//! This crate hides an arbitrary byte payload inside an ordered sequence of
//! `f64` carrier values, such as the weights of a trained model layer. Each
//! payload bit lands in the least significant bit of a fixed-point scaled
//! weight, and the weights carrying bits are chosen by a key-seeded
//! pseudo-random permutation, so the payload is unrecoverable without the key.
//!
//! # Layer Responsibilities
//!
//! This crate handles **encoding-level** concerns only:
//! - Embedding raw bytes into weight tensors
//! - Extracting raw bytes from weight tensors
//! - Key-seeded index permutation for uniform spreading
//! - Optional CRC-32 integrity sealing of the payload
//!
//! Loading and persisting the weights themselves, transport, and whatever
//! consumes the recovered bytes are outer-layer concerns.
//!
//! # Example
//!
//! ```rust
//! use synapse_core::{CodecOptions, SynapseDecoder, SynapseEncoder};
//!
//! let weights: Vec<f64> = (0..1000).map(|i| (i as f64).sin()).collect();
//! let options = CodecOptions::default();
//!
//! let encoder = SynapseEncoder::with_options(options);
//! let encoded = encoder.hide(&weights, b"hidden context", "secret_key").unwrap();
//!
//! let decoder = SynapseDecoder::with_options(options);
//! let extracted = decoder.extract(&encoded, 14, "secret_key").unwrap();
//! assert_eq!(extracted, b"hidden context");
//! ```
//!
//! # Determinism
//!
//! Hiding and extracting are pure functions of their arguments. The
//! permutation generator is fully pinned (SHA-256 seed derivation, wyrand,
//! Fisher-Yates), never a runtime-provided RNG, so the same key and carrier
//! length reproduce the same bit placement on any platform and any version.
//! No process-global state is involved; concurrent calls never interfere.

pub mod api;
pub mod bits;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod fixed_point;
pub mod integrity;
pub mod options;
pub mod permutation;
pub mod seed;

pub use decoder::SynapseDecoder;
pub use encoder::SynapseEncoder;
pub use error::{Result, SynapseError};
pub use fixed_point::FixedPointCodec;
pub use options::{CodecOptions, DEFAULT_SCALE};
pub use permutation::Permutation;
pub use seed::derive_seed;
