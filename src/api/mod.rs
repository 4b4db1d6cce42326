//! Fluent front door over the encoder and decoder.
//!
//! ```rust
//! let weights = vec![0.5_f64; 1000];
//!
//! let encoded = synapse_core::api::hide::prepare()
//!     .with_carrier(&weights)
//!     .with_message("Hello, World!")
//!     .with_key("SuperSecret42")
//!     .execute()
//!     .expect("Failed to hide message in weights");
//!
//! let message = synapse_core::api::unveil::prepare()
//!     .with_carrier(&encoded)
//!     .with_payload_size(13)
//!     .with_key("SuperSecret42")
//!     .execute()
//!     .expect("Failed to unveil message from weights");
//! assert_eq!(message, b"Hello, World!");
//! ```

pub mod hide;
pub mod unveil;
