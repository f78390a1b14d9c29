// SPDX-License-Identifier: MIT OR Apache-2.0

//! # bitmeasure
//!
//! Information-theory calculators for binary data: the binary entropy
//! function and binary symmetric channel capacity, plus empirical Shannon
//! entropy and information content of bit sequences expanded from files.
//!
//! ## Quick Start
//!
//! ```rust
//! use bitmeasure::channel::{binary_entropy, channel_capacity};
//! use bitmeasure::estimators::entropy::Entropy;
//! use bitmeasure::estimators::traits::GlobalValue;
//!
//! // Binary symmetric channel with a 10% flip probability
//! let h = binary_entropy(0.1);
//! let c = channel_capacity(0.1);
//! assert!((h + c - 1.0).abs() < 1e-12);
//!
//! // Empirical Shannon entropy of a bit sequence, in bits per symbol
//! let entropy = Entropy::from_bits("0011").unwrap().global_value();
//! assert!((entropy - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Architecture
//!
//! 1. **Channel quantities** ([`channel`]): closed-form H(p) and C = 1 - H(p)
//!    for the binary symmetric channel.
//! 2. **Estimators** ([`estimators`]): empirical symbol probabilities,
//!    per-symbol information content, and Shannon entropy over '0'/'1'
//!    sequences, with per-observation local values.
//! 3. **File analyzer** ([`analyzer`]): partitions a file into byte chunks,
//!    expands each chunk to bits (most-significant bit first) on a bounded
//!    worker pool, reassembles in ascending chunk order, and reduces the
//!    combined sequence to a [`analyzer::FileReport`].
//!
//! Two binaries ship with the crate: `bsc`, an interactive channel capacity
//! calculator, and `bitscan`, the file entropy analyzer. Diagnostic logging
//! uses [`tracing`]; the binaries install the subscriber, the library only
//! emits events.

pub mod analyzer;
pub mod channel;
pub mod error;
pub mod estimators;

pub use error::{Error, Result};
