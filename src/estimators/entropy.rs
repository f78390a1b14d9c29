use crate::error::Result;
use crate::estimators::approaches::binary;
pub use crate::estimators::traits::{GlobalValue, LocalValues};

/// Entropy estimation entry points for binary data.
///
/// This struct provides static methods for creating entropy estimators
/// from the supported input representations.
pub struct Entropy;

impl Entropy {
    /// Creates a new binary entropy estimator from a sequence of '0'/'1' characters.
    ///
    /// # Errors
    ///
    /// Fails on an empty sequence or on characters outside {'0','1'}.
    pub fn from_bits(bits: impl Into<String>) -> Result<binary::BinaryEntropy> {
        binary::BinaryEntropy::from_bits(bits)
    }

    /// Creates a new binary entropy estimator from raw bytes.
    ///
    /// Each byte is expanded to its 8-bit binary representation,
    /// most-significant bit first, before estimation.
    ///
    /// # Errors
    ///
    /// Fails on an empty byte slice (the expansion is empty).
    pub fn from_bytes(bytes: &[u8]) -> Result<binary::BinaryEntropy> {
        binary::BinaryEntropy::from_bits(crate::analyzer::expand_bits(bytes))
    }
}
