use std::fmt;

use ndarray::Array1;
use tracing::debug;

use crate::error::{Error, Result};
use crate::estimators::traits::{GlobalValue, LocalValues};

/// Empirical distribution of the two binary symbols.
///
/// Probabilities are derived by counting occurrences and dividing by the
/// sequence length, so `zero + one == 1.0` within floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolDistribution {
    /// Probability of observing '0'.
    pub zero: f64,
    /// Probability of observing '1'.
    pub one: f64,
}

impl SymbolDistribution {
    /// Self-information -log2(p) of each symbol, in bits.
    ///
    /// A symbol with probability 0 maps to 0.0 rather than infinity; the
    /// degenerate case is not an error.
    pub fn information_content(&self) -> SymbolInformation {
        SymbolInformation {
            zero: self_information(self.zero),
            one: self_information(self.one),
        }
    }

    /// Shannon entropy of the distribution, in bits per symbol.
    ///
    /// Sums p * (-log2 p) over the symbols with p > 0, so log(0) is never
    /// evaluated. A single repeated symbol yields 0.0; an exactly balanced
    /// distribution yields 1.0.
    pub fn entropy(&self) -> f64 {
        let mut h = 0.0_f64;
        for p in [self.zero, self.one] {
            if p > 0.0 {
                h -= p * p.log2();
            }
        }
        h
    }
}

impl fmt::Display for SymbolDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{'0': {}, '1': {}}}", self.zero, self.one)
    }
}

/// Per-symbol information content, in bits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolInformation {
    pub zero: f64,
    pub one: f64,
}

impl fmt::Display for SymbolInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{'0': {}, '1': {}}}", self.zero, self.one)
    }
}

#[inline]
fn self_information(p: f64) -> f64 {
    if p > 0.0 { -p.log2() } else { 0.0 }
}

/// Shared dataset for binary-sequence estimators.
///
/// Holds the validated bit sequence alongside cached symbol counts and the
/// empirical distribution, so repeated global/local queries do not rescan.
pub struct BinaryDataset {
    /// Original sequence of '0'/'1' characters.
    pub bits: String,
    /// Occurrences of '0'.
    pub zeros: usize,
    /// Occurrences of '1'.
    pub ones: usize,
    /// Total number of observations.
    pub n: usize,
    /// Empirical symbol distribution.
    pub dist: SymbolDistribution,
}

impl BinaryDataset {
    /// Build a BinaryDataset from a sequence of '0'/'1' characters.
    ///
    /// Fails with [`Error::EmptySequence`] on zero-length input and
    /// [`Error::InvalidSymbol`] on any other character.
    pub fn from_bits(bits: impl Into<String>) -> Result<Self> {
        let bits = bits.into();
        let n = bits.len();
        if n == 0 {
            return Err(Error::EmptySequence);
        }

        let mut zeros = 0usize;
        for ch in bits.chars() {
            match ch {
                '0' => zeros += 1,
                '1' => {}
                other => return Err(Error::InvalidSymbol(other)),
            }
        }
        let ones = n - zeros;

        let n_f = n as f64;
        let dist = SymbolDistribution {
            zero: zeros as f64 / n_f,
            one: ones as f64 / n_f,
        };
        debug!(length = n, p0 = dist.zero, p1 = dist.one, "calculated symbol probabilities");
        Ok(Self {
            bits,
            zeros,
            ones,
            n,
            dist,
        })
    }

    /// Map each observed bit to its empirical probability.
    pub fn map_probs(&self) -> Array1<f64> {
        // Validation guarantees ASCII '0'/'1', so bytes() is exact here.
        self.bits
            .bytes()
            .map(|b| if b == b'0' { self.dist.zero } else { self.dist.one })
            .collect()
    }
}

/// Calculate the probability of each symbol in a binary sequence.
pub fn calculate_probabilities(bits: &str) -> Result<SymbolDistribution> {
    Ok(BinaryDataset::from_bits(bits)?.dist)
}

/// Calculate the information content of each symbol in a binary sequence, in bits.
pub fn information_content(bits: &str) -> Result<SymbolInformation> {
    let info = calculate_probabilities(bits)?.information_content();
    debug!(i0 = info.zero, i1 = info.one, "information content");
    Ok(info)
}

/// Calculate the Shannon entropy of a binary sequence, in bits per symbol.
pub fn shannon_entropy(bits: &str) -> Result<f64> {
    let entropy = calculate_probabilities(bits)?.entropy();
    debug!(entropy, "shannon entropy");
    Ok(entropy)
}

/// Shannon entropy estimator for binary sequences (base-2 log).
///
/// Computes H = -Σ p_i log2 p_i from empirical probabilities p_i = n_i/N over
/// the alphabet {'0','1'}. Local values are supported, where each observed
/// bit contributes -log2 p(bit); their mean recovers the global entropy.
pub struct BinaryEntropy {
    dataset: BinaryDataset,
}

impl BinaryEntropy {
    /// Build an estimator over a sequence of '0'/'1' characters.
    pub fn from_bits(bits: impl Into<String>) -> Result<Self> {
        let dataset = BinaryDataset::from_bits(bits)?;
        Ok(Self { dataset })
    }

    pub fn dataset(&self) -> &BinaryDataset {
        &self.dataset
    }
}

impl GlobalValue for BinaryEntropy {
    /// Calculate global entropy for the sequence.
    /// Separate implementation, not inferred from local_values.
    fn global_value(&self) -> f64 {
        self.dataset.dist.entropy()
    }
}

impl LocalValues for BinaryEntropy {
    /// Calculate local information values for each bit in the sequence.
    fn local_values(&self) -> Array1<f64> {
        // Map each bit to its probability: local = -log2 p(x).
        // Every observed symbol has p > 0, so the log is finite.
        let p_local = self.dataset.map_probs();
        -p_local.mapv(f64::log2)
    }
}
