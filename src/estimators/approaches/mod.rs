pub mod binary;

// Unified re-exports so users can import
// bitmeasure::estimators::approaches::* ergonomically.
pub use binary::{
    BinaryDataset, BinaryEntropy, SymbolDistribution, SymbolInformation,
    calculate_probabilities, information_content, shannon_entropy,
};
