//! Binary symmetric channel quantities.
//!
//! Closed-form expressions for the binary entropy function H(p) and the
//! capacity C = 1 - H(p) of a channel that flips each transmitted bit
//! independently with probability p, together with the explanatory text
//! printed by the interactive calculator.

/// Binary entropy function.
///
/// H(p) = -p log2(p) - (1-p) log2(1-p) bits, with H(0) = H(1) = 0 exactly
/// (a certain outcome carries no uncertainty).
///
/// Callers are expected to pass p in [0, 1].
pub fn binary_entropy(p: f64) -> f64 {
    if p == 0.0 || p == 1.0 {
        return 0.0;
    }
    -p * p.log2() - (1.0 - p) * (1.0 - p).log2()
}

/// Capacity of the binary symmetric channel, C = 1 - H(p) bits per channel use.
pub fn channel_capacity(p: f64) -> f64 {
    1.0 - binary_entropy(p)
}

/// Explanatory text for the binary entropy value at `p`.
pub fn explain_binary_entropy(p: f64) -> String {
    if p == 0.0 || p == 1.0 {
        return format!(
            "The binary entropy function H(p) is 0 because the uncertainty is minimal. \
             When p = {p}, the outcome is certain."
        );
    }

    let entropy = binary_entropy(p);
    format!(
        "The binary entropy function H(p) measures the amount of uncertainty or randomness associated with the probability p.\n\
         For p = {p}, H(p) is calculated as follows:\n\
         H(p) = -p * log2(p) - (1-p) * log2(1-p)\n\
         Substituting p = {p}:\n\
         H(p) = -({p}) * log2({p}) - (1 - {p}) * log2(1 - {p})\n\
         The entropy value H(p) is: {entropy:.4}"
    )
}

/// Explanatory text for the channel capacity at flip probability `p`.
pub fn explain_channel_capacity(p: f64) -> String {
    let capacity = channel_capacity(p);
    format!(
        "The channel capacity C is the maximum rate at which information can be transmitted reliably.\n\
         It is calculated as:\n\
         C = 1 - H(p)\n\
         Where H(p) is the binary entropy function.\n\
         With a flip probability p = {p}, the capacity C is: {capacity:.4}\n\
         When p is close to 0 or 1, the capacity is close to 1 bit per channel use, meaning the channel is almost perfect.\n\
         When p is 0.5, the capacity is 0 because the channel is fully noisy and no reliable information can be transmitted."
    )
}
