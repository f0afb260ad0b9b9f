//! Craft-count arithmetic.
//!
//! This module provides:
//! - [`crafts_needed`], the ceiling-division and chance-compensation
//!   calculation every resolution pass is built on

/// Smallest effective success fraction. Keeps tiny or negative chance values
/// from producing an unbounded craft count.
pub const MIN_EFFECTIVE_CHANCE: f64 = 0.0001;

/// Number of craft actions needed to obtain `desired_qty` units of output.
///
/// An `output_amount` below 1 is treated as 1. Without chance compensation
/// the result is plain ceiling division. With it, the count is inflated by
/// the recipe's success chance: `None`, exactly 0, and non-finite values all
/// mean guaranteed (the upstream data stores 0 for non-probabilistic
/// recipes), and everything else is clamped to at least
/// [`MIN_EFFECTIVE_CHANCE`] after conversion to a fraction.
///
/// Total over all inputs: never panics, never returns a negative or
/// unbounded count. Asking for 0 units needs 0 crafts.
#[must_use]
pub fn crafts_needed(
    desired_qty: u64,
    output_amount: u32,
    chance_percent: Option<f64>,
    account_for_chance: bool,
) -> u64 {
    let output = u64::from(output_amount.max(1));
    if !account_for_chance {
        return desired_qty.div_ceil(output);
    }

    let fraction = match chance_percent {
        Some(percent) if percent != 0.0 && percent.is_finite() => percent / 100.0,
        _ => 1.0,
    };
    let effective = fraction.max(MIN_EFFECTIVE_CHANCE);
    let crafts = (desired_qty as f64 / (output as f64 * effective)).ceil();
    // Float-to-int casts saturate, so an enormous count stays finite.
    crafts as u64
}
