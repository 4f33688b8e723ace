//! Base-stat derivation.
//!
//! Each split value is scaled by the initial value (a percentage) and the
//! four scaled values are combined through a fixed, deliberately lopsided
//! matrix. Coefficients are kept in hundredths so the whole computation
//! runs on integers and each output is the exact floor of the real-valued
//! combination.

use crate::stats::{BaseStats, StatSplit};

/// Fixed-point scale of [`DERIVATION_MATRIX`] (hundredths).
pub const COEFFICIENT_SCALE: u64 = 100;

/// Scale of the initial value (a percentage).
pub const INITIAL_VALUE_SCALE: u64 = 100;

/// Row `j` gives the weight of each split axis in derived axis `j`,
/// in hundredths. Rows and columns are in stat-axis order.
///
/// | derived   | VIT  | STR  | TGH  | DEX  |
/// |-----------|------|------|------|------|
/// | Vitality  | 4    | 1    | 1    | 1    |
/// | Strength  | 0.1  | 1    | 0.1  | 0.05 |
/// | Toughness | 0.1  | 0.1  | 1    | 0.05 |
/// | Dexterity | 0    | 0    | 0    | 1    |
pub const DERIVATION_MATRIX: [[u64; 4]; 4] = [
    [400, 100, 100, 100],
    [10, 100, 10, 5],
    [10, 10, 100, 5],
    [0, 0, 0, 100],
];

/// Derive level-1 base stats.
///
/// Intermediates are `u128`, so no input can overflow them. A result past
/// `u32::MAX` saturates; requests inside the bounds checked by
/// [`GenerationRequest::validate`](crate::GenerationRequest::validate)
/// always yield the exact floor.
///
/// # Examples
///
/// ```rust
/// use petbase::{derive_base_stats, StatSplit};
///
/// let base = derive_base_stats(&StatSplit::from_array([25, 25, 25, 25]), 30);
/// assert_eq!(base.to_array(), [52, 9, 9, 7]);
/// ```
pub fn derive_base_stats(split: &StatSplit, initial_value: u32) -> BaseStats {
    let stats = split.to_array();
    let iv = u128::from(initial_value);
    let denominator = u128::from(COEFFICIENT_SCALE * INITIAL_VALUE_SCALE);

    let derived = DERIVATION_MATRIX.map(|row| {
        let weighted: u128 = row
            .iter()
            .zip(stats)
            .map(|(&c, s)| u128::from(c) * u128::from(s))
            .sum();
        let value = weighted * iv / denominator;
        u32::try_from(value).unwrap_or(u32::MAX)
    });

    BaseStats::from_array(derived)
}
