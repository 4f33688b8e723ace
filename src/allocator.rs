//! Stat allocator.
//!
//! Splits a stat budget over Vitality, Strength, Toughness and Dexterity.
//! Weights come from the concept table, get a random jitter for the
//! balanced concept, and are then biased by the element levels. Flooring
//! the proportional shares leaves a remainder which is handed out one point
//! at a time to randomly chosen axes, so the same inputs can produce
//! different splits; only the total is fixed.

use crate::concept::{Concept, Weights};
use crate::element::{Element, ElementVector, ELEMENT_TOTAL};
use crate::random::RandomSource;
use crate::stats::StatSplit;
use tracing::debug;

/// Half-width of the uniform jitter applied to balanced weights.
pub const BALANCED_JITTER: f64 = 0.1;

/// Weight added per full element share (level 10).
pub const ELEMENT_BIAS: f64 = 0.3;

/// Element that biases each stat axis, in stat order. The pairing is
/// crossed on purpose: Water feeds Vitality, Fire feeds Strength, Earth
/// feeds Toughness, Wind feeds Dexterity.
pub const ELEMENT_BIAS_MAP: [Element; 4] =
    [Element::Water, Element::Fire, Element::Earth, Element::Wind];

/// Concept weights after jitter and element bias.
pub fn biased_weights(
    concept: Concept,
    elements: &ElementVector,
    rng: &mut impl RandomSource,
) -> Weights {
    let mut weights = concept.weights();

    if concept == Concept::Balanced {
        for w in weights.iter_mut() {
            *w += rng.random_f64() * (2.0 * BALANCED_JITTER) - BALANCED_JITTER;
        }
    }

    for (w, element) in weights.iter_mut().zip(ELEMENT_BIAS_MAP) {
        *w += f64::from(elements.get(element)) / f64::from(ELEMENT_TOTAL) * ELEMENT_BIAS;
    }

    weights
}

/// Allocate `total` stat points.
///
/// The returned split always sums to exactly `total`.
///
/// # Examples
///
/// ```rust
/// use petbase::random::ThreadRandom;
/// use petbase::{allocate, validate, Concept, ElementLevels};
///
/// let elements = validate(ElementLevels::new(0, 0, 10, 0)).unwrap();
/// let split = allocate(101, Concept::AttackSpeed, &elements, &mut ThreadRandom);
/// assert_eq!(split.total(), 101);
/// ```
pub fn allocate(
    total: u32,
    concept: Concept,
    elements: &ElementVector,
    rng: &mut impl RandomSource,
) -> StatSplit {
    let weights = biased_weights(concept, elements, rng);
    allocate_with_weights(total, weights, rng)
}

/// Allocate `total` points proportionally to `weights`, then fill the
/// rounding remainder at random.
///
/// Weights are expected to be positive; a non-positive weight sum puts the
/// whole budget through the random fill.
pub fn allocate_with_weights(total: u32, weights: Weights, rng: &mut impl RandomSource) -> StatSplit {
    let sum: f64 = weights.iter().sum();

    let mut values = [0u32; 4];
    if sum > 0.0 {
        for (value, w) in values.iter_mut().zip(weights) {
            let share = (w / sum * f64::from(total)).floor();
            *value = if share > 0.0 { share as u32 } else { 0 };
        }
    }

    let floored: u32 = values.iter().sum();
    let mut remainder = total.saturating_sub(floored);
    debug!(?weights, total, remainder, "distributing stat remainder");

    while remainder > 0 {
        values[rng.random_index(values.len())] += 1;
        remainder -= 1;
    }

    StatSplit::from_array(values)
}
