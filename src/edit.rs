//! Interactive element editing.
//!
//! These are the slider rules a caller applies while the user adjusts one
//! element at a time. They are softer than [`validate`](crate::validate):
//! levels produced here may still total less than 10.

use crate::element::{validate, Element, ElementLevels, ELEMENT_TOTAL};
use crate::error::ElementError;
use tracing::debug;

/// Maximum number of elements that can be active at once.
pub const MAX_ACTIVE_ELEMENTS: usize = 2;

/// A named set of element levels offered as a one-click shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub levels: ElementLevels,
}

/// Built-in presets, in display order.
pub static PRESETS: [Preset; 5] = [
    Preset {
        name: "earth10",
        levels: ElementLevels::new(10, 0, 0, 0),
    },
    Preset {
        name: "water10",
        levels: ElementLevels::new(0, 10, 0, 0),
    },
    Preset {
        name: "fire10",
        levels: ElementLevels::new(0, 0, 10, 0),
    },
    Preset {
        name: "wind10",
        levels: ElementLevels::new(0, 0, 0, 10),
    },
    Preset {
        name: "fire7-water3",
        levels: ElementLevels::new(0, 3, 7, 0),
    },
];

/// Look up a built-in preset by name (case-insensitive).
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

/// Set one element to `value`, applying the interactive rules.
///
/// Rules, in the order they are checked:
/// 1. `value` must be within 0..=10.
/// 2. Raising a currently inactive element is rejected when two elements
///    are already active.
/// 3. Raising an element is rejected while its opposite is active.
/// 4. If the total would go past 10, the excess is taken from the other
///    active elements in axis order (Earth, Water, Fire, Wind), each giving
///    up at most its own level.
///
/// On rejection the input levels are untouched.
///
/// # Examples
///
/// ```rust
/// use petbase::{edit_element, Element, ElementLevels};
///
/// let levels = ElementLevels::new(0, 3, 7, 0);
/// let edited = edit_element(levels, Element::Water, 6).unwrap();
/// assert_eq!(edited, ElementLevels::new(0, 6, 4, 0));
/// ```
pub fn edit_element(
    levels: ElementLevels,
    element: Element,
    value: u8,
) -> Result<ElementLevels, ElementError> {
    if value > ELEMENT_TOTAL {
        return Err(ElementError::OutOfRange { element, value });
    }

    if value > 0 && levels.get(element) == 0 && levels.active().len() >= MAX_ACTIVE_ELEMENTS {
        return Err(ElementError::TooManyActiveElements { element });
    }

    let partner = element.opposite();
    if value > 0 && levels.get(partner) > 0 {
        return Err(ElementError::OpposedEdit { element, partner });
    }

    let mut next = levels;
    let current_total = levels.sum();
    let new_total = current_total - u32::from(levels.get(element)) + u32::from(value);
    let mut excess = new_total.saturating_sub(u32::from(ELEMENT_TOTAL));

    for other in Element::ALL {
        if excess == 0 {
            break;
        }
        if other == element {
            continue;
        }
        let available = u32::from(next.get(other));
        if available == 0 {
            continue;
        }
        let reduce = available.min(excess);
        // reduce <= available, which came from a u8
        next.set(other, (available - reduce) as u8);
        excess -= reduce;
        debug!(element = %other, reduce, "rebalanced element to keep total at 10");
    }

    next.set(element, value);
    Ok(next)
}

/// Validate a preset's levels and return them as the new levels.
pub fn apply_preset(preset: &Preset) -> Result<ElementLevels, ElementError> {
    validate(preset.levels).map(|vector| vector.levels())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_from_zero() {
        let levels = edit_element(ElementLevels::zero(), Element::Fire, 7).unwrap();
        assert_eq!(levels, ElementLevels::new(0, 0, 7, 0));
    }

    #[test]
    fn test_third_element_rejected() {
        let levels = ElementLevels::new(6, 4, 0, 0);
        assert_eq!(
            edit_element(levels, Element::Wind, 5),
            Err(ElementError::TooManyActiveElements {
                element: Element::Wind
            })
        );
    }

    #[test]
    fn test_setting_inactive_to_zero_is_noop() {
        let levels = ElementLevels::new(6, 4, 0, 0);
        assert_eq!(edit_element(levels, Element::Wind, 0), Ok(levels));
    }

    #[test]
    fn test_opposed_edit_rejected() {
        let levels = ElementLevels::new(0, 0, 5, 0);
        assert_eq!(
            edit_element(levels, Element::Earth, 3),
            Err(ElementError::OpposedEdit {
                element: Element::Earth,
                partner: Element::Fire,
            })
        );
    }

    #[test]
    fn test_lowering_is_always_allowed() {
        let levels = ElementLevels::new(0, 3, 7, 0);
        let edited = edit_element(levels, Element::Fire, 2).unwrap();
        assert_eq!(edited, ElementLevels::new(0, 3, 2, 0));
    }

    #[test]
    fn test_overflow_rebalances_other_active_element() {
        let levels = ElementLevels::new(0, 3, 7, 0);
        let edited = edit_element(levels, Element::Fire, 10).unwrap();
        assert_eq!(edited, ElementLevels::new(0, 0, 10, 0));
    }

    #[test]
    fn test_overflow_takes_in_axis_order() {
        // Levels built without the editor can carry more than one donor.
        let levels = ElementLevels::new(2, 3, 0, 0);
        let edited = edit_element(levels, Element::Water, 9).unwrap();
        // total would be 11: one unit comes from Earth
        assert_eq!(edited, ElementLevels::new(1, 9, 0, 0));

        let edited = edit_element(ElementLevels::new(4, 5, 0, 0), Element::Water, 10).unwrap();
        assert_eq!(edited, ElementLevels::new(0, 10, 0, 0));
    }

    #[test]
    fn test_out_of_range_value() {
        assert_eq!(
            edit_element(ElementLevels::zero(), Element::Earth, 11),
            Err(ElementError::OutOfRange {
                element: Element::Earth,
                value: 11,
            })
        );
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in &PRESETS {
            assert_eq!(apply_preset(preset), Ok(preset.levels));
        }
    }

    #[test]
    fn test_find_preset() {
        let preset = find_preset("Fire7-Water3").unwrap();
        assert_eq!(preset.levels, ElementLevels::new(0, 3, 7, 0));
        assert!(find_preset("metal10").is_none());
    }
}
