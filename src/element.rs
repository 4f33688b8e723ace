//! Elemental affinity module.
//!
//! A creature's affinity is four levels over Earth, Water, Fire and Wind.
//! `ElementLevels` is the raw, editable form; `ElementVector` is a levels
//! value that passed [`validate`] and is safe to feed to the allocator.

use crate::error::ElementError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest level a single element can take, and the required total.
pub const ELEMENT_TOTAL: u8 = 10;

/// Factor applied to each level when embedding it in a record (0-10 → 0-100).
pub const RECORD_SCALE: u8 = 10;

/// One of the four elemental axes.
///
/// The declaration order is the fixed axis order used everywhere:
/// Earth, Water, Fire, Wind.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Earth,
    Water,
    Fire,
    Wind,
}

impl Element {
    /// All elements in axis order.
    pub const ALL: [Element; 4] = [Element::Earth, Element::Water, Element::Fire, Element::Wind];

    /// The mutually exclusive partner (Earth↔Fire, Water↔Wind).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use petbase::Element;
    ///
    /// assert_eq!(Element::Earth.opposite(), Element::Fire);
    /// assert_eq!(Element::Wind.opposite(), Element::Water);
    /// ```
    pub fn opposite(self) -> Element {
        match self {
            Element::Earth => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Water => Element::Wind,
            Element::Wind => Element::Water,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Element::Earth => "Earth",
            Element::Water => "Water",
            Element::Fire => "Fire",
            Element::Wind => "Wind",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Element {
    type Err = String;

    /// Accepts the English name in any case or the single-syllable label
    /// used in the data table (지, 수, 화, 풍).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "earth" | "지" => Ok(Element::Earth),
            "water" | "수" => Ok(Element::Water),
            "fire" | "화" => Ok(Element::Fire),
            "wind" | "풍" => Ok(Element::Wind),
            other => Err(format!("unknown element: {other}")),
        }
    }
}

/// Raw element levels in axis order, as edited by the caller.
///
/// Levels need not be valid: the editor keeps them within 0..=10 and
/// pinned at or below a total of 10, but only [`validate`] guarantees the
/// full set of invariants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementLevels {
    pub earth: u8,
    pub water: u8,
    pub fire: u8,
    pub wind: u8,
}

impl ElementLevels {
    /// All four levels at zero.
    pub const fn zero() -> Self {
        Self {
            earth: 0,
            water: 0,
            fire: 0,
            wind: 0,
        }
    }

    pub const fn new(earth: u8, water: u8, fire: u8, wind: u8) -> Self {
        Self {
            earth,
            water,
            fire,
            wind,
        }
    }

    pub fn get(&self, element: Element) -> u8 {
        match element {
            Element::Earth => self.earth,
            Element::Water => self.water,
            Element::Fire => self.fire,
            Element::Wind => self.wind,
        }
    }

    pub fn set(&mut self, element: Element, value: u8) {
        match element {
            Element::Earth => self.earth = value,
            Element::Water => self.water = value,
            Element::Fire => self.fire = value,
            Element::Wind => self.wind = value,
        }
    }

    /// Levels as an array in axis order.
    pub fn to_array(&self) -> [u8; 4] {
        [self.earth, self.water, self.fire, self.wind]
    }

    pub fn sum(&self) -> u32 {
        self.to_array().iter().map(|&v| u32::from(v)).sum()
    }

    /// Elements with a positive level, in axis order.
    pub fn active(&self) -> Vec<Element> {
        Element::ALL
            .into_iter()
            .filter(|&e| self.get(e) > 0)
            .collect()
    }
}

impl From<[u8; 4]> for ElementLevels {
    fn from(values: [u8; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }
}

impl FromStr for ElementLevels {
    type Err = String;

    /// Parses `"earth,water,fire,wind"`, e.g. `"0,3,7,0"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(format!("expected 4 comma-separated levels, got {}", parts.len()));
        }
        let mut values = [0u8; 4];
        for (slot, part) in values.iter_mut().zip(parts) {
            *slot = part
                .parse()
                .map_err(|_| format!("invalid element level: {part}"))?;
        }
        Ok(values.into())
    }
}

impl fmt::Display for ElementLevels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Earth:{} Water:{} Fire:{} Wind:{}",
            self.earth, self.water, self.fire, self.wind
        )
    }
}

/// Element levels that satisfy every affinity rule.
///
/// Only obtainable through [`validate`]; the levels inside always total
/// exactly 10 and never pair an element with its opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ElementVector(ElementLevels);

impl ElementVector {
    pub fn levels(&self) -> ElementLevels {
        self.0
    }

    pub fn get(&self, element: Element) -> u8 {
        self.0.get(element)
    }

    /// Levels rescaled ×10 to the 0-100 domain used by the record row.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use petbase::{validate, ElementLevels};
    ///
    /// let vector = validate(ElementLevels::new(0, 3, 7, 0)).unwrap();
    /// assert_eq!(vector.scaled(), [0, 30, 70, 0]);
    /// ```
    pub fn scaled(&self) -> [u8; 4] {
        self.0.to_array().map(|v| v * RECORD_SCALE)
    }
}

impl fmt::Display for ElementVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Validate raw element levels.
///
/// The opposed-pair rule is checked before the total, so levels that break
/// both report [`ElementError::OpposedPair`].
///
/// # Examples
///
/// ```rust
/// use petbase::{validate, Element, ElementError, ElementLevels};
///
/// let ok = validate(ElementLevels::new(0, 0, 10, 0)).unwrap();
/// assert_eq!(ok.get(Element::Fire), 10);
///
/// let err = validate(ElementLevels::new(6, 0, 6, 0)).unwrap_err();
/// assert!(matches!(err, ElementError::OpposedPair { .. }));
/// ```
pub fn validate(levels: ElementLevels) -> Result<ElementVector, ElementError> {
    for element in Element::ALL {
        let value = levels.get(element);
        if value > ELEMENT_TOTAL {
            return Err(ElementError::OutOfRange { element, value });
        }
    }

    for (first, second) in [(Element::Earth, Element::Fire), (Element::Water, Element::Wind)] {
        if levels.get(first) > 0 && levels.get(second) > 0 {
            return Err(ElementError::OpposedPair { first, second });
        }
    }

    let sum = levels.sum();
    if sum != u32::from(ELEMENT_TOTAL) {
        return Err(ElementError::SumMismatch { sum });
    }

    Ok(ElementVector(levels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_element_is_valid() {
        for element in Element::ALL {
            let mut levels = ElementLevels::zero();
            levels.set(element, 10);
            let vector = validate(levels).unwrap();
            assert_eq!(vector.get(element), 10);
            assert_eq!(vector.levels(), levels);
        }
    }

    #[test]
    fn test_compatible_pair_is_valid() {
        let vector = validate(ElementLevels::new(4, 6, 0, 0)).unwrap();
        assert_eq!(vector.levels().to_array(), [4, 6, 0, 0]);
    }

    #[test]
    fn test_sum_mismatch() {
        assert_eq!(
            validate(ElementLevels::zero()),
            Err(ElementError::SumMismatch { sum: 0 })
        );
        assert_eq!(
            validate(ElementLevels::new(0, 3, 5, 0)),
            Err(ElementError::SumMismatch { sum: 8 })
        );
    }

    #[test]
    fn test_opposed_pair_wins_over_sum() {
        assert_eq!(
            validate(ElementLevels::new(6, 0, 6, 0)),
            Err(ElementError::OpposedPair {
                first: Element::Earth,
                second: Element::Fire,
            })
        );
        assert_eq!(
            validate(ElementLevels::new(0, 5, 0, 5)),
            Err(ElementError::OpposedPair {
                first: Element::Water,
                second: Element::Wind,
            })
        );
    }

    #[test]
    fn test_out_of_range_level() {
        assert_eq!(
            validate(ElementLevels::new(0, 0, 11, 0)),
            Err(ElementError::OutOfRange {
                element: Element::Fire,
                value: 11,
            })
        );
    }

    #[test]
    fn test_every_valid_vector_keeps_invariants() {
        let mut valid = 0;
        for earth in 0..=10u8 {
            for water in 0..=10u8 {
                for fire in 0..=10u8 {
                    for wind in 0..=10u8 {
                        let levels = ElementLevels::new(earth, water, fire, wind);
                        if let Ok(vector) = validate(levels) {
                            valid += 1;
                            let l = vector.levels();
                            assert_eq!(l.sum(), 10);
                            assert!(!(l.earth > 0 && l.fire > 0));
                            assert!(!(l.water > 0 && l.wind > 0));
                        }
                    }
                }
            }
        }
        // 4 single-element vectors plus 9 splits for each of the 4 compatible pairs.
        assert_eq!(valid, 4 + 4 * 9);
    }

    #[test]
    fn test_parse_levels() {
        let levels: ElementLevels = "0, 3, 7, 0".parse().unwrap();
        assert_eq!(levels, ElementLevels::new(0, 3, 7, 0));
        assert!("1,2,3".parse::<ElementLevels>().is_err());
        assert!("a,0,0,0".parse::<ElementLevels>().is_err());
    }

    #[test]
    fn test_parse_element() {
        assert_eq!("FIRE".parse::<Element>(), Ok(Element::Fire));
        assert_eq!("풍".parse::<Element>(), Ok(Element::Wind));
        assert!("metal".parse::<Element>().is_err());
    }

    #[test]
    fn test_scaled_levels() {
        let vector = validate(ElementLevels::new(10, 0, 0, 0)).unwrap();
        assert_eq!(vector.scaled(), [100, 0, 0, 0]);
    }
}
