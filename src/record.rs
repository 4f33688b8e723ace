//! Enemybase record formatting.
//!
//! The record is one comma-separated line read positionally by the game's
//! data import tool. Everything other than the embedded fields is fixed
//! filler and must be reproduced character for character.

use crate::element::ElementVector;
use crate::stats::StatSplit;

/// Name written when the caller leaves the name empty.
pub const DEFAULT_NAME: &str = "이름";

/// Temporary id written when the caller leaves the id empty.
pub const DEFAULT_TEMP_ID: &str = "9999";

/// Fixed tokens between the name and the temporary id.
const HEADER_TOKENS: &str = "컁,記,秊,므,制皐";

/// Fixed token between the initial value and the stat split.
const GROWTH_TOKEN: &str = "5.0";

/// Fixed token between the stat split and the capture difficulty.
const LEVEL_TOKEN: &str = "19";

/// Filler between the element levels and the rarity.
const ELEMENT_TRAILER: &str = "0,0,0,0,0,0,0,0,0,1,,,,,";

/// Filler between the rarity and the image id.
const RARITY_TRAILER: &str = "1,1,5";

/// Filler after the image id.
const IMAGE_TRAILER: &str = "1,1,,0,500,,0,500,,0,500,,0,500,,0,500,,0";

/// Fields embedded in one record.
#[derive(Debug, Clone, Copy)]
pub struct RecordFields<'a> {
    pub name: &'a str,
    pub temp_id: &'a str,
    pub initial_value: u32,
    pub split: &'a StatSplit,
    pub capture_difficulty: u8,
    pub elements: &'a ElementVector,
    pub rarity: u8,
    pub image_id: &'a str,
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Format the enemybase line.
///
/// Element levels are embedded ×10 (0-100).
///
/// # Examples
///
/// ```rust
/// use petbase::record::{format_record, RecordFields};
/// use petbase::{validate, ElementLevels, StatSplit};
///
/// let elements = validate(ElementLevels::new(0, 0, 10, 0)).unwrap();
/// let split = StatSplit::from_array([25, 25, 25, 25]);
/// let line = format_record(&RecordFields {
///     name: "Ember",
///     temp_id: "",
///     initial_value: 30,
///     split: &split,
///     capture_difficulty: 3,
///     elements: &elements,
///     rarity: 1,
///     image_id: "100000",
/// });
/// assert!(line.starts_with("Ember,컁,記,秊,므,制皐,9999,30,5.0,25,25,25,25,19,3,0,0,100,0,"));
/// ```
pub fn format_record(fields: &RecordFields<'_>) -> String {
    format!(
        "{name},{HEADER_TOKENS},{id},{initial},{GROWTH_TOKEN},{split},{LEVEL_TOKEN},{capture},{elements},{ELEMENT_TRAILER},{rarity},{RARITY_TRAILER},{image},{IMAGE_TRAILER}",
        name = or_default(fields.name, DEFAULT_NAME),
        id = or_default(fields.temp_id, DEFAULT_TEMP_ID),
        initial = fields.initial_value,
        split = join(&fields.split.to_array()),
        capture = fields.capture_difficulty,
        elements = join(&fields.elements.scaled()),
        rarity = fields.rarity,
        image = fields.image_id,
    )
}
