//! Concept (archetype) weight table.
//!
//! A concept biases how the stat budget is spread over Vitality, Strength,
//! Toughness and Dexterity.

use crate::error::ConceptError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Weights in stat-axis order: Vitality, Strength, Toughness, Dexterity.
pub type Weights = [f64; 4];

/// One of the five fixed archetypes.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concept {
    /// Attack/defense leaning (공방형).
    AttackDefense,
    /// Attack/speed leaning (공순형).
    AttackSpeed,
    /// Vitality and toughness leaning (탱커형).
    Tank,
    /// Speed/defense leaning (순방형).
    SpeedDefense,
    /// Even weights with a small random jitter (밸런스형).
    #[default]
    Balanced,
}

/// Base weights per concept.
pub const CONCEPT_WEIGHTS: [(Concept, Weights); 5] = [
    (Concept::AttackDefense, [1.0, 1.3, 1.3, 1.0]),
    (Concept::AttackSpeed, [0.8, 1.5, 0.8, 1.4]),
    (Concept::Tank, [1.4, 0.8, 1.4, 1.0]),
    (Concept::SpeedDefense, [1.2, 0.8, 1.4, 1.2]),
    (Concept::Balanced, [1.0, 1.0, 1.0, 1.0]),
];

impl Concept {
    pub const ALL: [Concept; 5] = [
        Concept::AttackDefense,
        Concept::AttackSpeed,
        Concept::Tank,
        Concept::SpeedDefense,
        Concept::Balanced,
    ];

    /// Base weight tuple for this concept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use petbase::Concept;
    ///
    /// assert_eq!(Concept::Tank.weights(), [1.4, 0.8, 1.4, 1.0]);
    /// ```
    pub fn weights(self) -> Weights {
        CONCEPT_WEIGHTS
            .iter()
            .find(|(concept, _)| *concept == self)
            .map(|(_, weights)| *weights)
            .unwrap_or([1.0; 4])
    }

    /// Label used by the game-data table.
    pub fn label(self) -> &'static str {
        match self {
            Concept::AttackDefense => "공방형",
            Concept::AttackSpeed => "공순형",
            Concept::Tank => "탱커형",
            Concept::SpeedDefense => "순방형",
            Concept::Balanced => "밸런스형",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Concept::AttackDefense => "attack_defense",
            Concept::AttackSpeed => "attack_speed",
            Concept::Tank => "tank",
            Concept::SpeedDefense => "speed_defense",
            Concept::Balanced => "balanced",
        }
    }

    /// Parse a concept label, falling back to [`Concept::Balanced`] for
    /// anything unrecognised. The fallback is logged as a warning.
    pub fn from_label_lenient(label: &str) -> Concept {
        label.parse().unwrap_or_else(|err: ConceptError| {
            warn!("{err}; using {}", Concept::Balanced);
            Concept::Balanced
        })
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Concept {
    type Err = ConceptError;

    /// Accepts the table label or the English name, with `-` or `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Concept::ALL
            .into_iter()
            .find(|c| c.label() == normalized || c.name() == normalized)
            .ok_or_else(|| ConceptError::UnknownConcept(s.to_string()))
    }
}
