//! Stat tuples: the allocated split and the derived base stats.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four stat axes, in tuple order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatAxis {
    Vitality,
    Strength,
    Toughness,
    Dexterity,
}

impl StatAxis {
    pub const ALL: [StatAxis; 4] = [
        StatAxis::Vitality,
        StatAxis::Strength,
        StatAxis::Toughness,
        StatAxis::Dexterity,
    ];

    pub fn index(self) -> usize {
        match self {
            StatAxis::Vitality => 0,
            StatAxis::Strength => 1,
            StatAxis::Toughness => 2,
            StatAxis::Dexterity => 3,
        }
    }

    /// Short label used in summaries.
    pub fn short(self) -> &'static str {
        match self {
            StatAxis::Vitality => "VIT",
            StatAxis::Strength => "STR",
            StatAxis::Toughness => "TGH",
            StatAxis::Dexterity => "DEX",
        }
    }
}

fn write_tuple(f: &mut fmt::Formatter<'_>, values: &[u32; 4]) -> fmt::Result {
    for (i, axis) in StatAxis::ALL.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}:{}", axis.short(), values[i])?;
    }
    Ok(())
}

/// Stat points per axis. The values always add up to the budget they were
/// allocated from.
///
/// # Examples
///
/// ```rust
/// use petbase::{StatAxis, StatSplit};
///
/// let split = StatSplit::from_array([30, 25, 25, 20]);
/// assert_eq!(split.total(), 100);
/// assert_eq!(split.get(StatAxis::Strength), 25);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatSplit([u32; 4]);

impl StatSplit {
    pub fn from_array(values: [u32; 4]) -> Self {
        Self(values)
    }

    pub fn get(&self, axis: StatAxis) -> u32 {
        self.0[axis.index()]
    }

    pub fn to_array(&self) -> [u32; 4] {
        self.0
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl fmt::Display for StatSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.0)
    }
}

/// Level-1 stats derived from a split and the initial value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseStats([u32; 4]);

impl BaseStats {
    pub fn from_array(values: [u32; 4]) -> Self {
        Self(values)
    }

    pub fn get(&self, axis: StatAxis) -> u32 {
        self.0[axis.index()]
    }

    pub fn to_array(&self) -> [u32; 4] {
        self.0
    }
}

impl fmt::Display for BaseStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.0)
    }
}
