//! Error types for element validation and generation.
//!
//! Every failure in this crate is an input-validation failure. None of them
//! is fatal: callers turn them into a transient notice and carry on.

use crate::element::Element;
use thiserror::Error;

/// Errors raised by the element validator and the interactive editor.
///
/// # Examples
///
/// ```rust
/// use petbase::{Element, ElementError};
///
/// let err = ElementError::OpposedPair {
///     first: Element::Earth,
///     second: Element::Fire,
/// };
/// assert!(err.to_string().contains("Earth"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElementError {
    /// The four levels do not add up to exactly 10.
    #[error("Element levels must total exactly 10 (got {sum})")]
    SumMismatch { sum: u32 },

    /// Two mutually exclusive elements are both positive.
    #[error("Opposed elements cannot be combined: {first} and {second}")]
    OpposedPair { first: Element, second: Element },

    /// A third distinct element was activated while two are already active.
    #[error("At most two elements can be active; cannot activate {element}")]
    TooManyActiveElements { element: Element },

    /// An element was raised while its exclusion partner is active.
    #[error("Cannot raise {element} while its opposite {partner} is active")]
    OpposedEdit { element: Element, partner: Element },

    /// A level is outside the 0..=10 slider range.
    #[error("{element} level {value} is out of range (0-10)")]
    OutOfRange { element: Element, value: u8 },
}

/// Errors raised when a generation request carries out-of-range fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Capture difficulty above 10.
    #[error("Capture difficulty {0} is out of range (0-10)")]
    CaptureDifficultyOutOfRange(u8),

    /// Rarity above 2.
    #[error("Rarity {0} is out of range (0-2)")]
    RarityOutOfRange(u8),

    /// Stat budget above the largest total the derivation can carry exactly.
    #[error("Total {value} is out of range (0-{max})")]
    TotalOutOfRange { value: u32, max: u32 },

    /// Initial value above the largest percentage accepted.
    #[error("Initial value {value} is out of range (0-{max})")]
    InitialValueOutOfRange { value: u32, max: u32 },
}

/// Strict concept parsing failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConceptError {
    /// The label matches neither a table label nor an English name.
    #[error("Unknown concept: {0}")]
    UnknownConcept(String),
}

/// Any failure of one generation cycle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The element levels failed validation.
    #[error(transparent)]
    Element(#[from] ElementError),

    /// A request field is out of range.
    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid configuration JSON.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_mismatch_display() {
        let err = ElementError::SumMismatch { sum: 12 };
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn test_generate_error_is_transparent() {
        let inner = ElementError::TooManyActiveElements {
            element: Element::Wind,
        };
        let err: GenerateError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
        assert!(err.to_string().contains("Wind"));
    }

    #[test]
    fn test_request_error_display() {
        let err = RequestError::RarityOutOfRange(3);
        assert!(err.to_string().contains("Rarity 3"));

        let err = RequestError::TotalOutOfRange {
            value: 1_000_001,
            max: 1_000_000,
        };
        assert_eq!(err.to_string(), "Total 1000001 is out of range (0-1000000)");
    }
}
