//! # petbase - Pet Stat Initializer and Enemybase Record Generator
//!
//! Configures a creature's attributes and produces:
//! - a **stat split**: a stat budget spread over Vitality, Strength,
//!   Toughness and Dexterity, biased by a concept and by element levels
//! - **base stats**: level-1 values derived from the split
//! - an **enemybase record**: one comma-separated line for the game-data
//!   import tool
//!
//! ## Pipeline
//!
//! ```text
//! [ElementLevels] → validate → [ElementVector]
//!                                   ↓
//! [GenerationRequest] → allocate → [StatSplit] → derive → [BaseStats]
//!                                   ↓
//!                             format_record → record line
//! ```
//!
//! All stages are pure except the allocator, which draws from an injected
//! [`RandomSource`](random::RandomSource). The balanced concept jitters its
//! weights, and every concept hands out the rounding remainder at random,
//! so only the split's total is reproducible without a seed.
//!
//! ## Example
//!
//! ```rust
//! use petbase::*;
//! use petbase::random::SeededRandom;
//!
//! let mut session = GeneratorSession::default();
//! session.edit_element(Element::Fire, 7).unwrap();
//! session.edit_element(Element::Water, 3).unwrap();
//!
//! let request = GenerationRequest {
//!     name: "Ember".to_string(),
//!     concept: Concept::AttackSpeed,
//!     ..GenerationRequest::default()
//! };
//! let result = session.generate(&request, &mut SeededRandom::new(7)).unwrap();
//! assert_eq!(result.split.total(), 100);
//! assert!(result.record.starts_with("Ember,"));
//! ```
//!
//! ## Modules
//!
//! - [`element`] - Element levels and the affinity validator
//! - [`edit`] - Interactive slider rules and presets
//! - [`concept`] - Concept weight table
//! - [`random`] - Injectable random sources
//! - [`allocator`] - Stat budget allocation
//! - [`derive`] - Base-stat derivation
//! - [`record`] - Enemybase record formatting
//! - [`generator`] - Generation pipeline and caller session
//! - [`config`] - Generator defaults
//! - [`error`] - Error types

pub mod allocator;
pub mod concept;
pub mod config;
pub mod derive;
pub mod edit;
pub mod element;
pub mod error;
pub mod generator;
pub mod random;
pub mod record;
pub mod stats;

// Re-export main types for convenience
pub use allocator::allocate;
pub use concept::Concept;
pub use config::GeneratorConfig;
pub use derive::derive_base_stats;
pub use edit::{edit_element, find_preset, Preset, PRESETS};
pub use element::{validate, Element, ElementLevels, ElementVector};
pub use error::{ConceptError, ConfigError, ElementError, GenerateError, RequestError};
pub use generator::{generate, GenerationRequest, GenerationResult, GeneratorSession, Notice};
pub use record::format_record;
pub use stats::{BaseStats, StatAxis, StatSplit};
