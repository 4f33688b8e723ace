//! Generation pipeline and caller session.
//!
//! One generation cycle runs validate → allocate → derive → format and
//! yields a [`GenerationResult`]. [`GeneratorSession`] keeps what a caller
//! displays between cycles: the element levels being edited, the last
//! successful result, and a transient notice for the last rejection.

use crate::allocator::allocate;
use crate::concept::Concept;
use crate::config::GeneratorConfig;
use crate::derive::derive_base_stats;
use crate::edit::{apply_preset, edit_element, Preset};
use crate::element::{validate, Element, ElementLevels, ElementVector};
use crate::error::{ElementError, GenerateError, RequestError};
use crate::random::RandomSource;
use crate::record::{format_record, RecordFields};
use crate::stats::{BaseStats, StatSplit};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Highest capture difficulty accepted.
pub const MAX_CAPTURE_DIFFICULTY: u8 = 10;

/// Highest rarity accepted.
pub const MAX_RARITY: u8 = 2;

/// Highest stat budget accepted.
pub const MAX_TOTAL: u32 = 1_000_000;

/// Highest initial value (percent) accepted.
pub const MAX_INITIAL_VALUE: u32 = 10_000;

/// Everything a generation needs besides the element levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    pub name: String,
    pub temp_id: String,
    pub image_id: String,
    pub total: u32,
    pub initial_value: u32,
    pub concept: Concept,
    pub capture_difficulty: u8,
    pub rarity: u8,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

impl GenerationRequest {
    /// A request carrying the configured defaults and empty name/id.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            name: String::new(),
            temp_id: String::new(),
            image_id: config.image_id.clone(),
            total: config.total,
            initial_value: config.initial_value,
            concept: config.concept,
            capture_difficulty: 0,
            rarity: 0,
        }
    }

    /// Check the bounded fields.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.capture_difficulty > MAX_CAPTURE_DIFFICULTY {
            return Err(RequestError::CaptureDifficultyOutOfRange(
                self.capture_difficulty,
            ));
        }
        if self.rarity > MAX_RARITY {
            return Err(RequestError::RarityOutOfRange(self.rarity));
        }
        if self.total > MAX_TOTAL {
            return Err(RequestError::TotalOutOfRange {
                value: self.total,
                max: MAX_TOTAL,
            });
        }
        if self.initial_value > MAX_INITIAL_VALUE {
            return Err(RequestError::InitialValueOutOfRange {
                value: self.initial_value,
                max: MAX_INITIAL_VALUE,
            });
        }
        Ok(())
    }
}

/// The output of one generation cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub split: StatSplit,
    pub base_stats: BaseStats,
    pub elements: ElementVector,
    pub record: String,
}

/// Run one generation cycle.
///
/// Element levels are validated first, then the request fields.
///
/// # Examples
///
/// ```rust
/// use petbase::random::SeededRandom;
/// use petbase::{generate, ElementLevels, GenerationRequest};
///
/// let request = GenerationRequest::default();
/// let result = generate(&request, ElementLevels::new(0, 0, 10, 0), &mut SeededRandom::new(1)).unwrap();
/// assert_eq!(result.split.total(), 100);
/// ```
pub fn generate(
    request: &GenerationRequest,
    levels: ElementLevels,
    rng: &mut impl RandomSource,
) -> Result<GenerationResult, GenerateError> {
    let elements = validate(levels)?;
    request.validate()?;

    let split = allocate(request.total, request.concept, &elements, rng);
    let base_stats = derive_base_stats(&split, request.initial_value);
    let record = format_record(&RecordFields {
        name: &request.name,
        temp_id: &request.temp_id,
        initial_value: request.initial_value,
        split: &split,
        capture_difficulty: request.capture_difficulty,
        elements: &elements,
        rarity: request.rarity,
        image_id: &request.image_id,
    });

    info!(
        concept = %request.concept,
        total = request.total,
        %split,
        %base_stats,
        "generated stats"
    );

    Ok(GenerationResult {
        split,
        base_stats,
        elements,
        record,
    })
}

/// A transient message shown after a rejected action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    raised_at: Instant,
    duration: Duration,
}

impl Notice {
    pub fn new(message: impl Into<String>, raised_at: Instant, duration: Duration) -> Self {
        Self {
            message: message.into(),
            raised_at,
            duration,
        }
    }

    /// Whether the notice has been on screen for its full duration.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= self.duration
    }
}

/// Caller-side state across generation cycles.
///
/// Failed actions never touch the levels or the last result; they only
/// replace the notice. A successful generation replaces the result
/// wholesale.
#[derive(Debug, Clone)]
pub struct GeneratorSession {
    levels: ElementLevels,
    result: Option<GenerationResult>,
    notice: Option<Notice>,
    notice_duration: Duration,
}

impl Default for GeneratorSession {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

impl GeneratorSession {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            levels: ElementLevels::zero(),
            result: None,
            notice: None,
            notice_duration: config.notice_duration(),
        }
    }

    pub fn levels(&self) -> ElementLevels {
        self.levels
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        self.result.as_ref()
    }

    /// The current notice, if it has not yet expired at `now`.
    pub fn notice(&self, now: Instant) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| !n.is_expired(now))
    }

    /// Drop the notice once it has expired.
    pub fn dismiss_expired(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }

    fn raise(&mut self, message: String) {
        warn!(%message, "action rejected");
        self.notice = Some(Notice::new(message, Instant::now(), self.notice_duration));
    }

    /// Set one element through the interactive rules.
    pub fn edit_element(&mut self, element: Element, value: u8) -> Result<(), ElementError> {
        match edit_element(self.levels, element, value) {
            Ok(levels) => {
                self.levels = levels;
                Ok(())
            }
            Err(err) => {
                self.raise(err.to_string());
                Err(err)
            }
        }
    }

    /// Replace the levels with a preset after validating it.
    pub fn apply_preset(&mut self, preset: &Preset) -> Result<(), ElementError> {
        match apply_preset(preset) {
            Ok(levels) => {
                self.levels = levels;
                Ok(())
            }
            Err(err) => {
                self.raise(err.to_string());
                Err(err)
            }
        }
    }

    /// Replace the levels wholesale, e.g. from typed-in values.
    ///
    /// The levels are not validated until the next [`generate`](Self::generate).
    pub fn set_levels(&mut self, levels: ElementLevels) {
        self.levels = levels;
    }

    pub fn clear_elements(&mut self) {
        self.levels = ElementLevels::zero();
    }

    /// Run a generation cycle with the current levels.
    pub fn generate(
        &mut self,
        request: &GenerationRequest,
        rng: &mut impl RandomSource,
    ) -> Result<&GenerationResult, GenerateError> {
        match generate(request, self.levels, rng) {
            Ok(result) => Ok(&*self.result.insert(result)),
            Err(err) => {
                self.raise(err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::find_preset;
    use crate::random::{FixedRandom, SeededRandom};

    #[test]
    fn test_generate_balanced_fire() {
        let request = GenerationRequest {
            name: "Ember".to_string(),
            temp_id: "42".to_string(),
            ..GenerationRequest::default()
        };
        let result = generate(
            &request,
            ElementLevels::new(0, 0, 10, 0),
            &mut FixedRandom::constant(0.5),
        )
        .unwrap();

        // no jitter at 0.5; fire adds 0.3 to strength; the one remainder
        // point lands on index 2
        assert_eq!(result.split.to_array(), [23, 30, 24, 23]);
        assert_eq!(result.base_stats, derive_base_stats(&result.split, 30));
        assert!(result
            .record
            .starts_with("Ember,컁,記,秊,므,制皐,42,30,5.0,23,30,24,23,19,0,0,0,100,0,"));
    }

    #[test]
    fn test_elements_checked_before_request() {
        let request = GenerationRequest {
            rarity: 5,
            ..GenerationRequest::default()
        };
        let err = generate(&request, ElementLevels::zero(), &mut SeededRandom::new(1)).unwrap_err();
        assert_eq!(err, GenerateError::Element(ElementError::SumMismatch { sum: 0 }));

        let err = generate(
            &request,
            ElementLevels::new(10, 0, 0, 0),
            &mut SeededRandom::new(1),
        )
        .unwrap_err();
        assert_eq!(err, GenerateError::Request(RequestError::RarityOutOfRange(5)));
    }

    #[test]
    fn test_request_bounds() {
        let mut request = GenerationRequest::default();
        request.capture_difficulty = 10;
        request.rarity = 2;
        assert_eq!(request.validate(), Ok(()));
        request.capture_difficulty = 11;
        assert_eq!(
            request.validate(),
            Err(RequestError::CaptureDifficultyOutOfRange(11))
        );
    }

    #[test]
    fn test_total_and_initial_value_bounds() {
        let levels = ElementLevels::new(0, 0, 10, 0);
        let mut rng = SeededRandom::new(8);

        let at_limit = GenerationRequest {
            total: MAX_TOTAL,
            initial_value: MAX_INITIAL_VALUE,
            ..GenerationRequest::default()
        };
        let result = generate(&at_limit, levels, &mut rng).unwrap();
        assert_eq!(result.split.total(), MAX_TOTAL);
        let [v, s, t, d] = result.split.to_array().map(u128::from);
        let vitality = (400 * v + 100 * s + 100 * t + 100 * d) * u128::from(MAX_INITIAL_VALUE) / 10_000;
        assert_eq!(u128::from(result.base_stats.to_array()[0]), vitality);

        let over_total = GenerationRequest {
            total: MAX_TOTAL + 1,
            ..GenerationRequest::default()
        };
        assert_eq!(
            generate(&over_total, levels, &mut rng),
            Err(GenerateError::Request(RequestError::TotalOutOfRange {
                value: MAX_TOTAL + 1,
                max: MAX_TOTAL,
            }))
        );

        let over_initial = GenerationRequest {
            total: 4_000_000_000,
            initial_value: 10_000_000,
            ..GenerationRequest::default()
        };
        assert!(matches!(
            generate(&over_initial, levels, &mut rng),
            Err(GenerateError::Request(RequestError::TotalOutOfRange { .. }))
        ));

        let over_initial = GenerationRequest {
            initial_value: MAX_INITIAL_VALUE + 1,
            ..GenerationRequest::default()
        };
        assert!(matches!(
            generate(&over_initial, levels, &mut rng),
            Err(GenerateError::Request(RequestError::InitialValueOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_request_from_partial_json() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{ "name": "Moss", "concept": "tank", "total": 3 }"#).unwrap();
        assert_eq!(request.name, "Moss");
        assert_eq!(request.concept, Concept::Tank);
        assert_eq!(request.total, 3);
        assert_eq!(request.image_id, "100000");
    }

    #[test]
    fn test_failed_generate_keeps_previous_result() {
        let mut session = GeneratorSession::default();
        let request = GenerationRequest::default();
        let mut rng = SeededRandom::new(5);

        session.apply_preset(find_preset("water10").unwrap()).unwrap();
        let first = session.generate(&request, &mut rng).unwrap().clone();

        session.clear_elements();
        assert!(session.generate(&request, &mut rng).is_err());
        assert_eq!(session.result(), Some(&first));
        assert!(session.notice(Instant::now()).is_some());
    }

    #[test]
    fn test_rejected_edit_leaves_levels() {
        let mut session = GeneratorSession::default();
        session.edit_element(Element::Earth, 6).unwrap();
        session.edit_element(Element::Water, 4).unwrap();

        let err = session.edit_element(Element::Wind, 5).unwrap_err();
        assert_eq!(
            err,
            ElementError::TooManyActiveElements {
                element: Element::Wind
            }
        );
        assert_eq!(session.levels(), ElementLevels::new(6, 4, 0, 0));
        let notice = session.notice(Instant::now()).unwrap();
        assert!(notice.message.contains("Wind"));
    }

    #[test]
    fn test_notice_expires() {
        let config = GeneratorConfig {
            notice_duration_ms: 1500,
            ..GeneratorConfig::default()
        };
        let mut session = GeneratorSession::new(&config);
        let _ = session.edit_element(Element::Fire, 11);

        let later = Instant::now() + Duration::from_millis(1600);
        assert!(session.notice(later).is_none());
        session.dismiss_expired(later);
        assert!(session.notice(Instant::now()).is_none());
    }

    #[test]
    fn test_notice_lifecycle() {
        let start = Instant::now();
        let notice = Notice::new("nope", start, Duration::from_millis(1500));
        assert!(!notice.is_expired(start));
        assert!(!notice.is_expired(start + Duration::from_millis(1499)));
        assert!(notice.is_expired(start + Duration::from_millis(1500)));
    }
}
