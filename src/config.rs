//! Generator configuration.
//!
//! Holds the defaults a caller starts from. Every field is optional in the
//! JSON file; missing fields keep their default.

use crate::concept::Concept;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default display time of a rejection notice.
pub const DEFAULT_NOTICE_DURATION_MS: u64 = 1500;

/// Defaults for generation requests and notices.
///
/// # Examples
///
/// ```rust
/// use petbase::GeneratorConfig;
///
/// let config: GeneratorConfig = serde_json::from_str(r#"{ "total": 120 }"#).unwrap();
/// assert_eq!(config.total, 120);
/// assert_eq!(config.image_id, "100000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub image_id: String,
    pub total: u32,
    pub initial_value: u32,
    pub concept: Concept,
    pub notice_duration_ms: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            image_id: "100000".to_string(),
            total: 100,
            initial_value: 30,
            concept: Concept::Balanced,
            notice_duration_ms: DEFAULT_NOTICE_DURATION_MS,
        }
    }
}

impl GeneratorConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}
