use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::feedback::DEFAULT_CLEAR_IMPROVEMENT;
use crate::summary::DEFAULT_TOP_PROBLEMS;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Tunables for [`ComparisonEngine`](crate::ComparisonEngine).
///
/// The severity buckets and the top-problem floor are fixed and not
/// configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Length of the top-problem shortlist in round summaries.
    #[serde(default = "default_top_problems")]
    pub top_problems_limit: usize,
    /// Smallest score drop reported as a clear (rather than minor)
    /// improvement in progress feedback.
    #[serde(default = "default_clear_improvement")]
    pub clear_improvement_threshold: u8,
}

fn default_top_problems() -> usize {
    DEFAULT_TOP_PROBLEMS
}

fn default_clear_improvement() -> u8 {
    DEFAULT_CLEAR_IMPROVEMENT
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            top_problems_limit: DEFAULT_TOP_PROBLEMS,
            clear_improvement_threshold: DEFAULT_CLEAR_IMPROVEMENT,
        }
    }
}

impl EngineConfig {
    /// Parse a config document, migrating older shapes first.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        // Parse as raw JSON so we can run migrations before deserializing.
        let json: serde_json::Value = serde_json::from_str(contents)?;
        let on_disk_version = json
            .get("config_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;

        let migrated = migrate(json, on_disk_version)?;
        let config: EngineConfig = serde_json::from_value(migrated)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize, always stamping the current version.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        let mut stamped = self.clone();
        stamped.config_version = CURRENT_VERSION;
        Ok(serde_json::to_string_pretty(&stamped)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_problems_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "top_problems_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(1..=4).contains(&self.clear_improvement_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "clear_improvement_threshold",
                reason: format!("{} is outside 1–4", self.clear_improvement_threshold),
            });
        }
        Ok(())
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> Result<serde_json::Value, ConfigError> {
    if from_version > CURRENT_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: `top_n` renamed to `top_problems_limit`
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(ConfigError::NotAnObject)?;
        if let Some(top_n) = obj.remove("top_n") {
            obj.entry("top_problems_limit").or_insert(top_n);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated engine config v0 → v1 (top_n → top_problems_limit)");
    }

    Ok(json)
}
