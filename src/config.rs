use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "PostOpGuardian";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable that points at an alternate engine config file.
pub const CONFIG_ENV_VAR: &str = "POSTOP_GUARDIAN_CONFIG";

const CONFIG_FILE_NAME: &str = "engine_config.json";

/// Get the application data directory (~/PostOpGuardian/).
/// Falls back to the working directory when no home directory is known.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Resolve the engine config path: env override first, then the data dir.
pub fn config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => PathBuf::from(path),
        None => app_data_dir().join(CONFIG_FILE_NAME),
    }
}

/// Log filter used when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "postop_guardian=info"
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config load failed ({0}): {1}")]
    Load(String, String),

    #[error("Config parse failed ({0}): {1}")]
    Parse(String, String),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

// ═══════════════════════════════════════════════════════════
// Engine configuration
// ═══════════════════════════════════════════════════════════

/// Inclusive plausibility bounds. Readings outside are rejected as sensor or entry errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlausibleRanges {
    pub heart_rate: Range,
    pub spo2: Range,
    pub temperature: Range,
    pub pain: Range,
}

impl Default for PlausibleRanges {
    fn default() -> Self {
        Self {
            heart_rate: Range::new(30.0, 220.0),
            spo2: Range::new(70.0, 100.0),
            temperature: Range::new(34.0, 42.0),
            pain: Range::new(0.0, 10.0),
        }
    }
}

/// Single-reading thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// SpO2 below this forces CRITICAL.
    pub critical_spo2: f64,
    pub low_spo2: f64,
    /// Cardiac patients get an extra point below this SpO2.
    pub cardiac_spo2: f64,
    pub high_temp: f64,
    pub very_high_temp: f64,
    pub tachycardia: f64,
    pub severe_tachycardia: f64,
    pub severe_pain: f64,
    pub extreme_pain: f64,
    pub missed_dose_limit: u32,
    /// Heart rate above baseline by more than this adds a point.
    pub baseline_hr_delta: f64,
    /// Score at or above which the verdict is WARNING.
    pub warning_score: u32,
    /// Score at or above which the verdict is CRITICAL.
    pub critical_score: u32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            critical_spo2: 90.0,
            low_spo2: 94.0,
            cardiac_spo2: 95.0,
            high_temp: 38.0,
            very_high_temp: 39.0,
            tachycardia: 110.0,
            severe_tachycardia: 130.0,
            severe_pain: 7.0,
            extreme_pain: 9.0,
            missed_dose_limit: 3,
            baseline_hr_delta: 20.0,
            warning_score: 4,
            critical_score: 9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    pub base: i32,
    /// History shorter than this costs `short_history_penalty`.
    pub min_history: usize,
    pub short_history_penalty: i32,
    pub missing_field_penalty: i32,
    pub stale_penalty: i32,
    pub invalid_input_penalty: i32,
    pub stale_hours: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            base: 95,
            min_history: 3,
            short_history_penalty: 5,
            missing_field_penalty: 12,
            stale_penalty: 20,
            invalid_input_penalty: 25,
            stale_hours: 24.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// History entries needed before any trend signal is produced.
    pub min_history: usize,
    /// Most recent entries used for the slope fit.
    pub slope_window: usize,
    pub pain_slope: f64,
    pub temperature_slope: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            min_history: 3,
            slope_window: 5,
            pain_slope: 0.5,
            temperature_slope: 0.2,
        }
    }
}

/// Immutable tuning for one engine instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub ranges: PlausibleRanges,
    pub thresholds: ThresholdConfig,
    pub confidence: ConfidenceConfig,
    pub trend: TrendConfig,
    pub baseline_window: usize,
    /// Upper bound on history entries fetched per evaluation.
    pub history_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ranges: PlausibleRanges::default(),
            thresholds: ThresholdConfig::default(),
            confidence: ConfidenceConfig::default(),
            trend: TrendConfig::default(),
            baseline_window: 5,
            history_limit: 10,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Load(path.display().to_string(), e.to_string()))?;
        let config: Self = serde_json::from_str(&json)
            .map_err(|e| ConfigError::Parse(path.display().to_string(), e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`EngineConfig::load`], but an absent file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No engine config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("ranges.heart_rate", self.ranges.heart_rate),
            ("ranges.spo2", self.ranges.spo2),
            ("ranges.temperature", self.ranges.temperature),
            ("ranges.pain", self.ranges.pain),
        ];
        for (field, range) in ranges {
            if range.min > range.max {
                return Err(invalid(field, "min exceeds max"));
            }
        }

        let t = &self.thresholds;
        if t.critical_spo2 > t.low_spo2 {
            return Err(invalid("thresholds.critical_spo2", "above low_spo2"));
        }
        if t.high_temp > t.very_high_temp {
            return Err(invalid("thresholds.high_temp", "above very_high_temp"));
        }
        if t.tachycardia > t.severe_tachycardia {
            return Err(invalid("thresholds.tachycardia", "above severe_tachycardia"));
        }
        if t.severe_pain > t.extreme_pain {
            return Err(invalid("thresholds.severe_pain", "above extreme_pain"));
        }
        if t.warning_score > t.critical_score {
            return Err(invalid("thresholds.warning_score", "above critical_score"));
        }

        let c = &self.confidence;
        let penalties = [
            ("confidence.short_history_penalty", c.short_history_penalty),
            ("confidence.missing_field_penalty", c.missing_field_penalty),
            ("confidence.stale_penalty", c.stale_penalty),
            ("confidence.invalid_input_penalty", c.invalid_input_penalty),
        ];
        for (field, penalty) in penalties {
            if penalty < 0 {
                return Err(invalid(field, "penalties cannot be negative"));
            }
        }

        if self.baseline_window == 0 {
            return Err(invalid("baseline_window", "must be positive"));
        }
        if self.history_limit == 0 {
            return Err(invalid("history_limit", "must be positive"));
        }
        if self.trend.min_history < 2 {
            return Err(invalid("trend.min_history", "a slope needs at least 2 points"));
        }
        if self.trend.slope_window < self.trend.min_history {
            return Err(invalid("trend.slope_window", "smaller than min_history"));
        }

        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field: field.into(),
        reason: reason.into(),
    }
}
