//! Engine configuration.

#[cfg(feature = "serde")]
use std::path::Path;
use thiserror::Error;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration for the bracketing pipeline.
///
/// The engine accepts any values: out-of-range settings only make the
/// partition stricter or looser (up to every entrant becoming an outlier).
/// Callers that want bounds checked call [`EngineConfig::validate`].
///
/// # Examples
///
/// ```
/// use u_bracket::engine::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_target_bracket_size(4)
///     .with_adults_max_weight_diff_percent(12.0)
///     .with_max_weight_diff_absolute_cap(15.0)
///     .with_ultra_heavy_ignore(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "snake_case"))]
pub struct EngineConfig {
    /// Preferred bracket size, tried first at every cursor position.
    /// Meaningful values are 3, 4 and 5.
    pub target_bracket_size: usize,

    /// Percent weight-spread cap for 8U, 9-12 and 13-15 divisions.
    pub kids_max_weight_diff_percent: f64,

    /// Percent weight-spread cap for Adult and Masters divisions.
    pub adults_max_weight_diff_percent: f64,

    /// Lift the age-gap rule for Adult and Masters divisions.
    pub adults_ignore_age_gap: bool,

    /// Absolute weight-spread cap applied to every division.
    pub max_weight_diff_absolute_cap: f64,

    /// Waive weight rules when the lightest member is at or above the
    /// ultra-heavyweight threshold.
    pub ultra_heavy_ignore: bool,

    /// Partition independent pools on the rayon thread pool. Only takes
    /// effect with the `parallel` feature; output is identical either way.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_bracket_size: 5,
            kids_max_weight_diff_percent: 15.0,
            adults_max_weight_diff_percent: 20.0,
            adults_ignore_age_gap: true,
            max_weight_diff_absolute_cap: 20.0,
            ultra_heavy_ignore: true,
            parallel: false,
        }
    }
}

impl EngineConfig {
    pub fn with_target_bracket_size(mut self, size: usize) -> Self {
        self.target_bracket_size = size;
        self
    }

    pub fn with_kids_max_weight_diff_percent(mut self, percent: f64) -> Self {
        self.kids_max_weight_diff_percent = percent;
        self
    }

    pub fn with_adults_max_weight_diff_percent(mut self, percent: f64) -> Self {
        self.adults_max_weight_diff_percent = percent;
        self
    }

    pub fn with_adults_ignore_age_gap(mut self, ignore: bool) -> Self {
        self.adults_ignore_age_gap = ignore;
        self
    }

    pub fn with_max_weight_diff_absolute_cap(mut self, cap: f64) -> Self {
        self.max_weight_diff_absolute_cap = cap;
        self
    }

    pub fn with_ultra_heavy_ignore(mut self, ignore: bool) -> Self {
        self.ultra_heavy_ignore = ignore;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Percent cap for a division class.
    pub fn max_weight_diff_percent(&self, is_adult: bool) -> f64 {
        if is_adult {
            self.adults_max_weight_diff_percent
        } else {
            self.kids_max_weight_diff_percent
        }
    }

    /// Validates the configuration.
    ///
    /// The engine never calls this; bounding inputs is up to the caller.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(3..=5).contains(&self.target_bracket_size) {
            return Err(ConfigError::Invalid(format!(
                "target_bracket_size must be 3, 4 or 5, got {}",
                self.target_bracket_size
            )));
        }
        let caps = [
            ("kids_max_weight_diff_percent", self.kids_max_weight_diff_percent),
            ("adults_max_weight_diff_percent", self.adults_max_weight_diff_percent),
            ("max_weight_diff_absolute_cap", self.max_weight_diff_absolute_cap),
        ];
        for (name, value) in caps {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Loads configuration from a TOML file.
    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    #[cfg(feature = "serde")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string. Missing keys take their
    /// default values.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}
