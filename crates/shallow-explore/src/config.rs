//! Configuration for an exploration run.
//!
//! Built with a fluent builder and validated on `build()`. The terminal theme
//! lives here as a plain value handed to the renderer.

use crate::analysis::anomaly::DEFAULT_Z_THRESHOLD;
use crate::analysis::frequency::{DEFAULT_BAR_WIDTH, DEFAULT_TOP_N};
use crate::profiler::DEFAULT_INFERENCE_SAMPLE;
use serde::{Deserialize, Serialize};

/// Terminal colour theme for rendered panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Grey text on a near-white background
    #[default]
    Light,
    /// Near-white text on a grey background
    Dark,
}

/// Settings shared by the analyses and the renderer.
///
/// # Example
///
/// ```rust
/// use shallow_explore::{ExploreConfig, Theme};
///
/// let config = ExploreConfig::builder()
///     .anomaly_threshold(2.5)
///     .theme(Theme::Dark)
///     .build()
///     .unwrap();
/// assert_eq!(config.histogram_top_n, 10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreConfig {
    /// Z-score above which a value is an anomaly.
    /// Default: 3.0
    pub anomaly_threshold: f64,

    /// Leading data rows sampled for type inference.
    /// Default: 10
    pub inference_sample_size: usize,

    /// Entries shown per histogram.
    /// Default: 10
    pub histogram_top_n: usize,

    /// Length of the longest histogram bar once scaling kicks in.
    /// Default: 75
    pub histogram_bar_width: usize,

    /// Panel colour theme.
    /// Default: Light
    pub theme: Theme,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            anomaly_threshold: DEFAULT_Z_THRESHOLD,
            inference_sample_size: DEFAULT_INFERENCE_SAMPLE,
            histogram_top_n: DEFAULT_TOP_N,
            histogram_bar_width: DEFAULT_BAR_WIDTH,
            theme: Theme::default(),
        }
    }
}

impl ExploreConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ExploreConfigBuilder {
        ExploreConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.anomaly_threshold.is_finite() || self.anomaly_threshold <= 0.0 {
            return Err(ConfigValidationError::InvalidThreshold(
                self.anomaly_threshold,
            ));
        }

        for (field, value) in [
            ("inference_sample_size", self.inference_sample_size),
            ("histogram_top_n", self.histogram_top_n),
            ("histogram_bar_width", self.histogram_bar_width),
        ] {
            if value == 0 {
                return Err(ConfigValidationError::ZeroSize {
                    field: field.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid anomaly threshold: {0} (must be a positive, finite number)")]
    InvalidThreshold(f64),

    #[error("Invalid value for '{field}': must be at least 1")]
    ZeroSize { field: String },
}

/// Builder for [`ExploreConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct ExploreConfigBuilder {
    anomaly_threshold: Option<f64>,
    inference_sample_size: Option<usize>,
    histogram_top_n: Option<usize>,
    histogram_bar_width: Option<usize>,
    theme: Option<Theme>,
}

impl ExploreConfigBuilder {
    /// Set the Z-score cut-off for anomaly detection.
    pub fn anomaly_threshold(mut self, threshold: f64) -> Self {
        self.anomaly_threshold = Some(threshold);
        self
    }

    /// Set how many leading rows feed type inference.
    pub fn inference_sample_size(mut self, rows: usize) -> Self {
        self.inference_sample_size = Some(rows);
        self
    }

    pub fn histogram_top_n(mut self, n: usize) -> Self {
        self.histogram_top_n = Some(n);
        self
    }

    pub fn histogram_bar_width(mut self, width: usize) -> Self {
        self.histogram_bar_width = Some(width);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `ExploreConfig` or an error if validation fails.
    pub fn build(self) -> Result<ExploreConfig, ConfigValidationError> {
        let defaults = ExploreConfig::default();
        let config = ExploreConfig {
            anomaly_threshold: self.anomaly_threshold.unwrap_or(defaults.anomaly_threshold),
            inference_sample_size: self
                .inference_sample_size
                .unwrap_or(defaults.inference_sample_size),
            histogram_top_n: self.histogram_top_n.unwrap_or(defaults.histogram_top_n),
            histogram_bar_width: self
                .histogram_bar_width
                .unwrap_or(defaults.histogram_bar_width),
            theme: self.theme.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}
