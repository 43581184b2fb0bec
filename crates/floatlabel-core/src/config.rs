//! Geometry constants for the floating label.
//!
//! Metrics are fixed for the lifetime of a control. They can be built in code
//! or loaded from JSON; missing fields fall back to the defaults.

use kurbo::Insets;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Height of the docked label band.
pub const DEFAULT_TOP_LABEL_HEIGHT: f64 = 20.0;
/// Gap between the docked band and the body. Negative values overlap them.
pub const DEFAULT_GAP_BETWEEN_LABELS: f64 = -5.0;
/// Height of the text body and of the full-size label.
pub const DEFAULT_BOTTOM_LABEL_HEIGHT: f64 = 28.0;
/// Duration of the dock/undock animation in milliseconds.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 300;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("edge insets must not be negative: {0:?}")]
    NegativeInsets(Insets),
    #[error("Control height must be positive, got {0}")]
    NonPositiveHeight(f64),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Geometry constants shared by every state of the label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelMetrics {
    /// Height reserved for the docked (shrunk) label.
    pub top_label_height: f64,
    /// Vertical gap between the docked label and the text body.
    pub gap_between_labels: f64,
    /// Height of the text body and the full-size label.
    pub bottom_label_height: f64,
    /// Outer padding (`x0` left, `y0` top, `x1` right, `y1` bottom).
    pub edge_insets: Insets,
    /// Duration of animated transitions, in milliseconds.
    pub animation_duration_ms: u64,
}

impl Default for LabelMetrics {
    fn default() -> Self {
        Self {
            top_label_height: DEFAULT_TOP_LABEL_HEIGHT,
            gap_between_labels: DEFAULT_GAP_BETWEEN_LABELS,
            bottom_label_height: DEFAULT_BOTTOM_LABEL_HEIGHT,
            edge_insets: Insets::ZERO,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
        }
    }
}

impl LabelMetrics {
    /// Create metrics with the default constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outer padding.
    pub fn with_edge_insets(mut self, insets: Insets) -> Self {
        self.edge_insets = insets;
        self
    }

    /// Set the animation duration.
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Duration of animated transitions.
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Ratio between the docked and the full-size label.
    pub fn scale(&self) -> f64 {
        self.top_label_height / self.bottom_label_height
    }

    /// Fixed total height of the control.
    ///
    /// Depends only on the constants, never on the bounds.
    pub fn const_height(&self) -> f64 {
        let insets = self.edge_insets;
        insets.y0
            + self.top_label_height
            + self.gap_between_labels
            + self.bottom_label_height
            + insets.y1
    }

    /// Insets of the text body relative to the control bounds.
    pub fn bottom_label_insets(&self) -> Insets {
        let insets = self.edge_insets;
        Insets::new(
            insets.x0,
            insets.y0 + self.top_label_height + self.gap_between_labels,
            insets.x1,
            insets.y1,
        )
    }

    /// Check that the constants describe a drawable control.
    pub fn validate(&self) -> ConfigResult<()> {
        let insets = self.edge_insets;
        let fields = [
            ("top_label_height", self.top_label_height),
            ("gap_between_labels", self.gap_between_labels),
            ("bottom_label_height", self.bottom_label_height),
            ("edge_insets.x0", insets.x0),
            ("edge_insets.y0", insets.y0),
            ("edge_insets.x1", insets.x1),
            ("edge_insets.y1", insets.y1),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        // Both heights feed the scale ratio.
        if self.top_label_height <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "top_label_height",
                value: self.top_label_height,
            });
        }
        if self.bottom_label_height <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "bottom_label_height",
                value: self.bottom_label_height,
            });
        }

        if insets.x0 < 0.0 || insets.y0 < 0.0 || insets.x1 < 0.0 || insets.y1 < 0.0 {
            return Err(ConfigError::NegativeInsets(insets));
        }

        let height = self.const_height();
        if height <= 0.0 {
            return Err(ConfigError::NonPositiveHeight(height));
        }

        Ok(())
    }

    /// Parse and validate metrics from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let metrics: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        metrics.validate()?;
        Ok(metrics)
    }

    /// Serialize metrics to pretty-printed JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load and validate metrics from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json).map_err(|e| match e {
            ConfigError::Parse(msg) => {
                ConfigError::Parse(format!("Failed to parse {}: {}", path.display(), msg))
            }
            other => other,
        })
    }
}
