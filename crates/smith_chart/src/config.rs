//! Chart configuration.
//!
//! Loaded once from TOML; every field falls back to the standard chart and
//! unknown keys are rejected.
//!
//! ```toml
//! resistances = [0.0, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0]
//! reactances = [-1.0, 0.0, 1.0]
//! padding = 20.0
//!
//! [resistance_span]
//! start = 0.0
//! end = 1e9
//!
//! [style.boundary]
//! width = 4.0
//!
//! [style.resistance]
//! color = { r = 0.0, g = 0.0, b = 0.0 }
//! width = 3.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::geometry::ResistanceSpan;
use crate::style::ChartStyle;
use crate::viewport::DEFAULT_PADDING;

/// Standard constant-resistance values.
pub const DEFAULT_RESISTANCES: [f64; 7] = [0.0, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0];

/// Standard constant-reactance values.
pub const DEFAULT_REACTANCES: [f64; 12] = [
    -10.0, -5.0, -1.0, -0.5, -0.2, 0.0, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0,
];

/// What the chart draws and how.
///
/// Value lists keep their order; duplicates and unsorted input are drawn
/// as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Normalized resistances, one circle each.
    pub resistances: Vec<f64>,
    /// Normalized reactances, one arc (or the real axis) each.
    pub reactances: Vec<f64>,
    /// Gap between chart boundary and canvas edge, in pixels.
    pub padding: f64,
    /// Resistance range each reactance arc spans.
    pub resistance_span: ResistanceSpan,
    /// Strokes.
    pub style: ChartStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            resistances: DEFAULT_RESISTANCES.to_vec(),
            reactances: DEFAULT_REACTANCES.to_vec(),
            padding: DEFAULT_PADDING,
            resistance_span: ResistanceSpan::FULL,
            style: ChartStyle::default(),
        }
    }
}

impl ChartConfig {
    /// Creates a config with custom value lists and default styling.
    #[must_use]
    pub fn with_values(resistances: Vec<f64>, reactances: Vec<f64>) -> Self {
        Self {
            resistances,
            reactances,
            ..Self::default()
        }
    }

    /// Sets the padding.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidConfig`] if the text is not valid TOML
    /// or a field has the wrong type.
    pub fn from_toml_str(text: &str) -> ChartResult<Self> {
        toml::from_str(text).map_err(|e| ChartError::InvalidConfig(e.to_string()))
    }

    /// Loads a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::ConfigRead`] if the file cannot be read, or
    /// [`ChartError::InvalidConfig`] if its contents do not parse.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ChartError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Serializes the config back to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidConfig`] if a value cannot be
    /// represented in TOML.
    pub fn to_toml_string(&self) -> ChartResult<String> {
        toml::to_string(self).map_err(|e| ChartError::InvalidConfig(e.to_string()))
    }
}
