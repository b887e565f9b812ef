use crate::LayoutError;
use boxglue_types::Font;
use serde::Deserialize;

/// How much a node shrinks when going to the next-smallest size level.
pub const SHRINK_FACTOR: f64 = 0.7;

/// The inverse of [`SHRINK_FACTOR`]; growing undoes exactly one shrink step.
pub const GROW_FACTOR: f64 = 1.0 / SHRINK_FACTOR;

/// The number of size levels, beyond which nodes no longer get smaller.
pub const NUM_SIZE_LEVELS: i32 = 6;

/// Defaults used to build the initial [`State`](crate::State).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct LayoutConfig {
    /// The font glyph nodes are created with.
    ///
    /// Defaults to the backend's `"default"` face, 12pt regular.
    pub font: Font,
    /// Output resolution handed to every backend call.
    ///
    /// Defaults to `72.0`, where one point is one output unit.
    pub dpi: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font: Font::default(),
            dpi: 72.0,
        }
    }
}

impl LayoutConfig {
    /// Parses a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: LayoutConfig =
            serde_json::from_str(json).map_err(|e| LayoutError::Config(e.to_string()))?;
        if !(config.dpi.is_finite() && config.dpi > 0.0) {
            return Err(LayoutError::Config(format!(
                "dpi must be a positive number, got {}",
                config.dpi
            )));
        }
        Ok(config)
    }
}
