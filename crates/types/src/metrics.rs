use serde::{Deserialize, Serialize};

/// Glyph metrics as reported by a rendering backend.
///
/// Backends describe glyphs with a bounding box and an advance; the box model
/// derives width/height/depth from these (see `Char` and `Accent` in the
/// layout crate). `height` is the full ink height (`y_max - y_min`) and
/// `iceberg` is the part of the glyph above the baseline.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub advance: f64,
    pub width: f64,
    pub height: f64,
    pub iceberg: f64,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    #[serde(default)]
    pub slanted: bool,
}

impl Metrics {
    /// Multiplies every length by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            advance: self.advance * factor,
            width: self.width * factor,
            height: self.height * factor,
            iceberg: self.iceberg * factor,
            x_min: self.x_min * factor,
            x_max: self.x_max * factor,
            y_min: self.y_min * factor,
            y_max: self.y_max * factor,
            slanted: self.slanted,
        }
    }
}
