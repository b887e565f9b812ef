use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The face variant a backend should select for a glyph.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FontKind {
    #[default]
    Regular,
    Italic,
    Bold,
    BoldItalic,
}

impl FontKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontKind::Regular => "rm",
            FontKind::Italic => "it",
            FontKind::Bold => "bf",
            FontKind::BoldItalic => "bfit",
        }
    }
}

/// A font request: family name, point size and face variant.
///
/// The size is mutated in place when a glyph node is shrunk or grown, so the
/// same `Font` value always describes the glyph as it will be rendered.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Font {
    pub name: String,
    pub size: f64,
    #[serde(default)]
    pub kind: FontKind,
}

impl Eq for Font {}

impl Hash for Font {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size.to_bits().hash(state);
        self.kind.hash(state);
    }
}

impl Default for Font {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            size: 12.0,
            kind: FontKind::Regular,
        }
    }
}

impl Font {
    pub fn new(name: impl Into<String>, size: f64, kind: FontKind) -> Self {
        Self {
            name: name.into(),
            size,
            kind,
        }
    }

    /// Returns a copy of this font scaled by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            size: self.size * factor,
            ..self.clone()
        }
    }

    /// Whether two fonts name the same face at the same size.
    pub fn same_face(&self, other: &Font) -> bool {
        self.name == other.name && self.size == other.size
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.name, self.kind.as_str(), self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_keeps_face() {
        let font = Font::new("cm", 10.0, FontKind::Italic);
        let small = font.scaled(0.5);
        assert_eq!(small.size, 5.0);
        assert_eq!(small.name, "cm");
        assert_eq!(small.kind, FontKind::Italic);
        assert!(!font.same_face(&small));
    }

    #[test]
    fn deserializes_with_default_kind() {
        let font: Font = serde_json::from_str(r#"{"name":"dejavu","size":9.5}"#).unwrap();
        assert_eq!(font, Font::new("dejavu", 9.5, FontKind::Regular));
    }

    #[test]
    fn rejects_unknown_fields() {
        let res: Result<Font, _> =
            serde_json::from_str(r#"{"name":"x","size":1.0,"weight":700}"#);
        assert!(res.is_err());
    }
}
