//! Opaque icon glyphs.
//!
//! Controls treat icons as opaque renderables supplied by the caller. The
//! library ships no raster image stack, so an icon is a short glyph string
//! (typically a single symbol) drawn with the text pipeline, with an
//! optional tint override.

use crate::types::Color;

/// An opaque icon renderable.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    glyph: String,
    tint: Option<Color>,
}

impl Icon {
    /// Create an icon from a glyph string.
    pub fn new(glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            tint: None,
        }
    }

    /// Create an icon with a tint color.
    pub fn with_tint(glyph: impl Into<String>, tint: Color) -> Self {
        Self {
            glyph: glyph.into(),
            tint: Some(tint),
        }
    }

    /// The glyph string.
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// The tint override, if any.
    pub fn tint(&self) -> Option<Color> {
        self.tint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tint_is_optional() {
        assert_eq!(Icon::new("●").tint(), None);
        let tinted = Icon::with_tint("●", Color::from_rgb8(0, 128, 0));
        assert!(tinted.tint().is_some());
        assert_eq!(tinted.glyph(), "●");
    }
}
