//! Positioned glyphs as delivered by the content-stream decoder.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::geometry::{lenient_rectangle, round_coordinate, HasBoundingBox, Rectangle};

/// A font as referenced by a glyph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    /// Full font name (e.g., "Times-Bold")
    pub name: String,
    /// Font family, when the decoder knows it
    pub family: Option<String>,
    pub is_bold: bool,
    pub is_italic: bool,
    /// Whether this is a Type3 font (glyphs drawn by content streams)
    pub is_type3: bool,
}

impl Font {
    /// Create a font from its full name, inferring bold/italic from the name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let lower = name.to_lowercase();
        let is_bold =
            lower.contains("bold") || lower.contains("black") || lower.contains("heavy");
        let is_italic = lower.contains("italic") || lower.contains("oblique");

        Self {
            name,
            family: None,
            is_bold,
            is_italic,
            is_type3: false,
        }
    }
}

/// A font at a specific size.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FontFace {
    pub font: Font,
    /// Font size in points
    pub size: f32,
}

impl FontFace {
    pub fn new(font: Font, size: f32) -> Self {
        Self { font, size }
    }
}

// Sizes are compared at coordinate precision so that faces can key counters.
impl PartialEq for FontFace {
    fn eq(&self, other: &Self) -> bool {
        self.font == other.font
            && round_coordinate(self.size).to_bits() == round_coordinate(other.size).to_bits()
    }
}

impl Eq for FontFace {}

impl Hash for FontFace {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.font.hash(state);
        round_coordinate(self.size).to_bits().hash(state);
    }
}

/// An RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single positioned glyph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Unicode value (may hold more than one code point, e.g. ligatures)
    pub text: String,
    /// Bounding box; `None` if the decoder produced missing or inverted geometry
    #[serde(default, deserialize_with = "lenient_rectangle")]
    pub bbox: Option<Rectangle>,
    pub font_face: FontFace,
    #[serde(default)]
    pub color: Color,
}

impl Character {
    /// Create a black glyph.
    pub fn new(text: impl Into<String>, bbox: Option<Rectangle>, font_face: FontFace) -> Self {
        Self {
            text: text.into(),
            bbox,
            font_face,
            color: Color::BLACK,
        }
    }

    /// Set the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// The last Unicode scalar of this glyph's text.
    pub fn last_char(&self) -> Option<char> {
        self.text.chars().last()
    }
}

impl HasBoundingBox for Character {
    fn bounding_box(&self) -> Option<Rectangle> {
        self.bbox
    }
}
