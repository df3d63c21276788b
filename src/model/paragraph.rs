//! Paragraph-level types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::{HasBoundingBox, Position, Rectangle};
use super::text::LineId;
use crate::stats::CharacterStatistic;

/// Typographic signature of a text element: font full name plus font size
/// rounded to whole points.
///
/// Used as a proxy for "visual style" when comparing paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Markup {
    pub font_name: String,
    pub font_size: u32,
}

impl Markup {
    pub fn new(font_name: impl Into<String>, font_size: f32) -> Self {
        Self {
            font_name: font_name.into(),
            font_size: font_size.round().max(0.0) as u32,
        }
    }

    /// Signature of a character statistic's most common font face.
    pub fn from_statistic(stat: &CharacterStatistic) -> Option<Self> {
        stat.most_common_font_face
            .as_ref()
            .map(|face| Self::new(face.font.name.clone(), face.size))
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.font_name, self.font_size)
    }
}

/// Coarse semantic label of a paragraph.
///
/// A closed set: adding a role means revisiting every `match` on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticRole {
    Title,
    Abstract,
    SectionHeading,
    Body,
    Reference,
    PageHeader,
    PageFooter,
    Other,
}

impl SemanticRole {
    /// All roles in declaration order.
    pub const ALL: [SemanticRole; 8] = [
        SemanticRole::Title,
        SemanticRole::Abstract,
        SemanticRole::SectionHeading,
        SemanticRole::Body,
        SemanticRole::Reference,
        SemanticRole::PageHeader,
        SemanticRole::PageFooter,
        SemanticRole::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SemanticRole::Title => "title",
            SemanticRole::Abstract => "abstract",
            SemanticRole::SectionHeading => "section_heading",
            SemanticRole::Body => "body",
            SemanticRole::Reference => "reference",
            SemanticRole::PageHeader => "page_header",
            SemanticRole::PageFooter => "page_footer",
            SemanticRole::Other => "other",
        }
    }

    /// Running elements repeat on every page and are not part of the text flow.
    pub fn is_running_element(self) -> bool {
        match self {
            SemanticRole::PageHeader | SemanticRole::PageFooter => true,
            SemanticRole::Title
            | SemanticRole::Abstract
            | SemanticRole::SectionHeading
            | SemanticRole::Body
            | SemanticRole::Reference
            | SemanticRole::Other => false,
        }
    }
}

impl fmt::Display for SemanticRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A paragraph: consecutive lines of one text area.
#[derive(Debug, Clone, Serialize)]
pub struct Paragraph {
    pub lines: Vec<LineId>,
    /// Line texts joined with de-hyphenation
    pub text: String,
    /// Most common markup among the lines
    pub markup: Option<Markup>,
    /// Assigned after document characterization
    pub role: Option<SemanticRole>,
    pub position: Position,
    pub statistic: CharacterStatistic,
}

impl Paragraph {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn rectangle(&self) -> Rectangle {
        self.position.rectangle
    }
}

impl HasBoundingBox for Paragraph {
    fn bounding_box(&self) -> Option<Rectangle> {
        Some(self.position.rectangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_rounds_size() {
        let markup = Markup::new("Times-Bold", 11.6);
        assert_eq!(markup.font_size, 12);
        assert_eq!(markup.to_string(), "Times-Bold-12");
        assert_eq!(markup, Markup::new("Times-Bold", 12.4));
    }

    #[test]
    fn test_role_names_are_unique() {
        let mut names: Vec<&str> = SemanticRole::ALL.iter().map(|r| r.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SemanticRole::ALL.len());
    }

    #[test]
    fn test_role_serde_name() {
        let json = serde_json::to_string(&SemanticRole::SectionHeading).unwrap();
        assert_eq!(json, "\"section_heading\"");
        assert!(SemanticRole::PageFooter.is_running_element());
        assert!(!SemanticRole::Body.is_running_element());
    }
}
