//! Text areas, lines and words.
//!
//! Each page stores its elements in dense arrays; elements refer to each
//! other through the typed indices defined here instead of owning pointers.

use serde::{Deserialize, Serialize};

use super::geometry::{HasBoundingBox, LineSegment, Position, Rectangle};
use crate::stats::CharacterStatistic;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(pub usize);

        impl $name {
            /// Position in the owning page's array.
            pub fn index(self) -> usize {
                self.0
            }
        }
    };
}

arena_id!(
    /// Index of a character in `Page::characters`.
    CharId
);
arena_id!(
    /// Index of a text area in `Page::areas`.
    AreaId
);
arena_id!(
    /// Index of a text line in `Page::lines`.
    LineId
);
arena_id!(
    /// Index of a word in `Page::words`.
    WordId
);
arena_id!(
    /// Index of a paragraph in `Page::paragraphs`.
    ParagraphId
);

/// A region of a page separated from its surroundings by whitespace lanes.
#[derive(Debug, Clone, Serialize)]
pub struct TextArea {
    pub characters: Vec<CharId>,
    pub lines: Vec<LineId>,
    pub position: Position,
    pub statistic: CharacterStatistic,
}

/// A text line: characters sharing a horizontal band, left to right.
#[derive(Debug, Clone, Serialize)]
pub struct TextLine {
    /// The area this line was tokenized from
    pub area: AreaId,
    /// Characters in reading order
    pub characters: Vec<CharId>,
    /// Words in reading order (filled by the word tokenizer)
    pub words: Vec<WordId>,
    /// Word texts joined by single spaces
    pub text: String,
    /// Most common bottom edge of baseline characters, if any
    pub baseline: Option<LineSegment>,
    pub position: Position,
    pub statistic: CharacterStatistic,
}

impl TextLine {
    pub fn rectangle(&self) -> Rectangle {
        self.position.rectangle
    }

    /// Height of the line's bounding box.
    pub fn height(&self) -> f32 {
        self.position.rectangle.height()
    }

    /// The Y value used to measure line pitch: the baseline when known,
    /// otherwise the bottom edge.
    pub fn reference_y(&self) -> f32 {
        self.baseline
            .map(|b| b.start_y)
            .unwrap_or_else(|| self.position.rectangle.min_y())
    }
}

impl HasBoundingBox for TextLine {
    fn bounding_box(&self) -> Option<Rectangle> {
        Some(self.position.rectangle)
    }
}

/// A word: a run of characters within one line.
#[derive(Debug, Clone, Serialize)]
pub struct Word {
    pub line: LineId,
    /// Characters sorted left to right
    pub characters: Vec<CharId>,
    pub text: String,
    /// Set only on the last word of a line ending in a hyphen glyph
    pub hyphenated: bool,
    pub statistic: CharacterStatistic,
    /// One position per page/column the word spans
    pub positions: Vec<Position>,
}

impl Word {
    pub fn first_position(&self) -> Option<&Position> {
        self.positions.first()
    }
}

impl HasBoundingBox for Word {
    fn bounding_box(&self) -> Option<Rectangle> {
        self.first_position().map(|p| p.rectangle)
    }
}
