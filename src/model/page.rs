//! Page-level types.

use serde::{Deserialize, Serialize};

use super::character::Character;
use super::geometry::Rectangle;
use super::paragraph::Paragraph;
use super::text::{CharId, LineId, ParagraphId, TextArea, TextLine, Word, WordId};
use crate::stats::{CharacterStatistic, TextLineStatistic};

/// One page as produced by the content-stream decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageInput {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width in points
    #[serde(default = "default_width")]
    pub width: f32,

    /// Page height in points
    #[serde(default = "default_height")]
    pub height: f32,

    /// Glyphs in content-stream order
    #[serde(default)]
    pub characters: Vec<Character>,

    /// Bounding boxes of figures (images, form XObjects)
    #[serde(default)]
    pub figures: Vec<Rectangle>,

    /// Bounding boxes of vector shapes
    #[serde(default)]
    pub shapes: Vec<Rectangle>,
}

fn default_width() -> f32 {
    612.0
}

fn default_height() -> f32 {
    792.0
}

impl PageInput {
    /// Create an empty US-Letter page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            width: default_width(),
            height: default_height(),
            ..Default::default()
        }
    }

    /// Add a glyph.
    pub fn add_character(&mut self, character: Character) {
        self.characters.push(character);
    }

    /// Builder form of `add_character`.
    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.push(character);
        self
    }
}

/// An analyzed page. Owns every element tokenized from it.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,
    pub width: f32,
    pub height: f32,
    pub characters: Vec<Character>,
    pub figures: Vec<Rectangle>,
    pub shapes: Vec<Rectangle>,
    pub areas: Vec<TextArea>,
    pub lines: Vec<TextLine>,
    pub words: Vec<Word>,
    /// Paragraphs in reading order
    pub paragraphs: Vec<Paragraph>,
    pub character_statistic: CharacterStatistic,
    pub line_statistic: TextLineStatistic,
}

impl Page {
    /// Create a page that has not been tokenized yet.
    pub fn from_input(input: PageInput) -> Self {
        let character_statistic = CharacterStatistic::compute(&input.characters);
        Self {
            number: input.number,
            width: input.width,
            height: input.height,
            characters: input.characters,
            figures: input.figures,
            shapes: input.shapes,
            areas: Vec::new(),
            lines: Vec::new(),
            words: Vec::new(),
            paragraphs: Vec::new(),
            character_statistic,
            line_statistic: TextLineStatistic::default(),
        }
    }

    pub fn character(&self, id: CharId) -> &Character {
        &self.characters[id.index()]
    }

    pub fn line(&self, id: LineId) -> &TextLine {
        &self.lines[id.index()]
    }

    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id.index()]
    }

    pub fn paragraph(&self, id: ParagraphId) -> &Paragraph {
        &self.paragraphs[id.index()]
    }

    /// The words of a line in reading order.
    pub fn line_words<'a>(&'a self, line: &'a TextLine) -> impl Iterator<Item = &'a Word> + 'a {
        line.words.iter().map(move |id| self.word(*id))
    }

    /// The words of a paragraph in reading order.
    pub fn paragraph_words<'a>(
        &'a self,
        paragraph: &'a Paragraph,
    ) -> impl Iterator<Item = &'a Word> + 'a {
        paragraph
            .lines
            .iter()
            .flat_map(move |id| self.line_words(self.line(*id)))
    }

    /// Area covered by all glyphs, figures and shapes on the page.
    pub fn content_area(&self) -> Option<Rectangle> {
        self.character_statistic
            .extent()
            .into_iter()
            .chain(self.figures.iter().copied())
            .chain(self.shapes.iter().copied())
            .reduce(|acc, rect| acc.union(&rect))
    }

    /// Paragraph texts separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Check if the page has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}
