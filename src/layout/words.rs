//! Word tokenization: vertical cuts only.

use crate::lexicon;
use crate::model::{compare_min_x, LineId, Position, Rectangle, Word};

use super::glyph::{self, Glyph};
use super::options::CutOptions;
use super::xycut::{CutScorer, XyCut};

/// Accepts a vertical cut when the gap between the halves is at least
/// `min_gap` wide, so letter spacing and kerning never split a word.
#[derive(Debug, Clone, Copy)]
pub struct WordScorer {
    pub min_gap: f32,
}

impl Default for WordScorer {
    fn default() -> Self {
        Self { min_gap: 1.0 }
    }
}

impl<'a> CutScorer<Glyph<'a>> for WordScorer {
    fn score_vertical(&self, left: &[Glyph<'a>], right: &[Glyph<'a>]) -> f32 {
        match glyph::horizontal_separation(left, right) {
            Some(width) if width >= self.min_gap => width,
            _ => -1.0,
        }
    }

    fn score_horizontal(&self, _upper: &[Glyph<'a>], _lower: &[Glyph<'a>]) -> f32 {
        -1.0
    }
}

/// Splits the glyphs of a line into words.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer {
    engine: XyCut,
    scorer: WordScorer,
}

impl WordTokenizer {
    /// `min_word_gap` replaces the engine's minimum vertical gap, so it is
    /// the only threshold a word boundary has to pass.
    pub fn new(cut: CutOptions, min_word_gap: f32) -> Self {
        let cut = CutOptions {
            min_vertical_gap: min_word_gap,
            ..cut
        };
        Self {
            engine: XyCut::new(cut),
            scorer: WordScorer {
                min_gap: min_word_gap,
            },
        }
    }

    /// Split glyphs into words in sweep order, each sorted left to right.
    pub fn tokenize<'a>(&self, glyphs: Vec<Glyph<'a>>) -> Vec<Vec<Glyph<'a>>> {
        let mut words = self.engine.cut(glyphs, &self.scorer);
        for word in &mut words {
            word.sort_by(compare_min_x);
        }
        words
    }

    /// Build a word from its sorted glyphs.
    ///
    /// Hyphenation is only evaluated when `last_in_line` is set.
    pub fn build_word(
        &self,
        page: u32,
        line: LineId,
        glyphs: &[Glyph<'_>],
        last_in_line: bool,
    ) -> Option<Word> {
        let rectangle = Rectangle::from_elements(glyphs)?;
        let text: String = glyphs.iter().map(|g| g.character.text.as_str()).collect();
        let hyphenated = last_in_line && is_hyphenated(glyphs);

        if hyphenated {
            log::debug!("Hyphenated word on page {}: {:?}", page, text);
        }

        Some(Word {
            line,
            characters: glyphs.iter().map(|g| g.id).collect(),
            text,
            hyphenated,
            statistic: glyph::statistic(glyphs),
            positions: vec![Position::new(page, rectangle)],
        })
    }
}

/// At least two glyphs, the last one hyphen-class.
fn is_hyphenated(glyphs: &[Glyph<'_>]) -> bool {
    glyphs.len() >= 2
        && glyphs
            .last()
            .is_some_and(|g| lexicon::is_hyphen(g.character))
}
