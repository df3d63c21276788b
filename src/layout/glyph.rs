//! Borrowed view of a page character used while tokenizing.

use crate::model::{CharId, Character, HasBoundingBox, Rectangle};
use crate::stats::CharacterStatistic;

/// A character together with its index in the page arena.
#[derive(Debug, Clone, Copy)]
pub struct Glyph<'a> {
    pub id: CharId,
    pub character: &'a Character,
}

impl<'a> Glyph<'a> {
    pub fn new(id: CharId, character: &'a Character) -> Self {
        Self { id, character }
    }

    /// Collect the glyphs of a page that can take part in layout analysis.
    ///
    /// Characters without a usable bounding box, and blank characters, are
    /// skipped. Blank glyphs would bridge the very gaps the tokenizers cut at.
    pub fn collect(page_number: u32, characters: &'a [Character]) -> Vec<Glyph<'a>> {
        let mut skipped = 0usize;
        let glyphs: Vec<Glyph<'a>> = characters
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                let usable = c.bbox.is_some() && !c.text.trim().is_empty();
                if c.bbox.is_none() {
                    skipped += 1;
                }
                usable
            })
            .map(|(index, c)| Glyph::new(CharId(index), c))
            .collect();

        if skipped > 0 {
            log::warn!(
                "Page {}: skipped {} characters without a valid bounding box",
                page_number,
                skipped
            );
        }
        glyphs
    }
}

impl HasBoundingBox for Glyph<'_> {
    fn bounding_box(&self) -> Option<Rectangle> {
        self.character.bbox
    }
}

/// Character statistic over a slice of glyphs.
pub(crate) fn statistic(glyphs: &[Glyph<'_>]) -> CharacterStatistic {
    CharacterStatistic::compute(glyphs.iter().map(|g| g.character))
}

/// Smallest `min_y` of the upper half minus the largest `max_y` of the lower.
pub(crate) fn vertical_separation(upper: &[Glyph<'_>], lower: &[Glyph<'_>]) -> Option<f32> {
    let upper = Rectangle::from_elements(upper)?;
    let lower = Rectangle::from_elements(lower)?;
    Some(upper.min_y() - lower.max_y())
}

/// Smallest `min_x` of the right half minus the largest `max_x` of the left.
pub(crate) fn horizontal_separation(left: &[Glyph<'_>], right: &[Glyph<'_>]) -> Option<f32> {
    let left = Rectangle::from_elements(left)?;
    let right = Rectangle::from_elements(right)?;
    Some(right.min_x() - left.max_x())
}
