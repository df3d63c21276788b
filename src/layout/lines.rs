//! Line tokenization: horizontal cuts only.

use crate::lexicon;
use crate::model::{
    compare_min_x, AreaId, LineSegment, Position, Rectangle, TextLine, WordId,
};
use crate::stats::FloatCounter;

use super::glyph::{self, Glyph};
use super::options::CutOptions;
use super::xycut::{CutScorer, XyCut};

/// Accepts a horizontal cut when the halves do not overlap vertically.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineScorer;

impl<'a> CutScorer<Glyph<'a>> for LineScorer {
    fn score_vertical(&self, _left: &[Glyph<'a>], _right: &[Glyph<'a>]) -> f32 {
        -1.0
    }

    fn score_horizontal(&self, upper: &[Glyph<'a>], lower: &[Glyph<'a>]) -> f32 {
        glyph::vertical_separation(upper, lower).unwrap_or(-1.0)
    }
}

/// Splits the glyphs of a text area into lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineTokenizer {
    engine: XyCut,
}

impl LineTokenizer {
    pub fn new(cut: CutOptions) -> Self {
        Self {
            engine: XyCut::new(cut),
        }
    }

    /// Split glyphs into lines in sweep order, each sorted left to right.
    pub fn tokenize<'a>(&self, glyphs: Vec<Glyph<'a>>) -> Vec<Vec<Glyph<'a>>> {
        let mut lines = self.engine.cut(glyphs, &LineScorer);
        for line in &mut lines {
            line.sort_by(compare_min_x);
        }
        lines
    }

    /// Build a text line from its sorted glyphs and already tokenized words.
    ///
    /// Returns `None` when no glyph carries geometry.
    pub fn build_line(
        &self,
        page: u32,
        area: AreaId,
        glyphs: &[Glyph<'_>],
        words: Vec<WordId>,
        text: String,
    ) -> Option<TextLine> {
        let rectangle = Rectangle::from_elements(glyphs)?;
        let baseline = compute_baseline(glyphs, &rectangle);
        let statistic = glyph::statistic(glyphs);

        log::debug!(
            "Line on page {}: {:?} font={:?} size={:?} baseline={:?} text={:?}",
            page,
            rectangle,
            statistic.most_common_font_face.as_ref().map(|f| &f.font.name),
            statistic.most_common_font_size,
            baseline.map(|b| b.start_y),
            text
        );

        Some(TextLine {
            area,
            characters: glyphs.iter().map(|g| g.id).collect(),
            words,
            text,
            baseline,
            position: Position::new(page, rectangle),
            statistic,
        })
    }
}

/// The most common bottom edge among glyphs that rest on the baseline,
/// spanning the whole line horizontally.
pub fn compute_baseline(glyphs: &[Glyph<'_>], line: &Rectangle) -> Option<LineSegment> {
    let mut bottoms = FloatCounter::new();
    for glyph in glyphs {
        if !lexicon::is_baseline_character(glyph.character) {
            continue;
        }
        if let Some(bbox) = glyph.character.bbox {
            bottoms.add(bbox.min_y());
        }
    }
    bottoms
        .most_common()
        .map(|y| LineSegment::horizontal(line.min_x(), line.max_x(), y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CharId, Character, Font, FontFace};

    fn character(text: &str, min_x: f32, min_y: f32, max_y: f32) -> Character {
        Character::new(
            text,
            Rectangle::new(min_x, min_y, min_x + 5.0, max_y),
            FontFace::new(Font::new("Times"), 10.0),
        )
    }

    fn glyphs(characters: &[Character]) -> Vec<Glyph<'_>> {
        Glyph::collect(1, characters)
    }

    fn texts(line: &[Glyph<'_>]) -> String {
        line.iter().map(|g| g.character.text.as_str()).collect()
    }

    #[test]
    fn test_two_lines_top_to_bottom() {
        let characters = vec![
            character("d", 6.0, 0.0, 10.0),
            character("a", 0.0, 20.0, 30.0),
            character("c", 0.0, 0.0, 10.0),
            character("b", 6.0, 20.0, 30.0),
        ];
        let lines = LineTokenizer::default().tokenize(glyphs(&characters));

        assert_eq!(lines.len(), 2);
        assert_eq!(texts(&lines[0]), "ab");
        assert_eq!(texts(&lines[1]), "cd");
    }

    #[test]
    fn test_columns_are_not_split() {
        // Side by side on the same band: one line, never two.
        let characters = vec![
            character("x", 0.0, 0.0, 10.0),
            character("y", 200.0, 0.0, 10.0),
        ];
        let lines = LineTokenizer::default().tokenize(glyphs(&characters));
        assert_eq!(lines.len(), 1);
        assert_eq!(texts(&lines[0]), "xy");
    }

    #[test]
    fn test_overlapping_bands_stay_together() {
        // A subscript dipping below the band does not start a new line.
        let characters = vec![
            character("H", 0.0, 10.0, 20.0),
            character("2", 6.0, 6.0, 14.0),
            character("O", 12.0, 10.0, 20.0),
        ];
        let lines = LineTokenizer::default().tokenize(glyphs(&characters));
        assert_eq!(lines.len(), 1);
        assert_eq!(texts(&lines[0]), "H2O");
    }

    #[test]
    fn test_baseline_ignores_descenders() {
        let characters = vec![
            character("a", 0.0, 10.0, 18.0),
            character("g", 6.0, 7.0, 18.0),
            character("y", 12.0, 7.0, 18.0),
            character("e", 18.0, 10.0, 18.0),
        ];
        let line_glyphs = glyphs(&characters);
        let rect = Rectangle::from_elements(&line_glyphs).unwrap();
        let baseline = compute_baseline(&line_glyphs, &rect).unwrap();

        assert_eq!(baseline.start_y, 10.0);
        assert_eq!(baseline.start_x, 0.0);
        assert_eq!(baseline.end_x, 23.0);
    }

    #[test]
    fn test_baseline_undefined_without_eligible_glyphs() {
        let characters = vec![character("g", 0.0, 7.0, 18.0), character(",", 6.0, 8.0, 11.0)];
        let line_glyphs = glyphs(&characters);
        let rect = Rectangle::from_elements(&line_glyphs).unwrap();
        assert!(compute_baseline(&line_glyphs, &rect).is_none());
    }

    #[test]
    fn test_build_line() {
        let characters = vec![
            character("O", 0.0, 10.0, 20.0),
            character("K", 6.0, 10.0, 20.0),
        ];
        let line_glyphs = glyphs(&characters);
        let line = LineTokenizer::default()
            .build_line(
                4,
                AreaId(0),
                &line_glyphs,
                vec![WordId(0)],
                "OK".to_string(),
            )
            .unwrap();

        assert_eq!(line.characters, vec![CharId(0), CharId(1)]);
        assert_eq!(line.position.page, 4);
        assert_eq!(line.rectangle(), Rectangle::new(0.0, 10.0, 11.0, 20.0).unwrap());
        assert_eq!(line.statistic.count, 2);
        assert_eq!(line.reference_y(), 10.0);
    }
}
