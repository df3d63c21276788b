//! Text area detection: splits a page at wide whitespace lanes before
//! line tokenization, so lines never run across columns.

use crate::model::{AreaId, LineId, Position, Rectangle, TextArea};
use crate::stats::CharacterStatistic;

use super::glyph::{self, Glyph};
use super::options::LayoutOptions;
use super::xycut::{CutScorer, XyCut};

/// Accepts a cut only across a lane wider (or taller) than the thresholds.
#[derive(Debug, Clone, Copy)]
pub struct AreaScorer {
    /// Minimum width of a vertical lane
    pub lane_width: f32,
    /// Minimum height of a horizontal lane
    pub lane_height: f32,
}

impl<'a> CutScorer<Glyph<'a>> for AreaScorer {
    fn score_vertical(&self, left: &[Glyph<'a>], right: &[Glyph<'a>]) -> f32 {
        match glyph::horizontal_separation(left, right) {
            Some(width) if width > self.lane_width => width,
            _ => -1.0,
        }
    }

    fn score_horizontal(&self, upper: &[Glyph<'a>], lower: &[Glyph<'a>]) -> f32 {
        match glyph::vertical_separation(upper, lower) {
            Some(height) if height > self.lane_height => height,
            _ => -1.0,
        }
    }
}

/// Splits the glyphs of a page into text areas.
#[derive(Debug, Clone, Copy)]
pub struct AreaTokenizer {
    engine: XyCut,
    scorer: AreaScorer,
}

impl AreaTokenizer {
    pub fn new(engine: XyCut, scorer: AreaScorer) -> Self {
        Self { engine, scorer }
    }

    /// Derive lane thresholds from glyph sizes.
    ///
    /// Uses the larger of the page and document averages, so a sparse page
    /// with unusually small glyphs is not shredded into fragments.
    pub fn from_statistics(
        options: &LayoutOptions,
        page: &CharacterStatistic,
        document: &CharacterStatistic,
    ) -> Self {
        let width = larger(page.average_width, document.average_width);
        let height = larger(page.average_height, document.average_height);
        Self::new(
            XyCut::new(options.cut),
            AreaScorer {
                lane_width: width * options.area_lane_width_factor,
                lane_height: height * options.area_lane_height_factor,
            },
        )
    }

    pub fn scorer(&self) -> &AreaScorer {
        &self.scorer
    }

    /// Split glyphs into areas in sweep order.
    pub fn tokenize<'a>(&self, glyphs: Vec<Glyph<'a>>) -> Vec<Vec<Glyph<'a>>> {
        self.engine.cut(glyphs, &self.scorer)
    }

    /// Build a text area from its glyphs and the lines tokenized from it.
    pub fn build_area(
        &self,
        page: u32,
        id: AreaId,
        glyphs: &[Glyph<'_>],
        lines: Vec<LineId>,
    ) -> Option<TextArea> {
        let rectangle = Rectangle::from_elements(glyphs)?;
        let statistic = glyph::statistic(glyphs);

        log::debug!(
            "Area {} on page {}: {:?} {} characters, {} lines, font={:?} size={:?}",
            id.index(),
            page,
            rectangle,
            statistic.count,
            lines.len(),
            statistic.most_common_font_face.as_ref().map(|f| &f.font.name),
            statistic.most_common_font_size
        );

        Some(TextArea {
            characters: glyphs.iter().map(|g| g.id).collect(),
            lines,
            position: Position::new(page, rectangle),
            statistic,
        })
    }
}

fn larger(a: Option<f32>, b: Option<f32>) -> f32 {
    match (a, b) {
        (Some(a), Some(b)) => a.max(b),
        (Some(v), None) | (None, Some(v)) => v,
        (None, None) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Character, Font, FontFace};

    fn character(text: &str, min_x: f32, min_y: f32) -> Character {
        Character::new(
            text,
            Rectangle::new(min_x, min_y, min_x + 5.0, min_y + 10.0),
            FontFace::new(Font::new("Times"), 10.0),
        )
    }

    fn tokenizer(characters: &[Character]) -> AreaTokenizer {
        let stat = CharacterStatistic::compute(characters);
        AreaTokenizer::from_statistics(&LayoutOptions::default(), &stat, &stat)
    }

    #[test]
    fn test_lane_thresholds_from_averages() {
        let characters = vec![character("a", 0.0, 0.0), character("b", 6.0, 0.0)];
        let tokenizer = tokenizer(&characters);
        assert_eq!(tokenizer.scorer().lane_width, 12.5);
        assert!((tokenizer.scorer().lane_height - 12.0).abs() < 1e-4);
    }

    #[test]
    fn test_word_gaps_do_not_split_areas() {
        let characters = vec![
            character("a", 0.0, 0.0),
            character("b", 6.0, 0.0),
            character("c", 20.0, 0.0),
        ];
        let areas = tokenizer(&characters).tokenize(Glyph::collect(1, &characters));
        assert_eq!(areas.len(), 1);
    }

    #[test]
    fn test_two_columns() {
        let characters = vec![
            character("a", 0.0, 20.0),
            character("b", 6.0, 20.0),
            character("c", 0.0, 0.0),
            character("x", 100.0, 20.0),
            character("y", 106.0, 0.0),
        ];
        let areas = tokenizer(&characters).tokenize(Glyph::collect(1, &characters));

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].len(), 3);
        assert!(areas[1]
            .iter()
            .all(|g| g.character.bbox.unwrap().min_x() >= 100.0));
    }

    #[test]
    fn test_tall_gap_splits_blocks() {
        let characters = vec![character("a", 0.0, 100.0), character("b", 0.0, 0.0)];
        let areas = tokenizer(&characters).tokenize(Glyph::collect(1, &characters));
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0][0].character.text, "a");
    }

    #[test]
    fn test_build_area() {
        let characters = vec![character("a", 0.0, 0.0), character("b", 6.0, 0.0)];
        let tokenizer = tokenizer(&characters);
        let glyphs = Glyph::collect(1, &characters);
        let area = tokenizer
            .build_area(1, AreaId(0), &glyphs, vec![LineId(0)])
            .unwrap();
        assert_eq!(area.characters.len(), 2);
        assert_eq!(area.lines, vec![LineId(0)]);
        assert_eq!(
            area.position.rectangle,
            Rectangle::new(0.0, 0.0, 11.0, 10.0).unwrap()
        );
    }
}
