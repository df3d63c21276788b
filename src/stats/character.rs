//! Typographic and positional statistics over sets of characters.

use serde::Serialize;

use super::counter::{FloatCounter, ObjectCounter};
use crate::model::{Character, Color, FontFace, Rectangle};

/// Aggregated summary of a set of characters.
///
/// Computed once and never mutated. Every field is `None` when the summary
/// was computed over zero characters with usable geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CharacterStatistic {
    /// Number of characters that contributed
    pub count: usize,
    pub most_common_font_face: Option<FontFace>,
    pub most_common_color: Option<Color>,
    pub most_common_font_size: Option<f32>,
    pub average_font_size: Option<f32>,
    pub average_width: Option<f32>,
    pub average_height: Option<f32>,
    pub smallest_min_x: Option<f32>,
    pub smallest_min_y: Option<f32>,
    pub largest_max_x: Option<f32>,
    pub largest_max_y: Option<f32>,
}

/// Running accumulator shared by `compute` and `aggregate`.
#[derive(Default)]
struct Accumulator {
    count: usize,
    fonts: ObjectCounter<FontFace>,
    colors: ObjectCounter<Color>,
    sizes: FloatCounter,
    font_size_sum: f32,
    width_sum: f32,
    height_sum: f32,
    extent: Option<Rectangle>,
}

impl Accumulator {
    fn extend_extent(&mut self, rect: Rectangle) {
        self.extent = Some(match self.extent {
            Some(extent) => extent.union(&rect),
            None => rect,
        });
    }

    fn finish(self) -> CharacterStatistic {
        if self.count == 0 {
            return CharacterStatistic::default();
        }
        let n = self.count as f32;
        CharacterStatistic {
            count: self.count,
            most_common_font_face: self.fonts.most_common().cloned(),
            most_common_color: self.colors.most_common().copied(),
            most_common_font_size: self.sizes.most_common(),
            average_font_size: Some(self.font_size_sum / n),
            average_width: Some(self.width_sum / n),
            average_height: Some(self.height_sum / n),
            smallest_min_x: self.extent.map(|r| r.min_x()),
            smallest_min_y: self.extent.map(|r| r.min_y()),
            largest_max_x: self.extent.map(|r| r.max_x()),
            largest_max_y: self.extent.map(|r| r.max_y()),
        }
    }
}

impl CharacterStatistic {
    /// Compute the statistic over the given characters in one pass.
    ///
    /// Characters without a usable bounding box are skipped.
    pub fn compute<'a, I>(characters: I) -> Self
    where
        I: IntoIterator<Item = &'a Character>,
    {
        let mut acc = Accumulator::default();
        for character in characters {
            let Some(rect) = character.bbox else {
                continue;
            };
            acc.count += 1;
            acc.fonts.add(character.font_face.clone());
            acc.colors.add(character.color);
            acc.sizes.add(character.font_face.size);
            acc.font_size_sum += character.font_face.size;
            acc.width_sum += rect.width();
            acc.height_sum += rect.height();
            acc.extend_extent(rect);
        }
        acc.finish()
    }

    /// Combine already computed statistics without revisiting characters.
    ///
    /// Counters are weighted by each statistic's character count, so the
    /// result matches `compute` for averages and extents and approximates it
    /// for the most common values.
    pub fn aggregate<'a, I>(statistics: I) -> Self
    where
        I: IntoIterator<Item = &'a CharacterStatistic>,
    {
        let mut acc = Accumulator::default();
        for stat in statistics {
            if stat.count == 0 {
                continue;
            }
            let n = stat.count as f32;
            acc.count += stat.count;
            if let Some(face) = &stat.most_common_font_face {
                acc.fonts.add_n(face.clone(), stat.count);
            }
            if let Some(color) = stat.most_common_color {
                acc.colors.add_n(color, stat.count);
            }
            if let Some(size) = stat.most_common_font_size {
                for _ in 0..stat.count {
                    acc.sizes.add(size);
                }
            }
            acc.font_size_sum += stat.average_font_size.unwrap_or(0.0) * n;
            acc.width_sum += stat.average_width.unwrap_or(0.0) * n;
            acc.height_sum += stat.average_height.unwrap_or(0.0) * n;
            if let Some(rect) = stat.extent() {
                acc.extend_extent(rect);
            }
        }
        acc.finish()
    }

    /// The rectangle spanned by the smallest and largest extents.
    pub fn extent(&self) -> Option<Rectangle> {
        Rectangle::new(
            self.smallest_min_x?,
            self.smallest_min_y?,
            self.largest_max_x?,
            self.largest_max_y?,
        )
    }

    /// True if no character contributed.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
