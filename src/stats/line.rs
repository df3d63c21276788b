//! Statistics over text lines.

use serde::Serialize;

use super::counter::FloatCounter;
use crate::model::TextLine;

/// Aggregated spacing summary of a set of text lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextLineStatistic {
    /// Number of lines that contributed
    pub count: usize,
    /// Most common vertical distance between consecutive lines of one area
    pub most_common_pitch: Option<f32>,
    /// Most common line height
    pub most_common_height: Option<f32>,
    pub average_height: Option<f32>,
}

impl TextLineStatistic {
    /// Compute the statistic over lines given in reading order.
    ///
    /// Pitch is only measured between neighbors of the same text area that
    /// are stacked top to bottom.
    pub fn compute(lines: &[TextLine]) -> Self {
        if lines.is_empty() {
            return Self::default();
        }

        let mut pitches = FloatCounter::new();
        let mut heights = FloatCounter::new();
        let mut height_sum = 0.0;

        for line in lines {
            heights.add(line.height());
            height_sum += line.height();
        }
        for pair in lines.windows(2) {
            let (upper, lower) = (&pair[0], &pair[1]);
            if upper.area != lower.area {
                continue;
            }
            let pitch = upper.reference_y() - lower.reference_y();
            if pitch > 0.0 {
                pitches.add(pitch);
            }
        }

        Self {
            count: lines.len(),
            most_common_pitch: pitches.most_common(),
            most_common_height: heights.most_common(),
            average_height: Some(height_sum / lines.len() as f32),
        }
    }

    /// Combine page-level statistics, weighting by line count.
    pub fn aggregate<'a, I>(statistics: I) -> Self
    where
        I: IntoIterator<Item = &'a TextLineStatistic>,
    {
        let mut pitches = FloatCounter::new();
        let mut heights = FloatCounter::new();
        let mut count = 0;
        let mut height_sum = 0.0;

        for stat in statistics {
            if stat.count == 0 {
                continue;
            }
            count += stat.count;
            height_sum += stat.average_height.unwrap_or(0.0) * stat.count as f32;
            for _ in 0..stat.count {
                if let Some(pitch) = stat.most_common_pitch {
                    pitches.add(pitch);
                }
                if let Some(height) = stat.most_common_height {
                    heights.add(height);
                }
            }
        }

        if count == 0 {
            return Self::default();
        }
        Self {
            count,
            most_common_pitch: pitches.most_common(),
            most_common_height: heights.most_common(),
            average_height: Some(height_sum / count as f32),
        }
    }
}
