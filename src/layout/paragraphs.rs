//! Groups the lines of each text area into paragraphs.
//!
//! Two consecutive lines of one area belong to the same paragraph when all
//! of these hold:
//!
//! - their markup is identical (optional, see [`ParagraphPolicy`]),
//! - the pitch between them does not exceed the page's dominant pitch by
//!   more than the configured factor,
//! - they share a left edge, are centered on each other, or the upper one
//!   is the indented first line of the paragraph.
//!
//! Lines of different areas never share a paragraph.

use crate::lexicon;
use crate::model::{LineId, Markup, Page, Paragraph, Position, TextLine};
use crate::stats::{CharacterStatistic, ObjectCounter, TextLineStatistic};

use super::options::ParagraphPolicy;

/// Assembles paragraphs from tokenized lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphAssembler {
    policy: ParagraphPolicy,
}

impl ParagraphAssembler {
    pub fn new(policy: ParagraphPolicy) -> Self {
        Self { policy }
    }

    /// Build the paragraphs of a page in reading order.
    ///
    /// Expects `page.areas`, `page.lines`, `page.words` and
    /// `page.line_statistic` to be populated.
    pub fn assemble(&self, page: &Page) -> Vec<Paragraph> {
        let mut paragraphs = Vec::new();

        for area in &page.areas {
            let mut group: Vec<&TextLine> = Vec::new();
            let mut ids = Vec::new();

            for &id in &area.lines {
                let line = page.line(id);
                if let Some(&previous) = group.last() {
                    if self.breaks(&page.line_statistic, group.len(), previous, line) {
                        paragraphs.extend(self.build(page, &ids, &group));
                        group.clear();
                        ids.clear();
                    }
                }
                group.push(line);
                ids.push(id);
            }
            paragraphs.extend(self.build(page, &ids, &group));
        }

        log::debug!(
            "Page {}: {} lines grouped into {} paragraphs",
            page.number,
            page.lines.len(),
            paragraphs.len()
        );
        paragraphs
    }

    /// Whether `line` starts a new paragraph after `previous`, the last of
    /// `group_len` lines collected so far.
    fn breaks(
        &self,
        lines: &TextLineStatistic,
        group_len: usize,
        previous: &TextLine,
        line: &TextLine,
    ) -> bool {
        if self.policy.require_markup_continuity
            && Markup::from_statistic(&previous.statistic) != Markup::from_statistic(&line.statistic)
        {
            return true;
        }

        let pitch = previous.reference_y() - line.reference_y();
        if pitch <= 0.0 {
            return true;
        }
        if let Some(dominant) = lines.most_common_pitch.or(lines.most_common_height) {
            if pitch > dominant * self.policy.max_pitch_factor {
                return true;
            }
        }

        !self.aligned(group_len, previous, line)
    }

    fn aligned(&self, group_len: usize, previous: &TextLine, line: &TextLine) -> bool {
        let font_size = larger_font(&previous.statistic, &line.statistic);
        let tolerance = font_size * self.policy.alignment_tolerance_factor;
        let (upper, lower) = (previous.rectangle(), line.rectangle());

        let left_aligned = (upper.min_x() - lower.min_x()).abs() <= tolerance;
        let centered = (upper.center_x() - lower.center_x()).abs() <= tolerance;
        // Indented first line followed by a flush line.
        let indented = group_len == 1
            && upper.min_x() > lower.min_x()
            && upper.min_x() - lower.min_x() <= tolerance * 4.0;

        left_aligned || centered || indented
    }

    fn build(
        &self,
        page: &Page,
        ids: &[LineId],
        lines: &[&TextLine],
    ) -> Option<Paragraph> {
        let rectangle = lines
            .iter()
            .map(|l| l.rectangle())
            .reduce(|acc, r| acc.union(&r))?;

        let mut markups = ObjectCounter::new();
        for line in lines {
            if let Some(markup) = Markup::from_statistic(&line.statistic) {
                markups.add(markup);
            }
        }

        Some(Paragraph {
            lines: ids.to_vec(),
            text: join_lines(page, lines),
            markup: markups.most_common().cloned(),
            role: None,
            position: Position::new(page.number, rectangle),
            statistic: CharacterStatistic::aggregate(lines.iter().map(|l| &l.statistic)),
        })
    }
}

fn larger_font(a: &CharacterStatistic, b: &CharacterStatistic) -> f32 {
    let a = a.average_font_size.unwrap_or(0.0);
    let b = b.average_font_size.unwrap_or(0.0);
    a.max(b).max(1.0)
}

/// Join line texts with spaces, gluing a hyphenated line to the next one
/// without its trailing hyphen.
fn join_lines(page: &Page, lines: &[&TextLine]) -> String {
    let mut text = String::new();
    let mut glued = false;

    for (index, line) in lines.iter().enumerate() {
        if index > 0 && !glued {
            text.push(' ');
        }
        let is_last = index + 1 == lines.len();
        let hyphenated = line
            .words
            .last()
            .is_some_and(|id| page.word(*id).hyphenated);

        match line.text.strip_suffix(lexicon::is_hyphen_char) {
            Some(stem) if hyphenated && !is_last => {
                text.push_str(stem);
                glued = true;
            }
            _ => {
                text.push_str(&line.text);
                glued = false;
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutAnalyzer, LayoutOptions};
    use crate::model::{Character, Font, FontFace, PageInput, Rectangle};

    /// Lay out text lines as glyph rows: 6pt advance, 5.5pt glyphs, 10pt font.
    fn page_of(rows: &[(&str, f32, f32, &str)]) -> Page {
        let mut input = PageInput::new(1);
        for (text, x, y, font) in rows {
            let mut cursor = *x;
            for c in text.chars() {
                if c != ' ' {
                    input.add_character(Character::new(
                        c.to_string(),
                        Rectangle::new(cursor, *y, cursor + 5.5, y + 8.0),
                        FontFace::new(Font::new(*font), 10.0),
                    ));
                }
                cursor += 6.0;
            }
        }
        let options = LayoutOptions::default().with_text_areas(false).sequential();
        let document = LayoutAnalyzer::new(options).analyze_pages(vec![input]).unwrap();
        document.pages.into_iter().next().unwrap()
    }

    fn texts(page: &Page) -> Vec<&str> {
        page.paragraphs.iter().map(|p| p.text.as_str()).collect()
    }

    #[test]
    fn test_consecutive_lines_form_one_paragraph() {
        let page = page_of(&[
            ("first line", 0.0, 100.0, "Times"),
            ("second line", 0.0, 88.0, "Times"),
            ("third", 0.0, 76.0, "Times"),
        ]);
        assert_eq!(texts(&page), vec!["first line second line third"]);
        assert_eq!(page.paragraphs[0].line_count(), 3);
        assert_eq!(
            page.paragraphs[0].markup,
            Some(Markup::new("Times", 10.0))
        );
    }

    #[test]
    fn test_large_pitch_breaks_paragraph() {
        let page = page_of(&[
            ("one", 0.0, 200.0, "Times"),
            ("two", 0.0, 188.0, "Times"),
            ("three", 0.0, 176.0, "Times"),
            ("four", 0.0, 140.0, "Times"),
            ("five", 0.0, 128.0, "Times"),
        ]);
        assert_eq!(texts(&page), vec!["one two three", "four five"]);
    }

    #[test]
    fn test_markup_change_breaks_paragraph() {
        let page = page_of(&[
            ("Heading", 0.0, 100.0, "Times-Bold"),
            ("body text", 0.0, 88.0, "Times"),
            ("more body", 0.0, 76.0, "Times"),
        ]);
        assert_eq!(texts(&page), vec!["Heading", "body text more body"]);
        assert_eq!(
            page.paragraphs[0].markup,
            Some(Markup::new("Times-Bold", 10.0))
        );
    }

    #[test]
    fn test_indented_line_starts_paragraph() {
        let page = page_of(&[
            ("aaaa", 0.0, 100.0, "Times"),
            ("bbbb", 0.0, 88.0, "Times"),
            ("cccc", 30.0, 76.0, "Times"),
            ("dddd", 0.0, 64.0, "Times"),
        ]);
        assert_eq!(texts(&page), vec!["aaaa bbbb", "cccc dddd"]);
    }

    #[test]
    fn test_hyphenated_lines_are_glued() {
        let page = page_of(&[
            ("a struc-", 0.0, 100.0, "Times"),
            ("ture here", 0.0, 88.0, "Times"),
        ]);
        assert_eq!(texts(&page), vec!["a structure here"]);
    }

    #[test]
    fn test_trailing_hyphen_on_last_line_is_kept() {
        let page = page_of(&[("see co-", 0.0, 100.0, "Times")]);
        assert_eq!(texts(&page), vec!["see co-"]);
    }

    #[test]
    fn test_paragraph_geometry() {
        let page = page_of(&[
            ("ab", 0.0, 100.0, "Times"),
            ("cd", 0.0, 88.0, "Times"),
        ]);
        let paragraph = &page.paragraphs[0];
        assert_eq!(
            paragraph.rectangle(),
            Rectangle::new(0.0, 88.0, 11.5, 108.0).unwrap()
        );
        assert_eq!(paragraph.statistic.count, 4);
    }
}
