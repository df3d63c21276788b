//! Layout analysis options and configuration.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::lexicon;

/// Which axis the cut engine tries first on every region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrder {
    /// Try vertical cuts (splitting left/right) before horizontal ones
    #[default]
    VerticalFirst,
    /// Try horizontal cuts (splitting top/bottom) before vertical ones
    HorizontalFirst,
}

/// Direction in which horizontal-cut candidates are scanned and results ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalSweep {
    #[default]
    TopToBottom,
    BottomToTop,
}

/// Direction in which vertical-cut candidates are scanned and results ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalSweep {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Options for the recursive cut engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutOptions {
    /// Minimum width of a whitespace gap for a vertical cut
    pub min_vertical_gap: f32,
    /// Minimum height of a whitespace gap for a horizontal cut
    pub min_horizontal_gap: f32,
    pub axis_order: AxisOrder,
    pub horizontal_sweep: HorizontalSweep,
    pub vertical_sweep: VerticalSweep,
}

impl Default for CutOptions {
    fn default() -> Self {
        Self {
            min_vertical_gap: 1.0,
            min_horizontal_gap: 1.0,
            axis_order: AxisOrder::VerticalFirst,
            horizontal_sweep: HorizontalSweep::TopToBottom,
            vertical_sweep: VerticalSweep::LeftToRight,
        }
    }
}

/// Thresholds used to group lines into paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphPolicy {
    /// A line pitch above `factor × dominant pitch` starts a new paragraph
    pub max_pitch_factor: f32,
    /// Alignment tolerance as a multiple of the lines' average font size
    pub alignment_tolerance_factor: f32,
    /// Require identical markup for consecutive lines
    pub require_markup_continuity: bool,
}

impl Default for ParagraphPolicy {
    fn default() -> Self {
        Self {
            max_pitch_factor: 1.5,
            alignment_tolerance_factor: 1.0,
            require_markup_continuity: true,
        }
    }
}

/// Heading vocabularies and stop words, all stored normalized.
///
/// Entries are only added through the `with_*` builders or deserialization,
/// both of which normalize them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    #[serde(deserialize_with = "deserialize_normalized")]
    section_headings: HashSet<String>,
    #[serde(deserialize_with = "deserialize_normalized")]
    abstract_headings: HashSet<String>,
    #[serde(deserialize_with = "deserialize_normalized")]
    references_headings: HashSet<String>,
    #[serde(deserialize_with = "deserialize_normalized")]
    stop_words: HashSet<String>,
}

fn normalized_set<I, S>(entries: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|e| lexicon::normalize(e.as_ref()))
        .filter(|e| !e.is_empty())
        .collect()
}

fn deserialize_normalized<'de, D>(deserializer: D) -> std::result::Result<HashSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<String>::deserialize(deserializer)?;
    Ok(normalized_set(entries))
}

fn contains_normalized(set: &HashSet<String>, text: &str) -> bool {
    let normalized = lexicon::normalize(text);
    !normalized.is_empty() && set.contains(&normalized)
}

impl Vocabulary {
    /// Replace the section heading labels.
    pub fn with_section_headings<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.section_headings = normalized_set(labels);
        self
    }

    /// Replace the abstract heading labels.
    pub fn with_abstract_headings<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.abstract_headings = normalized_set(labels);
        self
    }

    /// Replace the reference-section heading labels.
    pub fn with_references_headings<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.references_headings = normalized_set(labels);
        self
    }

    /// Replace the stop words.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = normalized_set(words);
        self
    }

    /// Check normalized `text` against the section heading labels.
    pub fn is_section_heading(&self, text: &str) -> bool {
        contains_normalized(&self.section_headings, text)
    }

    /// Check normalized `text` against the abstract heading labels.
    pub fn is_abstract_heading(&self, text: &str) -> bool {
        contains_normalized(&self.abstract_headings, text)
    }

    /// Check normalized `text` against the reference-section heading labels.
    pub fn is_references_heading(&self, text: &str) -> bool {
        contains_normalized(&self.references_headings, text)
    }

    /// Check whether a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        contains_normalized(&self.stop_words, word)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            section_headings: normalized_set(lexicon::SECTION_HEADINGS),
            abstract_headings: normalized_set(lexicon::ABSTRACT_HEADINGS),
            references_headings: normalized_set(lexicon::REFERENCES_HEADINGS),
            stop_words: normalized_set(lexicon::STOP_WORDS),
        }
    }
}

/// Options for layout analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Cut engine thresholds and sweep policy
    pub cut: CutOptions,

    /// Minimum gap between two characters for a word boundary; overrides
    /// `cut.min_vertical_gap` inside lines
    pub min_word_gap: f32,

    /// Split pages into text areas before line tokenization
    pub detect_text_areas: bool,

    /// Vertical lanes must be wider than this multiple of the average glyph width
    pub area_lane_width_factor: f32,

    /// Horizontal lanes must be taller than this multiple of the average glyph height
    pub area_lane_height_factor: f32,

    /// Paragraph grouping thresholds
    pub paragraph: ParagraphPolicy,

    /// Fraction of pages a running header/footer must appear on
    pub header_footer_majority: f32,

    /// Header/footer candidates must have fewer lines than this
    pub max_header_footer_lines: usize,

    /// Heading vocabularies and stop words
    pub vocabulary: Vocabulary,

    /// Whether to tokenize pages in parallel
    pub parallel: bool,
}

impl LayoutOptions {
    /// Create new layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: LayoutOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check that every threshold is usable.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("min_vertical_gap", self.cut.min_vertical_gap),
            ("min_horizontal_gap", self.cut.min_horizontal_gap),
            ("min_word_gap", self.min_word_gap),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidOption(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        let positive = [
            ("area_lane_width_factor", self.area_lane_width_factor),
            ("area_lane_height_factor", self.area_lane_height_factor),
            ("max_pitch_factor", self.paragraph.max_pitch_factor),
            (
                "alignment_tolerance_factor",
                self.paragraph.alignment_tolerance_factor,
            ),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidOption(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if !(self.header_footer_majority > 0.0 && self.header_footer_majority <= 1.0) {
            return Err(Error::InvalidOption(format!(
                "header_footer_majority must be in (0, 1], got {}",
                self.header_footer_majority
            )));
        }
        Ok(())
    }

    /// Set the cut engine options.
    pub fn with_cut_options(mut self, cut: CutOptions) -> Self {
        self.cut = cut;
        self
    }

    /// Set the minimum vertical and horizontal cut gaps.
    pub fn with_min_gaps(mut self, vertical: f32, horizontal: f32) -> Self {
        self.cut.min_vertical_gap = vertical;
        self.cut.min_horizontal_gap = horizontal;
        self
    }

    /// Set the minimum word gap.
    pub fn with_min_word_gap(mut self, gap: f32) -> Self {
        self.min_word_gap = gap;
        self
    }

    /// Set the axis order.
    pub fn with_axis_order(mut self, order: AxisOrder) -> Self {
        self.cut.axis_order = order;
        self
    }

    /// Set the sweep directions.
    pub fn with_sweep(mut self, horizontal: HorizontalSweep, vertical: VerticalSweep) -> Self {
        self.cut.horizontal_sweep = horizontal;
        self.cut.vertical_sweep = vertical;
        self
    }

    /// Enable or disable text-area detection.
    pub fn with_text_areas(mut self, detect: bool) -> Self {
        self.detect_text_areas = detect;
        self
    }

    /// Set the paragraph grouping policy.
    pub fn with_paragraph_policy(mut self, policy: ParagraphPolicy) -> Self {
        self.paragraph = policy;
        self
    }

    /// Set the running header/footer majority threshold.
    pub fn with_header_footer_majority(mut self, majority: f32) -> Self {
        self.header_footer_majority = majority;
        self
    }

    /// Set the vocabularies.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            cut: CutOptions::default(),
            min_word_gap: 1.0,
            detect_text_areas: true,
            area_lane_width_factor: 2.5,
            area_lane_height_factor: 1.2,
            paragraph: ParagraphPolicy::default(),
            header_footer_majority: 0.75,
            max_header_footer_lines: 3,
            vocabulary: Vocabulary::default(),
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_options_builder() {
        let options = LayoutOptions::new()
            .with_min_gaps(2.0, 3.0)
            .with_axis_order(AxisOrder::HorizontalFirst)
            .with_sweep(HorizontalSweep::BottomToTop, VerticalSweep::RightToLeft)
            .with_text_areas(false)
            .sequential();

        assert_eq!(options.cut.min_vertical_gap, 2.0);
        assert_eq!(options.cut.min_horizontal_gap, 3.0);
        assert_eq!(options.cut.axis_order, AxisOrder::HorizontalFirst);
        assert_eq!(options.cut.horizontal_sweep, HorizontalSweep::BottomToTop);
        assert_eq!(options.cut.vertical_sweep, VerticalSweep::RightToLeft);
        assert!(!options.detect_text_areas);
        assert!(!options.parallel);
    }

    #[test]
    fn test_default_options() {
        let options = LayoutOptions::default();
        assert_eq!(options.cut.min_vertical_gap, 1.0);
        assert_eq!(options.cut.min_horizontal_gap, 1.0);
        assert_eq!(options.cut.horizontal_sweep, HorizontalSweep::TopToBottom);
        assert_eq!(options.cut.vertical_sweep, VerticalSweep::LeftToRight);
        assert_eq!(options.header_footer_majority, 0.75);
        assert!(options.parallel);
        assert!(options.vocabulary.is_section_heading("Introduction"));
        assert!(options.vocabulary.is_stop_word("the"));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let options = LayoutOptions::from_json_str(
            r#"{
                "min_word_gap": 2.5,
                "cut": {"horizontal_sweep": "bottom_to_top"},
                "vocabulary": {"abstract_headings": ["Summary", "ABSTRACT"]}
            }"#,
        )
        .unwrap();

        assert_eq!(options.min_word_gap, 2.5);
        assert_eq!(options.cut.horizontal_sweep, HorizontalSweep::BottomToTop);
        assert_eq!(options.cut.min_vertical_gap, 1.0);
        assert!(options.vocabulary.is_abstract_heading("summary"));
        assert!(options.vocabulary.is_abstract_heading("abstract"));
        // Unlisted vocabularies keep their defaults.
        assert!(options.vocabulary.is_references_heading("bibliography"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let options = LayoutOptions::new().with_min_gaps(-1.0, 1.0);
        assert!(matches!(options.validate(), Err(Error::InvalidOption(_))));

        let options = LayoutOptions::new().with_header_footer_majority(1.5);
        assert!(matches!(options.validate(), Err(Error::InvalidOption(_))));

        let result = LayoutOptions::from_json_str(r#"{"min_word_gap": -3.0}"#);
        assert!(matches!(result, Err(Error::InvalidOption(_))));
    }

    #[test]
    fn test_vocabulary_builder_normalizes() {
        let vocabulary = Vocabulary::default().with_section_headings(["1. Methods", "Results"]);
        assert!(vocabulary.is_section_heading("methods"));
        assert!(vocabulary.is_section_heading("RESULTS"));
        assert!(!vocabulary.is_section_heading("introduction"));
    }

    #[test]
    fn test_deserialized_vocabulary_is_normalized() {
        let vocabulary: Vocabulary = serde_json::from_str(
            r#"{"section_headings": ["Related Work", "3. Evaluation"], "stop_words": ["The"]}"#,
        )
        .unwrap();
        assert!(vocabulary.is_section_heading("related work"));
        assert!(vocabulary.is_section_heading("Evaluation"));
        assert!(vocabulary.is_stop_word("the"));
        // Unlisted fields keep their defaults.
        assert!(vocabulary.is_abstract_heading("Abstract"));

        let options: LayoutOptions =
            serde_json::from_str(r#"{"vocabulary": {"abstract_headings": ["Executive Summary"]}}"#)
                .unwrap();
        assert!(options.vocabulary.is_abstract_heading("EXECUTIVE SUMMARY"));
    }

    #[test]
    fn test_vocabulary_lookups() {
        let vocabulary = Vocabulary::default();
        assert!(vocabulary.is_section_heading("2. Related Work"));
        assert!(vocabulary.is_abstract_heading("ABSTRACT"));
        assert!(vocabulary.is_references_heading("References"));
        assert!(!vocabulary.is_references_heading("Referenced works"));
        assert!(vocabulary.is_stop_word("The"));
        assert!(!vocabulary.is_section_heading("12"));
    }
}
