//! # pdfstruct
//!
//! Geometric layout analysis for PDF text.
//!
//! Takes the positioned glyphs a content-stream decoder produces and
//! rebuilds the text hierarchy from geometry alone: text areas, lines,
//! words and paragraphs, followed by document-wide characterization
//! (running headers and footers, section heading style, word frequencies)
//! and a semantic role per paragraph.
//!
//! ## Quick Start
//!
//! ```
//! use pdfstruct::{analyze_pages, Character, Font, FontFace, PageInput, Rectangle};
//!
//! fn main() -> pdfstruct::Result<()> {
//!     let face = FontFace::new(Font::new("Times-Roman"), 10.0);
//!     let page = PageInput::new(1)
//!         .with_character(Character::new("A", Rectangle::new(0.0, 0.0, 10.0, 10.0), face.clone()))
//!         .with_character(Character::new("B", Rectangle::new(20.0, 0.0, 30.0, 10.0), face));
//!
//!     let doc = analyze_pages(vec![page])?;
//!     assert_eq!(doc.plain_text(), "A B");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Recursive X-Y cut**: one engine, pluggable scoring per tokenizer
//! - **Arena model**: pages own dense arrays of lines, words and paragraphs
//! - **Document characterization**: header/footer super-majority detection
//! - **Semantic roles**: title, abstract, headings, body, references
//! - **Parallel processing**: uses Rayon to tokenize pages concurrently

pub mod error;
pub mod layout;
pub mod lexicon;
pub mod model;
pub mod stats;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{
    AxisOrder, ContentSource, CutOptions, DocumentCharacteristics, HorizontalSweep,
    LayoutAnalyzer, LayoutOptions, ParagraphPolicy, VerticalSweep, Vocabulary,
};
pub use model::{
    Character, Color, Document, Font, FontFace, LineSegment, Markup, Page, PageInput, Paragraph,
    Position, Rectangle, SemanticRole, TextArea, TextLine, Word,
};
pub use stats::{CharacterStatistic, TextLineStatistic};

use std::path::Path;

/// Analyze decoded pages with default options.
///
/// # Example
///
/// ```
/// use pdfstruct::{analyze_pages, PageInput};
///
/// let doc = analyze_pages(vec![PageInput::new(1)]).unwrap();
/// assert_eq!(doc.page_count(), 1);
/// ```
pub fn analyze_pages(pages: Vec<PageInput>) -> Result<Document> {
    LayoutAnalyzer::default().analyze_pages(pages)
}

/// Analyze decoded pages with custom options.
pub fn analyze_pages_with_options(pages: Vec<PageInput>, options: LayoutOptions) -> Result<Document> {
    LayoutAnalyzer::new(options).analyze_pages(pages)
}

/// Pull pages from a decoder and analyze them with default options.
///
/// Decoder errors are returned unchanged.
pub fn analyze_source<S: ContentSource + ?Sized>(source: &S) -> Result<Document> {
    LayoutAnalyzer::default().analyze(source)
}

/// Analyze a JSON glyph dump: an array of pages.
///
/// # Example
///
/// ```
/// use pdfstruct::analyze_json;
///
/// let json = r#"[{"number": 1, "characters": [
///     {"text": "H", "bbox": [0, 0, 6, 10], "font_face": {"font": {"name": "Times"}, "size": 10}},
///     {"text": "i", "bbox": [6.5, 0, 9, 10], "font_face": {"font": {"name": "Times"}, "size": 10}}
/// ]}]"#;
/// let doc = analyze_json(json).unwrap();
/// assert_eq!(doc.plain_text(), "Hi");
/// ```
pub fn analyze_json(json: &str) -> Result<Document> {
    let pages: Vec<PageInput> = serde_json::from_str(json)?;
    analyze_pages(pages)
}

/// Analyze a JSON glyph dump stored in a file.
pub fn analyze_json_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let json = std::fs::read_to_string(path)?;
    analyze_json(&json)
}

/// Builder for configuring and running layout analysis.
///
/// # Example
///
/// ```
/// use pdfstruct::{AxisOrder, PageInput, Pdfstruct};
///
/// let doc = Pdfstruct::new()
///     .with_min_gaps(1.5, 1.0)
///     .with_axis_order(AxisOrder::VerticalFirst)
///     .sequential()
///     .analyze_pages(vec![PageInput::new(1)])?;
/// assert!(doc.characteristics.is_some());
/// # Ok::<(), pdfstruct::Error>(())
/// ```
pub struct Pdfstruct {
    options: LayoutOptions,
}

impl Pdfstruct {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: LayoutOptions::default(),
        }
    }

    /// Replace all options.
    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    /// Load options from a JSON file.
    pub fn with_options_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        self.options = LayoutOptions::from_json_file(path)?;
        Ok(self)
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Set the minimum vertical and horizontal cut gaps.
    pub fn with_min_gaps(mut self, vertical: f32, horizontal: f32) -> Self {
        self.options = self.options.with_min_gaps(vertical, horizontal);
        self
    }

    /// Set the minimum gap between words.
    pub fn with_min_word_gap(mut self, gap: f32) -> Self {
        self.options = self.options.with_min_word_gap(gap);
        self
    }

    /// Set which axis the cut engine tries first.
    pub fn with_axis_order(mut self, order: AxisOrder) -> Self {
        self.options = self.options.with_axis_order(order);
        self
    }

    /// Set the sweep directions.
    pub fn with_sweep(mut self, horizontal: HorizontalSweep, vertical: VerticalSweep) -> Self {
        self.options = self.options.with_sweep(horizontal, vertical);
        self
    }

    /// Enable or disable text area detection.
    pub fn with_text_areas(mut self, detect: bool) -> Self {
        self.options = self.options.with_text_areas(detect);
        self
    }

    /// Set heading vocabularies and stop words.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.options = self.options.with_vocabulary(vocabulary);
        self
    }

    /// Get the configured options.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Analyze decoded pages.
    pub fn analyze_pages(self, pages: Vec<PageInput>) -> Result<Document> {
        LayoutAnalyzer::new(self.options).analyze_pages(pages)
    }

    /// Pull pages from a decoder and analyze them.
    pub fn analyze<S: ContentSource + ?Sized>(self, source: &S) -> Result<Document> {
        LayoutAnalyzer::new(self.options).analyze(source)
    }

    /// Analyze a JSON glyph dump.
    pub fn analyze_json(self, json: &str) -> Result<Document> {
        let pages: Vec<PageInput> = serde_json::from_str(json)?;
        self.analyze_pages(pages)
    }
}

impl Default for Pdfstruct {
    fn default() -> Self {
        Self::new()
    }
}
