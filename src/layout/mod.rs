//! Geometric layout analysis.
//!
//! Everything here is built on one primitive, the recursive [`XyCut`]
//! engine. The tokenizers differ only in the [`CutScorer`] they plug in:
//!
//! | Tokenizer | Axes | Accepts a gap when |
//! |-----------|------|--------------------|
//! | [`AreaTokenizer`] | both | wider/taller than a multiple of the average glyph |
//! | [`LineTokenizer`] | horizontal | the halves do not overlap vertically |
//! | [`WordTokenizer`] | vertical | at least `min_word_gap` wide |
//!
//! [`LayoutAnalyzer`] chains them per page, groups lines into paragraphs,
//! then characterizes the document and assigns semantic roles.

mod analyzer;
mod areas;
mod characterize;
mod glyph;
mod lines;
mod options;
mod paragraphs;
mod roles;
mod words;
mod xycut;

pub use analyzer::{ContentSource, LayoutAnalyzer};
pub use areas::{AreaScorer, AreaTokenizer};
pub use characterize::{DocumentCharacteristics, DocumentCharacterizer};
pub use glyph::Glyph;
pub use lines::{compute_baseline, LineScorer, LineTokenizer};
pub use options::{
    AxisOrder, CutOptions, HorizontalSweep, LayoutOptions, ParagraphPolicy, Vocabulary,
    VerticalSweep,
};
pub use paragraphs::ParagraphAssembler;
pub use roles::assign_roles;
pub use words::{WordScorer, WordTokenizer};
pub use xycut::{CutScorer, XyCut};
