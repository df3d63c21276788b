//! Document model types for layout analysis.
//!
//! The hierarchy is Document → Page → (TextArea, TextLine, Word, Paragraph)
//! → Character. Each page owns dense arrays of its elements; elements point
//! at each other through typed indices (`CharId`, `LineId`, ...), so there
//! are no ownership cycles.

mod character;
mod document;
mod geometry;
mod page;
mod paragraph;
mod text;

pub use character::{Character, Color, Font, FontFace};
pub use document::Document;
pub use geometry::{
    compare_extent, compare_max_x, compare_max_y, compare_min_x, compare_min_y,
    round_coordinate, Extent, HasBoundingBox, LineSegment, Position, Rectangle,
};
pub use page::{Page, PageInput};
pub use paragraph::{Markup, Paragraph, SemanticRole};
pub use text::{AreaId, CharId, LineId, ParagraphId, TextArea, TextLine, Word, WordId};
