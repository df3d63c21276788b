//! Error types for pdfstruct.

use std::io;
use thiserror::Error;

/// Result type alias for pdfstruct operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while analyzing a document.
///
/// Geometry problems are not errors: a character with a missing or inverted
/// bounding box is skipped, and a page without usable glyphs yields an empty
/// page.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading option files or glyph dumps.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON input (options or decoded pages).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The upstream content-stream decoder failed to produce pages.
    #[error("Decoder error: {0}")]
    Decoder(String),

    /// An option value is out of range.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),
}
