//! Document-level types.

use serde::Serialize;

use super::page::Page;
use super::paragraph::{Paragraph, SemanticRole};
use crate::error::{Error, Result};
use crate::layout::DocumentCharacteristics;
use crate::stats::{CharacterStatistic, TextLineStatistic};

/// An analyzed document: pages with their tokenized text hierarchy.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    /// Pages in the document
    pub pages: Vec<Page>,

    /// Aggregate over all page character statistics
    pub character_statistic: CharacterStatistic,

    /// Aggregate over all page line statistics
    pub line_statistic: TextLineStatistic,

    /// Document-wide properties, set once by the analyzer after all pages
    /// are tokenized
    pub characteristics: Option<DocumentCharacteristics>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Result<&Page> {
        if page_num == 0 {
            return Err(Error::PageOutOfRange(page_num, self.page_count()));
        }
        self.pages
            .get((page_num - 1) as usize)
            .ok_or(Error::PageOutOfRange(page_num, self.page_count()))
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All paragraphs in reading order, paired with their page.
    pub fn paragraphs(&self) -> impl Iterator<Item = (&Page, &Paragraph)> {
        self.pages
            .iter()
            .flat_map(|page| page.paragraphs.iter().map(move |p| (page, p)))
    }

    /// Paragraphs carrying the given role.
    pub fn paragraphs_with_role(
        &self,
        role: SemanticRole,
    ) -> impl Iterator<Item = (&Page, &Paragraph)> {
        self.paragraphs().filter(move |(_, p)| p.role == Some(role))
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageInput;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert!(doc.characteristics.is_none());
    }

    #[test]
    fn test_get_page_bounds() {
        let mut doc = Document::new();
        doc.add_page(Page::from_input(PageInput::new(1)));

        assert!(doc.get_page(1).is_ok());
        assert!(matches!(doc.get_page(0), Err(Error::PageOutOfRange(0, 1))));
        assert!(matches!(doc.get_page(2), Err(Error::PageOutOfRange(2, 1))));
    }
}
