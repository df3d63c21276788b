//! Document-wide characterization.
//!
//! A single pass over every paragraph of every page produces an immutable
//! [`DocumentCharacteristics`]:
//!
//! - the markup of the first paragraph whose text is a well-known section
//!   heading ("Introduction", "References", ...),
//! - the running page header and footer areas,
//! - a stop-word filtered word frequency counter.
//!
//! Header and footer detection collects the topmost and bottommost short
//! paragraph of each page, sorts them by distance from the page edge and
//! merges them greedily while they overlap. The merged area is adopted only
//! when it covers more than a super-majority of the pages.

use serde::Serialize;

use crate::lexicon;
use crate::model::{Document, Markup, Page, Paragraph, Rectangle};
use crate::stats::ObjectCounter;

use super::options::{LayoutOptions, Vocabulary};

const MIN_RECURRING_MEMBERS: usize = 2;

/// Derived document-wide properties.
///
/// An empty document yields the default value: every field absent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentCharacteristics {
    /// Markup of the first paragraph matching the section heading vocabulary
    pub section_heading_markup: Option<Markup>,
    /// Area shared by the running page headers
    pub page_header_area: Option<Rectangle>,
    /// Area shared by the running page footers
    pub page_footer_area: Option<Rectangle>,
    /// Number of pages whose header candidate was merged into the header area
    pub page_header_members: usize,
    /// Number of pages whose footer candidate was merged into the footer area
    pub page_footer_members: usize,
    /// Normalized word frequencies, stop words excluded
    pub word_counter: ObjectCounter<String>,
}

impl DocumentCharacteristics {
    /// Number of occurrences of a word, normalized before lookup.
    pub fn occurrence(&self, word: &str) -> usize {
        self.word_counter.get(lexicon::normalize(word).as_str())
    }

    /// The header area, if it recurs on at least two pages.
    ///
    /// A one-page document always adopts its own top paragraph as header
    /// area; that paragraph is not a running header.
    pub fn recurring_header_area(&self) -> Option<Rectangle> {
        self.page_header_area
            .filter(|_| self.page_header_members >= MIN_RECURRING_MEMBERS)
    }

    /// The footer area, if it recurs on at least two pages.
    pub fn recurring_footer_area(&self) -> Option<Rectangle> {
        self.page_footer_area
            .filter(|_| self.page_footer_members >= MIN_RECURRING_MEMBERS)
    }
}

/// Computes [`DocumentCharacteristics`].
#[derive(Debug, Clone)]
pub struct DocumentCharacterizer {
    vocabulary: Vocabulary,
    majority: f32,
    max_lines: usize,
}

impl Default for DocumentCharacterizer {
    fn default() -> Self {
        Self::new(&LayoutOptions::default())
    }
}

impl DocumentCharacterizer {
    pub fn new(options: &LayoutOptions) -> Self {
        Self {
            vocabulary: options.vocabulary.clone(),
            majority: options.header_footer_majority,
            max_lines: options.max_header_footer_lines,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Header and footer candidates have fewer lines than this.
    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Scan the document once.
    pub fn characterize(&self, document: &Document) -> DocumentCharacteristics {
        let mut result = DocumentCharacteristics::default();
        let mut headers = Vec::new();
        let mut footers = Vec::new();

        for page in &document.pages {
            if let Some(top) = topmost(page).filter(|p| p.line_count() < self.max_lines) {
                headers.push(top.rectangle());
            }
            if let Some(bottom) = bottommost(page).filter(|p| p.line_count() < self.max_lines) {
                footers.push(bottom.rectangle());
            }

            for paragraph in &page.paragraphs {
                if result.section_heading_markup.is_none() && self.is_section_heading(paragraph) {
                    if let Some(markup) = &paragraph.markup {
                        log::debug!(
                            "Section heading markup fixed to {} by {:?} on page {}",
                            markup,
                            paragraph.text,
                            page.number
                        );
                        result.section_heading_markup = Some(markup.clone());
                    }
                }
                self.count_words(&paragraph.text, &mut result.word_counter);
            }
        }

        let page_count = document.pages.len();
        headers.sort_by(|a, b| b.max_y().total_cmp(&a.max_y()));
        footers.sort_by(|a, b| a.max_y().total_cmp(&b.max_y()));
        if let Some((area, members)) = self.running_area("header", &headers, page_count) {
            result.page_header_area = Some(area);
            result.page_header_members = members;
        }
        if let Some((area, members)) = self.running_area("footer", &footers, page_count) {
            result.page_footer_area = Some(area);
            result.page_footer_members = members;
        }

        result
    }

    /// Whether the paragraph's text is a well-known section heading.
    pub fn is_section_heading(&self, paragraph: &Paragraph) -> bool {
        self.vocabulary.is_section_heading(&paragraph.text)
    }

    /// Whether the paragraph's text is an abstract heading.
    pub fn is_abstract_heading(&self, paragraph: &Paragraph) -> bool {
        self.vocabulary.is_abstract_heading(&paragraph.text)
    }

    /// Whether the paragraph's text is a references heading.
    pub fn is_references_heading(&self, paragraph: &Paragraph) -> bool {
        self.vocabulary.is_references_heading(&paragraph.text)
    }

    fn count_words(&self, text: &str, counter: &mut ObjectCounter<String>) {
        for token in text.split_whitespace() {
            let word = lexicon::normalize(token);
            if word.is_empty() || self.vocabulary.is_stop_word(&word) {
                continue;
            }
            counter.add(word);
        }
    }

    /// Merge sorted candidates greedily, stopping at the first one that does
    /// not overlap the merged area. Returns the adopted area and its member
    /// count.
    fn running_area(
        &self,
        kind: &str,
        candidates: &[Rectangle],
        page_count: usize,
    ) -> Option<(Rectangle, usize)> {
        let (first, rest) = candidates.split_first()?;
        let mut merged = *first;
        let mut members = 1usize;
        for candidate in rest {
            if !merged.overlaps(candidate) {
                break;
            }
            merged = merged.union(candidate);
            members += 1;
        }

        let adopted = members as f32 > self.majority * page_count as f32;
        log::debug!(
            "Page {} candidates: {} merged of {} pages, adopted={}",
            kind,
            members,
            page_count,
            adopted
        );
        adopted.then_some((merged, members))
    }
}

/// The paragraph reaching highest on the page; the first one on ties.
pub(crate) fn topmost(page: &Page) -> Option<&Paragraph> {
    page.paragraphs.iter().reduce(|best, p| {
        if p.rectangle().max_y() > best.rectangle().max_y() {
            p
        } else {
            best
        }
    })
}

/// The paragraph reaching lowest on the page; the first one on ties.
pub(crate) fn bottommost(page: &Page) -> Option<&Paragraph> {
    page.paragraphs.iter().reduce(|best, p| {
        if p.rectangle().min_y() < best.rectangle().min_y() {
            p
        } else {
            best
        }
    })
}
