//! Semantic role assignment.
//!
//! Runs after characterization and gives every paragraph exactly one
//! [`SemanticRole`], checked in this order:
//!
//! 1. `PageHeader` / `PageFooter`: the topmost (bottommost) short paragraph
//!    of a page lying inside the document's running header (footer) area,
//!    when that area recurs on at least two pages.
//! 2. `Abstract` / `Reference`: an abstract or references heading. The
//!    paragraphs following it inherit the role until the next heading.
//! 3. `SectionHeading`: a vocabulary heading, or a short paragraph set in
//!    the document's section heading markup.
//! 4. `Other`: no alphabetic content (page numbers, stray symbols).
//! 5. `Title`: the largest text above body size on the first page, before
//!    any heading.
//! 6. `Body`, unless an abstract or references section is open.

use crate::model::{Document, Markup, Page, Paragraph, SemanticRole};

use super::characterize::{bottommost, topmost, DocumentCharacteristics, DocumentCharacterizer};

/// The section the current paragraph belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Body,
    Abstract,
    References,
}

struct Context<'a> {
    characterizer: &'a DocumentCharacterizer,
    characteristics: &'a DocumentCharacteristics,
    body_markup: Option<Markup>,
}

impl Context<'_> {
    fn is_markup_heading(&self, paragraph: &Paragraph) -> bool {
        let (Some(markup), Some(heading)) = (
            &paragraph.markup,
            &self.characteristics.section_heading_markup,
        ) else {
            return false;
        };
        markup == heading
            && self.body_markup.as_ref() != Some(heading)
            && paragraph.line_count() < self.characterizer.max_lines()
    }

    fn is_heading(&self, paragraph: &Paragraph) -> bool {
        self.characterizer.is_abstract_heading(paragraph)
            || self.characterizer.is_references_heading(paragraph)
            || self.characterizer.is_section_heading(paragraph)
            || self.is_markup_heading(paragraph)
    }

    fn running_role(&self, page: &Page, index: usize) -> Option<SemanticRole> {
        let paragraph = &page.paragraphs[index];
        if paragraph.line_count() >= self.characterizer.max_lines() {
            return None;
        }
        let rect = paragraph.rectangle();
        let is_same = |candidate: Option<&Paragraph>| {
            candidate.is_some_and(|c| std::ptr::eq(c, paragraph))
        };

        if is_same(topmost(page))
            && self
                .characteristics
                .recurring_header_area()
                .is_some_and(|area| area.contains(&rect))
        {
            return Some(SemanticRole::PageHeader);
        }
        if is_same(bottommost(page))
            && self
                .characteristics
                .recurring_footer_area()
                .is_some_and(|area| area.contains(&rect))
        {
            return Some(SemanticRole::PageFooter);
        }
        None
    }
}

/// Assign a role to every paragraph of the document.
pub fn assign_roles(
    document: &mut Document,
    characteristics: &DocumentCharacteristics,
    characterizer: &DocumentCharacterizer,
) {
    let context = Context {
        characterizer,
        characteristics,
        body_markup: Markup::from_statistic(&document.character_statistic),
    };
    let title_size = title_font_size(document, &context);

    let mut section = Section::Body;
    let mut heading_seen = false;
    let mut roles = Vec::with_capacity(document.pages.len());

    for (page_index, page) in document.pages.iter().enumerate() {
        let mut page_roles = Vec::with_capacity(page.paragraphs.len());
        for (index, paragraph) in page.paragraphs.iter().enumerate() {
            let role = if let Some(running) = context.running_role(page, index) {
                running
            } else if characterizer.is_abstract_heading(paragraph) {
                section = Section::Abstract;
                SemanticRole::Abstract
            } else if characterizer.is_references_heading(paragraph) {
                section = Section::References;
                SemanticRole::Reference
            } else if characterizer.is_section_heading(paragraph)
                || context.is_markup_heading(paragraph)
            {
                section = Section::Body;
                SemanticRole::SectionHeading
            } else if !paragraph.text.chars().any(char::is_alphabetic) {
                SemanticRole::Other
            } else if page_index == 0
                && !heading_seen
                && title_size.is_some()
                && paragraph.statistic.most_common_font_size == title_size
            {
                SemanticRole::Title
            } else {
                match section {
                    Section::Body => SemanticRole::Body,
                    Section::Abstract => SemanticRole::Abstract,
                    Section::References => SemanticRole::Reference,
                }
            };

            if context.is_heading(paragraph) {
                heading_seen = true;
            }
            page_roles.push(role);
        }
        roles.push(page_roles);
    }

    for (page, page_roles) in document.pages.iter_mut().zip(roles) {
        for (paragraph, role) in page.paragraphs.iter_mut().zip(page_roles) {
            paragraph.role = Some(role);
        }
    }
}

/// Largest paragraph font size on the first page above body size, looking
/// only at paragraphs before the first heading.
fn title_font_size(document: &Document, context: &Context<'_>) -> Option<f32> {
    let body_size = document.character_statistic.most_common_font_size;
    let first = document.pages.first()?;

    first
        .paragraphs
        .iter()
        .take_while(|p| !context.is_heading(p))
        .filter(|p| p.text.chars().any(char::is_alphabetic))
        .filter_map(|p| p.statistic.most_common_font_size)
        .filter(|size| body_size.map_or(true, |body| *size > body))
        .reduce(f32::max)
}
