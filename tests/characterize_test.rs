//! Integration tests for document characterization and semantic roles.

use std::io::Write;

use pdfstruct::error::Error;
use pdfstruct::{
    analyze_pages, Character, Document, Font, FontFace, Markup, PageInput, Pdfstruct, Rectangle,
    SemanticRole,
};
use tempfile::NamedTempFile;

/// Lay out one line of glyphs; see `pipeline_test.rs` for the metrics.
fn typeset(page: &mut PageInput, text: &str, x: f32, y: f32, font: &str, size: f32) {
    let face = FontFace::new(Font::new(font), size);
    let mut cursor = x;
    for c in text.chars() {
        if !c.is_whitespace() {
            page.add_character(Character::new(
                c.to_string(),
                Rectangle::new(cursor, y, cursor + size * 0.5, y + size),
                face.clone(),
            ));
        }
        cursor += size * 0.55;
    }
}

fn typeset_lines(page: &mut PageInput, lines: &[&str], x: f32, y: f32, font: &str, size: f32) {
    for (index, line) in lines.iter().enumerate() {
        typeset(page, line, x, y - index as f32 * size * 1.2, font, size);
    }
}

const BODY: [&str; 4] = [
    "Layout analysis recovers",
    "structure from glyph",
    "positions alone and",
    "needs no tagging.",
];

/// A document where the first `with_header` of `total` pages carry the same
/// running header above a four-line body paragraph.
fn journal(with_header: u32, total: u32) -> Document {
    let pages = (1..=total)
        .map(|number| {
            let mut page = PageInput::new(number);
            if number <= with_header {
                typeset(&mut page, "Journal of Layout", 72.0, 760.0, "Helvetica", 8.0);
            }
            typeset_lines(&mut page, &BODY, 72.0, 700.0, "Times-Roman", 10.0);
            page
        })
        .collect();
    analyze_pages(pages).unwrap()
}

fn roles_of(doc: &Document, page: usize) -> Vec<SemanticRole> {
    doc.pages[page]
        .paragraphs
        .iter()
        .filter_map(|p| p.role)
        .collect()
}

#[test]
fn test_running_header_adopted_on_eight_of_ten() {
    let doc = journal(8, 10);
    let characteristics = doc.characteristics.as_ref().unwrap();

    let header = characteristics.page_header_area.unwrap();
    assert_eq!(header.min_y(), 760.0);
    assert_eq!(header.max_y(), 768.0);
    assert!(characteristics.page_footer_area.is_none());

    assert_eq!(
        roles_of(&doc, 0),
        vec![SemanticRole::PageHeader, SemanticRole::Body]
    );
    assert_eq!(roles_of(&doc, 9), vec![SemanticRole::Body]);
}

#[test]
fn test_running_header_rejected_on_seven_of_ten() {
    let doc = journal(7, 10);
    let characteristics = doc.characteristics.as_ref().unwrap();

    assert!(characteristics.page_header_area.is_none());
    assert!(doc
        .paragraphs_with_role(SemanticRole::PageHeader)
        .next()
        .is_none());
}

#[test]
fn test_first_heading_fixes_section_markup() {
    let mut first = PageInput::new(1);
    typeset_lines(&mut first, &BODY, 72.0, 740.0, "Times-Roman", 10.0);
    typeset(&mut first, "1 Introduction", 72.0, 650.0, "Times-Bold", 12.0);
    typeset_lines(&mut first, &BODY, 72.0, 620.0, "Times-Roman", 10.0);

    let mut second = PageInput::new(2);
    typeset_lines(&mut second, &BODY, 72.0, 740.0, "Times-Roman", 10.0);
    typeset(&mut second, "References", 72.0, 650.0, "Helvetica-Bold", 14.0);
    typeset_lines(
        &mut second,
        &["[1] A. Author. On cuts.", "Journal, 1990.", "Pages 1 to 9."],
        72.0,
        620.0,
        "Times-Roman",
        10.0,
    );

    let doc = analyze_pages(vec![first, second]).unwrap();
    let characteristics = doc.characteristics.as_ref().unwrap();

    assert_eq!(
        characteristics.section_heading_markup,
        Some(Markup::new("Times-Bold", 12.0))
    );
    assert_eq!(
        roles_of(&doc, 0),
        vec![
            SemanticRole::Body,
            SemanticRole::SectionHeading,
            SemanticRole::Body
        ]
    );
    assert_eq!(
        roles_of(&doc, 1),
        vec![
            SemanticRole::Body,
            SemanticRole::Reference,
            SemanticRole::Reference
        ]
    );
}

#[test]
fn test_word_counter() {
    let doc = journal(0, 3);
    let characteristics = doc.characteristics.as_ref().unwrap();

    assert_eq!(characteristics.occurrence("layout"), 3);
    assert_eq!(characteristics.occurrence("Glyph"), 3);
    assert_eq!(characteristics.occurrence("and"), 0);
    assert_eq!(characteristics.occurrence("missing"), 0);
}

#[test]
fn test_vocabulary_from_options_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "parallel": false,
            "vocabulary": {{"abstract_headings": ["Summary"]}}
        }}"#
    )
    .unwrap();

    let mut page = PageInput::new(1);
    typeset_lines(&mut page, &BODY, 72.0, 740.0, "Times-Roman", 10.0);
    typeset(&mut page, "Summary", 72.0, 650.0, "Times-Bold", 10.0);
    typeset_lines(&mut page, &BODY, 72.0, 620.0, "Times-Roman", 10.0);

    let doc = Pdfstruct::new()
        .with_options_file(file.path())
        .unwrap()
        .analyze_pages(vec![page])
        .unwrap();

    assert_eq!(
        roles_of(&doc, 0),
        vec![
            SemanticRole::Body,
            SemanticRole::Abstract,
            SemanticRole::Abstract
        ]
    );
}

#[test]
fn test_invalid_options_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"header_footer_majority": 0.0}}"#).unwrap();

    let result = Pdfstruct::new().with_options_file(file.path());
    assert!(matches!(result, Err(Error::InvalidOption(_))));
}
