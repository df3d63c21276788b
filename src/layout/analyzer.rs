//! The layout analysis pipeline.
//!
//! Pages are tokenized independently (optionally in parallel):
//! text areas → lines → words → paragraphs. Characterization and role
//! assignment then run once over the finished document.

use rayon::prelude::*;

use crate::error::Result;
use crate::model::{AreaId, Document, LineId, Page, PageInput, WordId};
use crate::stats::{CharacterStatistic, TextLineStatistic};

use super::areas::AreaTokenizer;
use super::characterize::DocumentCharacterizer;
use super::glyph::Glyph;
use super::lines::LineTokenizer;
use super::options::LayoutOptions;
use super::paragraphs::ParagraphAssembler;
use super::roles::assign_roles;
use super::words::WordTokenizer;

/// Supplies decoded pages to the analyzer.
///
/// Implemented by whatever turns a PDF content stream into positioned
/// glyphs. Errors are propagated unchanged.
pub trait ContentSource {
    fn pages(&self) -> Result<Vec<PageInput>>;
}

impl ContentSource for Vec<PageInput> {
    fn pages(&self) -> Result<Vec<PageInput>> {
        Ok(self.clone())
    }
}

impl ContentSource for [PageInput] {
    fn pages(&self) -> Result<Vec<PageInput>> {
        Ok(self.to_vec())
    }
}

/// Runs the full layout analysis.
#[derive(Debug, Clone, Default)]
pub struct LayoutAnalyzer {
    options: LayoutOptions,
}

impl LayoutAnalyzer {
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Pull pages from a decoder and analyze them.
    pub fn analyze<S: ContentSource + ?Sized>(&self, source: &S) -> Result<Document> {
        let inputs = source.pages()?;
        self.analyze_pages(inputs)
    }

    /// Analyze already decoded pages.
    pub fn analyze_pages(&self, inputs: Vec<PageInput>) -> Result<Document> {
        self.options.validate()?;

        let mut pages: Vec<Page> = inputs.into_iter().map(Page::from_input).collect();
        let character_statistic =
            CharacterStatistic::aggregate(pages.iter().map(|p| &p.character_statistic));

        if self.options.parallel {
            pages
                .par_iter_mut()
                .for_each(|page| self.tokenize_page(page, &character_statistic));
        } else {
            for page in &mut pages {
                self.tokenize_page(page, &character_statistic);
            }
        }

        let line_statistic = TextLineStatistic::aggregate(pages.iter().map(|p| &p.line_statistic));
        let mut document = Document {
            pages,
            character_statistic,
            line_statistic,
            characteristics: None,
        };

        let characterizer = DocumentCharacterizer::new(&self.options);
        let characteristics = characterizer.characterize(&document);
        assign_roles(&mut document, &characteristics, &characterizer);
        document.characteristics = Some(characteristics);

        log::debug!(
            "Analyzed {} pages into {} paragraphs",
            document.page_count(),
            document.paragraphs().count()
        );
        Ok(document)
    }

    /// Tokenize one page in place. Never fails: a page without usable
    /// glyphs ends up with no areas, lines, words or paragraphs.
    fn tokenize_page(&self, page: &mut Page, document_statistic: &CharacterStatistic) {
        let options = &self.options;
        let glyphs = Glyph::collect(page.number, &page.characters);

        let area_tokenizer =
            AreaTokenizer::from_statistics(options, &page.character_statistic, document_statistic);
        let line_tokenizer = LineTokenizer::new(options.cut);
        let word_tokenizer = WordTokenizer::new(options.cut, options.min_word_gap);

        let area_glyphs = if options.detect_text_areas {
            area_tokenizer.tokenize(glyphs)
        } else if glyphs.is_empty() {
            Vec::new()
        } else {
            vec![glyphs]
        };

        let mut areas = Vec::new();
        let mut lines = Vec::new();
        let mut words = Vec::new();

        for glyphs in area_glyphs {
            let area_id = AreaId(areas.len());
            let mut area_lines = Vec::new();

            for line_glyphs in line_tokenizer.tokenize(glyphs.clone()) {
                let line_id = LineId(lines.len());
                let word_glyphs = word_tokenizer.tokenize(line_glyphs.clone());
                let word_count = word_glyphs.len();

                let mut word_ids = Vec::with_capacity(word_count);
                let mut texts = Vec::with_capacity(word_count);
                for (index, leaf) in word_glyphs.iter().enumerate() {
                    let last = index + 1 == word_count;
                    if let Some(word) = word_tokenizer.build_word(page.number, line_id, leaf, last)
                    {
                        word_ids.push(WordId(words.len()));
                        texts.push(word.text.clone());
                        words.push(word);
                    }
                }

                let text = texts.join(" ");
                match line_tokenizer.build_line(page.number, area_id, &line_glyphs, word_ids, text)
                {
                    Some(line) => {
                        lines.push(line);
                        area_lines.push(line_id);
                    }
                    // Without geometry there is no line to attach the words to.
                    None => words.retain(|w| w.line != line_id),
                }
            }

            if let Some(area) = area_tokenizer.build_area(page.number, area_id, &glyphs, area_lines)
            {
                areas.push(area);
            }
        }

        page.areas = areas;
        page.lines = lines;
        page.words = words;
        page.line_statistic = TextLineStatistic::compute(&page.lines);
        page.paragraphs = ParagraphAssembler::new(options.paragraph).assemble(page);
    }
}
