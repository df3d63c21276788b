//! Benchmarks for layout analysis performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks run the full pipeline over synthetic two-column pages.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pdfstruct::{Character, Font, FontFace, LayoutOptions, PageInput, Pdfstruct, Rectangle};

const LINE: &str = "Recursive cuts recover reading order from glyph boxes";

/// Creates a page with a running header, two columns of body text and a
/// page number.
fn create_test_page(number: u32, lines_per_column: usize) -> PageInput {
    let mut page = PageInput::new(number);
    let body = FontFace::new(Font::new("Times-Roman"), 9.0);
    let small = FontFace::new(Font::new("Helvetica"), 7.0);

    typeset(&mut page, "Proceedings of the Benchmark", 60.0, 760.0, &small);
    for column_x in [60.0, 320.0] {
        for line in 0..lines_per_column {
            let y = 720.0 - line as f32 * 10.8;
            typeset(&mut page, LINE, column_x, y, &body);
        }
    }
    typeset(&mut page, &number.to_string(), 300.0, 40.0, &small);
    page
}

fn typeset(page: &mut PageInput, text: &str, x: f32, y: f32, face: &FontFace) {
    let mut cursor = x;
    for c in text.chars() {
        if !c.is_whitespace() {
            page.add_character(Character::new(
                c.to_string(),
                Rectangle::new(cursor, y, cursor + face.size * 0.45, y + face.size),
                face.clone(),
            ));
        }
        cursor += face.size * 0.5;
    }
}

fn create_test_document(page_count: u32) -> Vec<PageInput> {
    (1..=page_count).map(|n| create_test_page(n, 50)).collect()
}

/// Benchmark a single dense page.
fn bench_single_page(c: &mut Criterion) {
    let page = create_test_page(1, 60);

    c.bench_function("single_page", |b| {
        b.iter(|| {
            Pdfstruct::new()
                .sequential()
                .analyze_pages(black_box(vec![page.clone()]))
                .unwrap()
        });
    });
}

/// Benchmark documents at various sizes, sequential versus parallel.
fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");

    for page_count in [1, 10, 50].iter() {
        let pages = create_test_document(*page_count);

        group.bench_function(format!("{}_pages_sequential", page_count), |b| {
            b.iter(|| {
                let options = LayoutOptions::new().sequential();
                pdfstruct::analyze_pages_with_options(black_box(pages.clone()), options).unwrap()
            });
        });

        group.bench_function(format!("{}_pages_parallel", page_count), |b| {
            b.iter(|| pdfstruct::analyze_pages(black_box(pages.clone())).unwrap());
        });
    }

    group.finish();
}

/// Benchmark line tokenization alone, with text areas disabled.
fn bench_without_text_areas(c: &mut Criterion) {
    let pages = create_test_document(10);

    c.bench_function("without_text_areas", |b| {
        b.iter(|| {
            Pdfstruct::new()
                .with_text_areas(false)
                .analyze_pages(black_box(pages.clone()))
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_single_page,
    bench_document,
    bench_without_text_areas,
);
criterion_main!(benches);
