//! Benchmarks for document emission and packaging.
//!
//! Run with: cargo bench

use std::io::Cursor;

use criterion::{Criterion, criterion_group, criterion_main};

use quire::layout::{TabPosition, content_width};
use quire::model::{FontStyle, ParagraphStyle, Tab, TabAlignment};
use quire::{
    Container, Document, FieldKind, Format, PaperSize, SectionProperties, StyleRegistry,
    write_package,
};

/// A document with a styled footer on every section and some body text.
fn sample_document(sections: usize) -> (Document, StyleRegistry) {
    let mut styles = StyleRegistry::new();
    styles.add_font_style("small", FontStyle::new().with_name("Courier New"));

    let mut doc = Document::new();
    for i in 0..sections {
        let section = doc.add_section(SectionProperties {
            paper_size: PaperSize::Letter,
            ..SectionProperties::default()
        });
        if i == 0 {
            let width = content_width(section.properties());
            styles.add_paragraph_style(
                "footerTab",
                ParagraphStyle::new()
                    .with_tab(Tab::within(TabAlignment::Center, TabPosition::CENTER, width).unwrap())
                    .with_tab(Tab::within(TabAlignment::Right, TabPosition::END, width).unwrap()),
            );
        }

        let run = section.add_footer().add_text_run(Some("footerTab"));
        run.add_text("Left\tPage ", Some("small"));
        run.add_field(FieldKind::Page).set_font_style("small");
        run.add_text(" of ", Some("small"));
        run.add_field(FieldKind::NumPages);

        for p in 0..50 {
            section.add_text(&format!("Paragraph {p} with  some   spaced text."), None, None);
        }
        section.add_page_break();
    }
    (doc, styles)
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emit_odt(c: &mut Criterion) {
    let (doc, styles) = sample_document(10);
    c.bench_function("emit_odt", |b| {
        b.iter(|| Format::Odt.emit(&doc, &styles).unwrap());
    });
}

fn bench_emit_docx(c: &mut Criterion) {
    let (doc, styles) = sample_document(10);
    c.bench_function("emit_docx", |b| {
        b.iter(|| Format::Docx.emit(&doc, &styles).unwrap());
    });
}

// ============================================================================
// Packaging Benchmarks
// ============================================================================

fn bench_package(c: &mut Criterion) {
    let (doc, styles) = sample_document(10);
    for format in Format::ALL {
        let parts = format.emit(&doc, &styles).unwrap();
        c.bench_function(&format!("package_{}", format.extension()), |b| {
            b.iter(|| {
                let mut buf = Cursor::new(Vec::new());
                write_package(&parts, format, &mut buf).unwrap();
                buf
            });
        });
    }
}

criterion_group!(benches, bench_emit_odt, bench_emit_docx, bench_package);
criterion_main!(benches);
