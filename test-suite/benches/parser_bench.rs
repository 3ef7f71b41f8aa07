//! Parser Benchmarks
//!
//! The bootstrap reads the first line and a fixed window at the end, so its
//! cost should stay flat as documents grow.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pdf_bootstrap::parser::{LineReader, Parser, SeekingSource};
use pdf_bootstrap_test_suite::generators::TestPdfBuilder;
use std::io::{BufReader, Cursor, Write};

/// Generate test PDFs of various sizes for benchmarking
fn generate_test_pdfs() -> Vec<(String, Vec<u8>)> {
    let mut pdfs = Vec::new();

    pdfs.push(("minimal".to_string(), TestPdfBuilder::minimal().build().bytes));

    for mb in [1usize, 16, 64] {
        let pdf = TestPdfBuilder::minimal()
            .with_filler(mb * 1024 * 1024)
            .build();
        pdfs.push((format!("{mb}MB"), pdf.bytes));
    }

    pdfs.push((
        "10_updates".to_string(),
        TestPdfBuilder::minimal()
            .with_incremental_updates(10)
            .build()
            .bytes,
    ));

    pdfs
}

fn bench_parse_in_memory(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_in_memory");

    for (name, data) in generate_test_pdfs() {
        group.bench_with_input(BenchmarkId::from_parameter(&name), &data, |b, data| {
            b.iter(|| {
                let mut parser = Parser::new(Cursor::new(data.as_slice())).unwrap();
                black_box(parser.parse().unwrap().start_xref_offset())
            });
        });
    }

    group.finish();
}

fn bench_parse_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_file");

    for (name, data) in generate_test_pdfs() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&data).unwrap();
        let path = file.path().to_path_buf();

        group.bench_function(BenchmarkId::from_parameter(&name), |b| {
            b.iter(|| {
                let mut parser = Parser::open(&path).unwrap();
                black_box(parser.parse().unwrap().start_xref_offset())
            });
        });
    }

    group.finish();
}

fn bench_seeking_source(c: &mut Criterion) {
    let data = TestPdfBuilder::minimal()
        .with_filler(1024 * 1024)
        .build()
        .bytes;

    c.bench_function("parse_seeking_source", |b| {
        b.iter(|| {
            let source = SeekingSource::new(BufReader::new(Cursor::new(data.as_slice())));
            let mut parser = Parser::new(source).unwrap();
            black_box(parser.parse().unwrap().start_xref_offset())
        });
    });
}

fn bench_line_reader(c: &mut Criterion) {
    let mut text = Vec::new();
    for i in 0..10_000 {
        text.extend_from_slice(format!("line {i}").as_bytes());
        text.extend_from_slice(if i % 2 == 0 { b"\r\n" } else { b"\r" });
    }
    text.push(b'\n');

    c.bench_function("line_reader_10k_lines", |b| {
        b.iter(|| {
            let reader = LineReader::new(Cursor::new(text.as_slice()));
            black_box(reader.filter_map(Result::ok).count())
        });
    });
}

criterion_group!(
    benches,
    bench_parse_in_memory,
    bench_parse_file,
    bench_seeking_source,
    bench_line_reader
);
criterion_main!(benches);
