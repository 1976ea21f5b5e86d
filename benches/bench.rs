//! Benchmarks for tokenization and the full per-document transform.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use sickle::document::RawDocument;
use sickle::format::FormatRegistry;
use sickle::pipeline::{Pipeline, PipelineConfig};
use sickle::tokenizer::{TaggedTokenizer, Tokenizer};

fn sample_document(words: usize) -> Vec<u8> {
    let mut doc = b"<DOC>\n<DOCNO>BENCH-1</DOCNO>\n<TEXT>\n".to_vec();
    for i in 0..words {
        doc.extend_from_slice(format!("Benchmark running words number{i} ").as_bytes());
        if i % 12 == 0 {
            doc.push(b'\n');
        }
    }
    doc.extend_from_slice(b"\n</TEXT>\n</DOC>\n");
    doc
}

fn bench_tokenize(c: &mut Criterion) {
    let tokenizer = TaggedTokenizer::trec_text().unwrap();
    let buffer = sample_document(500);

    c.bench_function("tokenize_trec_text_500_words", |b| {
        b.iter(|| {
            let raw = RawDocument::new(black_box(buffer.clone()));
            tokenizer.tokenize(raw).unwrap()
        })
    });
}

fn bench_transform(c: &mut Criterion) {
    let registry = FormatRegistry::builtin().unwrap();
    let config = PipelineConfig::new("trec-text").with_stemmer("porter");
    let pipeline = Pipeline::new(&config, &registry).unwrap();
    let buffer = sample_document(500);

    c.bench_function("transform_trec_text_500_words_porter", |b| {
        b.iter(|| {
            let raw = RawDocument::new(black_box(buffer.clone()));
            pipeline.transform(raw).unwrap()
        })
    });
}

criterion_group!(benches, bench_tokenize, bench_transform);
criterion_main!(benches);
