//! Benchmarks for the pagination core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mini_pager::{compute_metrics, split, split_json, ContentNode, Document, Node, Pager};

/// `pages` pages of `paras_per_page` paragraphs each
fn build_document(pages: usize, paras_per_page: usize) -> Document {
    let mut nodes = Vec::with_capacity(pages * (paras_per_page + 1));
    for p in 0..pages {
        if p > 0 {
            nodes.push(Node::Break);
        }
        for i in 0..paras_per_page {
            nodes.push(
                ContentNode::paragraph(&format!(
                    "Paragraph {} on page {} has enough words to look like real prose. ",
                    i, p
                ))
                .into(),
            );
        }
    }
    Document::from_nodes(nodes)
}

fn bench_split_small(c: &mut Criterion) {
    let doc = build_document(1, 5);
    c.bench_function("split_small_document", |b| {
        b.iter(|| black_box(split(black_box(&doc))));
    });
}

fn bench_split_medium(c: &mut Criterion) {
    let doc = build_document(50, 20);
    c.bench_function("split_medium_document", |b| {
        b.iter(|| black_box(split(black_box(&doc))));
    });
}

fn bench_split_json(c: &mut Criterion) {
    let json = build_document(10, 20).to_value().to_string();
    c.bench_function("split_json", |b| {
        b.iter(|| black_box(split_json(black_box(&json))));
    });
}

fn bench_metrics(c: &mut Criterion) {
    let doc = build_document(50, 20);
    c.bench_function("compute_metrics", |b| {
        b.iter(|| black_box(compute_metrics(black_box(&doc))));
    });
}

fn bench_keystroke_recompute(c: &mut Criterion) {
    c.bench_function("keystroke_recompute", |b| {
        let mut pager = Pager::default();
        let mut doc = build_document(10, 20);
        b.iter(|| {
            doc.push(ContentNode::paragraph("x"));
            black_box(pager.on_document_change(&doc));
        });
    });
}

criterion_group!(
    benches,
    bench_split_small,
    bench_split_medium,
    bench_split_json,
    bench_metrics,
    bench_keystroke_recompute,
);

criterion_main!(benches);
