use criterion::{black_box, criterion_group, criterion_main, Criterion};

use oneside_fragment::{BuildOptions, FragmentBuilder};
use oneside_types::{ContextRange, LineFragment, TextDocument};

/// A 10k-line document with every 50th line changed.
fn sparse_changes() -> (TextDocument, TextDocument, Vec<LineFragment>) {
    let lines1: Vec<String> = (0..10_000).map(|i| format!("line {i}")).collect();
    let mut lines2 = lines1.clone();
    let mut fragments = Vec::new();
    for i in (25..10_000).step_by(50) {
        lines2[i] = format!("changed {i}");
        fragments.push(LineFragment::new(i, i + 1, i, i + 1));
    }
    (
        TextDocument::from_lines(&lines1),
        TextDocument::from_lines(&lines2),
        fragments,
    )
}

fn bench_builder(c: &mut Criterion) {
    let (doc1, doc2, fragments) = sparse_changes();

    for (name, context_range) in [
        ("context_4", ContextRange::Lines(4)),
        ("unlimited", ContextRange::Unlimited),
    ] {
        let options = BuildOptions {
            context_range,
            ..BuildOptions::default()
        };
        c.bench_function(name, |b| {
            b.iter(|| {
                FragmentBuilder::new(black_box(&fragments), Some(&doc1), Some(&doc2), options).exec()
            })
        });
    }
}

criterion_group!(benches, bench_builder);
criterion_main!(benches);
