//! Matcher benchmarks
//!
//! Measures interpretation lookup over synthetic knowledge bases of
//! increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pmkb_db::matcher::{find_interpretations, TierOrder};
use pmkb_db::model::{KnowledgeBase, RawFact, SampleVariant};
use pmkb_db::normalize::expand_facts;

/// Build a knowledge base with the given number of facts, each expanding to
/// four entries.
fn create_test_kb(num_facts: u64) -> KnowledgeBase {
    let facts: Vec<RawFact> = (0..num_facts)
        .map(|i| {
            RawFact::builder(i, format!("GENE{}", i % 500))
                .tumor_types(vec![format!("Tumor {}", i % 40), "Solid Tumor".to_string()])
                .tissue_types(vec![format!("Tissue {}", i % 20), "Any".to_string()])
                .variants(vec![format!("V{i}E")])
                .tier((i % 3) as i64)
                .interpretation(format!("interpretation {i}"))
                .citations(format!("PMID {i}"))
                .build()
        })
        .collect();
    expand_facts(&facts)
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_interpretations");
    for num_facts in [100_u64, 1_000, 10_000] {
        let kb = create_test_kb(num_facts);
        // query the fact in the middle of the table
        let mid = num_facts / 2;
        let sample = SampleVariant::new(format!("GENE{}", mid % 500), format!("V{mid}E"));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_facts),
            &num_facts,
            |b, _| {
                b.iter(|| {
                    find_interpretations(
                        black_box(&sample),
                        kb.entries(),
                        kb.interpretations(),
                        TierOrder::default(),
                    )
                    .unwrap()
                });
            },
        );
    }
    group.finish();
}

fn bench_lookup_with_context(c: &mut Criterion) {
    let kb = create_test_kb(10_000);
    let sample = SampleVariant::builder("GENE250", "V250E")
        .tumor_context("Tumor 10")
        .tissue_context("Tissue 10")
        .build();
    c.bench_function("find_interpretations_with_context", |b| {
        b.iter(|| {
            find_interpretations(
                black_box(&sample),
                kb.entries(),
                kb.interpretations(),
                TierOrder::default(),
            )
            .unwrap()
        });
    });
}

criterion_group!(benches, bench_lookup, bench_lookup_with_context);
criterion_main!(benches);
