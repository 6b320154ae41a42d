//! Benchmarks for the single-pass menu parser.
//!
//! Run with: cargo bench -p dashmenu-core --bench parse_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dashmenu_core::parse;
use std::hint::black_box;

/// A menu of `sections` top-level submenus with eight leaves each.
fn synthetic_menu(sections: usize) -> String {
    let mut text = String::new();
    for s in 0..sections {
        text.push_str(&format!("-SECTION {s}:000\n"));
        for leaf in 0..8 {
            text.push_str(&format!("--ENTRY {s}.{leaf}:{:03}\n", (leaf + 1) % 1000));
        }
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for sections in [4usize, 32, 128] {
        let text = synthetic_menu(sections);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("sections", sections),
            &text,
            |b, text| b.iter(|| black_box(parse(text.clone()).unwrap())),
        );
    }

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let table = parse(synthetic_menu(64)).unwrap();
    let mid = dashmenu_core::NodeId::new((table.len() / 2) as u16);

    c.bench_function("nav/next_sibling", |b| {
        b.iter(|| black_box(table.next_sibling(black_box(mid))))
    });
    c.bench_function("nav/rank", |b| {
        b.iter(|| black_box(table.rank(black_box(mid))))
    });
}

criterion_group!(benches, bench_parse, bench_navigation);
criterion_main!(benches);
