// SPDX-License-Identifier: Apache-2.0

//! Benchmark for tree building throughput.
//!
//! Covers a wide, shallow page typical of a busy post and a deep chain that
//! exercises placeholder synthesis.

use std::fmt::Write;
use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use twig_core::{CommentRecord, CommentTreeBuilder};

/// Generate a page of `n` comments spread over 50 top-level threads.
fn generate_wide_page(n: i64) -> Vec<CommentRecord> {
    (1..=n)
        .map(|id| {
            let (path, depth) = if id <= 50 {
                (format!("0.{id}"), 0)
            } else if id <= 500 {
                (format!("0.{}.{id}", id % 50 + 1), 1)
            } else {
                let parent = id % 450 + 51;
                (format!("0.{}.{parent}.{id}", parent % 50 + 1), 2)
            };
            CommentRecord::builder()
                .id(id)
                .path(path)
                .depth(depth)
                .text("benchmark comment")
                .build()
        })
        .collect()
}

/// Generate a page holding only every tenth comment of a single deep chain.
fn generate_sparse_chain(n: i64) -> Vec<CommentRecord> {
    let mut path = String::from("0");
    let mut page = Vec::new();
    for id in 1..=n {
        let _ = write!(path, ".{id}");
        if id % 10 == 0 {
            page.push(
                CommentRecord::builder()
                    .id(id)
                    .path(path.clone())
                    .depth(u32::try_from(id - 1).unwrap_or(u32::MAX))
                    .build(),
            );
        }
    }
    page
}

fn bench_build_wide_page(c: &mut Criterion) {
    let builder = CommentTreeBuilder::default();
    let page = generate_wide_page(5_000);

    c.bench_function("build_wide_page_5000", |b| {
        b.iter_batched(
            || page.clone(),
            |page| builder.build(black_box(page), None),
            BatchSize::SmallInput,
        );
    });
}

fn bench_build_sparse_chain(c: &mut Criterion) {
    let builder = CommentTreeBuilder::default();
    let page = generate_sparse_chain(1_000);

    c.bench_function("build_sparse_chain_1000", |b| {
        b.iter_batched(
            || page.clone(),
            |page| builder.build_report(black_box(page), None),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_build_wide_page, bench_build_sparse_chain);
criterion_main!(benches);
