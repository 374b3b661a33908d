// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use folio_data::{AuthorGrouping, AuthorGroups, CategoryField, Dataset, WorkRecord};
use folio_filter::Facet;
use folio_view::{PlotConfig, ScatterView};

const GENRES: [&str; 5] = ["Poetry", "Drama", "Fiction", "Letters", "Prose"];
const CENTURIES: [&str; 3] = ["16th", "17th", "18th"];

/// A corpus of `len` works spread over 40 authors of varying productivity.
fn corpus(len: usize) -> Dataset {
    let records = (0..len)
        .map(|i| {
            // Squaring skews the author distribution so some fall under the threshold.
            let author = (i * i) % 40;
            let t = i as f64 / len as f64;
            WorkRecord {
                pc1: -0.04 + 0.1 * t,
                pc2: 0.05 - 0.08 * t,
                author: format!("author{author}"),
                full_author: format!("Author Number {author}"),
                genre: GENRES[i % GENRES.len()].to_owned(),
                century: CENTURIES[i % CENTURIES.len()].to_owned(),
                title: format!("Work {i}"),
            }
        })
        .collect();
    Dataset::from_records(records)
}

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping/derive");
    for len in [256usize, 2_048, 16_384] {
        let dataset = corpus(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &dataset, |b, dataset| {
            b.iter(|| black_box(AuthorGroups::derive(dataset, AuthorGrouping::default())));
        });
    }
    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/toggle");

    // Each toggle recomputes every point, so cost should grow linearly.
    for len in [256usize, 2_048, 16_384] {
        let mut view = ScatterView::new(corpus(len), PlotConfig::default());
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::new("category", len), |b| {
            b.iter(|| {
                view.toggle(Facet::Category, black_box("Drama"));
                black_box(view.visible_count())
            });
        });
    }
    group.finish();
}

fn bench_switch_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/switch_field");
    for len in [256usize, 2_048, 16_384] {
        let dataset = corpus(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &dataset, |b, dataset| {
            b.iter_batched(
                || ScatterView::new(dataset.clone(), PlotConfig::default()),
                |mut view| {
                    view.switch_category_field(CategoryField::Century);
                    black_box(view);
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grouping, bench_toggle, bench_switch_field);
criterion_main!(benches);
