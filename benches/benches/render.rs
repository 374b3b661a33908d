// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use folio_data::{Dataset, WorkRecord};
use folio_filter::Facet;
use folio_view::{PlotConfig, ScatterView};

fn view(len: usize) -> ScatterView {
    let records = (0..len)
        .map(|i| {
            let t = i as f64 / len as f64;
            WorkRecord {
                pc1: -0.04 + 0.1 * t,
                pc2: -0.03 + 0.08 * (1.0 - t),
                author: format!("author{}", i % 12),
                full_author: format!("Author {}", i % 12),
                genre: ["Poetry", "Drama", "Fiction"][i % 3].to_owned(),
                century: "17th".to_owned(),
                title: format!("Work <{i}> & more"),
            }
        })
        .collect();
    let mut view = ScatterView::new(Dataset::from_records(records), PlotConfig::default());
    view.toggle(Facet::Category, "Fiction");
    view
}

fn bench_render_svg(c: &mut Criterion) {
    let mut group = c.benchmark_group("svg/render");
    for len in [256usize, 2_048] {
        let view = view(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &view, |b, view| {
            b.iter(|| black_box(folio_svg::render_svg(view)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render_svg);
criterion_main!(benches);
