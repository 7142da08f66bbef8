//! Benchmarks for classifying many areas against one target.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use areamark::{containment_partition, intersection_partition, Polygon};

/// Lays out a grid of squares, `count` in total, `spacing` apart.
fn generate_grid(count: usize, size: f64, spacing: f64) -> Vec<Polygon<f64>> {
    let columns = (count as f64).sqrt().ceil() as usize;
    (0..count)
        .map(|i| {
            let x = (i % columns) as f64 * spacing;
            let y = (i / columns) as f64 * spacing;
            Polygon::from_coords(&[(x, y), (x + size, y), (x + size, y + size), (x, y + size)])
                .expect("grid square is valid")
        })
        .collect()
}

fn bench_intersection_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersection_partition");

    for count in [10, 100, 1000] {
        let areas = generate_grid(count, 8.0, 10.0);
        let target = Polygon::from_coords(&[(5.0, 5.0), (55.0, 5.0), (55.0, 55.0), (5.0, 55.0)])
            .expect("target is valid");
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("grid", count), &areas, |b, areas| {
            b.iter(|| intersection_partition(black_box(areas), black_box(&target)))
        });
    }

    group.finish();
}

fn bench_containment_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("containment_partition");

    for count in [10, 100, 1000] {
        let areas = generate_grid(count, 8.0, 10.0);
        let target = Polygon::from_coords(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)])
            .expect("target is valid");
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("grid", count), &areas, |b, areas| {
            b.iter(|| containment_partition(black_box(areas), black_box(&target)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_intersection_partition, bench_containment_partition);
criterion_main!(benches);
