// Copyright 2026 the Pegboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use pegboard_collision::detect;
use pegboard_grid::{Grid, GridDims, GridPos, PlacedItem};
use pegboard_snap::magnetism::nearest_magnet;
use pegboard_snap::zones::ZoneLayout;

fn grid() -> Grid {
    Grid::new(Size::new(1920.0, 1080.0), GridDims::new(32, 18)).unwrap()
}

/// Row-major fill of the grid; ids follow cell order and wrap when the
/// snapshot outgrows the grid.
fn snapshot(len: usize) -> Vec<PlacedItem<u32>> {
    (0..len as u32)
        .map(|i| PlacedItem::new(i, GridPos::new(i % 32 + 1, i / 32 % 18 + 1)))
        .collect()
}

fn bench_nearest_magnet(c: &mut Criterion) {
    let grid = grid();
    let mut group = c.benchmark_group("snap/nearest_magnet");

    // The resolver is a linear scan over the snapshot; this pins the
    // per-candidate cost as surfaces grow crowded.
    for len in [16usize, 64, 256, 1024] {
        let items = snapshot(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            b.iter(|| {
                nearest_magnet(
                    black_box(Point::new(960.0, 540.0)),
                    items,
                    Some(0),
                    80.0,
                    &grid,
                )
            });
        });
    }

    group.finish();
}

fn bench_collision_detect(c: &mut Criterion) {
    let grid = grid();
    let mut group = c.benchmark_group("collision/detect");

    for len in [16usize, 64, 256, 1024] {
        let items = snapshot(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            b.iter(|| {
                detect(
                    black_box(Point::new(960.0, 540.0)),
                    items,
                    Some(0),
                    60.0,
                    &grid,
                )
            });
        });
    }

    group.finish();
}

fn bench_zone_queries(c: &mut Criterion) {
    let layout = ZoneLayout::from_grid(&grid());
    let mut group = c.benchmark_group("snap/zones");

    group.bench_function("zone_for_point", |b| {
        b.iter(|| layout.zone_for_point(black_box(Point::new(300.0, 100.0))));
    });

    group.bench_function("edge_proximity", |b| {
        b.iter(|| layout.edge_proximity(black_box(Point::new(5.0, 540.0)), 16.0));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_nearest_magnet,
    bench_collision_detect,
    bench_zone_queries
);
criterion_main!(benches);
