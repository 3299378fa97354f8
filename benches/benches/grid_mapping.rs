// Copyright 2026 the Pegboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use pegboard_grid::{Grid, GridDims, GridPos};

fn bench_conversions(c: &mut Criterion) {
    let grid = Grid::new(Size::new(1920.0, 1080.0), GridDims::new(32, 18)).unwrap();
    let mut group = c.benchmark_group("grid/convert");

    group.bench_function("to_grid", |b| {
        b.iter(|| grid.to_grid(black_box(Point::new(1234.5, 678.9))));
    });

    group.bench_function("to_pixel", |b| {
        b.iter(|| grid.to_pixel(black_box(GridPos::new(17, 9))));
    });

    // The conversion pair as the drag layer uses it: every tick maps the
    // pointer to a cell and the cell back to a preview position.
    group.bench_function("round_trip_full_grid", |b| {
        b.iter(|| {
            for col in 1..=32 {
                for row in 1..=18 {
                    let cell = GridPos::new(col, row);
                    black_box(grid.to_grid(grid.to_pixel(cell)));
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_conversions);
criterion_main!(benches);
