// Copyright 2026 the Pegboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use pegboard_gesture::{
    Chrome, DragTracker, GestureConfig, GridDims, GridPos, PlacedItem, SessionRegistry, Surface,
};

/// One full pointer-move tick: kinematics, magnetism, zone preview, and
/// collision probe, across snapshots of growing size.
fn bench_update_tick(c: &mut Criterion) {
    let tracker = DragTracker::new(GestureConfig::default());
    let surface = Surface::from_viewport(
        Size::new(1920.0, 1080.0),
        GridDims::new(32, 18),
        Chrome::new(48.0, 48.0),
    )
    .unwrap();

    let mut group = c.benchmark_group("gesture/update");
    for len in [16usize, 256, 1024] {
        let items: Vec<PlacedItem<u32>> = (1..=len as u32)
            .map(|i| PlacedItem::new(i, GridPos::new(i % 32 + 1, i / 32 % 18 + 1)))
            .collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            b.iter_batched(
                || {
                    let mut registry = SessionRegistry::new();
                    tracker
                        .start(&mut registry, 0_u32, Point::new(960.0, 540.0), 0)
                        .unwrap();
                    registry
                },
                |mut registry| {
                    for t in 1..=32_u64 {
                        tracker
                            .update(
                                &mut registry,
                                0,
                                Point::new(960.0 + t as f64, 540.0),
                                t * 16,
                                &surface,
                                items,
                            )
                            .unwrap();
                    }
                    black_box(registry);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_update_tick);
criterion_main!(benches);
