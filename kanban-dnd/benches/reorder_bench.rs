//! Benchmarks for item reordering on boards of increasing size
//!
//! A drag fires an `over` event for every pointer sample, so one reorder plus
//! reassignment has to stay cheap even on large boards.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kanban_dnd::{BoardConfig, BoardStore, DragController, DragEvent, DragRef, SequentialIds};

fn build_store(groups: usize, items: usize) -> BoardStore<SequentialIds> {
    let mut store = BoardStore::with_ids(BoardConfig::default(), SequentialIds::new());
    let group_ids: Vec<_> = (0..groups).map(|_| store.create_group().id).collect();
    for i in 0..items {
        store.create_item(&group_ids[i % groups]);
    }
    store
}

/// One cross-column `over` event, front of the sequence to the back
fn bench_drag_over(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_over_cross_group");

    for size in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let store = build_store(4, size);
            let first = DragRef::Item(store.items()[0].id.clone());
            let last = DragRef::Item(store.items()[size - 2].id.clone());

            b.iter(|| {
                let mut store = store.clone();
                let mut drag = DragController::new();
                drag.handle(&mut store, &DragEvent::start(first.clone()));
                black_box(drag.handle(&mut store, &DragEvent::over(first.clone(), last.clone())));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drag_over);
criterion_main!(benches);
