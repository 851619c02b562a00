//! Performance benchmarks for folio-engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use folio_engine::{
    compute_position, frame, Carousel, CarouselConfig, InputController, InputEvent,
};

fn bench_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("positions");

    group.bench_function("compute_position", |b| {
        b.iter(|| compute_position(black_box(3), black_box(2), black_box(5)))
    });

    for size in [5usize, 100, 10_000] {
        group.bench_with_input(BenchmarkId::new("frame", size), &size, |b, &size| {
            b.iter(|| frame(black_box(size / 2), black_box(size)))
        });
    }

    group.finish();
}

fn bench_reducer(c: &mut Criterion) {
    let mut group = c.benchmark_group("reducer");

    group.bench_function("next", |b| {
        let mut carousel = Carousel::with_items(100).unwrap();
        b.iter(|| carousel.next())
    });

    group.bench_function("previous", |b| {
        let mut carousel = Carousel::with_items(100).unwrap();
        b.iter(|| carousel.previous())
    });

    group.bench_function("touch_sequence", |b| {
        let mut controller = InputController::new(100, CarouselConfig::default()).unwrap();
        b.iter(|| {
            controller
                .dispatch(black_box(InputEvent::TouchStart { x: 300.0 }))
                .unwrap();
            controller
                .dispatch(black_box(InputEvent::TouchMove { x: 120.0 }))
                .unwrap();
            controller.dispatch(black_box(InputEvent::TouchEnd)).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_positions, bench_reducer);
criterion_main!(benches);
