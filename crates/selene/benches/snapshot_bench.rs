use criterion::{black_box, criterion_group, criterion_main, Criterion};
use selene::aspects::AspectCalculator;
use selene::{CalendarDate, MeanLongitudeEphemeris, SnapshotCalculator};

fn bench_compute_snapshot(c: &mut Criterion) {
    let calculator = SnapshotCalculator::default();

    c.bench_function("compute_snapshot", |b| {
        b.iter(|| calculator.compute_snapshot(black_box(CalendarDate::new(2024, 3, 20))))
    });
}

fn bench_find_aspects(c: &mut Criterion) {
    let longitudes = MeanLongitudeEphemeris::new().compute(CalendarDate::new(2024, 3, 20));
    let calculator = AspectCalculator::default();

    c.bench_function("find_aspects", |b| {
        b.iter(|| calculator.find_aspects(black_box(&longitudes)))
    });
}

criterion_group!(benches, bench_compute_snapshot, bench_find_aspects);
criterion_main!(benches);
