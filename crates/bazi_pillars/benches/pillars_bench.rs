use bazi_pillars::{BirthInput, Stem, calculate_bazi, day_pillar, month_pillar};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn chart_bench(c: &mut Criterion) {
    let input = BirthInput::new(1980, 6, 24, 14, 30, 13.405, 120);
    c.bench_function("calculate_bazi", |b| {
        b.iter(|| calculate_bazi(black_box(&input)))
    });
}

fn pillar_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("pillars");
    group.bench_function("day_pillar", |b| {
        b.iter(|| day_pillar(black_box(2024), black_box(1), black_box(1)))
    });
    group.bench_function("month_pillar", |b| {
        b.iter(|| month_pillar(black_box(92.9), black_box(Stem::Geng)))
    });
    group.finish();
}

criterion_group!(benches, chart_bench, pillar_bench);
criterion_main!(benches);
