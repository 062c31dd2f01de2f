use bazi_solar::{
    SolarTerm, all_solar_terms, current_solar_term, find_solar_longitude_jd, solar_longitude_deg,
};
use bazi_time::UtcTime;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn longitude_bench(c: &mut Criterion) {
    let jd = UtcTime::new(2024, 3, 20, 12, 0, 0.0).to_jd();
    c.bench_function("solar_longitude_deg", |b| {
        b.iter(|| solar_longitude_deg(black_box(jd)))
    });
}

fn root_finder_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("solar_search");
    group.bench_function("find_li_chun", |b| {
        b.iter(|| {
            find_solar_longitude_jd(
                black_box(SolarTerm::LiChun.longitude_deg()),
                black_box(2024),
            )
        })
    });
    group.bench_function("find_dong_zhi", |b| {
        b.iter(|| find_solar_longitude_jd(black_box(270.0), black_box(2024)))
    });
    group.finish();
}

fn calendar_bench(c: &mut Criterion) {
    let jd = UtcTime::new(2024, 6, 1, 0, 0, 0.0).to_jd();
    let mut group = c.benchmark_group("solar_terms");
    group.bench_function("current_solar_term", |b| {
        b.iter(|| current_solar_term(black_box(jd)))
    });
    group.bench_function("all_solar_terms", |b| {
        b.iter(|| all_solar_terms(black_box(2024)))
    });
    group.finish();
}

criterion_group!(benches, longitude_bench, root_finder_bench, calendar_bench);
criterion_main!(benches);
