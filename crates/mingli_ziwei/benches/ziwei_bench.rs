use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mingli_calendar::{Gender, SolarDateTime, solar_to_lunar};
use mingli_ziwei::{arrange_main_stars, calculate_life_palace, compute_purple_star};

fn ziwei_bench(c: &mut Criterion) {
    let dt = SolarDateTime::new(1990, 5, 15, 14, 0).unwrap();
    let date = solar_to_lunar(&dt).unwrap();

    let mut group = c.benchmark_group("ziwei");
    group.bench_function("life_palace", |b| {
        b.iter(|| calculate_life_palace(black_box(4), black_box(21), black_box(14)))
    });
    group.bench_function("main_stars", |b| {
        b.iter(|| arrange_main_stars(black_box(9), black_box(6)))
    });
    group.bench_function("full_chart", |b| {
        b.iter(|| compute_purple_star(black_box(&date), Gender::Male))
    });
    group.finish();
}

criterion_group!(benches, ziwei_bench);
criterion_main!(benches);
