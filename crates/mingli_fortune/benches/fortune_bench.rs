use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mingli_bazi::{calculate_favorable_elements, compute_four_pillars};
use mingli_calendar::{Gender, SolarDateTime, solar_to_lunar};
use mingli_config::EngineConfig;
use mingli_fortune::{calculate_daily_fortune, calculate_fortune};
use mingli_ziwei::compute_purple_star;

fn fortune_bench(c: &mut Criterion) {
    let dt = SolarDateTime::new(1990, 5, 15, 14, 0).unwrap();
    let date = solar_to_lunar(&dt).unwrap();
    let bazi = compute_four_pillars(&date);
    let ziwei = compute_purple_star(&date, Gender::Male);
    let fav = calculate_favorable_elements(&bazi);
    let config = EngineConfig::default();
    let day = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();

    let mut group = c.benchmark_group("fortune");
    group.bench_function("calculate_fortune", |b| {
        b.iter(|| calculate_fortune(black_box(&bazi), &ziwei, &fav, Gender::Male, &config.scoring))
    });
    group.bench_function("daily_seeded", |b| {
        b.iter(|| calculate_daily_fortune(black_box(&bazi), &fav, black_box(day), &config.daily))
    });
    group.finish();
}

criterion_group!(benches, fortune_bench);
criterion_main!(benches);
