use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use prayer_times::{CalculationMethod, Coordinates, PrayerTimes, SolarTime, prayer_times_for_days};
use std::hint::black_box;

fn benchmark_single_day(c: &mut Criterion) {
    let coordinates = Coordinates::new(35.7750, -78.6336).unwrap();
    let date = NaiveDate::from_ymd_opt(2015, 7, 12).unwrap();
    let params = CalculationMethod::MuslimWorldLeague.parameters();

    c.bench_function("solar_time", |b| {
        b.iter(|| SolarTime::new(black_box(date), black_box(coordinates)).unwrap())
    });

    c.bench_function("prayer_times", |b| {
        b.iter(|| PrayerTimes::new(black_box(coordinates), black_box(date), &params).unwrap())
    });
}

fn benchmark_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("methods");

    // London in June exercises the high latitude safeguards
    let coordinates = Coordinates::new(51.5074, -0.1278).unwrap();
    let date = NaiveDate::from_ymd_opt(2016, 6, 21).unwrap();

    for method in [
        CalculationMethod::MuslimWorldLeague,
        CalculationMethod::UmmAlQura,
        CalculationMethod::MoonsightingCommittee,
    ] {
        let params = method.parameters();
        group.bench_with_input(BenchmarkId::from_parameter(method), &params, |b, params| {
            b.iter(|| PrayerTimes::new(black_box(coordinates), black_box(date), params).unwrap())
        });
    }

    group.finish();
}

fn benchmark_year(c: &mut Criterion) {
    let mut group = c.benchmark_group("year");
    group.throughput(Throughput::Elements(365));

    let coordinates = Coordinates::new(21.4225, 39.8262).unwrap();
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let params = CalculationMethod::UmmAlQura.parameters();

    group.bench_function("prayer_times_for_days", |b| {
        b.iter(|| {
            prayer_times_for_days(black_box(coordinates), black_box(start), 365, &params)
                .filter(Result::is_ok)
                .count()
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_day, benchmark_methods, benchmark_year);
criterion_main!(benches);
