use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyotish_base::{
    SHODASHAVARGA, Varga, calculate_ashtakavarga, karana_from_elongation, kp_pointer,
    nakshatra_from_longitude, rashi_from_longitude, tithi_from_elongation, varga_longitude,
    varga_longitudes, yoga_from_sum,
};

fn zodiac_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(lon)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.finish();
}

fn panchanga_primitives_bench(c: &mut Criterion) {
    let elong = 211.75;
    let sum = 278.31;

    let mut group = c.benchmark_group("panchanga_primitives");
    group.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(elong)))
    });
    group.bench_function("karana_from_elongation", |b| {
        b.iter(|| karana_from_elongation(black_box(elong)))
    });
    group.bench_function("yoga_from_sum", |b| {
        b.iter(|| yoga_from_sum(black_box(sum)))
    });
    group.finish();
}

fn varga_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("varga");
    group.bench_function("varga_longitude_d9", |b| {
        b.iter(|| varga_longitude(Varga::D9, black_box(lon)))
    });
    group.bench_function("varga_longitude_d30", |b| {
        b.iter(|| varga_longitude(Varga::D30, black_box(lon)))
    });
    group.bench_function("varga_longitudes_shodashavarga", |b| {
        b.iter(|| varga_longitudes(black_box(lon), black_box(&SHODASHAVARGA)))
    });
    group.finish();
}

fn kp_bench(c: &mut Criterion) {
    let lon = 138.9333;

    let mut group = c.benchmark_group("kp");
    group.bench_function("kp_pointer", |b| b.iter(|| kp_pointer(black_box(lon))));
    group.finish();
}

fn ashtakavarga_bench(c: &mut Criterion) {
    let rashis = [3u8, 7, 0, 11, 5, 9, 2];

    let mut group = c.benchmark_group("ashtakavarga");
    group.bench_function("calculate_ashtakavarga", |b| {
        b.iter(|| calculate_ashtakavarga(black_box(&rashis), black_box(1)))
    });
    group.finish();
}

criterion_group!(
    benches,
    zodiac_bench,
    panchanga_primitives_bench,
    varga_bench,
    kp_bench,
    ashtakavarga_bench
);
criterion_main!(benches);
