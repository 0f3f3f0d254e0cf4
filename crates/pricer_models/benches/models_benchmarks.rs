//! Benchmarks for the closed-form pricing kernel.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pricer_core::calendar::BusinessCalendar;
use pricer_models::analytical::{norm_cdf, Black76};
use pricer_models::expiry::expiry_date;
use pricer_models::instruments::{DeliveryMonth, InstrumentKind, OptionKind};

fn bench_black76_price(c: &mut Criterion) {
    let model = Black76::new(80.0, 0.05, 0.20).unwrap();

    c.bench_function("black76_call", |b| {
        b.iter(|| model.price(OptionKind::Call, black_box(82.5), black_box(0.25)))
    });

    c.bench_function("black76_put", |b| {
        b.iter(|| model.price(OptionKind::Put, black_box(82.5), black_box(0.25)))
    });
}

fn bench_norm_cdf(c: &mut Criterion) {
    c.bench_function("norm_cdf", |b| b.iter(|| norm_cdf(black_box(0.37))));
}

fn bench_expiry_date(c: &mut Criterion) {
    let calendar = BusinessCalendar::us_federal(2024..=2026);
    let delivery = DeliveryMonth::new(2025, 6).unwrap();

    c.bench_function("crude_oil_expiry", |b| {
        b.iter(|| expiry_date(InstrumentKind::CrudeOil, black_box(delivery), &calendar))
    });
}

criterion_group!(
    benches,
    bench_black76_price,
    bench_norm_cdf,
    bench_expiry_date
);
criterion_main!(benches);
