//! Quote pricing benchmarks
//!
//! Pricing runs on every form change, so the whole catalogue priced at once
//! must stay well under a frame.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fleet_common::{QuoteRequest, VEHICLE_TYPES};
use fleet_pricing::{calculate_price, format_eur, QuoteSummary};

fn fleet_request(vehicle_types: usize) -> QuoteRequest {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
    VEHICLE_TYPES
        .iter()
        .cycle()
        .take(vehicle_types)
        .enumerate()
        .fold(
            QuoteRequest::new()
                .with_region("international")
                .with_service("totalcare")
                .with_insurance("full")
                .with_delivery("express")
                .with_dates(start, end),
            |req, (i, vehicle)| {
                // Past one full catalogue the keys are unknown and price at zero
                let key = if i < VEHICLE_TYPES.len() {
                    vehicle.key.to_string()
                } else {
                    format!("{}_{}", vehicle.key, i)
                };
                req.with_vehicle(key, (i as i64 + 1) * 3)
            },
        )
}

/// Benchmark quote calculation across fleet sizes
fn bench_calculate_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("pricing");

    for size in [1usize, 14, 100].iter() {
        let request = fleet_request(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("calculate", size), &request, |b, req| {
            b.iter(|| calculate_price(black_box(req)))
        });
    }

    // Catalogue keys only, so every line hits a real rate
    let catalogue = VEHICLE_TYPES
        .iter()
        .fold(QuoteRequest::new(), |req, vehicle| req.with_vehicle(vehicle.key, 10));
    group.bench_function("catalogue", |b| b.iter(|| calculate_price(black_box(&catalogue))));

    group.finish();
}

/// Benchmark presentation formatting
fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    let quote = calculate_price(&fleet_request(14));

    group.bench_function("format_eur", |b| b.iter(|| format_eur(black_box(quote.total))));
    group.bench_function("summary", |b| {
        b.iter(|| QuoteSummary(black_box(&quote)).to_string())
    });

    group.finish();
}

criterion_group!(benches, bench_calculate_price, bench_formatting);
criterion_main!(benches);
