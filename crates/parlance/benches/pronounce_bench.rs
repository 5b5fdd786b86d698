//! Benchmarks for number pronunciation, fraction speech and clock speech.
//!
//! Run with: cargo bench -p parlance --bench pronounce_bench
//!
//! Workloads:
//! - **Magnitudes**: one value per named scale, short and long scale.
//! - **Decimals**: values with spoken fractional digits.
//! - **Fractions**: `nice_number` over the default denominators.
//! - **Clock**: every minute of the day, 12-hour speech.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use parlance::{
    ClockTime, DEFAULT_DENOMINATORS, Lang, Number, PronounceOptions, TimeOptions, formatter,
};
use std::hint::black_box;

// ── Workload Generators ─────────────────────────────────────────────────

/// `1`, `12`, `123`, ... up to 35 digits, so every group is nonzero.
fn magnitude_workload() -> Vec<Number> {
    (1i128..36)
        .map(|digits| {
            let n = (0..digits).fold(0i128, |acc, i| acc * 10 + (i % 9 + 1));
            Number::from(n)
        })
        .collect()
}

fn decimal_workload(size: usize) -> Vec<Number> {
    (0..size)
        .map(|i| Number::from(i as f64 * 1.0371 + 0.25))
        .collect()
}

fn fraction_workload(size: usize) -> Vec<f64> {
    (0..size).map(|i| i as f64 / 7.0).collect()
}

// ── Benchmark Functions ─────────────────────────────────────────────────

fn bench_magnitudes(c: &mut Criterion) {
    let mut group = c.benchmark_group("pronounce/magnitudes");
    let work = magnitude_workload();

    for lang in Lang::ALL {
        for (scale, short) in [("short", true), ("long", false)] {
            let opts = PronounceOptions::default().short_scale(short);
            group.bench_with_input(
                BenchmarkId::new(lang.code(), scale),
                &work,
                |b, work| {
                    let f = formatter(lang);
                    b.iter(|| {
                        for &n in work {
                            black_box(f.pronounce_number(black_box(n), opts));
                        }
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_decimals(c: &mut Criterion) {
    let mut group = c.benchmark_group("pronounce/decimals");
    let work = decimal_workload(1_000);

    for lang in Lang::ALL {
        for (mode, scientific) in [("plain", false), ("scientific", true)] {
            let opts = PronounceOptions::default().scientific(scientific);
            group.bench_with_input(BenchmarkId::new(lang.code(), mode), &work, |b, work| {
                let f = formatter(lang);
                b.iter(|| {
                    for &n in work {
                        black_box(f.pronounce_number(black_box(n), opts));
                    }
                });
            });
        }
    }
    group.finish();
}

fn bench_fractions(c: &mut Criterion) {
    let mut group = c.benchmark_group("nice_number");
    let work = fraction_workload(1_000);

    for lang in Lang::ALL {
        group.bench_with_input(BenchmarkId::new(lang.code(), "speech"), &work, |b, work| {
            let f = formatter(lang);
            b.iter(|| {
                for &x in work {
                    black_box(f.nice_number(black_box(x), true, &DEFAULT_DENOMINATORS));
                }
            });
        });
    }
    group.finish();
}

fn bench_clock(c: &mut Criterion) {
    let mut group = c.benchmark_group("nice_time");
    let day: Vec<ClockTime> = (0..24)
        .flat_map(|h| (0..60).filter_map(move |m| ClockTime::new(h, m).ok()))
        .collect();

    for lang in Lang::ALL {
        group.bench_with_input(BenchmarkId::new(lang.code(), "12h"), &day, |b, day| {
            let f = formatter(lang);
            b.iter(|| {
                for &t in day {
                    black_box(f.nice_time(black_box(t), TimeOptions::default()));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_magnitudes,
    bench_decimals,
    bench_fractions,
    bench_clock
);
criterion_main!(benches);
