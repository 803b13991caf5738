//! Benchmarks for the typing sequencer.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use typecycle::{TimingConfig, TypingSequencer};

const PHRASES: [&str; 4] = [
    "All Mobile Services & Bill Payments",
    "Instant Money Transfer & Recharges",
    "Premium Mobile Accessories",
    "Trusted Local Mobile Repair",
];

fn bench_new(c: &mut Criterion) {
    c.bench_function("new", |b| {
        b.iter(|| black_box(TypingSequencer::new(PHRASES).unwrap()))
    });
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("tick", |b| {
        let mut seq = TypingSequencer::new(PHRASES).unwrap();
        b.iter(|| black_box(seq.tick()))
    });
}

fn bench_current_text(c: &mut Criterion) {
    c.bench_function("current_text", |b| {
        let mut seq = TypingSequencer::new(PHRASES).unwrap();
        // Park mid-phrase so the derivation does real work.
        for _ in 0..10 {
            seq.tick();
        }
        b.iter(|| black_box(seq.current_text()))
    });
}

fn bench_full_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_cycle");

    for num_phrases in [1, 4].iter() {
        let phrases: Vec<&str> = PHRASES.iter().cycle().take(*num_phrases).copied().collect();
        // Ticks for one full pass: per phrase, len typing + pause entry +
        // pause + len deleting + wrap.
        let ticks: usize = phrases.iter().map(|p| 2 * p.chars().count() + 3).sum();

        group.bench_with_input(
            BenchmarkId::new("phrases", num_phrases),
            num_phrases,
            |b, _| {
                let mut seq =
                    TypingSequencer::with_config(phrases.clone(), TimingConfig::new()).unwrap();
                b.iter(|| {
                    for _ in 0..ticks {
                        black_box(seq.tick());
                    }
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_new, bench_tick, bench_current_text, bench_full_cycle);
criterion_main!(benches);
