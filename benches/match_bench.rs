//! Performance benchmarks for match computation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use harmonic_match::{find_matches, CamelotKey, EngineConfig};

fn bench_find_matches(c: &mut Criterion) {
    let key: CamelotKey = "8A".parse().unwrap();
    let config = EngineConfig::default();

    c.bench_function("find_matches_8a_120", |b| {
        b.iter(|| {
            let _ = find_matches(black_box(key), black_box(120.0), black_box(&config));
        });
    });

    c.bench_function("find_matches_full_wheel", |b| {
        b.iter(|| {
            for key in CamelotKey::all() {
                let _ = find_matches(black_box(key), black_box(128.0), black_box(&config));
            }
        });
    });
}

criterion_group!(benches, bench_find_matches);
criterion_main!(benches);
