use std::f64::consts::TAU;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use radialfit::{inner_grid, score, search, AnalyzeConfig, Outline, C64};

fn wobbly_outline(n: usize, seed: u64) -> Vec<C64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let t = TAU * i as f64 / n as f64;
            let r = 1.0 + 0.25 * (5.0 * t).cos() + rng.gen_range(-0.02..0.02);
            C64::from_polar(r, t)
        })
        .collect()
}

fn bench_score(c: &mut Criterion) {
    let outline = wobbly_outline(512, 7);
    c.bench_function("score_512", |b| {
        b.iter(|| score(black_box(&outline), black_box(C64::new(0.05, -0.03))))
    });
}

fn bench_inner_grid(c: &mut Criterion) {
    let outline = Outline::new(wobbly_outline(512, 11)).expect("valid outline");
    c.bench_function("inner_grid_512_n40", |b| {
        b.iter(|| inner_grid(black_box(&outline), 40))
    });
}

fn bench_search(c: &mut Criterion) {
    let outline = Outline::new(wobbly_outline(256, 13)).expect("valid outline");
    let mut group = c.benchmark_group("search_256_n30");
    for parallel in [false, true] {
        let config = AnalyzeConfig {
            grid_resolution: 30,
            parallel,
            ..Default::default()
        };
        let label = if parallel { "parallel" } else { "sequential" };
        group.bench_function(label, |b| {
            b.iter(|| search(black_box(&outline), &config).expect("non-empty grid"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_score, bench_inner_grid, bench_search);
criterion_main!(benches);
