//! Engine and renderer benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use eca_scroll::core::{next_generation, Generation, Rule};
use eca_scroll::raster::ScrollRenderer;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_next_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    for len in [64usize, 640, 4096] {
        let seed = Generation::random(len, &mut StdRng::seed_from_u64(1)).unwrap();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(format!("rule_30_{}", len), |b| {
            b.iter(|| black_box(next_generation(black_box(&seed), Rule::RULE_30)))
        });
    }

    group.finish();
}

fn bench_renderer(c: &mut Criterion) {
    let mut group = c.benchmark_group("renderer");

    // 640x480 with 10px cells: 64 columns, 48 rows
    let row = Generation::random(64, &mut StdRng::seed_from_u64(2)).unwrap();

    group.bench_function("fill", |b| {
        b.iter(|| {
            let mut renderer = ScrollRenderer::new(640, 480);
            renderer.configure(10).unwrap();
            for _ in 0..48 {
                renderer.submit(row.clone()).unwrap();
            }
            black_box(renderer)
        })
    });

    // Every submission past capacity redraws the whole surface
    let mut full = ScrollRenderer::new(640, 480);
    full.configure(10).unwrap();
    for _ in 0..48 {
        full.submit(row.clone()).unwrap();
    }
    group.bench_function("scroll", |b| {
        b.iter(|| black_box(full.submit(row.clone()).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_next_generation, bench_renderer);
criterion_main!(benches);
