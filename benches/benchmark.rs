use std::f64::consts::TAU;
use std::fs;

use criterion::{criterion_group, criterion_main, Criterion};

use earcut_flat::{flatten, Earcut, EarcutOptions};

fn load_fixture(name: &str) -> (Vec<f64>, Vec<usize>) {
    type Coords = Vec<Vec<[f64; 2]>>;
    let s = fs::read_to_string("./tests/fixtures/".to_string() + name + ".json").unwrap();
    let rings = serde_json::from_str::<Coords>(&s).unwrap();
    let flat = flatten(&rings).unwrap();
    (flat.vertices, flat.hole_indices)
}

/// wavy ring with many vertices and a grid of square holes
fn generated(n: usize, holes_per_side: usize) -> (Vec<f64>, Vec<usize>) {
    let mut data: Vec<f64> = (0..n)
        .flat_map(|k| {
            let t = TAU * k as f64 / n as f64;
            let r = 1000.0 + 40.0 * (t * 37.0).sin();
            [r * t.cos(), r * t.sin()]
        })
        .collect();
    let mut hole_indices = Vec::new();
    let step = 1000.0 / holes_per_side as f64;
    for i in 0..holes_per_side {
        for j in 0..holes_per_side {
            let (x, y) = (-500.0 + i as f64 * step, -500.0 + j as f64 * step);
            let s = step * 0.4;
            hole_indices.push(data.len() / 2);
            data.extend([x, y, x + s, y, x + s, y + s, x, y + s]);
        }
    }
    (data, hole_indices)
}

fn bench(c: &mut Criterion) {
    let mut earcut = Earcut::new();
    let mut triangles: Vec<usize> = Vec::new();

    for name in ["circle-200", "star-hole", "comb"] {
        let (data, hole_indices) = load_fixture(name);
        c.bench_function(name, |b| {
            b.iter(|| {
                earcut.earcut(&data, &hole_indices, 2, &mut triangles);
            })
        });
    }

    let (data, hole_indices) = generated(20_000, 10);
    c.bench_function("generated-indexed", |b| {
        b.iter(|| {
            earcut.earcut(&data, &hole_indices, 2, &mut triangles);
        })
    });

    let mut unindexed = Earcut::with_options(EarcutOptions::unindexed());
    let (data, hole_indices) = generated(2_000, 3);
    c.bench_function("generated-unindexed", |b| {
        b.iter(|| {
            unindexed.earcut(&data, &hole_indices, 2, &mut triangles);
        })
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
