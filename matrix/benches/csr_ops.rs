use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use csr_matrix::CsrMatrix;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SIZES: &[usize] = &[64, 256, 1024];
const DENSITY: f64 = 0.05;

/// A `size x size` matrix where each cell is nonzero with probability `DENSITY`.
fn random_csr(rng: &mut SmallRng, size: usize) -> CsrMatrix<i64> {
    let mut builder = CsrMatrix::builder(size, size);
    for _ in 0..size {
        for c in 0..size {
            if rng.random_bool(DENSITY) {
                builder.push(rng.random_range(1..100), c);
            }
        }
        builder.close_row();
    }
    builder.finish()
}

fn csr_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("csr");
    group.sample_size(20);

    for &size in SIZES {
        let mut rng = SmallRng::seed_from_u64(size as u64);
        let a = random_csr(&mut rng, size);
        let b = random_csr(&mut rng, size);

        group.bench_with_input(BenchmarkId::new("add", size), &size, |bench, _| {
            bench.iter(|| a.add(&b).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("transpose", size), &size, |bench, _| {
            bench.iter(|| a.transpose())
        });
        group.bench_with_input(BenchmarkId::new("multiply", size), &size, |bench, _| {
            bench.iter(|| a.multiply(&b).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, csr_ops);
criterion_main!(benches);
