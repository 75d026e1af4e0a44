use babyjubjub::{Affine, Group, Projective, RandomField, ScalarField};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_affine_add(c: &mut Criterion) {
    let g = Affine::generator();
    let h = g.double();
    c.bench_function("affine_add", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_projective_add(c: &mut Criterion) {
    let g = Projective::generator();
    let h = g.double();
    c.bench_function("projective_add", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_projective_mixed_add(c: &mut Criterion) {
    let g = Projective::generator();
    let h = Affine::generator().double();
    c.bench_function("projective_mixed_add", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_projective_double(c: &mut Criterion) {
    let g = Projective::generator();
    c.bench_function("projective_double", |bencher| {
        bencher.iter(|| black_box(black_box(g).double()))
    });
}

fn bench_projective_scalar_mul(c: &mut Criterion) {
    let g = Projective::generator();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = ScalarField::random(&mut rng);

    c.bench_function("projective_scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(g).scalar_mul(black_box(&scalar))))
    });
    c.bench_function("projective_scalar_mul_windowed", |bencher| {
        bencher.iter(|| black_box(black_box(g).scalar_mul_windowed(black_box(&scalar))))
    });
}

fn bench_batch_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_normalize");

    for size in [16, 64, 256].iter() {
        let g = Projective::generator();
        let mut acc = Projective::IDENTITY;
        let points: Vec<Projective> = (0..*size)
            .map(|_| {
                acc += g;
                acc
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bencher, _| {
            bencher.iter(|| black_box(Projective::batch_normalize(black_box(&points))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_affine_add,
    bench_projective_add,
    bench_projective_mixed_add,
    bench_projective_double,
    bench_projective_scalar_mul,
    bench_batch_normalize
);
criterion_main!(benches);
