//! sm2z256 point operation benchmarks

use core::hint::black_box;
use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use elliptic_curve::ops::{LinearCombination, MulByGenerator};
use hex_literal::hex;
use sm2z256::{ProjectivePoint, Scalar};

fn scalar() -> Scalar {
    Scalar::from_bytes(
        &hex!("6CB28D99385C175C94F94E934817663FC176D925DD72B727260DBAAE1FB2F96F").into(),
    )
    .unwrap()
}

fn bench_point<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let k = black_box(scalar());
    let p = black_box(ProjectivePoint::mul_by_generator(&k));
    let q = black_box(p.double());
    let q_affine = black_box(q.to_affine());

    group.bench_function("double", |bench| bench.iter(|| black_box(p.double())));
    group.bench_function("add", |bench| bench.iter(|| black_box(p.add(&q))));
    group.bench_function("add_mixed", |bench| {
        bench.iter(|| black_box(p.add_mixed(&q_affine)))
    });
    group.bench_function("to_affine", |bench| bench.iter(|| black_box(p.to_affine())));
    group.bench_function("mul", |bench| bench.iter(|| black_box(p * k)));
    group.bench_function("mul_by_generator", |bench| {
        bench.iter(|| black_box(ProjectivePoint::mul_by_generator(&k)))
    });
    group.bench_function("lincomb", |bench| {
        bench.iter(|| {
            black_box(ProjectivePoint::lincomb(&[
                (ProjectivePoint::GENERATOR, k),
                (p, k),
            ]))
        })
    });
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ProjectivePoint");
    bench_point(&mut group);
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
