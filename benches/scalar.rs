//! sm2z256 `Scalar` benchmarks

use core::hint::black_box;
use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use hex_literal::hex;
use sm2z256::Scalar;

fn scalar_a() -> Scalar {
    Scalar::from_bytes(
        &hex!("128B2FA8BD433C6C068C8D803DFF79792A519A55171B1B650C23661D15897263").into(),
    )
    .unwrap()
}

fn scalar_b() -> Scalar {
    Scalar::from_bytes(
        &hex!("6CB28D99385C175C94F94E934817663FC176D925DD72B727260DBAAE1FB2F96F").into(),
    )
    .unwrap()
}

fn bench_scalar<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let a = black_box(scalar_a());
    let b = black_box(scalar_b());

    group.bench_function("add", |bench| bench.iter(|| black_box(a.add(&b))));
    group.bench_function("sub", |bench| bench.iter(|| black_box(a.sub(&b))));
    group.bench_function("multiply", |bench| bench.iter(|| black_box(a.multiply(&b))));
    group.bench_function("square", |bench| bench.iter(|| black_box(a.square())));
    group.bench_function("invert", |bench| bench.iter(|| a.invert().unwrap()));
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scalar");
    bench_scalar(&mut group);
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
