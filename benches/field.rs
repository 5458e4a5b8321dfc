//! sm2z256 `FieldElement` benchmarks

use core::hint::black_box;
use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use hex_literal::hex;
use sm2z256::FieldElement;

fn fe_a() -> FieldElement {
    FieldElement::from_bytes(
        &hex!("32C4AE2C1F1981195F9904466A39C9948FE30BBFF2660BE1715A4589334C74C7").into(),
    )
    .unwrap()
}

fn fe_b() -> FieldElement {
    FieldElement::from_bytes(
        &hex!("BC3736A2F4F6779C59BDCEE36B692153D0A9877CC62A474002DF32E52139F0A0").into(),
    )
    .unwrap()
}

fn bench_field<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let a = black_box(fe_a());
    let b = black_box(fe_b());

    group.bench_function("add", |bench| bench.iter(|| black_box(a.add(&b))));
    group.bench_function("sub", |bench| bench.iter(|| black_box(a.sub(&b))));
    group.bench_function("half", |bench| bench.iter(|| black_box(a.half())));
    group.bench_function("multiply", |bench| bench.iter(|| black_box(a.multiply(&b))));
    group.bench_function("square", |bench| bench.iter(|| black_box(a.square())));
    group.bench_function("invert", |bench| bench.iter(|| a.invert().unwrap()));
    group.bench_function("sqrt", |bench| bench.iter(|| a.square().sqrt().unwrap()));
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("FieldElement");
    bench_field(&mut group);
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
