use criterion::{black_box, criterion_group, criterion_main, Criterion};
use versionkit_core::{BigInt, TypeDescriptor, VersionGenerator};

fn bind_bench(c: &mut Criterion) {
    c.bench_function("bind_i64", |b| {
        b.iter(|| {
            let _ = VersionGenerator::<i64>::bind().expect("bind");
        })
    });
    c.bench_function("bind_named", |b| {
        let descriptor = TypeDescriptor::named("smallint");
        b.iter(|| {
            let _ = VersionGenerator::<i16>::bind_to(black_box(&descriptor)).expect("bind");
        })
    });
}

fn generate_bench(c: &mut Criterion) {
    let generator = VersionGenerator::<i64>::bind().expect("bind");
    c.bench_function("generate_i64", |b| {
        b.iter(|| generator.generate(black_box(Some(&41))))
    });

    let generator = VersionGenerator::<BigInt>::bind().expect("bind");
    let current = BigInt::from(u64::MAX);
    c.bench_function("generate_big_int", |b| {
        b.iter(|| generator.generate(black_box(Some(&current))))
    });
}

criterion_group!(version_benches, bind_bench, generate_bench);
criterion_main!(version_benches);
