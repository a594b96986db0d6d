use passhash::HmacAlgorithm;
use passhash::credential::{Password, ScryptHasher};
use passhash::derivation::scrypt::ScryptParams;
use passhash::derivation::{pbkdf2, scrypt};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_pbkdf2(c: &mut Criterion) {
    c.bench_function("pbkdf2-sha256 4096 iterations", |b| {
        b.iter(|| {
            pbkdf2(
                HmacAlgorithm::Sha256,
                black_box(b"password"),
                black_box(b"salt"),
                4096,
                32,
            )
        })
    });
}

pub fn bench_scrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("scrypt");
    group.sample_size(20);

    group.bench_function("N=1024 r=8 p=1", |b| {
        b.iter(|| {
            scrypt(
                HmacAlgorithm::Sha256,
                black_box(b"password"),
                black_box(b"NaCl"),
                1024,
                8,
                1,
                64,
            )
        })
    });

    group.bench_function("N=1024 r=8 p=16", |b| {
        b.iter(|| {
            scrypt(
                HmacAlgorithm::Sha256,
                black_box(b"password"),
                black_box(b"NaCl"),
                1024,
                8,
                16,
                64,
            )
        })
    });

    group.finish();
}

pub fn bench_credential(c: &mut Criterion) {
    let hasher = ScryptHasher::new(ScryptParams::new(12, 8, 1).unwrap());
    let password = Password::from("correct horse battery staple");

    c.bench_function("create $s0$ log_n=12", |b| {
        b.iter(|| hasher.hash(black_box(&password)))
    });
}

criterion_group!(benches, bench_pbkdf2, bench_scrypt, bench_credential);
criterion_main!(benches);
