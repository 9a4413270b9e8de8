//! Signing and verification benchmarks
//!
//! Also measures that signature rejection time does not depend on where the
//! first wrong character sits.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hstoken::*;

fn sample_claims(extra: usize) -> Claims {
    let mut claims = Claims::new()
        .with("sub", "user123")
        .with("iss", "https://example.com")
        .with("roles", vec!["admin", "user"]);
    for i in 0..extra {
        claims.insert(format!("claim_{i}"), format!("value_{i}"));
    }
    claims
}

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("sign");
    let secret = Secret::from("test-secret-key-for-hs256");

    for extra in [0, 10, 100] {
        let claims = sample_claims(extra);
        group.bench_with_input(BenchmarkId::from_parameter(extra), &claims, |b, claims| {
            b.iter(|| sign(black_box(claims), now_millis() + 60_000, &secret).unwrap());
        });
    }

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify");
    let secret = Secret::from("test-secret-key-for-hs256");

    for extra in [0, 10, 100] {
        let token = sign(&sample_claims(extra), now_millis() + 3_600_000, &secret).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(extra), &token, |b, token| {
            b.iter(|| verify(black_box(token), &secret).unwrap());
        });
    }

    group.finish();
}

fn bench_signature_mismatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("signature_mismatch");
    let secret = Secret::from("test-secret-key-for-hs256");
    let token = sign(&sample_claims(0), now_millis() + 3_600_000, &secret).unwrap();

    let replace_at = |index: usize| {
        let mut bytes = token.clone().into_bytes();
        bytes[index] = if bytes[index] == b'A' { b'B' } else { b'A' };
        String::from_utf8(bytes).unwrap()
    };
    let signature_start = token.rfind('.').unwrap() + 1;

    let first = replace_at(signature_start);
    let last = replace_at(token.len() - 1);

    group.bench_function("first_char", |b| {
        b.iter(|| verify(black_box(&first), &secret).unwrap_err());
    });
    group.bench_function("last_char", |b| {
        b.iter(|| verify(black_box(&last), &secret).unwrap_err());
    });

    group.finish();
}

criterion_group!(benches, bench_sign, bench_verify, bench_signature_mismatch);
criterion_main!(benches);
