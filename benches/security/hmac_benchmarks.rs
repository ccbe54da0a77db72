use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dsa_hmac::security::hmac_sha512;

fn hmac_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac_sha512");
    let key = b"This is my super secret HMAC-SHA-512 key";

    for size in [64usize, 1024, 16 * 1024] {
        let message = vec![0xa5u8; size];
        group.bench_with_input(BenchmarkId::from_parameter(size), &message, |b, message| {
            b.iter(|| hmac_sha512(black_box(key), black_box(message)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, hmac_benchmarks);
criterion_main!(benches);
