use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dsa_hmac::security::{
    encode_u64, recover_private_key, seeded_rng, sign, sign_with_nonce, solve, verify,
    DsaKeyGenConfig, DsaKeyPair, DsaParams,
};
use num_bigint::BigUint;
use std::sync::Arc;

fn dsa_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsa");
    let params = Arc::new(DsaParams::nist_1024_160());
    let kp = DsaKeyPair::generate_with_config(params.clone(), &DsaKeyGenConfig { seed: Some(1) })
        .unwrap();
    let message = encode_u64(582_346_829_057_612);

    group.bench_function("keygen", |b| {
        let mut rng = seeded_rng(Some(2));
        b.iter(|| DsaKeyPair::generate(params.clone(), &mut rng).unwrap())
    });

    group.bench_function("sign", |b| {
        let mut rng = seeded_rng(Some(3));
        b.iter(|| sign(&kp, black_box(&message), &mut rng).unwrap())
    });

    let mut rng = seeded_rng(Some(4));
    let sig = sign(&kp, &message, &mut rng).unwrap();
    group.bench_function("verify", |b| {
        b.iter(|| verify(kp.public_key(), black_box(&message), &sig).unwrap())
    });

    group.finish();
}

fn attack_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("attacks");

    let params = Arc::new(DsaParams::nist_1024_160());
    let kp = DsaKeyPair::generate_with_config(params.clone(), &DsaKeyGenConfig { seed: Some(5) })
        .unwrap();
    let k = BigUint::from(0xdead_beef_u64);
    let m1 = encode_u64(582_346_829_057_612);
    let m2 = encode_u64(8_061_474_912_583);
    let sig1 = sign_with_nonce(&kp, &m1, &k).unwrap();
    let sig2 = sign_with_nonce(&kp, &m2, &k).unwrap();
    group.bench_function("nonce_reuse", |b| {
        b.iter(|| recover_private_key(&params, &m1, &sig1, &m2, &sig2).unwrap())
    });

    let toy = DsaParams::toy();
    let y = BigUint::from(31_377u32);
    group.bench_function("discrete_log_toy", |b| {
        b.iter(|| solve(black_box(&y), toy.g(), toy.p()).unwrap())
    });

    group.finish();
}

criterion_group!(benches, dsa_benchmarks, attack_benchmarks);
criterion_main!(benches);
