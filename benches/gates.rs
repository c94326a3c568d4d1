use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use torus_gates::bootstrap::{bootstrap_sign, bootstrap_without_key_switch};
use torus_gates::ks::key_switch_new;
use torus_gates::lwe::LweSample;
use torus_gates::math::{mod_switch_to_torus32, TorusSampler};
use torus_gates::{boots_batch, boots_mux, encrypt_bit, generate_keys, BinaryGate, GateBootstrappingParams};

fn param_sets() -> [(&'static str, GateBootstrappingParams); 2] {
    [
        ("testing", GateBootstrappingParams::testing()),
        ("default_80bit", GateBootstrappingParams::default_80bit()),
    ]
}

fn gate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("gates");
    group.sample_size(10);

    for (name, params) in param_sets() {
        let mut sampler = TorusSampler::with_seed(11);
        let (secret, cloud) = generate_keys(params, &mut sampler).unwrap();

        let ca = encrypt_bit(true, &secret, &mut sampler);
        let cb = encrypt_bit(false, &secret, &mut sampler);
        let cc = encrypt_bit(true, &secret, &mut sampler);
        let mut result = cloud.new_sample();

        group.bench_with_input(BenchmarkId::new("nand", name), &name, |b, _| {
            b.iter(|| BinaryGate::Nand.apply(&mut result, black_box(&ca), black_box(&cb), &cloud));
        });

        group.bench_with_input(BenchmarkId::new("mux", name), &name, |b, _| {
            b.iter(|| boots_mux(&mut result, black_box(&ca), &cb, &cc, &cloud));
        });

        let mu = mod_switch_to_torus32(1, 8);
        group.bench_with_input(BenchmarkId::new("bootstrap", name), &name, |b, _| {
            b.iter(|| bootstrap_sign(&mut result, &cloud.bk, mu, black_box(&ca)));
        });

        let mut wide = LweSample::new(cloud.bk.extracted_dim());
        bootstrap_without_key_switch(&mut wide, &cloud.bk, mu, &ca);
        group.bench_with_input(BenchmarkId::new("key_switch", name), &name, |b, _| {
            b.iter(|| key_switch_new(&cloud.bk.ks, black_box(&wide)));
        });
    }

    group.finish();
}

fn batch_benchmark(c: &mut Criterion) {
    let mut sampler = TorusSampler::with_seed(12);
    let (secret, cloud) = generate_keys(GateBootstrappingParams::testing(), &mut sampler).unwrap();

    let mut group = c.benchmark_group("batch");
    group.sample_size(10);

    for count in [4, 16, 64] {
        let lhs: Vec<_> = (0..count).map(|i| encrypt_bit(i % 2 == 0, &secret, &mut sampler)).collect();
        let rhs: Vec<_> = (0..count).map(|i| encrypt_bit(i % 3 == 0, &secret, &mut sampler)).collect();

        group.bench_with_input(BenchmarkId::new("parallel", count), &count, |b, _| {
            b.iter(|| boots_batch(BinaryGate::Xor, &lhs, &rhs, &cloud));
        });

        group.bench_with_input(BenchmarkId::new("sequential", count), &count, |b, _| {
            b.iter(|| {
                let mut result = cloud.new_sample();
                for (ca, cb) in lhs.iter().zip(rhs.iter()) {
                    BinaryGate::Xor.apply(&mut result, ca, cb, &cloud);
                }
                result
            });
        });
    }

    group.finish();
}

criterion_group!(benches, gate_benchmark, batch_benchmark);
criterion_main!(benches);
