// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use tlsderive_hash::HashAlgorithm;
use tlsderive_kdf::{Hkdf, Kdf, Pbkdf2, Pbkdf2Strategy};

fn benchmark_hkdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("hkdf");
    let salt = b"benchmark-salt";
    let ikm = b"input-key-material-for-hkdf-benchmark";
    let info = b"benchmark-context-info";

    for hash in [HashAlgorithm::Sha256, HashAlgorithm::Sha384] {
        let hkdf = Hkdf::new(hash);
        for okm_len in [32, 64, 256, 1024] {
            group.throughput(Throughput::Bytes(okm_len as u64));
            group.bench_function(format!("{} {} bytes OKM", hash, okm_len), |b| {
                b.iter(|| {
                    hkdf.derive(black_box(ikm), black_box(salt), black_box(info), okm_len)
                        .expect("hkdf failed")
                });
            });
        }
    }
    group.finish();
}

fn benchmark_pbkdf2_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("pbkdf2");
    group.sample_size(10);

    for strategy in Pbkdf2Strategy::ALL {
        let pbkdf2 = Pbkdf2::new(HashAlgorithm::Sha256, Pbkdf2::MIN_ITERATIONS)
            .expect("Failed to Pbkdf2::new(..)")
            .with_strategy(strategy);

        for dk_len in [32, 96] {
            group.bench_function(format!("{:?} {} bytes", strategy, dk_len), |b| {
                b.iter(|| {
                    pbkdf2
                        .derive(black_box(b"password"), black_box(b"salt"), b"", dk_len)
                        .expect("pbkdf2 failed")
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, benchmark_hkdf, benchmark_pbkdf2_strategies);
criterion_main!(benches);
