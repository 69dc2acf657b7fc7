// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use tlsderive_hash::HashAlgorithm;
use tlsderive_mac::{Gmac, GmacKeySize, Hmac, Mac, Poly1305BackendKind};

const SIZES: [usize; 4] = [64, 1024, 8192, 65536];

fn benchmark_poly1305_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly1305");
    let key = [0x42u8; 32];

    for backend in Poly1305BackendKind::ALL {
        for size in SIZES {
            let data = vec![0xa5u8; size];
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_function(format!("{} {} bytes", backend.name(), size), |b| {
                b.iter(|| {
                    backend
                        .authenticate(black_box(&key), black_box(&data))
                        .expect("poly1305 failed")
                });
            });
        }
    }
    group.finish();
}

fn benchmark_hmac(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac");
    let key = b"benchmark-hmac-key";

    for hash in [HashAlgorithm::Sha256, HashAlgorithm::Sha384] {
        let hmac = Hmac::new(hash);
        for size in SIZES {
            let data = vec![0xa5u8; size];
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_function(format!("{} {} bytes", hash, size), |b| {
                b.iter(|| hmac.authenticate(black_box(key), black_box(&data)));
            });
        }
    }
    group.finish();
}

fn benchmark_gmac(c: &mut Criterion) {
    let mut group = c.benchmark_group("gmac");

    for key_size in GmacKeySize::ALL {
        let gmac = Gmac::new(key_size);
        let key = vec![0x24u8; key_size.key_len()];
        for size in SIZES {
            let data = vec![0xa5u8; size];
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_function(format!("aes-{} {} bytes", key_size.bits(), size), |b| {
                b.iter(|| {
                    gmac.compute(black_box(&data), black_box(&key))
                        .expect("gmac failed")
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, benchmark_poly1305_backends, benchmark_hmac, benchmark_gmac);
criterion_main!(benches);
