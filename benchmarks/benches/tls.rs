// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use tlsderive_hash::HashAlgorithm;
use tlsderive_tls::{KeySchedule, Tls12Prf};

fn benchmark_tls12_key_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("tls12_prf");
    let prf = Tls12Prf::new(HashAlgorithm::Sha256);
    let master_secret = [0x11u8; 48];
    let client_random = [0x22u8; 32];
    let server_random = [0x33u8; 32];

    for length in [40, 104, 136] {
        group.bench_function(format!("key_block {} bytes", length), |b| {
            b.iter(|| {
                prf.generate_key_block(
                    black_box(&master_secret),
                    black_box(&client_random),
                    black_box(&server_random),
                    length,
                )
                .expect("key block failed")
            });
        });
    }
    group.finish();
}

fn benchmark_tls13_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("tls13_schedule");
    let shared_secret = [0x44u8; 32];
    let transcript = b"ClientHello...ServerFinished";

    for hash in [HashAlgorithm::Sha256, HashAlgorithm::Sha384] {
        group.bench_function(format!("full handshake {}", hash), |b| {
            b.iter(|| {
                let mut schedule = KeySchedule::new(hash);
                schedule.input_zero().expect("early failed");
                schedule
                    .input_shared_secret(black_box(&shared_secret))
                    .expect("handshake failed");
                let client_hs = schedule
                    .client_handshake_traffic_secret(black_box(transcript))
                    .expect("client hs failed");
                let server_hs = schedule
                    .server_handshake_traffic_secret(black_box(transcript))
                    .expect("server hs failed");
                schedule.input_zero().expect("master failed");
                let client_app = schedule
                    .client_application_traffic_secret(black_box(transcript))
                    .expect("client app failed");

                (client_hs, server_hs, client_app)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_tls12_key_block, benchmark_tls13_schedule);
criterion_main!(benches);
