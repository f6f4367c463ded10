// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use lenext_mac::{PrefixMac, generate_mac};

fn benchmark_prefix_mac(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_mac");
    let key = b"benchmark-secret-key";

    for size in [16, 256, 4096, 64 * 1024].iter() {
        let message = vec![0x42u8; *size];

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("generate {} bytes", size), &message, |b, message| {
            b.iter(|| generate_mac(black_box(key), black_box(message.as_slice())));
        });

        let signer = PrefixMac::new(key);
        let mac = signer.sign(message.as_slice());

        group.bench_with_input(format!("verify {} bytes", size), &message, |b, message| {
            b.iter(|| signer.verify(black_box(message.as_slice()), black_box(&mac)));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_prefix_mac);
criterion_main!(benches);
