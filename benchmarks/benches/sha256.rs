// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use lenext_buffer::ByteBuffer;
use lenext_sha256::{ChainingValue, compress, hash, sha256};

fn benchmark_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256");

    for size in [64, 1024, 16 * 1024, 1024 * 1024].iter() {
        let data = vec![0xa5u8; *size];

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} bytes", size), &data, |b, data| {
            b.iter(|| sha256(black_box(data)));
        });

        // Excludes the copy into a fresh buffer from the measurement
        group.bench_with_input(format!("{} bytes owned", size), &data, |b, data| {
            b.iter_batched(
                || ByteBuffer::from_slice(data),
                |buffer| hash(buffer, 0, ChainingValue::initial()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn benchmark_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");
    let block = [0x5au8; 64];
    let cv = ChainingValue::initial();

    group.throughput(Throughput::Bytes(64));
    group.bench_function("single block", |b| {
        b.iter(|| compress(black_box(&cv), black_box(&block)));
    });
    group.finish();
}

criterion_group!(benches, benchmark_sha256, benchmark_compress);
criterion_main!(benches);
