// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use lenext_attack::{AttackContext, find_key_len};
use lenext_mac::{PrefixMac, generate_mac};

fn benchmark_forge(c: &mut Criterion) {
    let mut group = c.benchmark_group("length_extension");
    let key = b"benchmark-secret-key";
    let original = b"user=guest;role=reader";
    let leaked = generate_mac(key, original);

    for suffix_len in [4, 64, 1024, 16 * 1024].iter() {
        let suffix = vec![b'x'; *suffix_len];

        group.throughput(Throughput::Bytes(*suffix_len as u64));
        group.bench_with_input(format!("forge {} byte suffix", suffix_len), &suffix, |b, suffix| {
            b.iter(|| {
                AttackContext::new(
                    black_box(leaked),
                    black_box(key.len()),
                    black_box(original),
                    black_box(suffix),
                )
                .expect("AttackContext::new failed")
                .forge()
            });
        });
    }
    group.finish();
}

fn benchmark_find_key_len(c: &mut Criterion) {
    let verifier = PrefixMac::new(b"benchmark-secret-key");
    let original = b"user=guest";
    let leaked = verifier.sign(original.as_slice());

    c.bench_function("find_key_len 1..=64", |b| {
        b.iter(|| {
            find_key_len(black_box(leaked), 1..=64, original, b";admin=true", |forgery| {
                verifier.verify(forgery.forged_message(), &forgery.digest())
            })
            .expect("no key length accepted")
        });
    });
}

criterion_group!(benches, benchmark_forge, benchmark_find_key_len);
criterion_main!(benches);
