//! Benchmarks comparing scalar vs SIMD implementations of the clamp kernel

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lanekit::{Avx2Backend, ClampPrimitives, ScalarBackend, Sse41Backend};

/// Generate test data spanning both bounds
fn generate_samples(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| (i as f32 * 0.1).sin() * 100.0)
        .collect()
}

/// First index into `buf` whose address is `align`-byte aligned
fn aligned_offset(buf: &[f32], align: usize) -> usize {
    let misalign = buf.as_ptr() as usize % align;
    if misalign == 0 {
        0
    } else {
        (align - misalign) / std::mem::size_of::<f32>()
    }
}

fn bench_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("clamp");

    for &size in &[1_000usize, 10_000, 100_000] {
        let input = generate_samples(size);
        let mut out = vec![0.0f32; size];

        let scalar = ScalarBackend::new();
        group.bench_with_input(BenchmarkId::new("scalar", size), &input, |b, input| {
            b.iter(|| scalar.clamp(black_box(input), &mut out, -50.0, 50.0));
        });

        if Sse41Backend::is_available() {
            let backend = Sse41Backend::new();
            group.bench_with_input(BenchmarkId::new("sse4.1", size), &input, |b, input| {
                b.iter(|| backend.clamp(black_box(input), &mut out, -50.0, 50.0));
            });
        }

        if Avx2Backend::is_available() {
            let backend = Avx2Backend::new();
            group.bench_with_input(BenchmarkId::new("avx2", size), &input, |b, input| {
                b.iter(|| backend.clamp(black_box(input), &mut out, -50.0, 50.0));
            });

            // Aligned flavor on genuinely 32-byte-aligned buffers
            let in_storage = generate_samples(size + 8);
            let mut out_storage = vec![0.0f32; size + 8];
            let in_off = aligned_offset(&in_storage, 32);
            let out_off = aligned_offset(&out_storage, 32);
            group.bench_with_input(
                BenchmarkId::new("avx2_aligned", size),
                &in_storage,
                |b, in_storage| {
                    b.iter(|| {
                        backend.clamp_aligned(
                            black_box(&in_storage[in_off..in_off + size]),
                            &mut out_storage[out_off..out_off + size],
                            -50.0,
                            50.0,
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_clamp);
criterion_main!(benches);
