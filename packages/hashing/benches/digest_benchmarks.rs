//! Throughput benchmarks for digest sets

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use devkit_hashing::{digest, digest_all, digest_all_async, DigestAlgorithm};
use tokio::runtime::Runtime;

fn benchmark_single_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest_throughput");

    for size in [1024usize, 65536, 1_048_576] {
        group.throughput(Throughput::Bytes(size as u64));
        let data = vec![0u8; size];

        for algorithm in DigestAlgorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), size), &data, |b, data| {
                b.iter(|| std::hint::black_box(digest(algorithm, data)));
            });
        }
    }
    group.finish();
}

fn benchmark_digest_sets(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime should start");
    let mut group = c.benchmark_group("digest_set");
    let text = "a".repeat(65536);
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("sync", |b| {
        b.iter(|| std::hint::black_box(digest_all(&text)));
    });

    group.bench_function("async", |b| {
        b.iter(|| {
            rt.block_on(async {
                std::hint::black_box(digest_all_async(&text).await);
            });
        });
    });
    group.finish();
}

criterion_group!(benches, benchmark_single_algorithms, benchmark_digest_sets);
criterion_main!(benches);
