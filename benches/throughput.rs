use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use recstore::{Record, RecordStore};

fn record(i: u64) -> Record {
    let n = i as i64;
    Record::new(format!("id{i}"), "title", format!("user{}", i % 100), n, n % 1000)
}

fn filled(n: u64) -> RecordStore {
    let mut store = RecordStore::new();
    for i in 0..n {
        store.put(record(i));
    }
    store
}

fn bench_puts(c: &mut Criterion) {
    c.bench_function("store_put_50k", |b| {
        b.iter(|| filled(50_000));
    });
}

fn bench_erase_same_key(c: &mut Criterion) {
    c.bench_function("store_erase_10k_shared_karma", |b| {
        b.iter(|| {
            let mut store = RecordStore::new();
            for i in 0..10_000u64 {
                store.put(Record::new(format!("id{i}"), "t", "same", 0, 0));
            }
            for i in 0..10_000u64 {
                store.erase(&format!("id{i}"));
            }
        });
    });
}

fn bench_range_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("timestamp_range");
    let store = filled(50_000);

    for width in [10i64, 1000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| {
                let mut n = 0usize;
                store.range_by_timestamp(20_000, 20_000 + width, |_| {
                    n += 1;
                    true
                });
                n
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_puts, bench_erase_same_key, bench_range_scan);
criterion_main!(benches);
