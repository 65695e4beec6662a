use std::iter;

use bloomfield::BloomFilter;
use criterion::Criterion;

fn key() -> String {
    let rng = fastrand::Rng::new();
    iter::repeat_with(|| rng.alphanumeric()).take(32).collect()
}

fn populate(bf: &mut BloomFilter, n: usize) {
    bf.extend(iter::repeat_with(key).take(n));
}

fn bench_bloom_filter_insert(c: &mut Criterion) {
    c.bench_function("insert-1000", |b| {
        let mut bf = BloomFilter::with_capacity(1000);

        b.iter(|| {
            let item = key();
            bf.insert(&item);
        });
    });

    c.bench_function("insert-10000", |b| {
        let mut bf = BloomFilter::with_capacity(10000);

        b.iter(|| {
            let item = key();
            bf.insert(&item);
        });
    });
}

fn bench_bloom_filter_check(c: &mut Criterion) {
    c.bench_function("check-1000", |b| {
        let n = 1000;
        let mut bf = BloomFilter::with_capacity(n);
        populate(&mut bf, n);

        b.iter(|| {
            let item = key();
            bf.contains(&item);
        });
    });

    c.bench_function("check-10000", |b| {
        let n = 10000;
        let mut bf = BloomFilter::with_capacity(n);
        populate(&mut bf, n);

        b.iter(|| {
            let item = key();
            bf.contains(&item);
        });
    });
}

fn bench_bloom_filter_from_collection(c: &mut Criterion) {
    let items: Vec<String> = iter::repeat_with(key).take(1000).collect();

    c.bench_function("from-collection-1000", |b| {
        b.iter(|| BloomFilter::from_collection(&items));
    });
}

criterion::criterion_group!(
    benches,
    bench_bloom_filter_insert,
    bench_bloom_filter_check,
    bench_bloom_filter_from_collection
);
criterion::criterion_main!(benches);
