#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use chained_hashtable::ChainedHashTable;
use criterion::{Criterion, criterion_group, criterion_main};
use rand::{Rng, distr::Alphanumeric};

const ITEMS_AMOUNT: usize = 1000;
const KEY_LENGTH: usize = 12;
const SAMPLE_SIZE: usize = 10;
const BUCKETS: [usize; 2] = [20, 1024];

fn random_items(amount: usize) -> Vec<(String, u64)> {
    let mut rng = rand::rng();
    (0..amount)
        .map(|_| {
            let key: String =
                (&mut rng).sample_iter(&Alphanumeric).take(KEY_LENGTH).map(char::from).collect();
            (key, rng.random())
        })
        .collect()
}

fn hash_table_benches(c: &mut Criterion) {
    let items = random_items(ITEMS_AMOUNT);

    let mut group = c.benchmark_group("Chained table vs std map");
    group.sample_size(SAMPLE_SIZE);

    for buckets in BUCKETS {
        let mut chained = ChainedHashTable::new(buckets).unwrap();
        group.bench_function(format!("chained put ({buckets} buckets)"), |b| {
            b.iter(|| {
                for (key, value) in items.clone() {
                    chained.put(key, value);
                }
            });
        });
        group.bench_function(format!("chained get ({buckets} buckets)"), |b| {
            b.iter(|| {
                for (key, _) in &items {
                    let _ = chained.get(key.as_str());
                }
            });
        });
    }

    let mut rust_map = HashMap::new();
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key.as_str());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, hash_table_benches);

criterion_main!(benches);
