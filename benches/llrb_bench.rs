use std::collections::BTreeMap;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use llrb_tree::{Config, Llrb, Split};
use rand::prelude::*;

const N: u64 = 100_000;

fn random_insertion_order() -> Vec<u64> {
    let mut rng = rand::thread_rng();
    let mut keys: Vec<u64> = (0..N).collect();
    keys.shuffle(&mut rng);
    keys
}

fn random_lookups(count: usize) -> Vec<u64> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen_range(0..N)).collect()
}

fn bench_baseline_insertions(keys: Vec<u64>) {
    let mut map = BTreeMap::new();
    for key in keys {
        map.insert(key, key);
    }
}

fn bench_insertions(keys: Vec<u64>, split: Split) {
    let mut config = Config::new();
    config.set_split(split);
    let mut llrb = Llrb::with_config("bench", config);
    for key in keys {
        llrb.put(key, key);
    }
}

fn bench_lookups(llrb: Llrb<u64, u64>, keys: Vec<u64>) {
    for key in keys {
        assert!(llrb.get(&key).is_some());
    }
}

fn init_large_llrb() -> Llrb<u64, u64> {
    Llrb::load_from("bench", random_insertion_order().into_iter().map(|k| (k, k)))
}

fn llrb_benchmark(c: &mut Criterion) {
    c.bench_function("baseline btreemap 100K insertions", |b| {
        b.iter_batched(
            random_insertion_order,
            bench_baseline_insertions,
            BatchSize::LargeInput,
        )
    });

    c.bench_function("llrb top-down 100K insertions", |b| {
        b.iter_batched(
            random_insertion_order,
            |keys| bench_insertions(keys, Split::TopDown),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("llrb bottom-up 100K insertions", |b| {
        b.iter_batched(
            random_insertion_order,
            |keys| bench_insertions(keys, Split::BottomUp),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("llrb random lookups", |b| {
        b.iter_batched(
            || (init_large_llrb(), random_lookups(5000)),
            |(llrb, keys)| bench_lookups(llrb, keys),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("llrb inorder iteration", |b| {
        b.iter_batched(
            init_large_llrb,
            |llrb| {
                for (i, (key, _)) in llrb.iter().enumerate() {
                    assert_eq!(i as u64, *key);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, llrb_benchmark);
criterion_main!(benches);
