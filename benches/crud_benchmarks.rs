use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use llrb_tree::{OSRBTreeMap, OSRBTreeSet};
use std::collections::{BTreeMap, BTreeSet};
use std::hint::black_box;

const N: usize = 10_000;

// ─── Key sequences ──────────────────────────────────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Simple LCG for a deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn key_orders() -> [(&'static str, Vec<i64>); 3] {
    [
        ("ordered", ordered_keys(N)),
        ("reverse", reverse_ordered_keys(N)),
        ("random", random_keys(N)),
    ]
}

// ─── Map CRUD ───────────────────────────────────────────────────────────────

fn bench_map_insert(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let mut group = c.benchmark_group(format!("map_insert_{order}"));

        group.bench_function(BenchmarkId::new("OSRBTreeMap", N), |b| {
            b.iter(|| {
                let mut map = OSRBTreeMap::new();
                for &k in &keys {
                    map.insert(k, k);
                }
                map
            });
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for &k in &keys {
                    map.insert(k, k);
                }
                map
            });
        });

        group.finish();
    }
}

fn bench_map_get(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let os_map: OSRBTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        let mut group = c.benchmark_group(format!("map_get_{order}"));

        group.bench_function(BenchmarkId::new("OSRBTreeMap", N), |b| {
            b.iter(|| {
                let mut sum = 0i64;
                for &k in &keys {
                    if let Some(&v) = os_map.get(&k) {
                        sum = sum.wrapping_add(v);
                    }
                }
                sum
            });
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| {
                let mut sum = 0i64;
                for &k in &keys {
                    if let Some(&v) = bt_map.get(&k) {
                        sum = sum.wrapping_add(v);
                    }
                }
                sum
            });
        });

        group.finish();
    }
}

fn bench_map_remove(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let os_map: OSRBTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        let mut group = c.benchmark_group(format!("map_remove_{order}"));

        group.bench_function(BenchmarkId::new("OSRBTreeMap", N), |b| {
            b.iter_batched(
                || os_map.clone(),
                |mut map| {
                    for &k in &keys {
                        map.remove(&k);
                    }
                    map
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter_batched(
                || bt_map.clone(),
                |mut map| {
                    for &k in &keys {
                        map.remove(&k);
                    }
                    map
                },
                BatchSize::LargeInput,
            );
        });

        group.finish();
    }
}

// ─── Order statistics ───────────────────────────────────────────────────────

fn bench_select(c: &mut Criterion) {
    let keys = random_keys(N);
    let os_map: OSRBTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let ranks: Vec<usize> = (0..os_map.len()).step_by(97).collect();

    let mut group = c.benchmark_group("map_select");

    group.bench_function(BenchmarkId::new("OSRBTreeMap", N), |b| {
        b.iter(|| ranks.iter().filter_map(|&r| os_map.select(r)).fold(0i64, |acc, &k| acc.wrapping_add(k)));
    });

    // Linear scan is the only option without subtree sizes
    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| ranks.iter().filter_map(|&r| bt_map.keys().nth(r)).fold(0i64, |acc, &k| acc.wrapping_add(k)));
    });

    group.finish();
}

fn bench_rank_and_range_count(c: &mut Criterion) {
    let keys = random_keys(N);
    let os_map: OSRBTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let probes: Vec<i64> = keys.iter().step_by(97).copied().collect();

    let mut group = c.benchmark_group("map_rank");

    group.bench_function(BenchmarkId::new("OSRBTreeMap", N), |b| {
        b.iter(|| probes.iter().map(|k| os_map.rank(k)).sum::<usize>());
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| probes.iter().map(|&k| bt_map.range(..k).count()).sum::<usize>());
    });

    group.finish();

    let mut group = c.benchmark_group("map_range_count");

    group.bench_function(BenchmarkId::new("OSRBTreeMap", N), |b| {
        b.iter(|| probes.windows(2).map(|w| os_map.range_count(&w[0], &w[1])).sum::<usize>());
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            probes
                .windows(2)
                .map(|w| if w[0] <= w[1] { bt_map.range(w[0]..=w[1]).count() } else { 0 })
                .sum::<usize>()
        });
    });

    group.finish();
}

// ─── Set CRUD ───────────────────────────────────────────────────────────────

fn bench_set_insert_contains(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("set_insert_random");

    group.bench_function(BenchmarkId::new("OSRBTreeSet", N), |b| {
        b.iter(|| keys.iter().copied().collect::<OSRBTreeSet<_>>());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| keys.iter().copied().collect::<BTreeSet<_>>());
    });

    group.finish();

    let os_set: OSRBTreeSet<i64> = keys.iter().copied().collect();
    let bt_set: BTreeSet<i64> = keys.iter().copied().collect();
    let mut group = c.benchmark_group("set_contains_random");

    group.bench_function(BenchmarkId::new("OSRBTreeSet", N), |b| {
        b.iter(|| keys.iter().filter(|k| os_set.contains(black_box(*k))).count());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| keys.iter().filter(|k| bt_set.contains(black_box(*k))).count());
    });

    group.finish();
}

criterion_group!(map_crud_benches, bench_map_insert, bench_map_get, bench_map_remove,);

criterion_group!(order_statistic_benches, bench_select, bench_rank_and_range_count,);

criterion_group!(set_benches, bench_set_insert_contains,);

criterion_main!(map_crud_benches, order_statistic_benches, set_benches);
