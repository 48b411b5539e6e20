use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use parent_tree::TreeMap;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

criterion_group!(benches, bench_insert, bench_search, bench_upper_bound, bench_traverse);
criterion_main!(benches);

fn random_map(n: usize, rng: &mut StdRng) -> (TreeMap<usize, usize>, Vec<usize>) {
    let keys: Vec<usize> = (0..n).map(|_| rng.gen::<usize>() % n).collect();
    let map = keys.iter().map(|&k| (k, k)).collect();
    (map, keys)
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("Insert");
    for &n in &[100, 10_000] {
        let mut rng = StdRng::seed_from_u64(n as u64);
        let (map, _) = random_map(n, &mut rng);

        group.bench_function(BenchmarkId::new("Rand", n), |b| {
            let mut map = map.clone();
            b.iter(|| {
                let k = rng.gen::<usize>() % n;
                map.insert(k, k);
                map.remove(&k);
            })
        });

        // Sequential keys degrade the tree to a list; keep the sizes small.
        let seq: TreeMap<usize, usize> = (0..n / 10).map(|i| (i * 2, i * 2)).collect();
        group.bench_function(BenchmarkId::new("Seq", n / 10), |b| {
            let mut map = seq.clone();
            let mut i = 1;
            b.iter(|| {
                map.insert(i, i);
                map.remove(&i);
                i = (i + 2) % (n / 10);
            })
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Search");
    for &n in &[100, 10_000] {
        let mut rng = StdRng::seed_from_u64(n as u64);
        let (mut map, mut keys) = random_map(n, &mut rng);
        keys.shuffle(&mut rng);

        group.bench_function(BenchmarkId::new("Rand", n), |b| {
            let mut i = 0;
            b.iter(|| {
                black_box(map.search(&keys[i]).is_some());
                i = (i + 1) % n;
            })
        });
    }
    group.finish();
}

fn bench_upper_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("UpperBound");
    for &n in &[100, 10_000] {
        let mut rng = StdRng::seed_from_u64(n as u64);
        let (mut map, _) = random_map(n, &mut rng);

        group.bench_function(BenchmarkId::new("Rand", n), |b| {
            b.iter(|| {
                let k = rng.gen::<usize>() % n;
                black_box(map.upper_bound(&k).is_some());
            })
        });
    }
    group.finish();
}

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("Traverse");
    for &n in &[100, 1000, 100_000] {
        let mut rng = StdRng::seed_from_u64(n as u64);
        let (mut map, _) = random_map(n, &mut rng);

        group.bench_function(BenchmarkId::new("Cursor", n), |b| {
            b.iter(|| {
                let mut entry = map.first_entry().map(|e| *e.0);
                while let Some(key) = entry {
                    black_box(key);
                    entry = map.next_entry().map(|e| *e.0);
                }
            })
        });
        group.bench_function(BenchmarkId::new("Iter", n), |b| {
            b.iter(|| {
                for entry in map.iter() { black_box(entry); }
            })
        });
    }
    group.finish();
}
