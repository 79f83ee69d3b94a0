use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fuzzystr::{CostModel, EditDistance, Strategy};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn generate(rng: &mut ChaCha8Rng, alphabet: &[char], len: usize) -> String {
    (0..len)
        .map(|_| *alphabet.choose(rng).unwrap_or(&'a'))
        .collect()
}

/// Applies `edits` random substitutions to `source`.
fn perturb(rng: &mut ChaCha8Rng, source: &str, alphabet: &[char], edits: usize) -> String {
    let mut chars: Vec<char> = source.chars().collect();
    for _ in 0..edits {
        let pos = rng.gen_range(0..chars.len());
        chars[pos] = *alphabet.choose(rng).unwrap_or(&'a');
    }
    chars.into_iter().collect()
}

fn bench_strategies(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let ascii: Vec<char> = ('a'..='z').collect();
    let mixed: Vec<char> = "aeiouéèêëàâäôöüß€".chars().collect();

    let mut group = c.benchmark_group("strategies");
    for (name, alphabet) in [("ascii", &ascii), ("multibyte", &mixed)] {
        for len in [16, 64, 255] {
            let s = generate(&mut rng, alphabet, len);
            let t = perturb(&mut rng, &s, alphabet, len / 8 + 1);
            for strategy in [
                Strategy::Unbounded,
                Strategy::UnboundedWithTransposition,
            ] {
                let metric = EditDistance::new().with_strategy(strategy);
                group.bench_with_input(
                    BenchmarkId::new(format!("{strategy:?}/{name}"), len),
                    &(&s, &t),
                    |b, (s, t)| b.iter(|| metric.distance(black_box(s), black_box(t))),
                );
            }
        }
    }
    group.finish();
}

fn bench_bounds(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let ascii: Vec<char> = ('a'..='z').collect();
    let s = generate(&mut rng, &ascii, 255);
    let t = perturb(&mut rng, &s, &ascii, 8);
    let metric = EditDistance::new().with_costs(CostModel::unit());

    let mut group = c.benchmark_group("bounded");
    for max_d in [2, 8, 32, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(max_d), &max_d, |b, &max_d| {
            b.iter(|| metric.distance_bounded(black_box(&s), black_box(&t), max_d))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_bounds);
criterion_main!(benches);
