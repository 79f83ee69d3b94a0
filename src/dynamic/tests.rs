//! Checks both engines against a full-matrix reference on random inputs.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{three_row, two_row};
use crate::cost::{CostModel, Distance};
use crate::text::CharSequence;

const ASCII: &[char] = &['a', 'b', 'c', 'd'];
const MIXED: &[char] = &['a', 'b', 'é', 'ũ', '€', '😀'];

/// Full (m+1)x(n+1) matrix, optionally with optimal-string-alignment swaps.
fn reference(s: &str, t: &str, costs: &CostModel, transpose: bool) -> Distance {
    let a: Vec<char> = s.chars().collect();
    let b: Vec<char> = t.chars().collect();
    let (ins, del, sub, trans) = (
        Distance::from(costs.insert),
        Distance::from(costs.delete),
        Distance::from(costs.substitute),
        Distance::from(costs.transpose),
    );
    let mut d = vec![vec![0; b.len() + 1]; a.len() + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i as Distance * del;
    }
    for j in 0..=b.len() {
        d[0][j] = j as Distance * ins;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { sub };
            let mut best = (d[i - 1][j] + del)
                .min(d[i][j - 1] + ins)
                .min(d[i - 1][j - 1] + cost);
            if transpose && i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(d[i - 2][j - 2] + trans);
            }
            d[i][j] = best;
        }
    }
    d[a.len()][b.len()]
}

fn random_string(rng: &mut ChaCha8Rng, alphabet: &[char], max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| *alphabet.choose(rng).unwrap_or(&'a'))
        .collect()
}

/// A target that is usually a light edit of `source`, so bounds are tight.
fn mutate(rng: &mut ChaCha8Rng, source: &str, alphabet: &[char]) -> String {
    let mut chars: Vec<char> = source.chars().collect();
    for _ in 0..rng.gen_range(0..4) {
        let pos = rng.gen_range(0..=chars.len());
        match rng.gen_range(0..4) {
            0 => chars.insert(pos, *alphabet.choose(rng).unwrap_or(&'a')),
            1 if pos < chars.len() => {
                chars.remove(pos);
            }
            2 if pos < chars.len() => chars[pos] = *alphabet.choose(rng).unwrap_or(&'a'),
            3 if pos + 1 < chars.len() => chars.swap(pos, pos + 1),
            _ => {}
        }
    }
    chars.into_iter().collect()
}

fn random_costs(rng: &mut ChaCha8Rng) -> CostModel {
    CostModel::new(
        rng.gen_range(0..4),
        rng.gen_range(0..4),
        rng.gen_range(0..6),
        rng.gen_range(0..4),
    )
}

fn random_pair(rng: &mut ChaCha8Rng, alphabet: &[char]) -> (String, String) {
    let s = random_string(rng, alphabet, 12);
    let t = if rng.gen_bool(0.5) {
        mutate(rng, &s, alphabet)
    } else {
        random_string(rng, alphabet, 12)
    };
    (s, t)
}

fn check_two_row(alphabet: &[char], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for _ in 0..500 {
        let (s, t) = random_pair(&mut rng, alphabet);
        let costs = random_costs(&mut rng);
        let expected = reference(&s, &t, &costs, false);
        let (ss, ts) = (CharSequence::new(&s), CharSequence::new(&t));

        assert_eq!(
            two_row::levenshtein(&ss, &ts, &costs, None),
            expected,
            "{s:?} -> {t:?} with {costs:?}"
        );
        for max_d in 0..=expected + 3 {
            assert_eq!(
                two_row::levenshtein(&ss, &ts, &costs, Some(max_d)),
                expected.min(max_d + 1),
                "{s:?} -> {t:?} with {costs:?}, max_d {max_d}"
            );
        }
    }
}

fn check_three_row(alphabet: &[char], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for _ in 0..500 {
        let (s, t) = random_pair(&mut rng, alphabet);
        let costs = random_costs(&mut rng);
        assert_eq!(
            three_row::damerau_levenshtein(&CharSequence::new(&s), &CharSequence::new(&t), &costs),
            reference(&s, &t, &costs, true),
            "{s:?} -> {t:?} with {costs:?}"
        );
    }
}

#[test]
fn test_two_row_matches_reference_ascii() {
    check_two_row(ASCII, 7);
}

#[test]
fn test_two_row_matches_reference_multibyte() {
    check_two_row(MIXED, 11);
}

#[test]
fn test_three_row_matches_reference_ascii() {
    check_three_row(ASCII, 13);
}

#[test]
fn test_three_row_matches_reference_multibyte() {
    check_three_row(MIXED, 17);
}

#[test]
fn test_identity_and_symmetry() {
    let mut rng = ChaCha8Rng::seed_from_u64(19);
    let unit = CostModel::unit();
    for _ in 0..200 {
        let (s, t) = random_pair(&mut rng, MIXED);
        let (ss, ts) = (CharSequence::new(&s), CharSequence::new(&t));
        let costs = random_costs(&mut rng);

        assert_eq!(two_row::levenshtein(&ss, &ss, &costs, None), 0);
        assert_eq!(three_row::damerau_levenshtein(&ss, &ss, &costs), 0);
        assert_eq!(
            two_row::levenshtein(&ss, &ts, &unit, None),
            two_row::levenshtein(&ts, &ss, &unit, None)
        );
        assert_eq!(
            three_row::damerau_levenshtein(&ss, &ts, &unit),
            three_row::damerau_levenshtein(&ts, &ss, &unit)
        );
    }
}

#[test]
fn test_bounded_monotone_in_max_d() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    let costs = CostModel::unit();
    for _ in 0..200 {
        let (s, t) = random_pair(&mut rng, ASCII);
        let (ss, ts) = (CharSequence::new(&s), CharSequence::new(&t));
        let mut last = 0;
        for max_d in 0..16 {
            let got = two_row::levenshtein(&ss, &ts, &costs, Some(max_d));
            assert!(got >= last, "{s:?} -> {t:?}: {got} < {last} at max_d {max_d}");
            last = got;
        }
        assert_eq!(last, two_row::levenshtein(&ss, &ts, &costs, None));
    }
}

#[test]
fn test_long_inputs_near_limit() {
    let mut rng = ChaCha8Rng::seed_from_u64(29);
    let costs = CostModel::new(1, 2, 2, 1);
    for _ in 0..10 {
        let s = random_string(&mut rng, MIXED, 255);
        let t = mutate(&mut rng, &s, MIXED);
        let expected = reference(&s, &t, &costs, false);
        let (ss, ts) = (CharSequence::new(&s), CharSequence::new(&t));
        assert_eq!(two_row::levenshtein(&ss, &ts, &costs, None), expected);
        assert_eq!(
            two_row::levenshtein(&ss, &ts, &costs, Some(expected)),
            expected
        );
        if expected > 0 {
            assert_eq!(
                two_row::levenshtein(&ss, &ts, &costs, Some(expected - 1)),
                expected
            );
        }
    }
}
