//! Column-draw helpers over a seeded source.
//!
//! Thin wrappers that draw a whole column at a time. Builders compose these
//! in a fixed order so a dataset's draw sequence is part of its contract.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};

/// Draw `n` standard-normal values.
pub fn normal_vec(rng: &mut ChaCha8Rng, n: usize) -> Vec<f64> {
    (0..n).map(|_| StandardNormal.sample(rng)).collect()
}

/// Draw `n` integers by rounding uniform draws from `lo..hi`.
pub fn rounded_uniform_vec(rng: &mut ChaCha8Rng, lo: f64, hi: f64, n: usize) -> Vec<i64> {
    (0..n).map(|_| rng.gen_range(lo..hi).round() as i64).collect()
}

/// Draw `n` values uniformly from `items`.
pub fn choice_vec<T: Clone>(rng: &mut ChaCha8Rng, items: &[T], n: usize) -> Vec<T> {
    (0..n)
        .map(|_| items[rng.gen_range(0..items.len())].clone())
        .collect()
}

/// A shuffled vector of all row positions `0..n`.
pub fn permutation(rng: &mut ChaCha8Rng, n: usize) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..n).collect();
    positions.shuffle(rng);
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_normal_vec_deterministic() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(42);
        let mut rng2 = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(normal_vec(&mut rng1, 50), normal_vec(&mut rng2, 50));
    }

    #[test]
    fn test_rounded_uniform_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for value in rounded_uniform_vec(&mut rng, 0.0, 20.0, 1000) {
            assert!((0..=20).contains(&value), "value {} out of bounds", value);
        }
    }

    #[test]
    fn test_choice_vec_stays_in_set() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let items = ["a", "b", "c"];
        for value in choice_vec(&mut rng, &items, 200) {
            assert!(items.contains(&value));
        }
    }

    #[test]
    fn test_permutation_covers_all_positions() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut positions = permutation(&mut rng, 100);
        positions.sort_unstable();
        assert_eq!(positions, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_permutation_varies_between_draws() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let first = permutation(&mut rng, 100);
        let second = permutation(&mut rng, 100);
        assert_ne!(first, second);
    }
}
