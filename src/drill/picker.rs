//! Uniform random selection
//!
//! Every generator draws through a `RandomPicker` so a whole drill can be
//! replayed from its seed.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Seeded source of uniform picks
#[derive(Debug, Clone)]
pub struct RandomPicker {
    seed: u64,
    rng: Pcg32,
}

impl RandomPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this picker was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Integer in [0, n), each value equally likely.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn uniform(&mut self, n: usize) -> usize {
        assert!(n > 0, "uniform() needs a non-empty range");
        self.rng.random_range(0..n)
    }

    /// Uniformly chosen element, `None` for an empty slice
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.uniform(items.len());
        items.get(idx)
    }

    /// True with probability `p` (clamped to [0, 1])
    pub fn bernoulli(&mut self, p: f64) -> bool {
        self.rng.random_bool(p.clamp(0.0, 1.0))
    }

    /// Unbiased in-place Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_stays_in_range() {
        let mut picker = RandomPicker::new(7);
        for _ in 0..1000 {
            assert!(picker.uniform(9) < 9);
        }
        // n == 1 has exactly one outcome
        assert_eq!(picker.uniform(1), 0);
    }

    #[test]
    fn test_uniform_hits_every_value() {
        let mut picker = RandomPicker::new(42);
        let mut seen = [false; 10];
        for _ in 0..2000 {
            seen[picker.uniform(10)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    #[should_panic]
    fn test_uniform_zero_panics() {
        RandomPicker::new(1).uniform(0);
    }

    #[test]
    fn test_choice_empty_is_none() {
        let mut picker = RandomPicker::new(1);
        let empty: [u8; 0] = [];
        assert!(picker.choice(&empty).is_none());
        assert_eq!(picker.choice(&["only"]), Some(&"only"));
    }

    #[test]
    fn test_bernoulli_extremes() {
        let mut picker = RandomPicker::new(3);
        for _ in 0..100 {
            assert!(!picker.bernoulli(0.0));
            assert!(picker.bernoulli(1.0));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomPicker::new(12345);
        let mut b = RandomPicker::new(12345);
        let seq_a: Vec<usize> = (0..50).map(|_| a.uniform(100)).collect();
        let seq_b: Vec<usize> = (0..50).map(|_| b.uniform(100)).collect();
        assert_eq!(seq_a, seq_b);
        assert_eq!(a.seed(), 12345);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut picker = RandomPicker::new(99);
        let mut items = [1, 2, 3, 4, 5, 6];
        picker.shuffle(&mut items);
        let mut sorted = items;
        sorted.sort();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6]);
    }
}
