//! Injected random sources

use rand::{Rng, RngCore};

/// A uniform integer source.
///
/// Every random decision the generator makes goes through this trait, so a
/// seeded or scripted source fully determines the output.
pub trait RandomSource {
    /// A uniformly distributed integer in `[min, max]` (inclusive).
    fn between(&mut self, min: i32, max: i32) -> i32;

    /// A uniformly distributed index into a sequence of `len` items.
    /// `len` must be non-zero. A single item is picked without a draw.
    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.between(0, len as i32 - 1) as usize
    }
}

impl<R: RngCore> RandomSource for R {
    fn between(&mut self, min: i32, max: i32) -> i32 {
        self.gen_range(min..=max)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.gen_range(0..len)
    }
}

/// A deterministic source replaying a fixed list of integers.
///
/// Values are returned in order and the list repeats once exhausted. Each
/// value is clamped into the requested range, so a script can be written
/// without knowing every bound in advance. An empty list always yields the
/// lower bound.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<i32>,
    cursor: usize,
}

impl SequenceRandom {
    /// Replay `values` in order, cycling when exhausted.
    ///
    /// A value outside the bounds of the draw it lands on is clamped to the
    /// nearest bound rather than returned as is, so only in-range values
    /// replay verbatim.
    pub fn new(values: Vec<i32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn between(&mut self, min: i32, max: i32) -> i32 {
        if self.values.is_empty() {
            return min;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(min, max.max(min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn sequence_replays_and_cycles() {
        let mut rng = SequenceRandom::new(vec![1, 2, 0, 3]);
        let drawn: Vec<i32> = (0..6).map(|_| rng.between(0, 3)).collect();
        assert_eq!(drawn, vec![1, 2, 0, 3, 1, 2]);
        assert_eq!(rng.draws(), 6);
    }

    #[test]
    fn sequence_clamps_into_range() {
        let mut rng = SequenceRandom::new(vec![7, -4]);
        assert_eq!(rng.between(1, 2), 2);
        assert_eq!(rng.between(1, 2), 1);
        assert_eq!(rng.pick_index(3), 2);
    }

    #[test]
    fn single_item_pick_draws_nothing() {
        let mut rng = SequenceRandom::new(vec![5, 1]);
        assert_eq!(rng.pick_index(1), 0);
        assert_eq!(rng.draws(), 0);
        assert_eq!(rng.between(0, 3), 3);
        assert_eq!(rng.pick_index(4), 1);
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn empty_sequence_returns_lower_bound() {
        let mut rng = SequenceRandom::new(Vec::new());
        assert_eq!(rng.between(3, 9), 3);
    }

    #[test]
    fn seeded_rng_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..1000 {
            let v = rng.between(1, 2);
            assert!((1..=2).contains(&v));
            assert!(rng.pick_index(5) < 5);
        }
    }
}
