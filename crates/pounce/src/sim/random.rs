//! Injectable randomness.

use rand::Rng;

/// The two draws the simulation needs.
///
/// Implemented for every [`rand::Rng`], so a seeded generator makes a run
/// reproducible.
pub trait RandomSource {
    /// Uniform sample from the closed interval `[lo, hi]`. Returns `lo` for an empty interval.
    fn uniform(&mut self, lo: f32, hi: f32) -> f32;

    /// Fair coin flip.
    fn coin(&mut self) -> bool;

    /// `+1.0` or `-1.0` with equal probability.
    fn sign(&mut self) -> f32 {
        if self.coin() { 1.0 } else { -1.0 }
    }
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        if hi > lo { self.gen_range(lo..=hi) } else { lo }
    }

    fn coin(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// Replays fixed draws; for tests that need exact outcomes.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Scripted {
    /// Consumed front to back by `uniform`, as fractions of the interval.
    pub fractions: std::collections::VecDeque<f32>,
    /// Consumed front to back by `coin`.
    pub coins: std::collections::VecDeque<bool>,
}

#[cfg(test)]
impl Scripted {
    pub fn coins(coins: &[bool]) -> Self {
        Self { coins: coins.iter().copied().collect(), ..Self::default() }
    }

    pub fn fractions(fractions: &[f32]) -> Self {
        Self { fractions: fractions.iter().copied().collect(), ..Self::default() }
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        let t = self.fractions.pop_front().unwrap_or(0.5);
        lo + (hi - lo) * t
    }

    fn coin(&mut self) -> bool {
        self.coins.pop_front().unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn uniform_stays_in_closed_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.uniform(50.0, 750.0);
            assert!((50.0..=750.0).contains(&v));
        }
    }

    #[test]
    fn empty_interval_returns_lower_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(rng.uniform(3.0, 3.0), 3.0);
        assert_eq!(rng.uniform(5.0, 1.0), 5.0);
    }

    #[test]
    fn sign_takes_both_values() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let signs: Vec<f32> = (0..64).map(|_| rng.sign()).collect();
        assert!(signs.contains(&1.0));
        assert!(signs.contains(&-1.0));
        assert!(signs.iter().all(|s| s.abs() == 1.0));
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..32 {
            assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
            assert_eq!(a.coin(), b.coin());
        }
    }

    #[test]
    fn scripted_source_replays() {
        let mut s = Scripted::coins(&[false, true]);
        assert_eq!(s.sign(), -1.0);
        assert_eq!(s.sign(), 1.0);

        let mut s = Scripted::fractions(&[0.0, 1.0]);
        assert_eq!(s.uniform(10.0, 20.0), 10.0);
        assert_eq!(s.uniform(10.0, 20.0), 20.0);
    }
}
