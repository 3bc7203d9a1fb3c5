//! Adapter from `rand` generators to the core's random oracle.

use game_core::RngOracle;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Wraps any [`RngCore`] so the simulation can draw from it.
#[derive(Clone, Debug)]
pub struct RandRng<R> {
    inner: R,
}

impl<R: RngCore> RandRng<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl RandRng<StdRng> {
    /// Deterministic generator for `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RngOracle for RandRng<R> {
    fn next_unit(&mut self) -> f64 {
        self.inner.gen_range(0.0..1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_draws() {
        let mut a = RandRng::seeded(42);
        let mut b = RandRng::seeded(42);
        for _ in 0..32 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut rng = RandRng::seeded(7);
        for _ in 0..1_000 {
            let value = rng.next_unit();
            assert!((0.0..1.0).contains(&value));
        }
    }
}
