//! Randomness source for keys, masks and noise

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::torus::{dtot32, Torus32};

/// Source of uniform torus elements, uniform bits and Gaussian torus noise
///
/// Gaussian noise is drawn in R with the Box-Muller transform and then
/// rounded onto the 32-bit torus grid.
#[derive(Clone)]
pub struct TorusSampler {
    rng: ChaCha20Rng,
}

impl TorusSampler {
    /// Create a sampler seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Create a seeded sampler for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Create sampler from byte seed
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            rng: ChaCha20Rng::from_seed(seed),
        }
    }

    /// Uniform element of the torus
    #[inline]
    pub fn uniform_torus32(&mut self) -> Torus32 {
        self.rng.gen::<i32>()
    }

    /// Uniform bit in {0, 1}
    #[inline]
    pub fn uniform_bit(&mut self) -> i32 {
        (self.rng.gen::<u32>() & 1) as i32
    }

    /// Standard normal sample
    pub fn normal(&mut self) -> f64 {
        let u1: f64 = self.rng.gen_range(f64::MIN_POSITIVE..1.0);
        let u2: f64 = self.rng.gen_range(0.0..1.0);

        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// `message` plus Gaussian noise of standard deviation `sigma` (torus units)
    #[inline]
    pub fn gaussian32(&mut self, message: Torus32, sigma: f64) -> Torus32 {
        let err = self.normal() * sigma;
        message.wrapping_add(dtot32(err))
    }

    /// Derive an independent sampler, advancing this one
    ///
    /// Used to hand one sampler per worker when work is split across threads.
    pub fn fork(&mut self) -> Self {
        let mut seed = [0u8; 32];
        self.rng.fill(&mut seed);
        Self::from_seed(seed)
    }
}

impl Default for TorusSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TorusSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TorusSampler").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::torus::t32tod;

    #[test]
    fn test_deterministic_seeding() {
        let mut s1 = TorusSampler::with_seed(12345);
        let mut s2 = TorusSampler::with_seed(12345);

        for _ in 0..100 {
            assert_eq!(s1.uniform_torus32(), s2.uniform_torus32());
            assert_eq!(s1.gaussian32(0, 0.01), s2.gaussian32(0, 0.01));
        }
    }

    #[test]
    fn test_uniform_bits_are_binary_and_balanced() {
        let mut sampler = TorusSampler::with_seed(7);
        let bits: Vec<i32> = (0..4000).map(|_| sampler.uniform_bit()).collect();
        assert!(bits.iter().all(|&b| b == 0 || b == 1));
        let ones = bits.iter().filter(|&&b| b == 1).count();
        assert!(ones > 1800 && ones < 2200, "{} ones out of 4000", ones);
    }

    #[test]
    fn test_gaussian_distribution() {
        let mut sampler = TorusSampler::with_seed(42);
        let sigma = 1e-3;

        let samples: Vec<f64> = (0..10000).map(|_| t32tod(sampler.gaussian32(0, sigma))).collect();

        let mean: f64 = samples.iter().sum::<f64>() / samples.len() as f64;
        assert!(mean.abs() < 1e-4, "Mean {} should be close to 0", mean);

        let variance: f64 =
            samples.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64;
        let std_dev = variance.sqrt();
        assert!(
            (std_dev - sigma).abs() < 1e-4,
            "Std dev {} should be close to {}",
            std_dev,
            sigma
        );
    }

    #[test]
    fn test_fork_gives_independent_streams() {
        let mut parent = TorusSampler::with_seed(1);
        let mut a = parent.fork();
        let mut b = parent.fork();
        let xs: Vec<i32> = (0..8).map(|_| a.uniform_torus32()).collect();
        let ys: Vec<i32> = (0..8).map(|_| b.uniform_torus32()).collect();
        assert_ne!(xs, ys);
    }
}
