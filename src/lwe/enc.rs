//! LWE key generation, encryption and decryption

use std::sync::Arc;

use super::types::{LweKey, LweSample};
use crate::math::{approx_phase, Torus32, TorusSampler};
use crate::params::LweParams;

impl LweKey {
    /// Generate a uniformly random binary key
    pub fn generate(params: Arc<LweParams>, sampler: &mut TorusSampler) -> Self {
        let key = (0..params.n).map(|_| sampler.uniform_bit()).collect();
        Self { params, key }
    }

    /// Create a key from existing bits
    ///
    /// # Panics
    ///
    /// Panics if the number of bits differs from `params.n`.
    pub fn from_bits(params: Arc<LweParams>, bits: Vec<i32>) -> Self {
        assert_eq!(
            bits.len(),
            params.n,
            "Key has mismatched dimension: {} bits for n = {}",
            bits.len(),
            params.n
        );
        Self { params, key: bits }
    }

    /// Encrypt a torus message with noise of standard deviation `alpha`
    ///
    /// Computes a uniform mask a and b = <a, s> + μ + e with e ~ N(0, alpha²).
    ///
    /// # Arguments
    /// * `message` - Plaintext μ as a torus element
    /// * `alpha` - Noise standard deviation (torus units)
    /// * `sampler` - Source of mask randomness and noise
    pub fn encrypt(&self, message: Torus32, alpha: f64, sampler: &mut TorusSampler) -> LweSample {
        let mut b = sampler.gaussian32(message, alpha);
        let a: Vec<Torus32> = (0..self.key.len())
            .map(|_| sampler.uniform_torus32())
            .collect();

        for (&ai, &si) in a.iter().zip(self.key.iter()) {
            b = b.wrapping_add(ai.wrapping_mul(si));
        }

        LweSample {
            a,
            b,
            current_variance: alpha * alpha,
        }
    }

    /// Encrypt with the smallest noise allowed by the parameters
    pub fn encrypt_default(&self, message: Torus32, sampler: &mut TorusSampler) -> LweSample {
        self.encrypt(message, self.params.alpha_min, sampler)
    }

    /// Phase b − <a, s> of a sample: the message plus its noise
    pub fn phase(&self, sample: &LweSample) -> Torus32 {
        assert_eq!(
            sample.dimension(),
            self.key.len(),
            "Sample has mismatched dimension for this key"
        );
        sample
            .a
            .iter()
            .zip(self.key.iter())
            .fold(sample.b, |acc, (&ai, &si)| acc.wrapping_sub(ai.wrapping_mul(si)))
    }

    /// Phase rounded to the nearest multiple of 1/msize
    pub fn decrypt_approx(&self, sample: &LweSample, msize: u32) -> Torus32 {
        approx_phase(self.phase(sample), msize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{dtot32, mod_switch_to_torus32, torus_distance};

    fn test_params() -> Arc<LweParams> {
        Arc::new(LweParams::new(64, 1e-6, 1e-2))
    }

    #[test]
    fn test_key_is_binary() {
        let mut sampler = TorusSampler::with_seed(1);
        let key = LweKey::generate(test_params(), &mut sampler);
        assert_eq!(key.dimension(), 64);
        assert!(key.key.iter().all(|&s| s == 0 || s == 1));
    }

    #[test]
    fn test_encrypt_decrypt() {
        let mut sampler = TorusSampler::with_seed(2);
        let key = LweKey::generate(test_params(), &mut sampler);

        for mu in 0..8 {
            let message = mod_switch_to_torus32(mu, 8);
            let ct = key.encrypt(message, 1e-4, &mut sampler);
            assert_eq!(key.decrypt_approx(&ct, 8), message);
            assert!(torus_distance(key.phase(&ct), message) < 1e-3);
        }
    }

    #[test]
    fn test_encrypt_records_variance() {
        let mut sampler = TorusSampler::with_seed(3);
        let key = LweKey::generate(test_params(), &mut sampler);
        let ct = key.encrypt_default(dtot32(0.125), &mut sampler);
        assert!((ct.current_variance - 1e-12).abs() < 1e-20);
    }

    #[test]
    #[should_panic(expected = "mismatched dimension")]
    fn test_from_bits_rejects_wrong_length() {
        LweKey::from_bits(test_params(), vec![0, 1, 1]);
    }

    #[test]
    #[should_panic(expected = "mismatched dimension")]
    fn test_phase_rejects_wrong_dimension() {
        let mut sampler = TorusSampler::with_seed(4);
        let key = LweKey::generate(test_params(), &mut sampler);
        key.phase(&LweSample::new(32));
    }
}
