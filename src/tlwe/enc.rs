//! TLWE encryption and decryption
//!
//! Implements encryption: b = Σ a_i·s_i + μ + e

use std::sync::Arc;

use crate::math::{approx_phase, IntPolynomial, Torus32, TorusPolynomial, TorusSampler};
use crate::params::RingLweParams;

use super::types::{RingLweKey, RingLweSample};

impl RingLweKey {
    /// Generate k uniformly random binary polynomials
    pub fn generate(params: Arc<RingLweParams>, sampler: &mut TorusSampler) -> Self {
        let key = (0..params.mask_count)
            .map(|_| IntPolynomial::uniform_binary(params.ring_dim, sampler))
            .collect();
        Self { params, key }
    }

    /// Encrypt a message polynomial
    ///
    /// # Arguments
    /// * `message` - Message polynomial μ with torus coefficients
    /// * `alpha` - Noise standard deviation of every coefficient
    /// * `sampler` - Source of mask randomness and noise
    pub fn encrypt(
        &self,
        message: &TorusPolynomial,
        alpha: f64,
        sampler: &mut TorusSampler,
    ) -> RingLweSample {
        let mut result = self.encrypt_zero(alpha, sampler);
        *result.body_mut() += message;
        result
    }

    /// Encrypt the constant polynomial μ
    pub fn encrypt_constant(&self, mu: Torus32, alpha: f64, sampler: &mut TorusSampler) -> RingLweSample {
        let mut result = self.encrypt_zero(alpha, sampler);
        let body = result.body_mut();
        body.set_coeff(0, body.coeff(0).wrapping_add(mu));
        result
    }

    /// Fresh encryption of zero
    pub fn encrypt_zero(&self, alpha: f64, sampler: &mut TorusSampler) -> RingLweSample {
        let n = self.ring_dim();
        let k = self.mask_count();

        let mut body = TorusPolynomial::gaussian(n, alpha, sampler);
        let mut a = Vec::with_capacity(k + 1);
        for s in &self.key {
            let mask = TorusPolynomial::uniform(n, sampler);
            body.add_mul_r(s, &mask);
            a.push(mask);
        }
        a.push(body);

        RingLweSample {
            a,
            current_variance: alpha * alpha,
        }
    }

    /// Phase b − Σ a_i·s_i: the message polynomial plus noise
    pub fn phase(&self, sample: &RingLweSample) -> TorusPolynomial {
        assert_eq!(
            sample.mask_count(),
            self.mask_count(),
            "Sample has mismatched mask count for this key"
        );
        assert_eq!(
            sample.ring_dim(),
            self.ring_dim(),
            "Sample has mismatched ring dimension for this key"
        );

        let mut phase = sample.body().clone();
        for (s, mask) in self.key.iter().zip(sample.a.iter()) {
            phase.sub_mul_r(s, mask);
        }
        phase
    }

    /// Phase with every coefficient rounded to a multiple of 1/msize
    pub fn decrypt_approx(&self, sample: &RingLweSample, msize: u32) -> TorusPolynomial {
        let phase = self.phase(sample);
        let coeffs = phase
            .coeffs()
            .iter()
            .map(|&c| approx_phase(c, msize))
            .collect();
        TorusPolynomial::from_coeffs(coeffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::mod_switch_to_torus32;

    fn test_params(k: usize) -> Arc<RingLweParams> {
        Arc::new(RingLweParams::new(64, k, 1e-9, 1e-2))
    }

    fn message_poly(n: usize, sampler: &mut TorusSampler) -> TorusPolynomial {
        let coeffs = (0..n)
            .map(|_| mod_switch_to_torus32(sampler.uniform_torus32().rem_euclid(8), 8))
            .collect();
        TorusPolynomial::from_coeffs(coeffs)
    }

    #[test]
    fn test_encrypt_decrypt() {
        for k in [1, 2] {
            let mut sampler = TorusSampler::with_seed(10 + k as u64);
            let key = RingLweKey::generate(test_params(k), &mut sampler);
            let msg = message_poly(64, &mut sampler);

            let ct = key.encrypt(&msg, 1e-6, &mut sampler);
            assert_eq!(ct.mask_count(), k);
            assert_eq!(key.decrypt_approx(&ct, 8), msg);
            assert!(key.phase(&ct).max_abs_diff(&msg) < 1e-4);
        }
    }

    #[test]
    fn test_encrypt_constant() {
        let mut sampler = TorusSampler::with_seed(20);
        let key = RingLweKey::generate(test_params(1), &mut sampler);
        let mu = mod_switch_to_torus32(3, 8);

        let ct = key.encrypt_constant(mu, 1e-6, &mut sampler);
        let dec = key.decrypt_approx(&ct, 8);
        assert_eq!(dec.coeff(0), mu);
        assert!(dec.coeffs()[1..].iter().all(|&c| c == 0));
    }

    #[test]
    #[should_panic(expected = "mismatched mask count")]
    fn test_phase_rejects_wrong_mask_count() {
        let mut sampler = TorusSampler::with_seed(21);
        let key = RingLweKey::generate(test_params(1), &mut sampler);
        key.phase(&RingLweSample::zero(2, 64));
    }
}
