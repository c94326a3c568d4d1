//! TGSW key generation, encryption and decryption

use std::sync::Arc;

use crate::math::{mod_switch_from_torus32, IntPolynomial, TorusPolynomial, TorusSampler};
use crate::params::RingGswParams;
use crate::tlwe::{RingLweKey, RingLweSample};

use super::types::{RingGswKey, RingGswSample};

impl RingGswKey {
    /// Generate a fresh key over the given gadget parameters
    pub fn generate(params: Arc<RingGswParams>, sampler: &mut TorusSampler) -> Self {
        let tlwe_key = RingLweKey::generate(params.tlwe.clone(), sampler);
        Self { params, tlwe_key }
    }

    /// Wrap an existing TLWE key
    pub fn from_tlwe_key(params: Arc<RingGswParams>, tlwe_key: RingLweKey) -> Self {
        assert_eq!(
            *params.tlwe, *tlwe_key.params,
            "TLWE key has mismatched ring parameters"
        );
        Self { params, tlwe_key }
    }

    /// (k+1)·ℓ fresh TLWE encryptions of zero
    pub fn encrypt_zero(&self, alpha: f64, sampler: &mut TorusSampler) -> RingGswSample {
        let rows = (0..self.params.row_count())
            .map(|_| self.tlwe_key.encrypt_zero(alpha, sampler))
            .collect();
        RingGswSample {
            rows,
            params: self.params.clone(),
        }
    }

    /// Encrypt a small integer μ
    ///
    /// # Arguments
    /// * `mu` - Message, typically a key bit
    /// * `alpha` - Noise standard deviation of every row
    /// * `sampler` - Source of mask randomness and noise
    pub fn encrypt_int(&self, mu: i32, alpha: f64, sampler: &mut TorusSampler) -> RingGswSample {
        let mut result = self.encrypt_zero(alpha, sampler);
        result.add_mu_int_h(mu);
        result
    }

    /// Encrypt an integer polynomial message
    pub fn encrypt_poly(
        &self,
        message: &IntPolynomial,
        alpha: f64,
        sampler: &mut TorusSampler,
    ) -> RingGswSample {
        let mut result = self.encrypt_zero(alpha, sampler);
        result.add_mu_h(message);
        result
    }

    /// Encrypt a bit as the integer 0 or 1
    pub fn encrypt_bit(&self, bit: bool, alpha: f64, sampler: &mut TorusSampler) -> RingGswSample {
        self.encrypt_int(i32::from(bit), alpha, sampler)
    }

    /// Phase of row `bloc·ℓ + j`
    pub fn phase_of_row(&self, sample: &RingGswSample, bloc: usize, j: usize) -> TorusPolynomial {
        self.tlwe_key.phase(sample.row(bloc, j))
    }

    /// Recover the small integer μ encrypted by a sample
    ///
    /// Reads the level-0 body row, whose constant coefficient carries μ/Bg,
    /// and returns μ in [−Bg/2, Bg/2).
    pub fn decrypt_int(&self, sample: &RingGswSample) -> i32 {
        let phase = self.tlwe_key.phase(&gsw_sample_extract(sample));
        let base = self.params.base();
        let mu = mod_switch_from_torus32(phase.coeff(0), base as u32);
        if mu >= base / 2 {
            mu - base
        } else {
            mu
        }
    }
}

/// The TLWE key underlying a TGSW key
pub fn gsw_key_extract(key: &RingGswKey) -> RingLweKey {
    key.tlwe_key.clone()
}

/// The level-0 body row of a TGSW sample: a TLWE encryption of μ/Bg
pub fn gsw_sample_extract(sample: &RingGswSample) -> RingLweSample {
    sample.row(sample.mask_count(), 0).clone()
}
