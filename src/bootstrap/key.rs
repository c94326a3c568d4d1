//! Bootstrapping key generation

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::ks::LweKeySwitchKey;
use crate::lwe::LweKey;
use crate::math::TorusSampler;
use crate::params::{GateBootstrappingParams, LweParams, RingGswParams};
use crate::tgsw::{RingGswKey, RingGswSample};

/// Public key material for bootstrapping LWE samples of dimension n
///
/// Holds one TGSW encryption of every bit of the LWE key, under the ring key,
/// and the key-switching key from the extracted ring key back to the LWE key.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LweBootstrappingKey {
    /// Parameters of input and output samples
    pub in_out_params: Arc<LweParams>,
    /// Parameters of the accumulator and of `bk`
    pub tgsw_params: Arc<RingGswParams>,
    /// Parameters of samples extracted from the accumulator (dimension k·N)
    pub extracted_params: Arc<LweParams>,
    /// bk[i] = TGSW(s_i)
    pub bk: Vec<RingGswSample>,
    /// Key switch from the extracted key back to the LWE key
    pub ks: LweKeySwitchKey,
}

impl LweBootstrappingKey {
    /// Generate a bootstrapping key
    ///
    /// # Arguments
    /// * `params` - Gate bootstrapping parameters
    /// * `lwe_key` - Key of the samples to bootstrap (dimension n)
    /// * `gsw_key` - Ring key of the accumulator
    /// * `sampler` - Source of randomness
    ///
    /// # Panics
    ///
    /// Panics if `params` fails validation or a key does not match it.
    pub fn generate(
        params: &GateBootstrappingParams,
        lwe_key: &LweKey,
        gsw_key: &RingGswKey,
        sampler: &mut TorusSampler,
    ) -> Self {
        if let Err(err) = params.validate() {
            panic!("Invalid gate bootstrapping parameters: {}", err);
        }
        let n = params.in_out.n;
        assert_eq!(
            lwe_key.dimension(),
            n,
            "LWE key has mismatched dimension for these parameters"
        );
        assert_eq!(
            *gsw_key.params, *params.tgsw,
            "TGSW key has mismatched parameters"
        );

        let _span = debug_span!(
            "bootstrapping_key",
            n,
            ring_dim = params.tlwe().ring_dim,
            ell = params.tgsw.decomp_len
        )
        .entered();

        let alpha = params.tlwe().alpha_min;
        let mut samplers: Vec<TorusSampler> = (0..n).map(|_| sampler.fork()).collect();
        let bk: Vec<RingGswSample> = lwe_key
            .key
            .par_iter()
            .zip(samplers.par_iter_mut())
            .map(|(&bit, s)| gsw_key.encrypt_int(bit, alpha, s))
            .collect();
        debug!(samples = bk.len(), "TGSW encryptions of the key bits done");

        let extracted_key = LweKey::extract_from(&gsw_key.tlwe_key);
        let ks = LweKeySwitchKey::generate(
            &extracted_key,
            lwe_key,
            params.key_switch,
            params.in_out.alpha_min,
            sampler,
        );

        Self {
            in_out_params: params.in_out.clone(),
            tgsw_params: params.tgsw.clone(),
            extracted_params: extracted_key.params,
            bk,
            ks,
        }
    }

    /// Dimension n of bootstrapped samples
    pub fn n(&self) -> usize {
        self.in_out_params.n
    }

    /// Ring dimension N of the accumulator
    pub fn ring_dim(&self) -> usize {
        self.tgsw_params.tlwe.ring_dim
    }

    /// Dimension k·N of extracted samples
    pub fn extracted_dim(&self) -> usize {
        self.extracted_params.n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_shapes() {
        let params = GateBootstrappingParams::testing();
        let mut sampler = TorusSampler::with_seed(120);
        let lwe_key = LweKey::generate(params.in_out.clone(), &mut sampler);
        let gsw_key = RingGswKey::generate(params.tgsw.clone(), &mut sampler);

        let bk = LweBootstrappingKey::generate(&params, &lwe_key, &gsw_key, &mut sampler);
        assert_eq!(bk.n(), 64);
        assert_eq!(bk.bk.len(), 64);
        assert_eq!(bk.ring_dim(), 256);
        assert_eq!(bk.extracted_dim(), 256);
        assert_eq!(bk.ks.in_dim, 256);
        assert_eq!(bk.ks.out_dim(), 64);
    }

    #[test]
    fn test_bk_encrypts_key_bits() {
        let params = GateBootstrappingParams::testing();
        let mut sampler = TorusSampler::with_seed(121);
        let lwe_key = LweKey::generate(params.in_out.clone(), &mut sampler);
        let gsw_key = RingGswKey::generate(params.tgsw.clone(), &mut sampler);

        let bk = LweBootstrappingKey::generate(&params, &lwe_key, &gsw_key, &mut sampler);
        for (sample, &bit) in bk.bk.iter().zip(lwe_key.key.iter()) {
            assert_eq!(gsw_key.decrypt_int(sample), bit);
        }
    }

    #[test]
    #[should_panic(expected = "mismatched dimension")]
    fn test_rejects_wrong_lwe_key() {
        let params = GateBootstrappingParams::testing();
        let mut sampler = TorusSampler::with_seed(122);
        let lwe_key = LweKey::generate(Arc::new(LweParams::new(10, 1e-5, 1e-2)), &mut sampler);
        let gsw_key = RingGswKey::generate(params.tgsw.clone(), &mut sampler);
        LweBootstrappingKey::generate(&params, &lwe_key, &gsw_key, &mut sampler);
    }

    #[test]
    #[should_panic(expected = "Invalid gate bootstrapping parameters")]
    fn test_rejects_unvalidated_params() {
        let mut params = GateBootstrappingParams::testing();
        let mut sampler = TorusSampler::with_seed(123);
        let lwe_key = LweKey::generate(params.in_out.clone(), &mut sampler);
        let gsw_key = RingGswKey::generate(params.tgsw.clone(), &mut sampler);
        params.key_switch.decomp_len = 20;
        LweBootstrappingKey::generate(&params, &lwe_key, &gsw_key, &mut sampler);
    }
}
