//! Gate key sets, bit encryption and decryption

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::bootstrap::LweBootstrappingKey;
use crate::error::Result;
use crate::lwe::{LweKey, LweSample};
use crate::math::{mod_switch_to_torus32, Torus32, TorusSampler};
use crate::params::GateBootstrappingParams;
use crate::tgsw::RingGswKey;

/// Torus encoding of `true`: 1/8. `false` is −1/8.
pub(crate) fn bit_encoding(bit: bool) -> Torus32 {
    let mu = mod_switch_to_torus32(1, 8);
    if bit {
        mu
    } else {
        mu.wrapping_neg()
    }
}

/// Secret keys of a gate-bootstrapping instance
///
/// Needed to encrypt and decrypt bits; never passed to gate evaluation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SecretKeySet {
    /// Parameters of the instance
    pub params: Arc<GateBootstrappingParams>,
    /// Key of gate inputs and outputs (dimension n)
    pub lwe_key: LweKey,
    /// Ring key of the bootstrapping accumulator
    pub tgsw_key: RingGswKey,
}

/// Public evaluation keys of a gate-bootstrapping instance
///
/// Cloning shares the bootstrapping key, so a `CloudKeySet` can be handed to
/// every worker thread.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CloudKeySet {
    /// Parameters of the instance
    pub params: Arc<GateBootstrappingParams>,
    /// Bootstrapping and key-switching key
    pub bk: Arc<LweBootstrappingKey>,
}

impl CloudKeySet {
    /// Dimension n of gate inputs and outputs
    pub fn n(&self) -> usize {
        self.params.in_out.n
    }

    /// A zeroed sample of the gate dimension, for use as a result buffer
    pub fn new_sample(&self) -> LweSample {
        LweSample::new(self.n())
    }
}

/// Generate a secret key set and the matching cloud key set
///
/// # Errors
///
/// Returns an error if `params` fails validation.
///
/// # Example
///
/// ```
/// use torus_gates::gates::{decrypt_bit, encrypt_bit, generate_keys};
/// use torus_gates::math::TorusSampler;
/// use torus_gates::params::GateBootstrappingParams;
///
/// let mut sampler = TorusSampler::with_seed(1);
/// let (secret, _cloud) = generate_keys(GateBootstrappingParams::testing(), &mut sampler).unwrap();
/// let ct = encrypt_bit(true, &secret, &mut sampler);
/// assert!(decrypt_bit(&ct, &secret));
/// ```
pub fn generate_keys(
    params: GateBootstrappingParams,
    sampler: &mut TorusSampler,
) -> Result<(SecretKeySet, CloudKeySet)> {
    params.validate()?;
    let params = Arc::new(params);

    info!(
        n = params.in_out.n,
        ring_dim = params.tlwe().ring_dim,
        ell = params.tgsw.decomp_len,
        "generating gate bootstrapping keys"
    );

    let lwe_key = LweKey::generate(params.in_out.clone(), sampler);
    let tgsw_key = RingGswKey::generate(params.tgsw.clone(), sampler);
    let bk = LweBootstrappingKey::generate(&params, &lwe_key, &tgsw_key, sampler);

    let secret = SecretKeySet {
        params: params.clone(),
        lwe_key,
        tgsw_key,
    };
    let cloud = CloudKeySet {
        params,
        bk: Arc::new(bk),
    };
    Ok((secret, cloud))
}

/// Encrypt a bit as ±1/8 with the smallest noise allowed by the parameters
pub fn encrypt_bit(bit: bool, key: &SecretKeySet, sampler: &mut TorusSampler) -> LweSample {
    key.lwe_key
        .encrypt(bit_encoding(bit), key.params.in_out.alpha_min, sampler)
}

/// Decrypt a bit: `true` if the phase is positive
pub fn decrypt_bit(sample: &LweSample, key: &SecretKeySet) -> bool {
    key.lwe_key.phase(sample) > 0
}
