//! Key-switching key generation

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::lwe::{LweKey, LweSample};
use crate::math::{Torus32, TorusSampler};
use crate::params::{KeySwitchParams, LweParams};

/// Key-switching key from an input LWE key s to an output LWE key s'
///
/// Entry (i, j, v) is an encryption under s' of
/// ```text
/// s_i · v · 2^(32 − (j+1)·basebit)
/// ```
/// for every input coefficient i, digit level j ∈ [0, t) and digit value
/// v ∈ [0, base). Entries for v = 0 are kept so the table is rectangular.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LweKeySwitchKey {
    /// Decomposition parameters
    pub params: KeySwitchParams,
    /// Dimension of the input key
    pub in_dim: usize,
    /// Parameters of the output key
    pub out_params: Arc<LweParams>,
    /// Flattened table of in_dim · t · base samples
    pub entries: Vec<LweSample>,
}

impl LweKeySwitchKey {
    /// Generate a key-switching key
    ///
    /// Rows for different input coefficients are encrypted in parallel, each
    /// with its own sampler forked from `sampler`, so the result only depends
    /// on the sampler state.
    ///
    /// # Arguments
    /// * `in_key` - Source key s
    /// * `out_key` - Target key s'
    /// * `params` - Decomposition length t and base bits
    /// * `alpha` - Noise standard deviation of every entry
    /// * `sampler` - Source of randomness
    pub fn generate(
        in_key: &LweKey,
        out_key: &LweKey,
        params: KeySwitchParams,
        alpha: f64,
        sampler: &mut TorusSampler,
    ) -> Self {
        let _span = debug_span!(
            "keyswitch_key",
            in_dim = in_key.dimension(),
            out_dim = out_key.dimension(),
            t = params.decomp_len,
            basebit = params.base_bits
        )
        .entered();

        let t = params.decomp_len;
        let base = params.base();
        let mut row_samplers: Vec<TorusSampler> =
            (0..in_key.dimension()).map(|_| sampler.fork()).collect();

        let entries: Vec<LweSample> = in_key
            .key
            .par_iter()
            .zip(row_samplers.par_iter_mut())
            .flat_map_iter(|(&s_i, row_sampler)| {
                let mut row = Vec::with_capacity(t * base);
                for j in 0..t {
                    let shift = 32 - (j as u32 + 1) * params.base_bits;
                    for v in 0..base {
                        let message = (s_i as u32)
                            .wrapping_mul(v as u32)
                            .wrapping_shl(shift) as Torus32;
                        row.push(out_key.encrypt(message, alpha, row_sampler));
                    }
                }
                row
            })
            .collect();

        tracing::debug!(entries = entries.len(), "key-switching key generated");

        Self {
            params,
            in_dim: in_key.dimension(),
            out_params: out_key.params.clone(),
            entries,
        }
    }

    /// Entry (i, j, v)
    #[inline]
    pub fn entry(&self, i: usize, j: usize, v: usize) -> &LweSample {
        let base = self.params.base();
        &self.entries[(i * self.params.decomp_len + j) * base + v]
    }

    /// Dimension of the output samples
    pub fn out_dim(&self) -> usize {
        self.out_params.n
    }
}
