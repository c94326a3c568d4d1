//! TGSW sample and key types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::params::RingGswParams;
use crate::tlwe::{RingLweKey, RingLweSample};

/// TGSW secret key: a TLWE key used with a gadget decomposition.
///
/// # Fields
///
/// * `params` - Gadget and ring parameters
/// * `tlwe_key` - The underlying k binary polynomials
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RingGswKey {
    /// Gadget and ring parameters.
    pub params: Arc<RingGswParams>,
    /// Underlying TLWE key.
    pub tlwe_key: RingLweKey,
}

/// TGSW sample: (k+1)·ℓ TLWE rows encrypting a small integer μ.
///
/// Row `bloc·ℓ + j` is a TLWE encryption of zero with μ·h[j] added to
/// component `bloc`, where h[j] = 1/Bg^(j+1):
///
/// ```text
/// [ bloc 0   : Enc(0) + (μ·h[j], 0, ..., 0) ]   j = 0..ℓ
/// [ ...                                   ]
/// [ bloc k   : Enc(0) + (0, ..., 0, μ·h[j]) ]   body block
/// ```
///
/// Multiplying its rows by the gadget digits of a TLWE sample yields a TLWE
/// encryption of μ times the original message: the external product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RingGswSample {
    /// (k+1)·ℓ TLWE rows, indexed bloc·ℓ + j.
    pub rows: Vec<RingLweSample>,
    /// Gadget and ring parameters.
    pub params: Arc<RingGswParams>,
}

impl RingGswKey {
    /// Returns the ring dimension N.
    pub fn ring_dim(&self) -> usize {
        self.params.tlwe.ring_dim
    }
}

impl RingGswSample {
    /// Zero sample: every row is the zero TLWE sample.
    pub fn new(params: Arc<RingGswParams>) -> Self {
        let rows = (0..params.row_count())
            .map(|_| RingLweSample::new(&params.tlwe))
            .collect();
        Self { rows, params }
    }

    /// Returns the decomposition length ℓ.
    pub fn decomp_len(&self) -> usize {
        self.params.decomp_len
    }

    /// Returns the number k of mask polynomials.
    pub fn mask_count(&self) -> usize {
        self.params.tlwe.mask_count
    }

    /// Row `j` of block `bloc`.
    pub fn row(&self, bloc: usize, j: usize) -> &RingLweSample {
        &self.rows[bloc * self.decomp_len() + j]
    }
}
