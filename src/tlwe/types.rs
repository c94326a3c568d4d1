//! TLWE sample and key types.
//!
//! Ring LWE over T[X]/(X^N + 1) with k mask polynomials.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::math::{IntPolynomial, TorusPolynomial};
use crate::params::RingLweParams;

/// TLWE secret key: k binary polynomials.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use torus_gates::tlwe::RingLweKey;
/// use torus_gates::math::TorusSampler;
/// use torus_gates::params::RingLweParams;
///
/// let params = Arc::new(RingLweParams::new(256, 1, 1e-9, 1e-2));
/// let key = RingLweKey::generate(params, &mut TorusSampler::with_seed(3));
/// assert_eq!(key.key.len(), 1);
/// assert_eq!(key.ring_dim(), 256);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RingLweKey {
    /// Parameters the key was generated for.
    pub params: Arc<RingLweParams>,
    /// Key polynomials s_0, ..., s_{k-1} with coefficients in {0, 1}.
    pub key: Vec<IntPolynomial>,
}

/// TLWE sample: (a_0, ..., a_{k-1}, b) with b = Σ a_i·s_i + μ + e.
///
/// The k mask polynomials and the body are stored together in `a`, body last,
/// so that decomposition and external products can treat all k+1 components
/// uniformly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RingLweSample {
    /// Mask polynomials followed by the body: k+1 entries.
    pub a: Vec<TorusPolynomial>,
    /// Estimated noise variance of every coefficient.
    pub current_variance: f64,
}

impl RingLweKey {
    /// Returns the ring dimension N.
    pub fn ring_dim(&self) -> usize {
        self.params.ring_dim
    }

    /// Returns the number k of key polynomials.
    pub fn mask_count(&self) -> usize {
        self.key.len()
    }
}

impl RingLweSample {
    /// Zero sample for the given parameters.
    pub fn new(params: &RingLweParams) -> Self {
        Self::zero(params.mask_count, params.ring_dim)
    }

    /// Zero sample with k masks of ring dimension N.
    pub fn zero(mask_count: usize, ring_dim: usize) -> Self {
        Self {
            a: (0..=mask_count).map(|_| TorusPolynomial::zero(ring_dim)).collect(),
            current_variance: 0.0,
        }
    }

    /// Returns the number k of mask polynomials.
    pub fn mask_count(&self) -> usize {
        self.a.len() - 1
    }

    /// Returns the ring dimension N.
    pub fn ring_dim(&self) -> usize {
        self.a[0].dimension()
    }

    /// The body polynomial b.
    pub fn body(&self) -> &TorusPolynomial {
        &self.a[self.a.len() - 1]
    }

    /// Mutable access to the body polynomial b.
    pub fn body_mut(&mut self) -> &mut TorusPolynomial {
        let k = self.a.len() - 1;
        &mut self.a[k]
    }
}
