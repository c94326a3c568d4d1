//! LWE sample and key types

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::math::Torus32;
use crate::params::LweParams;

/// LWE secret key: n binary coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LweKey {
    /// Parameters the key was generated for
    pub params: Arc<LweParams>,
    /// Key bits s_i ∈ {0, 1}
    pub key: Vec<i32>,
}

/// LWE sample: (a, b) where b = <a, s> + μ + e
///
/// The phase b − <a, s> recovers the message up to the noise e, whose
/// variance is tracked as an estimate in `current_variance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LweSample {
    /// Mask vector in T^n
    pub a: Vec<Torus32>,
    /// Body: <a, s> + μ + e
    pub b: Torus32,
    /// Estimated noise variance (torus units squared)
    pub current_variance: f64,
}

impl LweKey {
    /// Dimension n of the key
    pub fn dimension(&self) -> usize {
        self.key.len()
    }
}

impl LweSample {
    /// Zero sample of dimension `n`
    pub fn new(n: usize) -> Self {
        Self {
            a: vec![0; n],
            b: 0,
            current_variance: 0.0,
        }
    }

    /// Dimension n of the mask
    pub fn dimension(&self) -> usize {
        self.a.len()
    }
}
