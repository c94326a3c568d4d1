//! Sample extraction: TLWE → LWE
//!
//! Coefficient `index` of the phase of a TLWE sample is
//!
//! ```text
//! b[index] − Σ_i Σ_{j ≤ index} s_i[j]·a_i[index − j] + Σ_i Σ_{j > index} s_i[j]·a_i[N + index − j]
//! ```
//!
//! which is the phase of an LWE sample of dimension k·N under the key whose
//! coefficient i·N + j is s_i[j].

use std::sync::Arc;

use crate::lwe::{LweKey, LweSample};

use super::types::{RingLweKey, RingLweSample};

impl RingLweSample {
    /// LWE sample whose phase is coefficient `index` of this sample's phase
    ///
    /// The result is encrypted under [`LweKey::extract_from`] of the TLWE key
    /// and carries the same variance estimate.
    pub fn sample_extract_index(&self, index: usize) -> LweSample {
        let n = self.ring_dim();
        let k = self.mask_count();
        assert!(index < n, "Extraction index {} out of range [0, {})", index, n);

        let mut result = LweSample::new(k * n);
        self.sample_extract_index_into(&mut result, index);
        result
    }

    /// Extract coefficient `index` into an existing buffer of dimension k·N
    pub fn sample_extract_index_into(&self, result: &mut LweSample, index: usize) {
        let n = self.ring_dim();
        let k = self.mask_count();
        assert_eq!(
            result.dimension(),
            k * n,
            "Extraction target has mismatched dimension"
        );

        for (i, mask) in self.a[..k].iter().enumerate() {
            let src = mask.coeffs();
            let dst = &mut result.a[i * n..(i + 1) * n];
            for j in 0..=index {
                dst[j] = src[index - j];
            }
            for j in index + 1..n {
                dst[j] = src[n + index - j].wrapping_neg();
            }
        }
        result.b = self.body().coeff(index);
        result.current_variance = self.current_variance;
    }

    /// Extract the constant coefficient
    pub fn sample_extract(&self) -> LweSample {
        self.sample_extract_index(0)
    }
}

impl LweKey {
    /// LWE key of dimension k·N under which extracted samples decrypt
    ///
    /// Coefficient i·N + j is coefficient j of key polynomial i.
    pub fn extract_from(key: &RingLweKey) -> Self {
        let params = Arc::new(key.params.extracted_lwe_params());
        let bits = key
            .key
            .iter()
            .flat_map(|poly| poly.coeffs().iter().copied())
            .collect();
        Self::from_bits(params, bits)
    }
}
