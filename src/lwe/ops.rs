//! Homomorphic linear operations on LWE samples
//!
//! All operations are exact on the torus and accumulate the noise variance
//! estimate as Σ c²·var for integer coefficients c.

use super::types::LweSample;
use crate::math::Torus32;

impl LweSample {
    /// Noiseless sample (0, μ), decryptable under any key
    pub fn noiseless_trivial(mu: Torus32, n: usize) -> Self {
        Self {
            a: vec![0; n],
            b: mu,
            current_variance: 0.0,
        }
    }

    /// Overwrite with the noiseless trivial sample (0, μ)
    pub fn set_trivial(&mut self, mu: Torus32) {
        self.a.fill(0);
        self.b = mu;
        self.current_variance = 0.0;
    }

    /// Reset to the zero sample
    pub fn clear(&mut self) {
        self.set_trivial(0);
    }

    /// Overwrite with a copy of `other`
    pub fn copy_from(&mut self, other: &LweSample) {
        assert_same_dimension(self, other);
        self.a.copy_from_slice(&other.a);
        self.b = other.b;
        self.current_variance = other.current_variance;
    }

    /// self += x
    pub fn add_to(&mut self, x: &LweSample) {
        self.add_mul_to(1, x);
    }

    /// self −= x
    pub fn sub_to(&mut self, x: &LweSample) {
        self.sub_mul_to(1, x);
    }

    /// self += p·x
    pub fn add_mul_to(&mut self, p: i32, x: &LweSample) {
        assert_same_dimension(self, x);
        for (a, &xa) in self.a.iter_mut().zip(x.a.iter()) {
            *a = a.wrapping_add(p.wrapping_mul(xa));
        }
        self.b = self.b.wrapping_add(p.wrapping_mul(x.b));
        self.current_variance += (p as f64) * (p as f64) * x.current_variance;
    }

    /// self −= p·x
    pub fn sub_mul_to(&mut self, p: i32, x: &LweSample) {
        assert_same_dimension(self, x);
        for (a, &xa) in self.a.iter_mut().zip(x.a.iter()) {
            *a = a.wrapping_sub(p.wrapping_mul(xa));
        }
        self.b = self.b.wrapping_sub(p.wrapping_mul(x.b));
        self.current_variance += (p as f64) * (p as f64) * x.current_variance;
    }

    /// Add a noiseless torus constant to the encrypted message
    pub fn add_constant(&mut self, mu: Torus32) {
        self.b = self.b.wrapping_add(mu);
    }

    /// self = −self
    pub fn negate(&mut self) {
        for a in self.a.iter_mut() {
            *a = a.wrapping_neg();
        }
        self.b = self.b.wrapping_neg();
    }

    /// Σ c_i·x_i over samples of dimension `n`
    ///
    /// # Panics
    ///
    /// Panics if the coefficient and sample counts differ or a sample is not
    /// of dimension `n`.
    pub fn linear_combination(coeffs: &[i32], samples: &[&LweSample], n: usize) -> Self {
        assert_eq!(
            coeffs.len(),
            samples.len(),
            "Linear combination has mismatched coefficient count"
        );
        let mut result = Self::new(n);
        for (&c, x) in coeffs.iter().zip(samples.iter()) {
            result.add_mul_to(c, x);
        }
        result
    }
}

fn assert_same_dimension(lhs: &LweSample, rhs: &LweSample) {
    assert_eq!(
        lhs.dimension(),
        rhs.dimension(),
        "LWE samples have mismatched dimension"
    );
}
