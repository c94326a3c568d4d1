//! Homomorphic linear operations on TLWE samples

use crate::math::{IntPolynomial, TorusPolynomial};
use crate::params::RingLweParams;

use super::types::RingLweSample;

impl RingLweSample {
    /// Noiseless sample (0, ..., 0, μ) encrypting the polynomial μ under any key
    pub fn noiseless_trivial(mu: &TorusPolynomial, params: &RingLweParams) -> Self {
        assert_eq!(
            mu.dimension(),
            params.ring_dim,
            "Message has mismatched ring dimension"
        );
        let mut result = Self::new(params);
        result.body_mut().copy_from(mu);
        result
    }

    /// Overwrite with the noiseless trivial sample of μ
    pub fn set_trivial(&mut self, mu: &TorusPolynomial) {
        let k = self.mask_count();
        for mask in &mut self.a[..k] {
            mask.clear();
        }
        self.body_mut().copy_from(mu);
        self.current_variance = 0.0;
    }

    /// Reset to the zero sample
    pub fn clear(&mut self) {
        for p in &mut self.a {
            p.clear();
        }
        self.current_variance = 0.0;
    }

    /// Overwrite with a copy of `other`
    pub fn copy_from(&mut self, other: &RingLweSample) {
        assert_same_shape(self, other);
        for (p, q) in self.a.iter_mut().zip(other.a.iter()) {
            p.copy_from(q);
        }
        self.current_variance = other.current_variance;
    }

    /// self += x
    pub fn add_to(&mut self, x: &RingLweSample) {
        assert_same_shape(self, x);
        for (p, q) in self.a.iter_mut().zip(x.a.iter()) {
            *p += q;
        }
        self.current_variance += x.current_variance;
    }

    /// self −= x
    pub fn sub_to(&mut self, x: &RingLweSample) {
        assert_same_shape(self, x);
        for (p, q) in self.a.iter_mut().zip(x.a.iter()) {
            *p -= q;
        }
        self.current_variance += x.current_variance;
    }

    /// self += p·x for an integer scalar p
    pub fn add_mul_to(&mut self, p: i32, x: &RingLweSample) {
        assert_same_shape(self, x);
        for (c, q) in self.a.iter_mut().zip(x.a.iter()) {
            c.add_mul_z(p, q);
        }
        self.current_variance += (p as f64) * (p as f64) * x.current_variance;
    }

    /// self −= p·x for an integer scalar p
    pub fn sub_mul_to(&mut self, p: i32, x: &RingLweSample) {
        assert_same_shape(self, x);
        for (c, q) in self.a.iter_mut().zip(x.a.iter()) {
            c.sub_mul_z(p, q);
        }
        self.current_variance += (p as f64) * (p as f64) * x.current_variance;
    }

    /// self += p·x for an integer polynomial p
    pub fn add_mul_r_to(&mut self, p: &IntPolynomial, x: &RingLweSample) {
        assert_same_shape(self, x);
        for (c, q) in self.a.iter_mut().zip(x.a.iter()) {
            c.add_mul_r(p, q);
        }
        self.current_variance += p.norm_sq() * x.current_variance;
    }

    /// self = (X^a − 1)·x, for a in [0, 2N)
    pub fn mul_by_xai_minus_one(&mut self, a: usize, x: &RingLweSample) {
        assert_same_shape(self, x);
        for (c, q) in self.a.iter_mut().zip(x.a.iter()) {
            *c = q.mul_by_xai_minus_one(a);
        }
        self.current_variance = 2.0 * x.current_variance;
    }

    /// self = X^a·x, for a in [0, 2N)
    pub fn mul_by_xai(&mut self, a: usize, x: &RingLweSample) {
        assert_same_shape(self, x);
        for (c, q) in self.a.iter_mut().zip(x.a.iter()) {
            *c = q.mul_by_xai(a);
        }
        self.current_variance = x.current_variance;
    }

    /// Σ c_i·x_i over samples of the given parameters
    pub fn linear_combination(
        coeffs: &[i32],
        samples: &[&RingLweSample],
        params: &RingLweParams,
    ) -> Self {
        assert_eq!(
            coeffs.len(),
            samples.len(),
            "Linear combination has mismatched coefficient count"
        );
        let mut result = Self::new(params);
        for (&c, x) in coeffs.iter().zip(samples.iter()) {
            result.add_mul_to(c, x);
        }
        result
    }
}

fn assert_same_shape(lhs: &RingLweSample, rhs: &RingLweSample) {
    assert_eq!(
        lhs.a.len(),
        rhs.a.len(),
        "TLWE samples have mismatched mask count"
    );
    assert_eq!(
        lhs.ring_dim(),
        rhs.ring_dim(),
        "TLWE samples have mismatched ring dimension"
    );
}
