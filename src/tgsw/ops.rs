//! Linear operations on TGSW samples

use std::sync::Arc;

use crate::math::IntPolynomial;
use crate::params::RingGswParams;

use super::types::RingGswSample;

impl RingGswSample {
    /// Add μ·h[j] to component `bloc` of row `bloc·ℓ + j`, for every row
    ///
    /// Applied to an encryption of zero this yields an encryption of μ.
    pub fn add_mu_int_h(&mut self, mu: i32) {
        let h = self.params.gadget_values();
        let ell = self.decomp_len();
        for bloc in 0..=self.mask_count() {
            for (j, &hj) in h.iter().enumerate() {
                let target = &mut self.rows[bloc * ell + j].a[bloc];
                target.set_coeff(0, target.coeff(0).wrapping_add(mu.wrapping_mul(hj)));
            }
        }
    }

    /// Add μ·h[j] for an integer polynomial μ
    pub fn add_mu_h(&mut self, mu: &IntPolynomial) {
        let n = self.params.tlwe.ring_dim;
        assert_eq!(mu.dimension(), n, "Message has mismatched ring dimension");

        let h = self.params.gadget_values();
        let ell = self.decomp_len();
        for bloc in 0..=self.mask_count() {
            for (j, &hj) in h.iter().enumerate() {
                let target = self.rows[bloc * ell + j].a[bloc].coeffs_mut();
                for (c, &m) in target.iter_mut().zip(mu.coeffs()) {
                    *c = c.wrapping_add(m.wrapping_mul(hj));
                }
            }
        }
    }

    /// Reset every row to zero
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.clear();
        }
    }

    /// self += x, row by row
    pub fn add_to(&mut self, x: &RingGswSample) {
        assert_eq!(
            self.rows.len(),
            x.rows.len(),
            "TGSW samples have mismatched row count"
        );
        for (row, other) in self.rows.iter_mut().zip(x.rows.iter()) {
            row.add_to(other);
        }
    }

    /// self += p·x, row by row
    pub fn add_mul_to(&mut self, p: i32, x: &RingGswSample) {
        assert_eq!(
            self.rows.len(),
            x.rows.len(),
            "TGSW samples have mismatched row count"
        );
        for (row, other) in self.rows.iter_mut().zip(x.rows.iter()) {
            row.add_mul_to(p, other);
        }
    }

    /// Σ c_i·x_i: encrypts Σ c_i·μ_i
    pub fn linear_combination(
        coeffs: &[i32],
        samples: &[&RingGswSample],
        params: Arc<RingGswParams>,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TorusSampler;
    use crate::params::RingLweParams;
    use crate::tgsw::RingGswKey;

    fn test_params() -> Arc<RingGswParams> {
        let tlwe = Arc::new(RingLweParams::new(32, 2, 1e-9, 1e-2));
        Arc::new(RingGswParams::new(2, 10, tlwe))
    }

    #[test]
    fn test_add_mu_int_h_on_trivial_zero() {
        let params = test_params();
        let mut ct = RingGswSample::new(params.clone());
        ct.add_mu_int_h(3);
        let h = params.gadget_values();

        for bloc in 0..3 {
            for j in 0..2 {
                let row = ct.row(bloc, j);
                for (i, poly) in row.a.iter().enumerate() {
                    let expected = if i == bloc { 3 * h[j] } else { 0 };
                    assert_eq!(poly.coeff(0), expected, "bloc {} level {} component {}", bloc, j, i);
                    assert!(poly.coeffs()[1..].iter().all(|&c| c == 0));
                }
            }
        }
    }

    #[test]
    fn test_linear_combination_decrypts() {
        let params = test_params();
        let mut sampler = TorusSampler::with_seed(70);
        let key = RingGswKey::generate(params.clone(), &mut sampler);
        let one = key.encrypt_int(1, 1e-9, &mut sampler);
        let two = key.encrypt_int(2, 1e-9, &mut sampler);

        let comb = RingGswSample::linear_combination(&[3, -1], &[&one, &two], params);
        assert_eq!(key.decrypt_int(&comb), 1);

        let mut sum = one.clone();
        sum.add_to(&two);
        assert_eq!(key.decrypt_int(&sum), 3);

        sum.clear();
        assert_eq!(key.decrypt_int(&sum), 0);
    }
}
