//! Signed gadget decomposition of torus polynomials
//!
//! Each coefficient x is rounded to its ℓ·Bgbit most significant bits and
//! written as Σ_p d_p·2^(32 − (p+1)·Bgbit) with digits d_p ∈ (−Bg/2, Bg/2].
//!
//! The offset trick yields digits in [−Bg/2, Bg/2), so −x is decomposed and
//! every digit negated.

use crate::math::{IntPolynomial, Torus32, TorusPolynomial};
use crate::params::RingGswParams;
use crate::tlwe::RingLweSample;

/// Decompose one polynomial into ℓ digit polynomials
///
/// Digit `p` has weight h[p] = 2^(32 − (p+1)·Bgbit).
pub fn decompose_poly(poly: &TorusPolynomial, params: &RingGswParams) -> Vec<IntPolynomial> {
    let n = poly.dimension();
    let mut result = vec![IntPolynomial::zero(n); params.decomp_len];
    decompose_poly_into(&mut result, poly, params);
    result
}

/// Decompose into preallocated digit polynomials
pub fn decompose_poly_into(result: &mut [IntPolynomial], poly: &TorusPolynomial, params: &RingGswParams) {
    assert_eq!(
        result.len(),
        params.decomp_len,
        "Decomposition buffer has mismatched length"
    );

    let offset = params.decomp_offset();
    let mask = params.mask_mod();
    let half = params.half_base();
    let bits = params.base_bits;

    for (p, digits) in result.iter_mut().enumerate() {
        assert_eq!(
            digits.dimension(),
            poly.dimension(),
            "Decomposition buffer[{p}] has mismatched dimension"
        );
        let shift = 32 - (p as u32 + 1) * bits;
        for (d, &x) in digits.coeffs_mut().iter_mut().zip(poly.coeffs()) {
            let shifted = (x.wrapping_neg() as u32).wrapping_add(offset);
            *d = half - ((shifted >> shift) & mask) as i32;
        }
    }
}

/// Decompose all k+1 components of a TLWE sample
///
/// Entry `i·ℓ + p` is digit `p` of component `i`, matching the row layout of
/// a TGSW sample.
pub fn decompose(sample: &RingLweSample, params: &RingGswParams) -> Vec<IntPolynomial> {
    let ell = params.decomp_len;
    let mut result = vec![IntPolynomial::zero(sample.ring_dim()); sample.a.len() * ell];
    for (i, poly) in sample.a.iter().enumerate() {
        decompose_poly_into(&mut result[i * ell..(i + 1) * ell], poly, params);
    }
    result
}

/// Reconstruct Σ_p d_p·h[p] from a decomposition
pub fn reconstruct(digits: &[IntPolynomial], params: &RingGswParams) -> TorusPolynomial {
    assert!(!digits.is_empty(), "Decomposition cannot be empty");
    assert_eq!(
        digits.len(),
        params.decomp_len,
        "Decomposition length must match gadget length"
    );

    let h = params.gadget_values();
    let n = digits[0].dimension();
    let mut coeffs: Vec<Torus32> = vec![0; n];
    for (digit_poly, &hp) in digits.iter().zip(h.iter()) {
        for (c, &d) in coeffs.iter_mut().zip(digit_poly.coeffs()) {
            *c = c.wrapping_add(d.wrapping_mul(hp));
        }
    }
    TorusPolynomial::from_coeffs(coeffs)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::math::{t32tod, TorusSampler};
    use crate::params::RingLweParams;

    fn test_params(ell: usize, bits: u32) -> RingGswParams {
        let tlwe = Arc::new(RingLweParams::new(64, 1, 1e-9, 1e-2));
        RingGswParams::new(ell, bits, tlwe)
    }

    #[test]
    fn test_digits_are_balanced() {
        let params = test_params(2, 10);
        let mut sampler = TorusSampler::with_seed(50);
        let poly = TorusPolynomial::uniform(64, &mut sampler);

        for digits in decompose_poly(&poly, &params) {
            for &d in digits.coeffs() {
                assert!((-511..=512).contains(&d), "Digit {} outside (-Bg/2, Bg/2]", d);
            }
        }
    }

    #[test]
    fn test_reconstruction_within_rounding_error() {
        for (ell, bits) in [(2, 10), (3, 7), (4, 8), (1, 16)] {
            let params = test_params(ell, bits);
            let mut sampler = TorusSampler::with_seed(51);
            let poly = TorusPolynomial::uniform(64, &mut sampler);

            let rebuilt = reconstruct(&decompose_poly(&poly, &params), &params);
            let bound = 2f64.powi(-((ell as u32 * bits) as i32) - 1);
            for i in 0..64 {
                let err = t32tod(rebuilt.coeff(i).wrapping_sub(poly.coeff(i))).abs();
                assert!(err <= bound, "ℓ={} Bgbit={}: error {} > {}", ell, bits, err, bound);
            }
        }
    }

    #[test]
    fn test_full_precision_is_exact() {
        let params = test_params(4, 8);
        let mut sampler = TorusSampler::with_seed(52);
        let poly = TorusPolynomial::uniform(64, &mut sampler);
        assert_eq!(reconstruct(&decompose_poly(&poly, &params), &params), poly);
    }

    #[test]
    fn test_known_value() {
        let params = test_params(2, 10);
        // 3/2^10 + 5/2^20, both digits well inside the balanced range
        let x = (3 << 22) + (5 << 12);
        let poly = TorusPolynomial::constant(x, 64);
        let digits = decompose_poly(&poly, &params);
        assert_eq!(digits[0].coeff(0), 3);
        assert_eq!(digits[1].coeff(0), 5);
        assert!(digits[0].coeffs()[1..].iter().all(|&d| d == 0));
    }

    #[test]
    fn test_minus_half_takes_upper_digit() {
        let params = test_params(2, 10);
        let poly = TorusPolynomial::constant(i32::MIN, 64);
        let digits = decompose_poly(&poly, &params);
        assert_eq!(digits[0].coeff(0), 512);
        assert_eq!(digits[1].coeff(0), 0);
        assert_eq!(reconstruct(&digits, &params), poly);
    }

    #[test]
    fn test_negative_value() {
        let params = test_params(2, 10);
        let x = -((3 << 22) + (5 << 12));
        let digits = decompose_poly(&TorusPolynomial::constant(x, 64), &params);
        assert_eq!(digits[0].coeff(0), -3);
        assert_eq!(digits[1].coeff(0), -5);
    }

    #[test]
    fn test_sample_decomposition_layout() {
        let params = test_params(2, 10);
        let mut sample = RingLweSample::zero(1, 64);
        sample.a[1].set_coeff(0, 7 << 22);
        let digits = decompose(&sample, &params);
        assert_eq!(digits.len(), 4);
        assert!(digits[0].is_zero() && digits[1].is_zero());
        assert_eq!(digits[2].coeff(0), 7);
    }
}
