//! External product TGSW ⊡ TLWE → TLWE and the controlled multiplexer
//!
//! This is the operation blind rotation is built from.

use crate::math::t32tod;
use crate::tlwe::RingLweSample;

use super::decompose::decompose;
use super::types::RingGswSample;

/// Compute the external product: TGSW(μ) ⊡ TLWE(m) → TLWE(μ·m)
///
/// # Algorithm
///
/// 1. Decompose each of the k+1 components of the TLWE sample into ℓ signed
///    digit polynomials
/// 2. Return Σ_{i,p} dec[i·ℓ + p] · row[i·ℓ + p]
///
/// The output noise is the digit-weighted row noise plus μ times the input
/// noise and the rounding error of the decomposition.
pub fn external_product(gsw: &RingGswSample, tlwe: &RingLweSample) -> RingLweSample {
    let k = gsw.mask_count();
    let n = gsw.params.tlwe.ring_dim;
    assert_eq!(
        tlwe.mask_count(),
        k,
        "TLWE sample has mismatched mask count for this TGSW sample"
    );
    assert_eq!(
        tlwe.ring_dim(),
        n,
        "TLWE sample has mismatched ring dimension for this TGSW sample"
    );
    assert_eq!(
        gsw.rows.len(),
        gsw.params.row_count(),
        "TGSW must have (k+1)·ℓ rows"
    );

    let digits = decompose(tlwe, &gsw.params);

    let mut result = RingLweSample::zero(k, n);
    for (digit, row) in digits.iter().zip(gsw.rows.iter()) {
        if digit.is_zero() {
            continue;
        }
        for (acc, component) in result.a.iter_mut().zip(row.a.iter()) {
            acc.add_mul_r(digit, component);
        }
        result.current_variance += digit.norm_sq() * row.current_variance;
    }

    // rounding error of the decomposition, amplified by the key
    let used_bits = gsw.params.decomp_len as u32 * gsw.params.base_bits;
    let eps = t32tod(1 << (32 - used_bits).min(30)) / 2.0;
    result.current_variance += (1.0 + (k * n) as f64 / 2.0) * eps * eps + tlwe.current_variance;
    result
}

/// acc ← TGSW(μ) ⊡ acc
pub fn external_product_assign(acc: &mut RingLweSample, gsw: &RingGswSample) {
    let result = external_product(gsw, acc);
    *acc = result;
}

/// Controlled multiplexer
///
/// `result` encrypts `when_true` if `selector` encrypts 1 and `when_false`
/// if it encrypts 0: result = when_false + selector ⊡ (when_true − when_false).
pub fn cmux(
    result: &mut RingLweSample,
    selector: &RingGswSample,
    when_true: &RingLweSample,
    when_false: &RingLweSample,
) {
    let mut diff = when_true.clone();
    diff.sub_to(when_false);
    let product = external_product(selector, &diff);
    let added = product.current_variance - diff.current_variance;

    result.copy_from(when_false);
    result.add_to(&product);
    // only one branch survives decryption
    result.current_variance =
        when_true.current_variance.max(when_false.current_variance) + added;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::math::{mod_switch_to_torus32, IntPolynomial, TorusPolynomial, TorusSampler};
    use crate::params::{RingGswParams, RingLweParams};
    use crate::tgsw::RingGswKey;

    fn test_params(k: usize) -> Arc<RingGswParams> {
        let tlwe = Arc::new(RingLweParams::new(128, k, 1e-9, 1e-2));
        Arc::new(RingGswParams::new(2, 10, tlwe))
    }

    fn message_poly(n: usize, sampler: &mut TorusSampler) -> TorusPolynomial {
        let coeffs = (0..n)
            .map(|_| mod_switch_to_torus32(sampler.uniform_torus32().rem_euclid(8), 8))
            .collect();
        TorusPolynomial::from_coeffs(coeffs)
    }

    #[test]
    fn test_external_product_by_zero_and_one() {
        for k in [1, 2] {
            let params = test_params(k);
            let mut sampler = TorusSampler::with_seed(80 + k as u64);
            let key = RingGswKey::generate(params, &mut sampler);
            let msg = message_poly(128, &mut sampler);
            let tlwe = key.tlwe_key.encrypt(&msg, 1e-9, &mut sampler);

            let zero = key.encrypt_int(0, 1e-9, &mut sampler);
            let result = external_product(&zero, &tlwe);
            assert!(key.tlwe_key.decrypt_approx(&result, 8).is_zero());

            let one = key.encrypt_int(1, 1e-9, &mut sampler);
            let result = external_product(&one, &tlwe);
            assert_eq!(key.tlwe_key.decrypt_approx(&result, 8), msg);
        }
    }

    #[test]
    fn test_external_product_by_scalar() {
        let params = test_params(1);
        let mut sampler = TorusSampler::with_seed(90);
        let key = RingGswKey::generate(params, &mut sampler);
        let msg = TorusPolynomial::constant(mod_switch_to_torus32(1, 16), 128);
        let tlwe = key.tlwe_key.encrypt(&msg, 1e-9, &mut sampler);

        let three = key.encrypt_int(3, 1e-9, &mut sampler);
        let result = external_product(&three, &tlwe);
        let dec = key.tlwe_key.decrypt_approx(&result, 16);
        assert_eq!(dec.coeff(0), mod_switch_to_torus32(3, 16));
    }

    #[test]
    fn test_external_product_by_monomial() {
        let params = test_params(1);
        let mut sampler = TorusSampler::with_seed(91);
        let key = RingGswKey::generate(params, &mut sampler);
        let msg = message_poly(128, &mut sampler);
        let tlwe = key.tlwe_key.encrypt(&msg, 1e-9, &mut sampler);

        let mut x = IntPolynomial::zero(128);
        x.set_coeff(1, 1);
        let gsw_x = key.encrypt_poly(&x, 1e-9, &mut sampler);

        let mut acc = tlwe.clone();
        external_product_assign(&mut acc, &gsw_x);
        assert_eq!(key.tlwe_key.decrypt_approx(&acc, 8), msg.mul_by_xai(1));
    }

    #[test]
    fn test_cmux_selects() {
        let params = test_params(1);
        let mut sampler = TorusSampler::with_seed(92);
        let key = RingGswKey::generate(params.clone(), &mut sampler);

        let m_true = message_poly(128, &mut sampler);
        let m_false = message_poly(128, &mut sampler);
        let c_true = key.tlwe_key.encrypt(&m_true, 1e-9, &mut sampler);
        let c_false = key.tlwe_key.encrypt(&m_false, 1e-9, &mut sampler);

        let mut result = RingLweSample::new(&params.tlwe);
        for bit in [false, true] {
            let selector = key.encrypt_bit(bit, 1e-9, &mut sampler);
            cmux(&mut result, &selector, &c_true, &c_false);
            let expected = if bit { &m_true } else { &m_false };
            assert_eq!(&key.tlwe_key.decrypt_approx(&result, 8), expected);
        }
    }

    #[test]
    fn test_variance_estimate_grows() {
        let params = test_params(1);
        let mut sampler = TorusSampler::with_seed(93);
        let key = RingGswKey::generate(params, &mut sampler);
        let tlwe = key.tlwe_key.encrypt_constant(0, 1e-9, &mut sampler);
        let one = key.encrypt_int(1, 1e-9, &mut sampler);

        let result = external_product(&one, &tlwe);
        assert!(result.current_variance > tlwe.current_variance);
        assert!(result.current_variance < 1e-6);
    }

    #[test]
    fn test_cmux_variance_follows_selected_branch() {
        let params = test_params(1);
        let mut sampler = TorusSampler::with_seed(94);
        let key = RingGswKey::generate(params, &mut sampler);
        let c = key.tlwe_key.encrypt_constant(0, 1e-9, &mut sampler);
        let selector = key.encrypt_bit(true, 1e-9, &mut sampler);

        let mut acc = c.clone();
        for _ in 0..50 {
            let prev = acc.clone();
            cmux(&mut acc, &selector, &prev, &c);
        }
        // linear growth, not geometric
        assert!(acc.current_variance < 1e-6);
        assert_eq!(key.tlwe_key.decrypt_approx(&acc, 8).coeff(0), 0);
    }

    #[test]
    #[should_panic(expected = "mismatched mask count")]
    fn test_rejects_mismatched_sample() {
        let params = test_params(1);
        let gsw = RingGswSample::new(params);
        external_product(&gsw, &RingLweSample::zero(2, 128));
    }
}
