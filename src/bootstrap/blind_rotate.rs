//! Blind rotation and bootstrapping
//!
//! Bootstrapping evaluates a sign function on the phase of an LWE sample
//! while resetting its noise:
//!
//! 1. Switch the phase to Z/2N: barb, bara_i
//! 2. Rotate a constant test vector by X^(−barb), then homomorphically by
//!    X^(Σ bara_i·s_i), one CMux per key bit
//! 3. Extract the constant coefficient: +μ if the phase was in (0, 1/2),
//!    −μ otherwise
//! 4. Key switch back to dimension n

use crate::ks::key_switch;
use crate::lwe::LweSample;
use crate::math::{mod_switch_from_torus32, Torus32, TorusPolynomial};
use crate::params::RingLweParams;
use crate::tgsw::{external_product, RingGswSample};
use crate::tlwe::RingLweSample;

use super::key::LweBootstrappingKey;

/// Multiply the accumulator by X^(Σ bara_i·s_i)
///
/// For each i with bara_i ≠ 0: acc ← acc + bk_i ⊡ ((X^bara_i − 1)·acc), a
/// CMux between acc and X^bara_i·acc selected by s_i.
///
/// # Arguments
/// * `acc` - TLWE accumulator, rotated in place
/// * `bk` - TGSW encryptions of the key bits
/// * `bara` - Rotation exponents in [0, 2N)
pub fn blind_rotate(acc: &mut RingLweSample, bk: &[RingGswSample], bara: &[usize]) {
    assert_eq!(
        bk.len(),
        bara.len(),
        "Rotation exponents have mismatched count for this bootstrapping key"
    );

    let mut temp = acc.clone();
    for (gsw, &a) in bk.iter().zip(bara.iter()) {
        if a == 0 {
            continue;
        }
        temp.mul_by_xai_minus_one(a, acc);
        let product = external_product(gsw, &temp);
        let added = product.current_variance - temp.current_variance;

        let before = acc.current_variance;
        acc.add_to(&product);
        acc.current_variance = before + added;
    }
}

/// Blind rotation of a test vector followed by extraction of coefficient 0
///
/// Returns an LWE sample of dimension k·N whose message is coefficient 0 of
/// X^(−barb + Σ bara_i·s_i)·test_vec.
pub fn blind_rotate_and_extract(
    test_vec: &TorusPolynomial,
    bk: &[RingGswSample],
    barb: usize,
    bara: &[usize],
    params: &RingLweParams,
) -> LweSample {
    let n2 = 2 * params.ring_dim;
    assert_eq!(
        test_vec.dimension(),
        params.ring_dim,
        "Test vector has mismatched ring dimension"
    );

    let rotated = test_vec.mul_by_xai((n2 - barb % n2) % n2);
    let mut acc = RingLweSample::noiseless_trivial(&rotated, params);
    blind_rotate(&mut acc, bk, bara);
    acc.sample_extract()
}

/// Bootstrap to the extracted key: output encrypts ±μ, dimension k·N
///
/// # Arguments
/// * `result` - Output buffer of dimension k·N
/// * `bk` - Bootstrapping key
/// * `mu` - Output message magnitude
/// * `x` - Input sample of dimension n
pub fn bootstrap_without_key_switch(
    result: &mut LweSample,
    bk: &LweBootstrappingKey,
    mu: Torus32,
    x: &LweSample,
) {
    assert_eq!(
        x.dimension(),
        bk.n(),
        "Input has mismatched dimension for this bootstrapping key"
    );

    let ring_dim = bk.ring_dim();
    let n2 = 2 * ring_dim as u32;

    let barb = mod_switch_from_torus32(x.b, n2) as usize;
    let bara: Vec<usize> = x
        .a
        .iter()
        .map(|&ai| mod_switch_from_torus32(ai, n2) as usize)
        .collect();

    let test_vec = TorusPolynomial::filled(mu, ring_dim);
    let extracted = blind_rotate_and_extract(&test_vec, &bk.bk, barb, &bara, &bk.tgsw_params.tlwe);
    result.copy_from(&extracted);
}

/// Bootstrap: output encrypts +μ if the phase of `x` is in (0, 1/2), −μ otherwise
///
/// The output has the dimension n of the input and fresh noise, independent
/// of the noise of `x`.
pub fn bootstrap_sign(result: &mut LweSample, bk: &LweBootstrappingKey, mu: Torus32, x: &LweSample) {
    let mut u = LweSample::new(bk.extracted_dim());
    bootstrap_without_key_switch(&mut u, bk, mu, x);
    key_switch(result, &bk.ks, &u);
}

/// Bootstrap to two arbitrary outputs: `mu1` for a positive phase, `mu0` otherwise
///
/// Uses the test vector (mu1 − mu0)/2 and adds the noiseless offset
/// (mu1 + mu0)/2 before key switching.
pub fn bootstrap(
    result: &mut LweSample,
    bk: &LweBootstrappingKey,
    mu1: Torus32,
    mu0: Torus32,
    x: &LweSample,
) {
    let half1 = mu1 >> 1;
    let half0 = mu0 >> 1;

    let mut u = LweSample::new(bk.extracted_dim());
    bootstrap_without_key_switch(&mut u, bk, half1.wrapping_sub(half0), x);
    u.add_constant(half1.wrapping_add(half0));
    key_switch(result, &bk.ks, &u);
}
