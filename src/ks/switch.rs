//! Key-switching operation

use crate::lwe::LweSample;

use super::setup::LweKeySwitchKey;

/// Switch an LWE sample from the input key of `ksk` to its output key
///
/// # Algorithm
///
/// 1. Start from the trivial sample (0, b)
/// 2. Round every mask coefficient a_i to its t·basebit most significant
///    bits and split it into t digits of basebit bits
/// 3. Subtract entry (i, j, digit) for every non-zero digit
///
/// The result decrypts under the output key to the phase of `sample`, up to
/// the rounding error and the accumulated entry noise.
///
/// # Arguments
/// * `result` - Output buffer of the output key's dimension
/// * `ksk` - Key-switching key
/// * `sample` - Input sample under the input key
pub fn key_switch(result: &mut LweSample, ksk: &LweKeySwitchKey, sample: &LweSample) {
    assert_eq!(
        sample.dimension(),
        ksk.in_dim,
        "Sample has mismatched dimension for this key-switching key"
    );
    assert_eq!(
        result.dimension(),
        ksk.out_dim(),
        "Result has mismatched dimension for this key-switching key"
    );

    let t = ksk.params.decomp_len as u32;
    let base_bits = ksk.params.base_bits;
    let mask = (ksk.params.base() - 1) as u32;
    let prec_offset = 1u32 << (32 - (1 + base_bits * t));

    result.set_trivial(sample.b);
    result.current_variance = sample.current_variance;

    for (i, &ai) in sample.a.iter().enumerate() {
        let aibar = (ai as u32).wrapping_add(prec_offset);
        for j in 0..t {
            let digit = ((aibar >> (32 - (j + 1) * base_bits)) & mask) as usize;
            if digit != 0 {
                result.sub_to(ksk.entry(i, j as usize, digit));
            }
        }
    }
}

/// Key switching into a newly allocated sample
pub fn key_switch_new(ksk: &LweKeySwitchKey, sample: &LweSample) -> LweSample {
    let mut result = LweSample::new(ksk.out_dim());
    key_switch(&mut result, ksk, sample);
    result
}
