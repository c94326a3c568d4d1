//! Parallel evaluation of independent gates

use rayon::prelude::*;

use crate::lwe::LweSample;

use super::boolean::BinaryGate;
use super::keys::CloudKeySet;

/// Evaluate `gate` on every pair (lhs[i], rhs[i]) in parallel
///
/// Each evaluation only reads the shared cloud key, so the results are the
/// same as evaluating the pairs one after the other.
///
/// # Panics
///
/// Panics if `lhs` and `rhs` have different lengths.
pub fn boots_batch(
    gate: BinaryGate,
    lhs: &[LweSample],
    rhs: &[LweSample],
    ck: &CloudKeySet,
) -> Vec<LweSample> {
    assert_eq!(
        lhs.len(),
        rhs.len(),
        "Batch inputs have mismatched lengths"
    );

    lhs.par_iter()
        .zip(rhs.par_iter())
        .map(|(ca, cb)| {
            let mut result = ck.new_sample();
            gate.apply(&mut result, ca, cb, ck);
            result
        })
        .collect()
}
