//! Bootstrapped boolean gates
//!
//! Bits are encrypted as ±1/8. A binary gate forms an affine combination of
//! its inputs whose phase is positive exactly when the gate outputs `true`,
//! then bootstraps it back to ±1/8 with fresh noise.

use serde::{Deserialize, Serialize};

use crate::bootstrap::{bootstrap_sign, bootstrap_without_key_switch};
use crate::ks::key_switch;
use crate::lwe::LweSample;
use crate::math::{mod_switch_to_torus32, Torus32};

use super::keys::{bit_encoding, CloudKeySet};

/// Two-input gates evaluated with a single bootstrap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryGate {
    And,
    Or,
    Nand,
    Nor,
    Xor,
    Xnor,
    /// not(a) and b
    AndNY,
    /// a and not(b)
    AndYN,
    /// not(a) or b
    OrNY,
    /// a or not(b)
    OrYN,
}

impl BinaryGate {
    /// Every binary gate
    pub const ALL: [BinaryGate; 10] = [
        BinaryGate::And,
        BinaryGate::Or,
        BinaryGate::Nand,
        BinaryGate::Nor,
        BinaryGate::Xor,
        BinaryGate::Xnor,
        BinaryGate::AndNY,
        BinaryGate::AndYN,
        BinaryGate::OrNY,
        BinaryGate::OrYN,
    ];

    /// Pre-bootstrap affine form (offset, coefficient of a, coefficient of b)
    ///
    /// The offset is a multiple of 1/8 given as (numerator, denominator).
    fn affine_form(self) -> ((i32, u32), i32, i32) {
        match self {
            BinaryGate::And => ((-1, 8), 1, 1),
            BinaryGate::Or => ((1, 8), 1, 1),
            BinaryGate::Nand => ((1, 8), -1, -1),
            BinaryGate::Nor => ((-1, 8), -1, -1),
            BinaryGate::Xor => ((1, 4), 2, 2),
            BinaryGate::Xnor => ((-1, 4), -2, -2),
            BinaryGate::AndNY => ((-1, 8), -1, 1),
            BinaryGate::AndYN => ((-1, 8), 1, -1),
            BinaryGate::OrNY => ((1, 8), -1, 1),
            BinaryGate::OrYN => ((1, 8), 1, -1),
        }
    }

    /// Noiseless offset of the affine form
    pub fn offset(self) -> Torus32 {
        let ((num, den), _, _) = self.affine_form();
        mod_switch_to_torus32(num, den)
    }

    /// Integer coefficients applied to the two inputs
    pub fn coefficients(self) -> (i32, i32) {
        let (_, ca, cb) = self.affine_form();
        (ca, cb)
    }

    /// Truth table of the gate
    pub fn eval_plain(self, a: bool, b: bool) -> bool {
        match self {
            BinaryGate::And => a && b,
            BinaryGate::Or => a || b,
            BinaryGate::Nand => !(a && b),
            BinaryGate::Nor => !(a || b),
            BinaryGate::Xor => a ^ b,
            BinaryGate::Xnor => !(a ^ b),
            BinaryGate::AndNY => !a && b,
            BinaryGate::AndYN => a && !b,
            BinaryGate::OrNY => !a || b,
            BinaryGate::OrYN => a || !b,
        }
    }

    /// Evaluate the gate homomorphically into `result`
    pub fn apply(self, result: &mut LweSample, ca: &LweSample, cb: &LweSample, ck: &CloudKeySet) {
        let n = ck.n();
        assert_eq!(ca.dimension(), n, "First input has mismatched dimension");
        assert_eq!(cb.dimension(), n, "Second input has mismatched dimension");

        let (coef_a, coef_b) = self.coefficients();
        let mut temp = LweSample::noiseless_trivial(self.offset(), n);
        temp.add_mul_to(coef_a, ca);
        temp.add_mul_to(coef_b, cb);

        bootstrap_sign(result, &ck.bk, mod_switch_to_torus32(1, 8), &temp);
    }
}

/// result = a AND b
pub fn boots_and(result: &mut LweSample, ca: &LweSample, cb: &LweSample, ck: &CloudKeySet) {
    BinaryGate::And.apply(result, ca, cb, ck);
}

/// result = a OR b
pub fn boots_or(result: &mut LweSample, ca: &LweSample, cb: &LweSample, ck: &CloudKeySet) {
    BinaryGate::Or.apply(result, ca, cb, ck);
}

/// result = NOT(a AND b)
pub fn boots_nand(result: &mut LweSample, ca: &LweSample, cb: &LweSample, ck: &CloudKeySet) {
    BinaryGate::Nand.apply(result, ca, cb, ck);
}

/// result = NOT(a OR b)
pub fn boots_nor(result: &mut LweSample, ca: &LweSample, cb: &LweSample, ck: &CloudKeySet) {
    BinaryGate::Nor.apply(result, ca, cb, ck);
}

/// result = a XOR b
pub fn boots_xor(result: &mut LweSample, ca: &LweSample, cb: &LweSample, ck: &CloudKeySet) {
    BinaryGate::Xor.apply(result, ca, cb, ck);
}

/// result = NOT(a XOR b)
pub fn boots_xnor(result: &mut LweSample, ca: &LweSample, cb: &LweSample, ck: &CloudKeySet) {
    BinaryGate::Xnor.apply(result, ca, cb, ck);
}

/// result = (NOT a) AND b
pub fn boots_andny(result: &mut LweSample, ca: &LweSample, cb: &LweSample, ck: &CloudKeySet) {
    BinaryGate::AndNY.apply(result, ca, cb, ck);
}

/// result = a AND (NOT b)
pub fn boots_andyn(result: &mut LweSample, ca: &LweSample, cb: &LweSample, ck: &CloudKeySet) {
    BinaryGate::AndYN.apply(result, ca, cb, ck);
}

/// result = (NOT a) OR b
pub fn boots_orny(result: &mut LweSample, ca: &LweSample, cb: &LweSample, ck: &CloudKeySet) {
    BinaryGate::OrNY.apply(result, ca, cb, ck);
}

/// result = a OR (NOT b)
pub fn boots_oryn(result: &mut LweSample, ca: &LweSample, cb: &LweSample, ck: &CloudKeySet) {
    BinaryGate::OrYN.apply(result, ca, cb, ck);
}

/// result = NOT a, without bootstrapping
pub fn boots_not(result: &mut LweSample, ca: &LweSample, ck: &CloudKeySet) {
    assert_eq!(ca.dimension(), ck.n(), "Input has mismatched dimension");
    result.copy_from(ca);
    result.negate();
}

/// result = a, without bootstrapping
pub fn boots_copy(result: &mut LweSample, ca: &LweSample, ck: &CloudKeySet) {
    assert_eq!(ca.dimension(), ck.n(), "Input has mismatched dimension");
    result.copy_from(ca);
}

/// result = noiseless encryption of a public bit
pub fn boots_constant(result: &mut LweSample, value: bool, ck: &CloudKeySet) {
    assert_eq!(result.dimension(), ck.n(), "Result has mismatched dimension");
    result.set_trivial(bit_encoding(value));
}

/// result = a ? b : c
///
/// Two bootstraps without key switching, on a AND b and (NOT a) AND c,
/// summed with an offset of 1/8 and key switched once.
pub fn boots_mux(
    result: &mut LweSample,
    a: &LweSample,
    b: &LweSample,
    c: &LweSample,
    ck: &CloudKeySet,
) {
    let n = ck.n();
    assert_eq!(a.dimension(), n, "Selector has mismatched dimension");
    assert_eq!(b.dimension(), n, "First input has mismatched dimension");
    assert_eq!(c.dimension(), n, "Second input has mismatched dimension");

    let mu = mod_switch_to_torus32(1, 8);
    let extracted_dim = ck.bk.extracted_dim();

    // a AND b
    let mut temp = LweSample::noiseless_trivial(mu.wrapping_neg(), n);
    temp.add_to(a);
    temp.add_to(b);
    let mut u1 = LweSample::new(extracted_dim);
    bootstrap_without_key_switch(&mut u1, &ck.bk, mu, &temp);

    // (NOT a) AND c
    temp.set_trivial(mu.wrapping_neg());
    temp.sub_to(a);
    temp.add_to(c);
    let mut u2 = LweSample::new(extracted_dim);
    bootstrap_without_key_switch(&mut u2, &ck.bk, mu, &temp);

    // at most one of u1, u2 is +1/8: the sum plus 1/8 is ±1/8
    u1.add_to(&u2);
    u1.add_constant(mu);
    key_switch(result, &ck.bk.ks, &u1);
}
