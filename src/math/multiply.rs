//! Ring multiplication modulo X^N + 1
//!
//! Integer-by-torus polynomial products. A faster FFT or NTT backend can
//! replace these; everything above this module goes through
//! [`TorusPolynomial::add_mul_r`](super::poly::TorusPolynomial::add_mul_r).

use super::poly::{IntPolynomial, TorusPolynomial};
use super::torus::Torus32;

/// Below this size the recursion switches to the schoolbook product
const KARATSUBA_THRESHOLD: usize = 4;

/// Karatsuba product of two polynomials of `size` coefficients, not reduced
///
/// Writes the `2·size − 1` coefficients of `a·b` into `r[..2·size − 1]`.
/// `size` must be a power of two (or at most the threshold).
pub fn karatsuba_aux(r: &mut [Torus32], a: &[i32], b: &[Torus32]) {
    let size = a.len();
    debug_assert_eq!(b.len(), size, "operands must have the same length");
    debug_assert!(r.len() >= 2 * size - 1, "result buffer too short");

    if size <= KARATSUBA_THRESHOLD {
        r[..2 * size - 1].fill(0);
        for i in 0..size {
            for j in 0..size {
                r[i + j] = r[i + j].wrapping_add(a[i].wrapping_mul(b[j]));
            }
        }
        return;
    }

    let h = size / 2;
    let sm1 = size - 1;

    let a_sum: Vec<i32> = (0..h).map(|i| a[i].wrapping_add(a[h + i])).collect();
    let b_sum: Vec<Torus32> = (0..h).map(|i| b[i].wrapping_add(b[h + i])).collect();
    let mut r_mid = vec![0; sm1];

    // low·low into r[0..size-1], high·high into r[size..2·size-1]
    karatsuba_aux(&mut r[..sm1], &a[..h], &b[..h]);
    karatsuba_aux(&mut r[size..], &a[h..], &b[h..]);
    karatsuba_aux(&mut r_mid, &a_sum, &b_sum);

    r[sm1] = 0;
    for i in 0..sm1 {
        r_mid[i] = r_mid[i].wrapping_sub(r[i].wrapping_add(r[size + i]));
    }
    for i in 0..sm1 {
        r[h + i] = r[h + i].wrapping_add(r_mid[i]);
    }
}

/// Negacyclic product `poly1 · poly2 mod X^N + 1` with Karatsuba
pub fn mult_karatsuba(poly1: &IntPolynomial, poly2: &TorusPolynomial) -> TorusPolynomial {
    let n = poly1.dimension();
    assert_eq!(n, poly2.dimension(), "Dimensions must match");

    let mut r = vec![0; 2 * n - 1];
    karatsuba_aux(&mut r, poly1.coeffs(), poly2.coeffs());

    let mut coeffs = vec![0; n];
    for i in 0..n - 1 {
        coeffs[i] = r[i].wrapping_sub(r[n + i]);
    }
    coeffs[n - 1] = r[n - 1];

    TorusPolynomial::from_coeffs(coeffs)
}

/// Schoolbook negacyclic product, the reference for the fast paths
pub fn mult_naive(poly1: &IntPolynomial, poly2: &TorusPolynomial) -> TorusPolynomial {
    let n = poly1.dimension();
    assert_eq!(n, poly2.dimension(), "Dimensions must match");

    let a = poly1.coeffs();
    let b = poly2.coeffs();
    let mut coeffs = vec![0i32; n];

    for i in 0..n {
        let ai = a[i];
        if ai == 0 {
            continue;
        }
        for j in 0..n {
            let prod = ai.wrapping_mul(b[j]);
            if i + j < n {
                coeffs[i + j] = coeffs[i + j].wrapping_add(prod);
            } else {
                coeffs[i + j - n] = coeffs[i + j - n].wrapping_sub(prod);
            }
        }
    }

    TorusPolynomial::from_coeffs(coeffs)
}
