//! Polynomials over Z[X]/(X^N + 1) and T[X]/(X^N + 1)
//!
//! Two containers share the ring dimension N:
//!
//! - [`IntPolynomial`]: small integer coefficients (secret keys, gadget digits)
//! - [`TorusPolynomial`]: torus coefficients (masks, bodies, test vectors)
//!
//! Only integer-by-torus products exist. They are delegated to
//! [`multiply`](super::multiply).
//!
//! # Example
//!
//! ```
//! use torus_gates::math::{IntPolynomial, TorusPolynomial};
//!
//! let key = IntPolynomial::from_coeffs(vec![1, 0, 1, 1]);
//! let mut acc = TorusPolynomial::zero(4);
//! let mask = TorusPolynomial::from_coeffs(vec![10, 20, 30, 40]);
//! acc.add_mul_r(&key, &mask);
//! assert_eq!(acc.dimension(), 4);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::multiply::mult_karatsuba;
use super::sampler::TorusSampler;
use super::torus::{t32tod, Torus32};

/// Polynomial with integer coefficients modulo X^N + 1
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntPolynomial {
    coeffs: Vec<i32>,
}

/// Polynomial with torus coefficients modulo X^N + 1
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorusPolynomial {
    coeffs: Vec<Torus32>,
}

impl IntPolynomial {
    /// Create zero polynomial with given dimension
    pub fn zero(dim: usize) -> Self {
        Self {
            coeffs: vec![0; dim],
        }
    }

    /// Create polynomial from coefficient vector
    pub fn from_coeffs(coeffs: Vec<i32>) -> Self {
        Self { coeffs }
    }

    /// Uniform binary polynomial, the shape of every secret key
    pub fn uniform_binary(dim: usize, sampler: &mut TorusSampler) -> Self {
        Self {
            coeffs: (0..dim).map(|_| sampler.uniform_bit()).collect(),
        }
    }

    /// Get polynomial dimension
    pub fn dimension(&self) -> usize {
        self.coeffs.len()
    }

    /// Get coefficient at index
    pub fn coeff(&self, i: usize) -> i32 {
        self.coeffs[i]
    }

    /// Set coefficient at index
    pub fn set_coeff(&mut self, i: usize, value: i32) {
        self.coeffs[i] = value;
    }

    /// Get reference to coefficient vector
    pub fn coeffs(&self) -> &[i32] {
        &self.coeffs
    }

    /// Get mutable reference to coefficient vector
    pub fn coeffs_mut(&mut self) -> &mut [i32] {
        &mut self.coeffs
    }

    /// Set every coefficient to zero
    pub fn clear(&mut self) {
        self.coeffs.fill(0);
    }

    /// Squared Euclidean norm, used for noise variance propagation
    pub fn norm_sq(&self) -> f64 {
        self.coeffs.iter().map(|&c| (c as f64) * (c as f64)).sum()
    }

    /// Check if polynomial is zero
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }
}

impl TorusPolynomial {
    /// Create zero polynomial with given dimension
    pub fn zero(dim: usize) -> Self {
        Self {
            coeffs: vec![0; dim],
        }
    }

    /// Create polynomial from coefficient vector
    pub fn from_coeffs(coeffs: Vec<Torus32>) -> Self {
        Self { coeffs }
    }

    /// Constant polynomial `value`
    pub fn constant(value: Torus32, dim: usize) -> Self {
        let mut coeffs = vec![0; dim];
        coeffs[0] = value;
        Self { coeffs }
    }

    /// Polynomial with every coefficient equal to `value`
    pub fn filled(value: Torus32, dim: usize) -> Self {
        Self {
            coeffs: vec![value; dim],
        }
    }

    /// Generate a uniformly random polynomial
    pub fn uniform(dim: usize, sampler: &mut TorusSampler) -> Self {
        Self {
            coeffs: (0..dim).map(|_| sampler.uniform_torus32()).collect(),
        }
    }

    /// Polynomial of independent Gaussian coefficients around zero
    pub fn gaussian(dim: usize, sigma: f64, sampler: &mut TorusSampler) -> Self {
        Self {
            coeffs: (0..dim).map(|_| sampler.gaussian32(0, sigma)).collect(),
        }
    }

    /// Get polynomial dimension
    pub fn dimension(&self) -> usize {
        self.coeffs.len()
    }

    /// Get coefficient at index
    pub fn coeff(&self, i: usize) -> Torus32 {
        self.coeffs[i]
    }

    /// Set coefficient at index
    pub fn set_coeff(&mut self, i: usize, value: Torus32) {
        self.coeffs[i] = value;
    }

    /// Get reference to coefficient vector
    pub fn coeffs(&self) -> &[Torus32] {
        &self.coeffs
    }

    /// Get mutable reference to coefficient vector
    pub fn coeffs_mut(&mut self) -> &mut [Torus32] {
        &mut self.coeffs
    }

    /// Set every coefficient to zero
    pub fn clear(&mut self) {
        self.coeffs.fill(0);
    }

    /// Overwrite with the coefficients of `other`
    pub fn copy_from(&mut self, other: &Self) {
        assert_eq!(self.dimension(), other.dimension(), "Dimensions must match");
        self.coeffs.copy_from_slice(&other.coeffs);
    }

    /// self += p · other, for an integer scalar p
    pub fn add_mul_z(&mut self, p: i32, other: &Self) {
        assert_eq!(self.dimension(), other.dimension(), "Dimensions must match");
        for (c, &o) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *c = c.wrapping_add(p.wrapping_mul(o));
        }
    }

    /// self -= p · other, for an integer scalar p
    pub fn sub_mul_z(&mut self, p: i32, other: &Self) {
        assert_eq!(self.dimension(), other.dimension(), "Dimensions must match");
        for (c, &o) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *c = c.wrapping_sub(p.wrapping_mul(o));
        }
    }

    /// self += p · other in the ring, for an integer polynomial p
    pub fn add_mul_r(&mut self, p: &IntPolynomial, other: &Self) {
        let prod = mult_karatsuba(p, other);
        *self += &prod;
    }

    /// self -= p · other in the ring, for an integer polynomial p
    pub fn sub_mul_r(&mut self, p: &IntPolynomial, other: &Self) {
        let prod = mult_karatsuba(p, other);
        *self -= &prod;
    }

    /// X^a · self, for a in [0, 2N)
    ///
    /// Rotation in the negacyclic ring: X^N = −1, so coefficients that wrap
    /// around change sign.
    pub fn mul_by_xai(&self, a: usize) -> Self {
        let n = self.dimension();
        assert!(a < 2 * n, "Rotation exponent {} out of range [0, {})", a, 2 * n);

        let src = &self.coeffs;
        let mut out = vec![0; n];
        if a < n {
            for i in 0..a {
                out[i] = src[i + n - a].wrapping_neg();
            }
            for i in a..n {
                out[i] = src[i - a];
            }
        } else {
            let aa = a - n;
            for i in 0..aa {
                out[i] = src[i + n - aa];
            }
            for i in aa..n {
                out[i] = src[i - aa].wrapping_neg();
            }
        }
        Self { coeffs: out }
    }

    /// (X^a − 1) · self, for a in [0, 2N)
    pub fn mul_by_xai_minus_one(&self, a: usize) -> Self {
        let mut out = self.mul_by_xai(a);
        out -= self;
        out
    }

    /// Largest coefficient-wise torus distance to `other`, as a real
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        assert_eq!(self.dimension(), other.dimension(), "Dimensions must match");
        self.coeffs
            .iter()
            .zip(other.coeffs.iter())
            .map(|(&a, &b)| t32tod(a.wrapping_sub(b)).abs())
            .fold(0.0, f64::max)
    }

    /// Check if polynomial is zero
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }
}

impl Add for &TorusPolynomial {
    type Output = TorusPolynomial;

    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(self.dimension(), rhs.dimension(), "Dimensions must match");
        let coeffs = self
            .coeffs
            .iter()
            .zip(rhs.coeffs.iter())
            .map(|(&a, &b)| a.wrapping_add(b))
            .collect();
        TorusPolynomial { coeffs }
    }
}

impl Sub for &TorusPolynomial {
    type Output = TorusPolynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        assert_eq!(self.dimension(), rhs.dimension(), "Dimensions must match");
        let coeffs = self
            .coeffs
            .iter()
            .zip(rhs.coeffs.iter())
            .map(|(&a, &b)| a.wrapping_sub(b))
            .collect();
        TorusPolynomial { coeffs }
    }
}

impl AddAssign<&TorusPolynomial> for TorusPolynomial {
    fn add_assign(&mut self, rhs: &TorusPolynomial) {
        assert_eq!(self.dimension(), rhs.dimension(), "Dimensions must match");
        for (a, &b) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *a = a.wrapping_add(b);
        }
    }
}

impl SubAssign<&TorusPolynomial> for TorusPolynomial {
    fn sub_assign(&mut self, rhs: &TorusPolynomial) {
        assert_eq!(self.dimension(), rhs.dimension(), "Dimensions must match");
        for (a, &b) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *a = a.wrapping_sub(b);
        }
    }
}

impl Neg for &TorusPolynomial {
    type Output = TorusPolynomial;

    fn neg(self) -> Self::Output {
        TorusPolynomial {
            coeffs: self.coeffs.iter().map(|c| c.wrapping_neg()).collect(),
        }
    }
}
