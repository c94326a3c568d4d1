//! Mathematical primitives for gate bootstrapping.
//!
//! This module provides the arithmetic every encryption layer is built on:
//!
//! - **Torus arithmetic**: T = R/Z as wrapping 32-bit integers
//! - **Polynomials** over Z[X]/(X^N + 1) and T[X]/(X^N + 1)
//! - **Ring multiplication** (Karatsuba with a schoolbook reference)
//! - **Sampling** of uniform torus elements, key bits and Gaussian noise
//!
//! # Example
//!
//! ```
//! use torus_gates::math::{dtot32, t32tod, TorusSampler};
//!
//! let mut sampler = TorusSampler::with_seed(1);
//! let noisy = sampler.gaussian32(dtot32(0.125), 1e-4);
//! assert!((t32tod(noisy) - 0.125).abs() < 1e-2);
//! ```

pub mod multiply;
pub mod poly;
pub mod sampler;
pub mod torus;

pub use multiply::{karatsuba_aux, mult_karatsuba, mult_naive};
pub use poly::{IntPolynomial, TorusPolynomial};
pub use sampler::TorusSampler;
pub use torus::{
    approx_phase, dtot32, mod_switch_from_torus32, mod_switch_to_torus32, t32tod, torus_distance,
    Torus32,
};
