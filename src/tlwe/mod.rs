//! TLWE (ring LWE over the torus) module
//!
//! This module implements ring LWE over T[X]/(X^N + 1) with k mask
//! polynomials, the accumulator type of blind rotation.
//!
//! # Overview
//!
//! - Secret key: k binary polynomials s_0, ..., s_{k-1}
//! - Sample (a_0, ..., a_{k-1}, b) encrypts a torus polynomial μ as
//!   b = Σ a_i·s_i + μ + e
//! - The phase b − Σ a_i·s_i is rounded coefficient-wise on decryption
//!
//! # Sample extraction
//!
//! Any single coefficient of a TLWE phase is the phase of an LWE sample of
//! dimension k·N, obtained by rearranging mask coefficients. See
//! [`RingLweSample::sample_extract_index`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use torus_gates::lwe::LweKey;
//! use torus_gates::math::{mod_switch_to_torus32, TorusSampler};
//! use torus_gates::params::RingLweParams;
//! use torus_gates::tlwe::RingLweKey;
//!
//! let params = Arc::new(RingLweParams::new(256, 1, 1e-9, 1e-2));
//! let mut sampler = TorusSampler::with_seed(11);
//! let key = RingLweKey::generate(params, &mut sampler);
//!
//! let mu = mod_switch_to_torus32(1, 8);
//! let ct = key.encrypt_constant(mu, 1e-9, &mut sampler);
//! let lwe = ct.sample_extract();
//! assert_eq!(LweKey::extract_from(&key).decrypt_approx(&lwe, 8), mu);
//! ```

mod enc;
mod extract;
mod ops;
mod types;

pub use types::{RingLweKey, RingLweSample};
