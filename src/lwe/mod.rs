//! LWE (Learning With Errors) samples over the torus
//!
//! Gate inputs and outputs are scalar LWE samples.
//!
//! # Overview
//!
//! A sample (a, b) ∈ T^n × T encrypts a torus message μ under a binary key s:
//!
//! ```text
//! b = <a, s> + μ + e
//! ```
//!
//! where a is uniform and e is Gaussian. The phase b − <a, s> = μ + e is
//! rounded to the message space on decryption. Samples are additively
//! homomorphic and carry an estimate of their noise variance.
//!
//! # Key Types
//!
//! - [`LweKey`]: binary secret key with its parameters
//! - [`LweSample`]: ciphertext (a, b) with a variance estimate
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use torus_gates::lwe::LweKey;
//! use torus_gates::math::{mod_switch_to_torus32, TorusSampler};
//! use torus_gates::params::LweParams;
//!
//! let mut sampler = TorusSampler::with_seed(7);
//! let key = LweKey::generate(Arc::new(LweParams::new(500, 2.44e-5, 0.012)), &mut sampler);
//! let mu = mod_switch_to_torus32(1, 8);
//! let ct = key.encrypt(mu, 2.44e-5, &mut sampler);
//! assert_eq!(key.decrypt_approx(&ct, 8), mu);
//! ```

mod enc;
mod ops;
mod types;

pub use types::{LweKey, LweSample};
