//! TGSW (ring GSW over the torus) module
//!
//! This module implements TGSW encryption of small integers, which enables
//! homomorphic multiplication of TLWE samples via the external product.
//!
//! # Overview
//!
//! A TGSW sample encrypting μ is a (k+1)·ℓ × (k+1) matrix of torus
//! polynomials: every row is a TLWE encryption of zero, and the gadget
//! matrix H scaled by μ is added on top. The gadget vector is
//! h = (1/Bg, 1/Bg², ..., 1/Bg^ℓ).
//!
//! # External Product
//!
//! TGSW(μ) ⊡ TLWE(m) → TLWE(μ·m): decompose the TLWE sample into small
//! signed digits and take their dot product with the rows. With μ ∈ {0, 1}
//! this gives the controlled multiplexer used by blind rotation.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use torus_gates::math::{mod_switch_to_torus32, TorusPolynomial, TorusSampler};
//! use torus_gates::params::{RingGswParams, RingLweParams};
//! use torus_gates::tgsw::{external_product, RingGswKey};
//!
//! let tlwe = Arc::new(RingLweParams::new(256, 1, 1e-9, 1e-2));
//! let params = Arc::new(RingGswParams::new(2, 10, tlwe));
//! let mut sampler = TorusSampler::with_seed(5);
//! let key = RingGswKey::generate(params, &mut sampler);
//!
//! let msg = TorusPolynomial::constant(mod_switch_to_torus32(1, 8), 256);
//! let ct = key.tlwe_key.encrypt(&msg, 1e-9, &mut sampler);
//! let one = key.encrypt_int(1, 1e-9, &mut sampler);
//! let product = external_product(&one, &ct);
//! assert_eq!(key.tlwe_key.decrypt_approx(&product, 8), msg);
//! ```

mod decompose;
mod enc;
mod external_product;
mod ops;
mod types;

pub use decompose::{decompose, decompose_poly, decompose_poly_into, reconstruct};
pub use enc::{gsw_key_extract, gsw_sample_extract};
pub use external_product::{cmux, external_product, external_product_assign};
pub use types::{RingGswKey, RingGswSample};
