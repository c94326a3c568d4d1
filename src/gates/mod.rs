//! Bootstrapped boolean gates over encrypted bits
//!
//! A bit is an LWE sample of phase +1/8 (`true`) or −1/8 (`false`). Every
//! binary gate bootstraps, so its output carries fresh noise regardless of
//! the inputs, and gates compose into circuits of any depth.
//!
//! # Example
//!
//! ```
//! use torus_gates::gates::{boots_nand, decrypt_bit, encrypt_bit, generate_keys};
//! use torus_gates::math::TorusSampler;
//! use torus_gates::params::GateBootstrappingParams;
//!
//! let mut sampler = TorusSampler::with_seed(42);
//! let (secret, cloud) = generate_keys(GateBootstrappingParams::testing(), &mut sampler).unwrap();
//!
//! let a = encrypt_bit(true, &secret, &mut sampler);
//! let b = encrypt_bit(true, &secret, &mut sampler);
//! let mut out = cloud.new_sample();
//! boots_nand(&mut out, &a, &b, &cloud);
//! assert!(!decrypt_bit(&out, &secret));
//! ```

mod batch;
mod boolean;
mod keys;

pub use batch::boots_batch;
pub use boolean::{
    boots_and, boots_andny, boots_andyn, boots_constant, boots_copy, boots_mux, boots_nand,
    boots_nor, boots_not, boots_or, boots_orny, boots_oryn, boots_xnor, boots_xor, BinaryGate,
};
pub use keys::{decrypt_bit, encrypt_bit, generate_keys, CloudKeySet, SecretKeySet};
