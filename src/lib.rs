//! torus-gates: bootstrapped boolean gates over the torus
//!
//! This crate implements gate bootstrapping on LWE samples over the real
//! torus T = R/Z, encoded on 32 bits.
//!
//! Key components:
//! - LWE, TLWE (ring) and TGSW (ring GSW) samples with their linear operations
//! - External product and CMux, the building blocks of blind rotation
//! - Sample extraction and key switching between LWE keys
//! - Bootstrapping: refresh the noise of a sample while evaluating its sign
//! - Boolean gates (AND, OR, XOR, MUX, ...) with one bootstrap each
//!
//! # Example
//!
//! ```
//! use torus_gates::{boots_xor, decrypt_bit, encrypt_bit, generate_keys};
//! use torus_gates::{GateBootstrappingParams, TorusSampler};
//!
//! let mut sampler = TorusSampler::with_seed(3);
//! let (secret, cloud) = generate_keys(GateBootstrappingParams::testing(), &mut sampler).unwrap();
//!
//! let a = encrypt_bit(true, &secret, &mut sampler);
//! let b = encrypt_bit(false, &secret, &mut sampler);
//! let mut out = cloud.new_sample();
//! boots_xor(&mut out, &a, &b, &cloud);
//! assert!(decrypt_bit(&out, &secret));
//! ```

pub mod error;
pub mod params;
pub mod math;
pub mod lwe;
pub mod tlwe;
pub mod tgsw;
pub mod ks;
pub mod bootstrap;
pub mod gates;

pub use gates::{
    boots_and, boots_andny, boots_andyn, boots_batch, boots_constant, boots_copy, boots_mux,
    boots_nand, boots_nor, boots_not, boots_or, boots_orny, boots_oryn, boots_xnor, boots_xor,
    decrypt_bit, encrypt_bit, generate_keys, BinaryGate, CloudKeySet, SecretKeySet,
};

pub use error::{FheError, Result};
pub use math::{Torus32, TorusSampler};
pub use params::{GateBootstrappingParams, KeySwitchParams, LweParams, RingGswParams, RingLweParams};
