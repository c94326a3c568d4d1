//! Gate bootstrapping
//!
//! Refreshes the noise of an LWE sample while mapping its phase to one of two
//! fixed outputs according to its sign. Every bootstrapped gate is a linear
//! combination of its inputs followed by one bootstrap.
//!
//! # Key material
//!
//! - [`LweBootstrappingKey`]: TGSW encryptions of the n LWE key bits plus the
//!   key-switching key that brings extracted samples back to dimension n
//!
//! # Operations
//!
//! - [`blind_rotate`]: rotate a TLWE accumulator by X^(Σ bara_i·s_i)
//! - [`blind_rotate_and_extract`]: rotate a test vector and extract coefficient 0
//! - [`bootstrap_without_key_switch`]: ±μ under the extracted key
//! - [`bootstrap_sign`]: ±μ under the original key
//! - [`bootstrap`]: μ1 or μ0 under the original key

mod blind_rotate;
mod key;

pub use blind_rotate::{
    blind_rotate, blind_rotate_and_extract, bootstrap, bootstrap_sign,
    bootstrap_without_key_switch,
};
pub use key::LweBootstrappingKey;
