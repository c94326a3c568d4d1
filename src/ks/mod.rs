//! Key-switching module
//!
//! This module implements key switching for LWE samples, which transforms a
//! sample valid under secret key s into one valid under secret key s'.
//!
//! # Overview
//!
//! Bootstrapping extracts its output from a TLWE accumulator, producing an
//! LWE sample of dimension k·N under the extracted ring key. Key switching
//! brings it back to dimension n under the gate key.
//!
//! # Key-Switching Key
//!
//! For each input key coefficient s_i, digit level j and digit value v:
//! ```text
//! KS[i][j][v] = LWE_{s'}(s_i · v / base^(j+1))
//! ```
//!
//! # Algorithm
//!
//! To switch (a, b) from s to s':
//! 1. Decompose each a_i into t digits a_ij in base 2^basebit
//! 2. Compute (0, b) − Σ_{i,j} KS[i][j][a_ij]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use torus_gates::ks::{key_switch_new, LweKeySwitchKey};
//! use torus_gates::lwe::LweKey;
//! use torus_gates::math::{mod_switch_to_torus32, TorusSampler};
//! use torus_gates::params::{KeySwitchParams, LweParams};
//!
//! let mut sampler = TorusSampler::with_seed(1);
//! let from = LweKey::generate(Arc::new(LweParams::new(128, 1e-9, 1e-2)), &mut sampler);
//! let to = LweKey::generate(Arc::new(LweParams::new(64, 2.44e-5, 1e-2)), &mut sampler);
//! let ksk = LweKeySwitchKey::generate(&from, &to, KeySwitchParams::new(8, 2), 2.44e-5, &mut sampler);
//!
//! let mu = mod_switch_to_torus32(1, 8);
//! let switched = key_switch_new(&ksk, &from.encrypt(mu, 1e-9, &mut sampler));
//! assert_eq!(to.decrypt_approx(&switched, 8), mu);
//! ```

mod setup;
mod switch;

pub use setup::LweKeySwitchKey;
pub use switch::{key_switch, key_switch_new};
