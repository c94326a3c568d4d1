//! Parameter sets for gate bootstrapping
//!
//! Parameter objects are built once and shared read-only, through `Arc`, by
//! every key and sample created under them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{fhe_err, Result};
use crate::math::Torus32;

/// Parameters of scalar LWE samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LweParams {
    /// Dimension n of the mask and key
    pub n: usize,
    /// Smallest noise standard deviation used for fresh encryptions (torus units)
    pub alpha_min: f64,
    /// Largest noise standard deviation that still decrypts correctly
    pub alpha_max: f64,
}

impl LweParams {
    /// Create LWE parameters
    pub fn new(n: usize, alpha_min: f64, alpha_max: f64) -> Self {
        Self {
            n,
            alpha_min,
            alpha_max,
        }
    }

    /// Check if parameters are valid
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(fhe_err!("LWE dimension must be positive"));
        }
        validate_noise(self.alpha_min, self.alpha_max)
    }
}

/// Parameters of ring LWE (TLWE) samples over T[X]/(X^N + 1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingLweParams {
    /// Ring dimension N (power of two)
    pub ring_dim: usize,
    /// Number k of mask polynomials
    pub mask_count: usize,
    /// Smallest noise standard deviation
    pub alpha_min: f64,
    /// Largest noise standard deviation that still decrypts correctly
    pub alpha_max: f64,
}

impl RingLweParams {
    /// Create ring LWE parameters
    pub fn new(ring_dim: usize, mask_count: usize, alpha_min: f64, alpha_max: f64) -> Self {
        Self {
            ring_dim,
            mask_count,
            alpha_min,
            alpha_max,
        }
    }

    /// Parameters of the LWE samples obtained by sample extraction (n = k·N)
    pub fn extracted_lwe_params(&self) -> LweParams {
        LweParams::new(self.mask_count * self.ring_dim, self.alpha_min, self.alpha_max)
    }

    /// Check if parameters are valid
    pub fn validate(&self) -> Result<()> {
        if !self.ring_dim.is_power_of_two() {
            return Err(fhe_err!(
                "ring_dim must be a power of two, got {}",
                self.ring_dim
            ));
        }
        if self.mask_count == 0 {
            return Err(fhe_err!("mask_count must be positive"));
        }
        validate_noise(self.alpha_min, self.alpha_max)
    }
}

/// Parameters of ring GSW (TGSW) samples: a gadget over TLWE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingGswParams {
    /// Decomposition length ℓ
    pub decomp_len: usize,
    /// log2 of the decomposition base Bg
    pub base_bits: u32,
    /// Underlying TLWE parameters
    pub tlwe: Arc<RingLweParams>,
}

impl RingGswParams {
    /// Create ring GSW parameters
    pub fn new(decomp_len: usize, base_bits: u32, tlwe: Arc<RingLweParams>) -> Self {
        Self {
            decomp_len,
            base_bits,
            tlwe,
        }
    }

    /// Decomposition base Bg
    pub fn base(&self) -> i32 {
        1 << self.base_bits
    }

    /// Bg / 2, the bound of the signed digits
    ///
    /// # Panics
    ///
    /// Panics if `base_bits` is not in [1, 31).
    pub fn half_base(&self) -> i32 {
        assert!(
            (1..31).contains(&self.base_bits),
            "Gadget base bits {} out of range [1, 31)",
            self.base_bits
        );
        1 << (self.base_bits - 1)
    }

    /// Bg − 1, mask of one unsigned digit
    pub fn mask_mod(&self) -> u32 {
        (1u32 << self.base_bits) - 1
    }

    /// Constant added before digit extraction
    ///
    /// Shifts every digit by Bg/2 so unsigned extraction followed by
    /// subtraction of Bg/2 yields signed digits, and adds half of the last
    /// digit's weight so truncation rounds to nearest.
    pub fn decomp_offset(&self) -> u32 {
        let half = self.half_base() as u32;
        let mut offset = 0u32;
        for j in 0..self.decomp_len as u32 {
            offset = offset.wrapping_add(half.wrapping_shl(32 - (j + 1) * self.base_bits));
        }
        let used = self.decomp_len as u32 * self.base_bits;
        if used < 32 {
            offset = offset.wrapping_add(1u32 << (32 - used - 1));
        }
        offset
    }

    /// Number of TLWE rows (k+1)·ℓ of one sample
    pub fn row_count(&self) -> usize {
        (self.tlwe.mask_count + 1) * self.decomp_len
    }

    /// Gadget vector entries h_j = 1/Bg^(j+1) as torus elements
    pub fn gadget_values(&self) -> Vec<Torus32> {
        (0..self.decomp_len)
            .map(|j| (1u32 << (32 - (j as u32 + 1) * self.base_bits)) as Torus32)
            .collect()
    }

    /// Check if parameters are valid
    pub fn validate(&self) -> Result<()> {
        self.tlwe.validate()?;
        if self.decomp_len == 0 || self.base_bits == 0 {
            return Err(fhe_err!("gadget length and base must be positive"));
        }
        // 2^(31 - bits) must stay representable for the first gadget value
        if self.base_bits >= 31 || self.decomp_len as u32 * self.base_bits > 32 {
            return Err(fhe_err!(
                "gadget decomposition uses {} bits, more than the 32-bit torus holds",
                self.decomp_len as u32 * self.base_bits
            ));
        }
        Ok(())
    }
}

/// Parameters of the key-switching decomposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySwitchParams {
    /// Decomposition length t
    pub decomp_len: usize,
    /// log2 of the decomposition base
    pub base_bits: u32,
}

impl KeySwitchParams {
    /// Create key-switching parameters
    pub fn new(decomp_len: usize, base_bits: u32) -> Self {
        Self {
            decomp_len,
            base_bits,
        }
    }

    /// Decomposition base 2^base_bits
    pub fn base(&self) -> usize {
        1 << self.base_bits
    }

    /// Check if parameters are valid
    pub fn validate(&self) -> Result<()> {
        if self.decomp_len == 0 || self.base_bits == 0 {
            return Err(fhe_err!("key-switch length and base must be positive"));
        }
        if self.decomp_len as u32 * self.base_bits >= 32 {
            return Err(fhe_err!(
                "key-switch decomposition uses {} bits, must stay below 32",
                self.decomp_len as u32 * self.base_bits
            ));
        }
        Ok(())
    }
}

/// Full parameter set of the boolean gate layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateBootstrappingParams {
    /// Parameters of gate inputs and outputs
    pub in_out: Arc<LweParams>,
    /// Parameters of the bootstrapping key
    pub tgsw: Arc<RingGswParams>,
    /// Decomposition used to switch back from the extracted key
    pub key_switch: KeySwitchParams,
}

impl GateBootstrappingParams {
    /// Assemble a parameter set from its parts
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        n: usize,
        ring_dim: usize,
        mask_count: usize,
        bk_decomp_len: usize,
        bk_base_bits: u32,
        ks_decomp_len: usize,
        ks_base_bits: u32,
        ks_stdev: f64,
        bk_stdev: f64,
        max_stdev: f64,
    ) -> Self {
        let in_out = Arc::new(LweParams::new(n, ks_stdev, max_stdev));
        let tlwe = Arc::new(RingLweParams::new(ring_dim, mask_count, bk_stdev, max_stdev));
        let tgsw = Arc::new(RingGswParams::new(bk_decomp_len, bk_base_bits, tlwe));

        Self {
            in_out,
            tgsw,
            key_switch: KeySwitchParams::new(ks_decomp_len, ks_base_bits),
        }
    }

    /// Legacy 80-bit parameters of the reference gate-bootstrapping library
    ///
    /// n = 500, N = 1024, k = 1, ℓ = 2, Bg = 2^10, t = 8, ks base 2^2.
    pub fn default_80bit() -> Self {
        Self::new(500, 1024, 1, 2, 10, 8, 2, 2.44e-5, 7.18e-9, 0.012467)
    }

    /// Small, fast parameters for tests and benchmarks
    ///
    /// Decrypts correctly with a wide margin but carries no security claim.
    pub fn testing() -> Self {
        Self::new(64, 256, 1, 2, 10, 8, 2, 2.44e-5, 7.18e-9, 0.012467)
    }

    /// Underlying TLWE parameters of the accumulator
    pub fn tlwe(&self) -> &Arc<RingLweParams> {
        &self.tgsw.tlwe
    }

    /// Check if parameters are valid
    pub fn validate(&self) -> Result<()> {
        self.in_out.validate()?;
        self.tgsw.validate()?;
        self.key_switch.validate()
    }
}

impl Default for GateBootstrappingParams {
    fn default() -> Self {
        Self::default_80bit()
    }
}

fn validate_noise(alpha_min: f64, alpha_max: f64) -> Result<()> {
    if !(alpha_min > 0.0 && alpha_min <= alpha_max) {
        return Err(fhe_err!(
            "noise bounds must satisfy 0 < alpha_min <= alpha_max, got {} and {}",
            alpha_min,
            alpha_max
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_valid() {
        let params = GateBootstrappingParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.in_out.n, 500);
        assert_eq!(params.tlwe().ring_dim, 1024);
    }

    #[test]
    fn test_testing_params_valid() {
        assert!(GateBootstrappingParams::testing().validate().is_ok());
    }

    #[test]
    fn test_gadget_values() {
        let params = GateBootstrappingParams::default_80bit();
        let h = params.tgsw.gadget_values();
        assert_eq!(h, vec![1 << 22, 1 << 12]);
        assert_eq!(params.tgsw.base(), 1024);
        assert_eq!(params.tgsw.row_count(), 4);
        assert_eq!(params.tgsw.half_base(), 512);
        assert_eq!(params.tgsw.mask_mod(), 1023);
        // 512·2^22 + 512·2^12 + 2^11
        assert_eq!(params.tgsw.decomp_offset(), (1 << 31) + (1 << 21) + (1 << 11));
    }

    #[test]
    fn test_extracted_params() {
        let tlwe = RingLweParams::new(1024, 2, 1e-9, 1e-2);
        assert_eq!(tlwe.extracted_lwe_params().n, 2048);
    }

    #[test]
    fn test_rejects_non_power_of_two_ring() {
        let tlwe = RingLweParams::new(1000, 1, 1e-9, 1e-2);
        assert!(tlwe.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_decomposition() {
        let tlwe = Arc::new(RingLweParams::new(1024, 1, 1e-9, 1e-2));
        let tgsw = RingGswParams::new(4, 10, tlwe);
        assert!(tgsw.validate().is_err());

        let ks = KeySwitchParams::new(16, 2);
        assert!(ks.validate().is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_half_base_rejects_zero_bits() {
        let tlwe = Arc::new(RingLweParams::new(1024, 1, 1e-9, 1e-2));
        RingGswParams::new(2, 0, tlwe).half_base();
    }

    #[test]
    fn test_rejects_inverted_noise_bounds() {
        let lwe = LweParams::new(500, 0.1, 0.01);
        assert!(lwe.validate().is_err());
    }
}
