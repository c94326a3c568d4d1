//! Fixed-point arithmetic on the real torus T = R/Z
//!
//! An element x of the torus is stored as the 32-bit integer round(2^32·x)
//! modulo 2^32. Addition, subtraction and multiplication by an integer are the
//! native wrapping operations; reduction modulo 1 is integer wraparound. The
//! product of two torus elements is not defined and is never computed.

/// Torus element encoded on 32 bits
pub type Torus32 = i32;

const TWO_32: f64 = 4294967296.0;

/// Convert a real number to the nearest torus element (mod 1)
#[inline]
pub fn dtot32(d: f64) -> Torus32 {
    ((d - d.trunc()) * TWO_32) as i64 as Torus32
}

/// Convert a torus element to a real number in [-1/2, 1/2)
#[inline]
pub fn t32tod(x: Torus32) -> f64 {
    x as f64 / TWO_32
}

/// Width of one slot when the torus is cut into `msize` equal intervals, on 64 bits
#[inline]
fn interval(msize: u32) -> u64 {
    assert!(msize > 0, "Message space must be non-empty");
    ((1u64 << 63) / msize as u64) * 2
}

/// The torus element mu/msize
///
/// `mod_switch_to_torus32(1, 8)` is the gate encoding of `true`.
#[inline]
pub fn mod_switch_to_torus32(mu: i32, msize: u32) -> Torus32 {
    let phase64 = (mu as i64 as u64).wrapping_mul(interval(msize));
    (phase64 >> 32) as u32 as Torus32
}

/// The integer mu in [0, msize) such that mu/msize is closest to `phase`
#[inline]
pub fn mod_switch_from_torus32(phase: Torus32, msize: u32) -> i32 {
    let interv = interval(msize);
    let half = interv / 2;
    let phase64 = ((phase as u32 as u64) << 32).wrapping_add(half);
    (phase64 / interv) as i32
}

/// Round a phase to the nearest multiple of 1/msize
#[inline]
pub fn approx_phase(phase: Torus32, msize: u32) -> Torus32 {
    let interv = interval(msize);
    let half = interv / 2;
    let mut phase64 = ((phase as u32 as u64) << 32).wrapping_add(half);
    phase64 -= phase64 % interv;
    (phase64 >> 32) as u32 as Torus32
}

/// Absolute distance between two torus elements, as a real in [0, 1/2]
#[inline]
pub fn torus_distance(a: Torus32, b: Torus32) -> f64 {
    t32tod(a.wrapping_sub(b)).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtot32_known_points() {
        assert_eq!(dtot32(0.0), 0);
        assert_eq!(dtot32(0.25), 1 << 30);
        assert_eq!(dtot32(-0.25), -(1 << 30));
        assert_eq!(dtot32(0.125), 1 << 29);
        // 1.25 and 0.25 are the same point of the torus
        assert_eq!(dtot32(1.25), dtot32(0.25));
    }

    #[test]
    fn test_t32tod_inverts_dtot32() {
        for d in [0.0, 0.1, -0.3, 0.4999, -0.5] {
            let back = t32tod(dtot32(d));
            assert!((back - d).abs() < 1e-9, "{} came back as {}", d, back);
        }
    }

    #[test]
    fn test_mod_switch_to_torus32() {
        assert_eq!(mod_switch_to_torus32(1, 8), 1 << 29);
        assert_eq!(mod_switch_to_torus32(-1, 8), -(1 << 29));
        assert_eq!(mod_switch_to_torus32(1, 4), 1 << 30);
        assert_eq!(mod_switch_to_torus32(3, 8), 3 << 29);
    }

    #[test]
    fn test_mod_switch_from_torus32_rounds_to_nearest() {
        let n2 = 2048;
        assert_eq!(mod_switch_from_torus32(0, n2), 0);
        assert_eq!(mod_switch_from_torus32(1 << 30, n2), 512);
        // slightly below a slot boundary still rounds up to it
        let just_below = (1i32 << 30).wrapping_sub(1 << 15);
        assert_eq!(mod_switch_from_torus32(just_below, n2), 512);
        // negative phases land in the upper half of [0, 2N)
        assert_eq!(mod_switch_from_torus32(-(1 << 30), n2), 1536);
    }

    #[test]
    fn test_approx_phase() {
        let eighth = mod_switch_to_torus32(1, 8);
        let noisy = eighth.wrapping_add(12345);
        assert_eq!(approx_phase(noisy, 8), eighth);
        let noisy_neg = eighth.wrapping_neg().wrapping_sub(54321);
        assert_eq!(approx_phase(noisy_neg, 8), eighth.wrapping_neg());
    }

    #[test]
    #[should_panic(expected = "Message space must be non-empty")]
    fn test_empty_message_space_rejected() {
        mod_switch_to_torus32(1, 0);
    }

    #[test]
    fn test_torus_distance_wraps() {
        let a = dtot32(0.49);
        let b = dtot32(-0.49);
        assert!((torus_distance(a, b) - 0.02).abs() < 1e-6);
    }
}
