//! Perfect-square detection.
//!
//! Both functions reject almost all non-squares with cheap bit tests before
//! ever computing a square root: a mask keyed on the low 5/6 bits (no square
//! ends in those residues), then a check that the 2-adic valuation is even,
//! then a mod-8 residue check on the odd part. Only numbers that survive all
//! three pay for a `sqrt` and a multiply to confirm. The confirming multiply
//! uses `wrapping_mul`: a rounded-up `sqrt` can legitimately land one past
//! the type's half-width root (e.g. `65536u32` for inputs near `u32::MAX`),
//! and squaring that exactly would overflow — wrapping keeps the check total
//! over every bit pattern of the input width instead of panicking in debug.

/// Bit `i` is set when `i` is NOT a quadratic residue mod 32.
const NON_RESIDUE_MASK_32: u32 = 0xFDFC_FDEC;

/// Bit `i` is set when `i` is NOT a quadratic residue mod 64.
const NON_RESIDUE_MASK_64: u64 = 0xFDFD_FDED_FDFC_FDEC;

/// Is `n` a perfect square?
pub fn is_perfect_square_u32(n: u32) -> bool {
    if (NON_RESIDUE_MASK_32 >> (n & 31)) & 1 != 0 {
        return false;
    }
    if n == 0 {
        return true;
    }
    let trailing_zeros = n.trailing_zeros();
    if trailing_zeros & 1 == 1 {
        return false;
    }
    let odd_part = n >> trailing_zeros;
    if odd_part & 7 != 1 {
        return false;
    }
    // f64 (not f32) so the verify step below isn't tripped by rounding error
    // for n near u32::MAX.
    let root = (odd_part as f64).sqrt().round() as u32;
    root.wrapping_mul(root) == odd_part
}

/// Is `n` a perfect square?
pub fn is_perfect_square_u64(n: u64) -> bool {
    if (NON_RESIDUE_MASK_64 >> (n & 63)) & 1 != 0 {
        return false;
    }
    if n == 0 {
        return true;
    }
    let trailing_zeros = n.trailing_zeros();
    if trailing_zeros & 1 == 1 {
        return false;
    }
    let odd_part = n >> trailing_zeros;
    if odd_part & 7 != 1 {
        return false;
    }
    let root = (odd_part as f64).sqrt().round() as u64;
    root.wrapping_mul(root) == odd_part
}
