//! Leading/trailing zero counts, with a De Bruijn-sequence fallback usable
//! in `const` contexts (the sieve bound in [`crate::sieve`] and the witness
//! table hashes in [`crate::tables`] are both evaluated at compile time).
//!
//! Ordinary runtime call sites should prefer `u32::leading_zeros` /
//! `u64::trailing_zeros` directly; they already compile to the host's
//! hardware instruction. The De Bruijn versions here exist so the crate has
//! one canonical, from-scratch algorithm it can prove correct against the
//! standard library in tests, rather than a second runtime-selected path.

const DE_BRUIJN_32: u32 = 0x04653ADF;
const DE_BRUIJN_64: u64 = 0x0218_A392_CD3D_5DBF;

/// Maps `(2^i * DE_BRUIJN_32) >> 27` to `i`, for `i` in `0..32`.
const POW2_LOOKUP_32: [u8; 32] = [
    0, 1, 2, 6, 3, 11, 7, 16, 4, 14, 12, 21, 8, 23, 17, 26, 31, 5, 10, 15, 13, 20, 22, 25, 30, 9,
    19, 24, 29, 18, 28, 27,
];

/// Maps `(2^i * DE_BRUIJN_64) >> 58` to `i`, for `i` in `0..64`.
const POW2_LOOKUP_64: [u8; 64] = [
    0, 1, 2, 7, 3, 13, 8, 19, 4, 25, 14, 28, 9, 34, 20, 40, 5, 17, 26, 38, 15, 46, 29, 48, 10, 31,
    35, 54, 21, 50, 41, 57, 63, 6, 12, 18, 24, 27, 33, 39, 16, 37, 45, 47, 30, 53, 49, 56, 62, 11,
    23, 32, 36, 44, 52, 55, 61, 22, 43, 51, 60, 42, 59, 58,
];

/// De Bruijn fallback for `u32::trailing_zeros`. Usable in `const fn`.
pub const fn ctz_fallback_u32(n: u32) -> u32 {
    if n == 0 {
        return 32;
    }
    let isolated = n & n.wrapping_neg();
    let hash = (isolated.wrapping_mul(DE_BRUIJN_32)) >> 27;
    POW2_LOOKUP_32[hash as usize] as u32
}

/// De Bruijn fallback for `u64::trailing_zeros`. Usable in `const fn`.
pub const fn ctz_fallback_u64(n: u64) -> u32 {
    if n == 0 {
        return 64;
    }
    let isolated = n & n.wrapping_neg();
    let hash = (isolated.wrapping_mul(DE_BRUIJN_64)) >> 58;
    POW2_LOOKUP_64[hash as usize] as u32
}

/// De Bruijn fallback for `u32::leading_zeros`. Usable in `const fn`.
pub const fn clz_fallback_u32(n: u32) -> u32 {
    if n == 0 {
        return 32;
    }
    let mut x = n;
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x -= x >> 1; // isolate the lone remaining top bit
    let hash = (x.wrapping_mul(DE_BRUIJN_32)) >> 27;
    31 - POW2_LOOKUP_32[hash as usize] as u32
}

/// De Bruijn fallback for `u64::leading_zeros`. Usable in `const fn`.
pub const fn clz_fallback_u64(n: u64) -> u32 {
    if n == 0 {
        return 64;
    }
    let mut x = n;
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x |= x >> 32;
    x -= x >> 1;
    let hash = (x.wrapping_mul(DE_BRUIJN_64)) >> 58;
    63 - POW2_LOOKUP_64[hash as usize] as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctz_fallback_matches_std_on_powers_of_two_and_predecessors() {
        for i in 0..32u32 {
            let p = 1u32 << i;
            assert_eq!(ctz_fallback_u32(p), p.trailing_zeros());
            if p > 1 {
                assert_eq!(ctz_fallback_u32(p - 1), (p - 1).trailing_zeros());
            }
        }
        assert_eq!(ctz_fallback_u32(0), 32);

        for i in 0..64u32 {
            let p = 1u64 << i;
            assert_eq!(ctz_fallback_u64(p), p.trailing_zeros());
            if p > 1 {
                assert_eq!(ctz_fallback_u64(p - 1), (p - 1).trailing_zeros());
            }
        }
        assert_eq!(ctz_fallback_u64(0), 64);
    }

    #[test]
    fn clz_fallback_matches_std_on_powers_of_two_and_predecessors() {
        for i in 0..32u32 {
            let p = 1u32 << i;
            assert_eq!(clz_fallback_u32(p), p.leading_zeros());
            if p > 1 {
                assert_eq!(clz_fallback_u32(p - 1), (p - 1).leading_zeros());
            }
        }
        assert_eq!(clz_fallback_u32(0), 32);

        for i in 0..64u32 {
            let p = 1u64 << i;
            assert_eq!(clz_fallback_u64(p), p.leading_zeros());
            if p > 1 {
                assert_eq!(clz_fallback_u64(p - 1), (p - 1).leading_zeros());
            }
        }
        assert_eq!(clz_fallback_u64(0), 64);
    }

    #[test]
    fn fallback_agrees_with_std_on_a_spread_of_values() {
        for n in [
            0u64, 1, 2, 3, 7, 255, 256, 4242, u32::MAX as u64, u64::MAX, 0x9E37_79B9_7F4A_7C15,
        ] {
            assert_eq!(ctz_fallback_u64(n), n.trailing_zeros());
            assert_eq!(clz_fallback_u64(n), n.leading_zeros());
            if n <= u32::MAX as u64 {
                let n32 = n as u32;
                assert_eq!(ctz_fallback_u32(n32), n32.trailing_zeros());
                assert_eq!(clz_fallback_u32(n32), n32.leading_zeros());
            }
        }
    }
}
