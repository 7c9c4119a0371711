// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for subset masks.
//!
//! This module defines the unsigned [`Mask`] type and all derived constants.
//! The mask width can be configured at compile time via cargo features.
//!
//! # Example
//!
//! ```bash
//! # Default: u64 masks, up to 63 values
//! cargo build
//!
//! # u32 masks, up to 31 values
//! cargo build --features mask_u32
//! ```

/// Unsigned integer whose low bits encode subset membership.
///
/// Bit i is set if and only if the value at index i is selected.
#[cfg(not(feature = "mask_u32"))]
pub type Mask = u64;

#[cfg(feature = "mask_u32")]
pub type Mask = u32;

/// Width of [`Mask`] in bits.
pub const MASK_BITS: usize = Mask::BITS as usize;

/// Maximum number of slots (candidate values) a search supports.
///
/// One bit above the highest used slot must stay free, so the successor
/// computation in [`BitPermutations`](crate::bits::BitPermutations) never
/// carries out of the type.
pub const MAX_SLOTS: usize = MASK_BITS - 1;

/// Mask with the `count` low bits set.
///
/// `count` may be anything in `0..=MASK_BITS`.
pub const fn low_ones(count: usize) -> Mask {
    if count >= MASK_BITS {
        Mask::MAX
    } else {
        (1 << count) - 1
    }
}

/// Compute the binomial coefficient (n choose k) at compile time.
///
/// Returns the number of masks with population `k` over `n` slots.
/// Uses the multiplicative form so intermediate values stay small enough
/// for every `n <= MAX_SLOTS`.
pub const fn choose(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    let mut result: u64 = 1;
    let mut i = 0;
    while i < k {
        // result * (n - i) is always divisible by (i + 1)
        result = result / (i as u64 + 1) * (n - i) as u64
            + result % (i as u64 + 1) * (n - i) as u64 / (i as u64 + 1);
        i += 1;
    }
    result
}

/// Compile-time assertion that a mask has room for at least one slot.
const _: () = assert!(MAX_SLOTS >= 1, "mask type too narrow");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose() {
        assert_eq!(choose(4, 0), 1);
        assert_eq!(choose(4, 1), 4);
        assert_eq!(choose(4, 2), 6);
        assert_eq!(choose(5, 2), 10);
        assert_eq!(choose(5, 3), 10);
        assert_eq!(choose(6, 6), 1);
        assert_eq!(choose(3, 4), 0);
    }

    #[test]
    fn test_choose_large() {
        assert_eq!(choose(63, 31), 916_312_070_471_295_267);
        assert_eq!(choose(63, 1), 63);
        assert_eq!(choose(40, 20), 137_846_528_820);
    }

    #[test]
    fn test_choose_row_sums_to_power_of_two() {
        for n in 1..=20 {
            let total: u64 = (0..=n).map(|k| choose(n, k)).sum();
            assert_eq!(total, 1u64 << n, "row {}", n);
        }
    }

    #[test]
    fn test_low_ones() {
        assert_eq!(low_ones(0), 0);
        assert_eq!(low_ones(1), 1);
        assert_eq!(low_ones(4), 0b1111);
        assert_eq!(low_ones(MAX_SLOTS), Mask::MAX >> 1);
        assert_eq!(low_ones(MASK_BITS), Mask::MAX);
    }

    #[test]
    fn test_max_slots() {
        assert_eq!(MAX_SLOTS + 1, MASK_BITS);
        #[cfg(mask_wide)]
        assert_eq!(MAX_SLOTS, 63);
        #[cfg(mask_narrow)]
        assert_eq!(MAX_SLOTS, 31);
    }
}
