// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bitmask types for subset enumeration.
//!
//! - Mask: the unsigned integer encoding a subset (bit i = index i)
//! - Selection: typed view of a mask as a set of indices
//! - BitPermutations: all masks of one population, in ascending order

pub mod constants;
pub mod permutation;
pub mod selection;

// Re-export for convenience
pub use constants::*;
pub use permutation::BitPermutations;
pub use selection::Selection;
