// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Find the combination of integers summing to a target that uses the most values.
//!
//! For example, given `1 2 3` and a target of `3`, the answer is `1 + 2`
//! rather than `3` alone.
//!
//! # Architecture
//!
//! Two layers, leaf first:
//!
//! ## Bit-Permutation Sequencer
//!
//! [`bits::BitPermutations`] yields every mask with a fixed number of set
//! bits, in ascending numeric order, computing each successor with a few
//! bit operations.
//!
//! ## Subset Search Engine
//!
//! [`search::SubsetSearch`] walks populations from the whole list down to
//! the empty subset. Within a population it keeps a running total, updated
//! from the bits that changed since the previous mask, and stops at the first
//! exact match. Larger subsets are therefore preferred by search order alone.
//!
//! # Limits
//!
//! Masks are [`bits::Mask`] (`u64` by default, `u32` with the `mask_u32`
//! feature). One bit is kept spare, so at most [`bits::MAX_SLOTS`] values
//! can be searched. The work is 2^n masks, so lists much beyond 30 values
//! are impractical in any case.

pub mod bits;
pub mod errors;
pub mod search;

// Re-export commonly used types
pub use bits::{BitPermutations, Mask, Selection, MAX_SLOTS};
pub use errors::{CombiError, InvalidArgument};
pub use search::{Outcome, SubsetSearch};
