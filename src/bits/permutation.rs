// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of all masks with a fixed population.
//!
//! For `slots` places and `population` set bits, [`BitPermutations`] yields
//! every mask with exactly `population` bits set among the low `slots` bits,
//! each once, in ascending numeric order.
//!
//! With 4 slots:
//!
//! ```text
//! population 0:  0000
//! population 1:  0001 0010 0100 1000
//! population 2:  0011 0101 0110 1001 1010 1100
//! population 3:  0111 1011 1101 1110
//! population 4:  1111
//! ```
//!
//! Successors are computed with the "next bit permutation" trick
//! (<http://graphics.stanford.edu/~seander/bithacks.html#NextBitPermutation>):
//! the lowest block of ones gives up its top bit to the next position up,
//! and the rest of the block is packed back into the lowest bits.
//!
//! # Example
//!
//! ```
//! use combi_search::bits::BitPermutations;
//!
//! let masks: Vec<_> = BitPermutations::new(4, 2).unwrap().collect();
//! assert_eq!(masks, vec![3, 5, 6, 9, 10, 12]);
//! ```

use crate::bits::constants::{low_ones, Mask, MAX_SLOTS};
use crate::errors::{CombiError, InvalidArgument};
use std::iter::FusedIterator;

/// Single-pass sequence of same-population masks.
///
/// Not restartable: build a new one to enumerate again.
#[derive(Debug, Clone)]
pub struct BitPermutations {
    slots: usize,
    population: usize,
    next: Mask,
    last: Mask,
    exhausted: bool,
}

impl BitPermutations {
    /// Create the sequence of masks over `slots` places with `population` bits set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `slots` is zero or above
    /// [`MAX_SLOTS`], or when `population` is above `slots`.
    pub fn new(slots: usize, population: usize) -> Result<Self, CombiError> {
        if slots == 0 {
            return Err(InvalidArgument::NoSlots.into());
        }
        if slots > MAX_SLOTS {
            return Err(InvalidArgument::TooManySlots {
                slots,
                max: MAX_SLOTS,
            }
            .into());
        }
        if population > slots {
            return Err(InvalidArgument::PopulationExceedsSlots { population, slots }.into());
        }

        let (first, last) = if population == 0 {
            (0, 0)
        } else if population == slots {
            // All places filled. At the widest size this is every bit below
            // the spare top bit, taken from the type maximum.
            let full = if slots == MAX_SLOTS {
                Mask::MAX >> 1
            } else {
                low_ones(slots)
            };
            (full, full)
        } else {
            (
                low_ones(population),
                low_ones(slots) ^ low_ones(slots - population),
            )
        };

        Ok(Self {
            slots,
            population,
            next: first,
            last,
            exhausted: false,
        })
    }

    /// Number of places.
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Number of bits set in every mask.
    pub fn population(&self) -> usize {
        self.population
    }

    /// The final mask of the sequence: the top `population` places set.
    pub fn last_mask(&self) -> Mask {
        self.last
    }

    /// True while at least one mask remains.
    pub fn has_next(&self) -> bool {
        !self.exhausted
    }

    /// Take the next mask.
    ///
    /// # Errors
    ///
    /// Returns `ExhaustedIterator` once the last mask has been taken.
    pub fn next_mask(&mut self) -> Result<Mask, CombiError> {
        if self.exhausted {
            return Err(CombiError::ExhaustedIterator {
                slots: self.slots,
                population: self.population,
            });
        }

        let current = self.next;
        if current == self.last {
            self.exhausted = true;
        } else {
            self.next = successor(current);
        }
        Ok(current)
    }
}

/// Next larger mask with the same population.
///
/// `current` must be non-zero and must not be the largest mask of its
/// population within the low `MAX_SLOTS` bits.
#[inline]
fn successor(current: Mask) -> Mask {
    // t has current's trailing zeros set to one
    let t = current | (current - 1);
    // advance the bit above the lowest block of ones, then repack the rest
    // of that block into the lowest bits
    (t + 1) | (((!t & (t + 1)) - 1) >> (current.trailing_zeros() + 1))
}

impl Iterator for BitPermutations {
    type Item = Mask;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_mask().ok()
    }
}

impl FusedIterator for BitPermutations {}
