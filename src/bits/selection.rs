// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Selection type for representing chosen value indices as a bitmask.
//!
//! A Selection is a compact representation of a subset of candidate
//! indices, where bit i represents the presence of index i.
//!
//! # Examples
//!
//! ```
//! use combi_search::bits::Selection;
//!
//! let selection = Selection::from_bits(0b1101);
//!
//! assert_eq!(selection.len(), 3);
//! assert!(selection.contains(2));
//! assert!(!selection.contains(1));
//!
//! let indices: Vec<usize> = selection.indices().collect();
//! assert_eq!(indices, vec![0, 2, 3]);
//! ```

use crate::bits::constants::Mask;
use std::fmt;

/// A set of value indices represented as a bitmask.
///
/// Bit i (counting from LSB) is set if index i is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection(Mask);

impl Selection {
    /// Create an empty selection.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a selection from a raw mask value.
    pub const fn from_bits(bits: Mask) -> Self {
        Self(bits)
    }

    /// Create a selection from a slice of indices.
    pub fn from_indices(indices: &[usize]) -> Self {
        let mut selection = Self::empty();
        for &index in indices {
            selection.insert(index);
        }
        selection
    }

    /// Check if the selection contains a specific index.
    pub fn contains(self, index: usize) -> bool {
        (self.0 >> index) & 1 != 0
    }

    /// Add an index to the selection.
    pub fn insert(&mut self, index: usize) {
        self.0 |= 1 << index;
    }

    /// Get the number of selected indices (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if nothing is selected.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying mask.
    pub fn bits(self) -> Mask {
        self.0
    }

    /// Iterate over selected indices in ascending order.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        SelectionIter { bits: self.0 }
    }

    /// Pick the selected entries out of `values`, in index order.
    ///
    /// Indices beyond the end of `values` are skipped.
    pub fn pick<'a, T>(self, values: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        self.indices().filter_map(move |index| values.get(index))
    }
}

/// Iterator over indices in a Selection, lowest bit first.
struct SelectionIter {
    bits: Mask,
}

impl Iterator for SelectionIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        // clear lowest set bit
        self.bits &= self.bits - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl fmt::Display for Selection {
    /// Format as binary, highest index on the left.
    ///
    /// The formatter width pads with zeros, so `{:5}` renders `0b1101` as `01101`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(0);
        write!(f, "{:0width$b}", self.0, width = width)
    }
}

impl From<Mask> for Selection {
    fn from(bits: Mask) -> Self {
        Self::from_bits(bits)
    }
}

impl From<&[usize]> for Selection {
    fn from(indices: &[usize]) -> Self {
        Self::from_indices(indices)
    }
}
