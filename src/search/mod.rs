// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive subset-sum search preferring the largest subsets.
//!
//! Given a target and up to [`MAX_SLOTS`] candidate values, the engine
//! finds a subset summing exactly to the target that uses as many values as
//! possible.
//!
//! # Search Order
//!
//! Populations are visited from the full list down to the empty subset. For
//! each population a fresh [`BitPermutations`] yields every mask in ascending
//! order. The first mask whose total hits the target wins and the search stops,
//! so a larger subset is always found before any smaller one.
//!
//! # Running Total
//!
//! Consecutive masks of one population differ in very few bits. Rather than
//! summing every mask from scratch, the engine XORs the previous and current
//! masks and applies only the difference: removed values are subtracted
//! first, then added values are added, lowest index first. Arithmetic wraps
//! on `i64` overflow.
//!
//! # Example
//!
//! ```
//! use combi_search::search::SubsetSearch;
//!
//! let mut search = SubsetSearch::new(3, vec![3, 199, 5000, 2, 1, 98798]).unwrap();
//! assert_eq!(search.search_space_size(), 64);
//!
//! assert!(search.run());
//! assert_eq!(search.winning_mask(), Some(0b011000));
//! assert_eq!(search.selected_indices(), vec![3, 4]);
//! assert_eq!(search.display_string(), "2 1");
//! ```

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::bits::{choose, BitPermutations, Mask, Selection, MAX_SLOTS};
use crate::errors::{CombiError, InvalidArgument};

/// State of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `run` has not been called yet.
    NotRun,

    /// A subset sums to the target; holds its mask.
    Found(Mask),

    /// Every subset was tried and none sums to the target.
    NotFound,
}

/// Search engine over one fixed target and candidate list.
#[derive(Debug, Clone)]
pub struct SubsetSearch {
    target: i64,
    values: Vec<i64>,
    outcome: Outcome,
    statistics: Statistics,
    verbose: bool,
}

impl SubsetSearch {
    /// Create a search for a subset of `values` summing to `target`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `values` is empty or longer than
    /// [`MAX_SLOTS`].
    pub fn new(target: i64, values: Vec<i64>) -> Result<Self, CombiError> {
        if values.is_empty() {
            return Err(InvalidArgument::NoValues.into());
        }
        if values.len() > MAX_SLOTS {
            return Err(InvalidArgument::TooManyValues {
                count: values.len(),
                max: MAX_SLOTS,
            }
            .into());
        }

        Ok(Self {
            target,
            values,
            outcome: Outcome::NotRun,
            statistics: Statistics::new(),
            verbose: false,
        })
    }

    /// Enable or disable progress lines on stderr.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of subsets of the candidate list (2^len).
    ///
    /// Informational only; the search does not use it.
    pub fn search_space_size(&self) -> u64 {
        1u64 << self.values.len()
    }

    /// Run the search from scratch.
    ///
    /// Returns true iff a subset sums to the target. Calling `run` again
    /// discards the previous outcome and statistics and enumerates again.
    pub fn run(&mut self) -> bool {
        self.outcome = Outcome::NotRun;
        self.statistics = Statistics::new();

        let slots = self.values.len();
        if self.verbose {
            eprintln!(
                "[SubsetSearch] Searching {} subsets of {} values for total {}...",
                self.search_space_size(),
                slots,
                self.target
            );
        }

        for population in (0..=slots).rev() {
            if let Some(mask) = self.search_population(population) {
                if self.verbose {
                    eprintln!(
                        "[SubsetSearch] Found {} values after {} masks.",
                        population,
                        self.statistics.get(Counters::MasksVisited)
                    );
                }
                self.outcome = Outcome::Found(mask);
                return true;
            }
        }

        if self.verbose {
            eprintln!(
                "[SubsetSearch] No subset found after {} masks.",
                self.statistics.get(Counters::MasksVisited)
            );
        }
        self.outcome = Outcome::NotFound;
        false
    }

    /// Scan every mask of one population, returning the first that hits the target.
    fn search_population(&mut self, population: usize) -> Option<Mask> {
        let slots = self.values.len();
        // slots and population were validated by the constructor and the loop bounds
        let masks = BitPermutations::new(slots, population).ok()?;
        self.statistics.increment(Counters::SequencersBuilt);

        if self.verbose {
            eprintln!(
                "[SubsetSearch] Population {}: {} masks",
                population,
                choose(slots, population)
            );
        }

        let mut previous: Mask = 0;
        let mut total: i64 = 0;
        for mask in masks {
            self.statistics.increment(Counters::MasksVisited);
            total = self.apply_difference(total, previous, mask);
            if total == self.target {
                return Some(mask);
            }
            previous = mask;
        }
        None
    }

    /// Move `total` from the sum of `previous` to the sum of `current`.
    fn apply_difference(&mut self, mut total: i64, previous: Mask, current: Mask) -> i64 {
        let changed = previous ^ current;
        let removed = Selection::from_bits(previous & changed);
        let added = Selection::from_bits(current & changed);

        for index in removed.indices() {
            total = total.wrapping_sub(self.values[index]);
        }
        for index in added.indices() {
            total = total.wrapping_add(self.values[index]);
        }

        self.statistics.add(Counters::BitsRemoved, removed.len() as u64);
        self.statistics.add(Counters::BitsAdded, added.len() as u64);
        total
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The winning mask, if the last run found one.
    pub fn winning_mask(&self) -> Option<Mask> {
        match self.outcome {
            Outcome::Found(mask) => Some(mask),
            Outcome::NotRun | Outcome::NotFound => None,
        }
    }

    /// The winning mask as a typed selection.
    pub fn selection(&self) -> Option<Selection> {
        self.winning_mask().map(Selection::from_bits)
    }

    /// Indices of the selected values, ascending. Empty if nothing was found.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection()
            .map(|selection| selection.indices().collect())
            .unwrap_or_default()
    }

    /// Selected values in index order. Empty if nothing was found.
    pub fn selected_values(&self) -> Vec<i64> {
        self.selection()
            .map(|selection| selection.pick(&self.values).copied().collect())
            .unwrap_or_default()
    }

    /// Selected values joined by single spaces, or an empty string.
    pub fn display_string(&self) -> String {
        self.selected_values()
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Counters from the last run.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}
