// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters kept by the search engine while it enumerates masks. They are
//! reset at the start of every run.

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// One per population visited.
    SequencersBuilt,
    /// Masks taken from a sequencer and checked against the target.
    MasksVisited,
    /// Values subtracted from the running total.
    BitsRemoved,
    /// Values added to the running total.
    BitsAdded,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by `amount`.
    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Every counter with its name, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        Counters::iter().map(move |counter| {
            let name: &'static str = counter.into();
            (name, self.get(counter))
        })
    }

    /// Total bit flips applied to the running total.
    pub fn bit_flips(&self) -> u64 {
        self.get(Counters::BitsRemoved) + self.get(Counters::BitsAdded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero() {
        let stats = Statistics::new();
        assert!(stats.iter().all(|(_, value)| value == 0));
        assert_eq!(stats.bit_flips(), 0);
    }

    #[test]
    fn test_increment_and_add() {
        let mut stats = Statistics::new();
        stats.increment(Counters::MasksVisited);
        stats.increment(Counters::MasksVisited);
        stats.add(Counters::BitsAdded, 3);
        stats.add(Counters::BitsRemoved, 2);
        assert_eq!(stats.get(Counters::MasksVisited), 2);
        assert_eq!(stats.get(Counters::SequencersBuilt), 0);
        assert_eq!(stats.bit_flips(), 5);
    }

    #[test]
    fn test_iter_names() {
        let names: Vec<&str> = Statistics::new().iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec!["SequencersBuilt", "MasksVisited", "BitsRemoved", "BitsAdded"]
        );
    }
}
