// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use combi_search::{BitPermutations, Mask};

/// Collect every mask for one population.
pub fn collect_population(slots: usize, population: usize) -> Vec<Mask> {
    BitPermutations::new(slots, population)
        .expect("valid slots and population")
        .collect()
}

/// Collect masks for every population over `slots`, population 0 first.
pub fn collect_all(slots: usize) -> Vec<Mask> {
    (0..=slots)
        .flat_map(|population| collect_population(slots, population))
        .collect()
}

/// Reference answer computed by summing every subset from scratch.
///
/// Picks the largest population that hits the target, then the smallest mask
/// within it.
pub fn brute_force_best(target: i64, values: &[i64]) -> Option<Mask> {
    let mut best: Option<Mask> = None;
    for mask in 0..(1 as Mask) << values.len() {
        let total = values
            .iter()
            .enumerate()
            .filter(|(index, _)| (mask >> index) & 1 != 0)
            .fold(0i64, |total, (_, value)| total.wrapping_add(*value));
        if total != target {
            continue;
        }
        best = match best {
            Some(current) if current.count_ones() >= mask.count_ones() => Some(current),
            _ => Some(mask),
        };
    }
    best
}
