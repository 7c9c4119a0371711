// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for sequencing and searching.
//!
//! Argument errors are raised at construction time, before any work begins.
//! A search itself never fails: finding nothing is a normal outcome.

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// Errors raised by [`BitPermutations`](crate::bits::BitPermutations) and
/// [`SubsetSearch`](crate::search::SubsetSearch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro)]
pub enum CombiError {
    /// A constructor was given an out-of-range argument.
    InvalidArgument(InvalidArgument),

    /// A value was requested from a sequence that had already yielded its last mask.
    ExhaustedIterator { slots: usize, population: usize },
}

/// Out-of-range constructor arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro)]
pub enum InvalidArgument {
    /// Slot count was zero.
    NoSlots,

    /// Slot count does not fit in a mask with one spare bit.
    TooManySlots { slots: usize, max: usize },

    /// Population is larger than the slot count.
    PopulationExceedsSlots { population: usize, slots: usize },

    /// The candidate value list was empty.
    NoValues,

    /// The candidate value list is longer than the mask can index.
    TooManyValues { count: usize, max: usize },
}

impl CombiError {
    /// True for construction-time argument errors.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CombiError::InvalidArgument(_))
    }
}

impl fmt::Display for CombiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombiError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            CombiError::ExhaustedIterator { slots, population } => write!(
                f,
                "no more masks with population {} over {} slots",
                population, slots
            ),
        }
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::NoSlots => write!(f, "slot count must be positive"),
            InvalidArgument::TooManySlots { slots, max } => {
                write!(f, "slot count {} exceeds maximum {}", slots, max)
            }
            InvalidArgument::PopulationExceedsSlots { population, slots } => write!(
                f,
                "population {} exceeds slot count {}",
                population, slots
            ),
            InvalidArgument::NoValues => write!(f, "values must not be empty"),
            InvalidArgument::TooManyValues { count, max } => {
                write!(f, "{} values given, at most {} supported", count, max)
            }
        }
    }
}

impl std::error::Error for CombiError {}

impl From<InvalidArgument> for CombiError {
    fn from(reason: InvalidArgument) -> Self {
        CombiError::InvalidArgument(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn test_display_invalid_argument() {
        let err = CombiError::from(InvalidArgument::TooManySlots { slots: 64, max: 63 });
        assert_eq!(
            err.to_string(),
            "invalid argument: slot count 64 exceeds maximum 63"
        );
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_display_exhausted() {
        let err = CombiError::ExhaustedIterator {
            slots: 4,
            population: 4,
        };
        assert_eq!(err.to_string(), "no more masks with population 4 over 4 slots");
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_display_values() {
        assert_eq!(
            InvalidArgument::NoValues.to_string(),
            "values must not be empty"
        );
        assert_eq!(
            InvalidArgument::TooManyValues { count: 64, max: 63 }.to_string(),
            "64 values given, at most 63 supported"
        );
    }

    #[test]
    fn test_variant_counts() {
        assert_eq!(CombiError::COUNT, 2);
        assert_eq!(InvalidArgument::COUNT, 5);
    }
}
