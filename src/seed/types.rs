//! Seed strategy selection and result record.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::city::Tour;

/// Which constructor provides the initial best-so-far tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeedStrategy {
    /// Nearest-neighbour from the start city.
    #[default]
    Greedy,
    /// Uniform random permutations until one is feasible.
    Random,
    /// No seed; the search starts with an infinite bound.
    None,
}

/// Result of a seeding run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeedResult {
    /// The tour found, if any feasible one was found in time.
    pub tour: Option<Tour>,
    /// Wall-clock time spent.
    pub time: Duration,
    /// Number of candidate tours built (permutations for random, 1 for greedy).
    pub attempts: usize,
}

impl SeedResult {
    /// A result with no tour and no work done.
    pub fn empty() -> Self {
        Self {
            tour: None,
            time: Duration::ZERO,
            attempts: 0,
        }
    }

    /// Cost of the tour, `f64::INFINITY` when none was found.
    pub fn cost(&self) -> f64 {
        self.tour.as_ref().map_or(f64::INFINITY, |t| t.cost)
    }

    /// Whether a feasible tour was found.
    pub fn is_solution_found(&self) -> bool {
        self.tour.is_some()
    }
}
