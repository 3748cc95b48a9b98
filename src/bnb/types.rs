//! Result record and search statistics.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::city::Tour;

/// How a branch-and-bound run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BnbStatus {
    /// Frontier exhausted: the returned tour is optimal.
    Optimal,
    /// Time ran out with a tour in hand; it may not be optimal.
    Feasible,
    /// Frontier exhausted without any tour: none exists.
    Infeasible,
    /// Time ran out before any tour was found.
    Timeout,
}

impl BnbStatus {
    /// Whether the run returned a tour.
    pub fn is_solution_found(self) -> bool {
        matches!(self, BnbStatus::Optimal | BnbStatus::Feasible)
    }

    /// Whether the time budget cut the search short.
    pub fn timed_out(self) -> bool {
        matches!(self, BnbStatus::Feasible | BnbStatus::Timeout)
    }
}

/// Counters collected during a search.
///
/// After any run, `created == enqueued + pruned_on_creation + bssf_updates`.
/// After an exhausted run, additionally `enqueued == expanded + pruned_on_pop`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStats {
    /// Subproblems constructed, root included.
    pub created: usize,
    /// Subproblems pushed onto the frontier, root included.
    pub enqueued: usize,
    /// Subproblems popped and branched.
    pub expanded: usize,
    /// Subproblems popped but discarded because their bound no longer beat
    /// the best tour.
    pub pruned_on_pop: usize,
    /// Children discarded right after construction.
    pub pruned_on_creation: usize,
    /// Times the best tour improved during search (the seed not counted).
    pub bssf_updates: usize,
    /// Largest number of live subproblems held at once.
    pub max_frontier_size: usize,
}

impl SearchStats {
    /// All subproblems discarded by bound comparison.
    pub fn pruned(&self) -> usize {
        self.pruned_on_pop + self.pruned_on_creation
    }
}

/// Result of a branch-and-bound run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BnbResult {
    /// Cost of the best tour, `f64::INFINITY` if none was found.
    pub cost: f64,
    /// Wall-clock time of the whole run.
    pub time: Duration,
    /// City indices of the best tour, closing edge implied. Empty if none.
    pub solution: Vec<usize>,
    /// How the run ended.
    pub status: BnbStatus,
    /// Cost of the seed tour (`f64::INFINITY` when seeding found none).
    pub seed_cost: f64,
    /// Search counters.
    pub stats: SearchStats,
    /// Best-so-far cost after seeding and after each improvement.
    pub cost_history: Vec<f64>,
}

impl BnbResult {
    /// The "no tour" answer for inputs that cannot hold a cycle.
    pub fn infeasible(time: Duration) -> Self {
        Self {
            cost: f64::INFINITY,
            time,
            solution: Vec::new(),
            status: BnbStatus::Infeasible,
            seed_cost: f64::INFINITY,
            stats: SearchStats::default(),
            cost_history: Vec::new(),
        }
    }

    /// Number of times the best tour improved during search.
    pub fn count(&self) -> usize {
        self.stats.bssf_updates
    }

    /// Largest number of live subproblems held at once.
    pub fn max_frontier_size(&self) -> usize {
        self.stats.max_frontier_size
    }

    /// Number of subproblems ever constructed.
    pub fn total_states_created(&self) -> usize {
        self.stats.created
    }

    /// Number of subproblems discarded by bound comparison.
    pub fn pruned(&self) -> usize {
        self.stats.pruned()
    }

    /// Elapsed time in seconds.
    pub fn time_secs(&self) -> f64 {
        self.time.as_secs_f64()
    }

    /// Whether a tour was found.
    pub fn is_solution_found(&self) -> bool {
        self.cost.is_finite()
    }

    /// The best tour, if any.
    pub fn tour(&self) -> Option<Tour> {
        self.is_solution_found().then(|| Tour {
            route: self.solution.clone(),
            cost: self.cost,
        })
    }

    /// Resolves the best tour to city references.
    pub fn solution_cities<'a, C>(&self, cities: &'a [C]) -> Vec<&'a C> {
        self.solution.iter().map(|&i| &cities[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::EuclideanCity;

    fn finished(status: BnbStatus, cost: f64, solution: Vec<usize>) -> BnbResult {
        BnbResult {
            cost,
            time: Duration::from_millis(1500),
            solution,
            status,
            seed_cost: cost,
            stats: SearchStats {
                created: 9,
                enqueued: 5,
                expanded: 3,
                pruned_on_pop: 2,
                pruned_on_creation: 3,
                bssf_updates: 1,
                max_frontier_size: 4,
            },
            cost_history: vec![cost],
        }
    }

    #[test]
    fn test_status_flags() {
        assert!(BnbStatus::Optimal.is_solution_found());
        assert!(!BnbStatus::Optimal.timed_out());
        assert!(BnbStatus::Feasible.is_solution_found());
        assert!(BnbStatus::Feasible.timed_out());
        assert!(!BnbStatus::Infeasible.is_solution_found());
        assert!(!BnbStatus::Infeasible.timed_out());
        assert!(!BnbStatus::Timeout.is_solution_found());
        assert!(BnbStatus::Timeout.timed_out());
    }

    #[test]
    fn test_result_accessors() {
        let result = finished(BnbStatus::Feasible, 3.0, vec![2, 0, 1]);
        assert_eq!(result.count(), 1);
        assert_eq!(result.total_states_created(), 9);
        assert_eq!(result.pruned(), 5);
        assert_eq!(result.max_frontier_size(), 4);
        assert!((result.time_secs() - 1.5).abs() < 1e-12);
        assert_eq!(result.tour().unwrap().route, vec![2, 0, 1]);
    }

    #[test]
    fn test_solution_cities_follow_route() {
        let cities = vec![
            EuclideanCity::new("A", 0.0, 0.0),
            EuclideanCity::new("B", 1.0, 0.0),
            EuclideanCity::new("C", 0.0, 1.0),
        ];
        let result = finished(BnbStatus::Optimal, 2.0 + 2f64.sqrt(), vec![2, 0, 1]);
        let names: Vec<&str> = result
            .solution_cities(&cities)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_infeasible_has_no_tour() {
        let result = BnbResult::infeasible(Duration::ZERO);
        assert!(!result.is_solution_found());
        assert!(result.tour().is_none());
        assert!(result.solution_cities::<EuclideanCity>(&[]).is_empty());
    }
}
