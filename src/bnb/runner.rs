//! Branch-and-bound search loop.
//!
//! # Algorithm
//!
//! 1. Seed the best-so-far tour (BSSF) with a greedy or random tour
//! 2. Reduce the full cost matrix to get the root lower bound
//! 3. While the frontier is non-empty and time remains:
//!    a. Pop a subproblem, alternating best-bound and deepest-first views
//!    b. Discard it if its bound no longer beats the BSSF
//!    c. Otherwise branch on every unvisited reachable city; record
//!       complete tours that beat the BSSF, queue partial ones whose bound
//!       does, drop the rest
//! 4. Return the BSSF with search statistics
//!
//! # Reference
//!
//! Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//! Salesman Problem", *Operations Research* 11(6), 972-989.

use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use super::config::BnbConfig;
use super::types::{BnbResult, BnbStatus, SearchStats};
use crate::city::City;
use crate::error::TspError;
use crate::frontier::{SearchFrontier, Subproblem};
use crate::matrix::CostMatrix;
use crate::seed::{SeedRunner, SeedStrategy};

/// Phases of a run, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Seeding,
    ReducingRoot,
    Searching,
    Exhausted,
    TimedOut,
}

/// Best solution so far.
#[derive(Debug, Clone)]
struct Bssf {
    cost: f64,
    path: Option<Vec<usize>>,
}

/// State of one solve.
struct Search {
    costs: CostMatrix,
    frontier: SearchFrontier,
    bssf: Bssf,
    stats: SearchStats,
    cost_history: Vec<f64>,
    round: usize,
    phase: Phase,
    deadline: Option<Instant>,
}

impl Search {
    fn enter(&mut self, phase: Phase) {
        debug!(from = ?self.phase, to = ?phase, "phase transition");
        self.phase = phase;
    }

    fn time_left(&self) -> bool {
        self.deadline.is_none_or(|d| Instant::now() < d)
    }

    fn push(&mut self, sp: Subproblem) {
        self.frontier.push(sp);
        self.stats.enqueued += 1;
        self.stats.max_frontier_size = self.stats.max_frontier_size.max(self.frontier.len());
    }

    fn improve(&mut self, cost: f64, path: Vec<usize>) {
        debug!(
            cost,
            previous = self.bssf.cost,
            round = self.round,
            "best tour improved"
        );
        self.bssf = Bssf {
            cost,
            path: Some(path),
        };
        self.stats.bssf_updates += 1;
        self.cost_history.push(cost);
    }

    fn search(&mut self) {
        while !self.frontier.is_empty() && self.time_left() {
            let Some(sp) = self.frontier.pop_next(self.round) else {
                break;
            };
            self.round += 1;

            if sp.lower_bound >= self.bssf.cost {
                self.stats.pruned_on_pop += 1;
                continue;
            }
            self.expand(&sp);
        }

        let phase = if self.frontier.is_empty() {
            Phase::Exhausted
        } else {
            debug!(
                open = self.frontier.len(),
                best_open_bound = ?self.frontier.best_bound(),
                cost = self.bssf.cost,
                "time budget spent with subproblems left"
            );
            Phase::TimedOut
        };
        self.enter(phase);
    }

    fn expand(&mut self, sp: &Subproblem) {
        self.stats.expanded += 1;
        for to in sp.successors() {
            let child = sp.branch(to);
            self.stats.created += 1;

            if child.lower_bound >= self.bssf.cost {
                self.stats.pruned_on_creation += 1;
                continue;
            }

            if child.is_complete() {
                // the reduced matrix may have forbidden the closing edge, so
                // price the cycle on the original costs
                let cost = self.costs.cycle_cost(&child.path);
                if cost >= self.bssf.cost {
                    self.stats.pruned_on_creation += 1;
                    continue;
                }
                debug_assert!(
                    (cost - child.lower_bound).abs() <= 1e-6 * cost.max(1.0),
                    "leaf bound {} differs from tour cost {cost}",
                    child.lower_bound
                );
                self.improve(cost, child.path);
            } else {
                self.push(child);
            }
        }
    }
}

/// Executes the branch-and-bound solver.
pub struct BnbRunner;

impl BnbRunner {
    /// Finds a minimum-cost tour through `cities` within the configured
    /// time budget.
    ///
    /// Running out of time is not an error: the best tour found so far is
    /// returned with [`BnbStatus::Feasible`]. When no tour exists the result
    /// has `cost == f64::INFINITY` and an empty solution.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::InvalidConfig`] if the start city is out of range
    /// and [`TspError::InvalidCost`] if a city reports a negative or NaN
    /// cost.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use u_tsp::bnb::{BnbConfig, BnbRunner, BnbStatus};
    /// use u_tsp::city::EuclideanCity;
    ///
    /// let cities = vec![
    ///     EuclideanCity::new("A", 0.0, 0.0),
    ///     EuclideanCity::new("B", 1.0, 0.0),
    ///     EuclideanCity::new("C", 1.0, 1.0),
    ///     EuclideanCity::new("D", 0.0, 1.0),
    /// ];
    /// let config = BnbConfig::default().with_time_limit(Duration::from_secs(5));
    /// let result = BnbRunner::run(&cities, &config).unwrap();
    /// assert_eq!(result.status, BnbStatus::Optimal);
    /// assert!((result.cost - 4.0).abs() < 1e-9);
    /// ```
    #[instrument(skip_all, fields(cities = cities.len()))]
    pub fn run<C: City>(cities: &[C], config: &BnbConfig) -> Result<BnbResult, TspError> {
        let start = Instant::now();
        let n = cities.len();
        if n < 2 {
            warn!("fewer than two cities, no tour exists");
            return Ok(BnbResult::infeasible(start.elapsed()));
        }
        config.validate(n)?;

        debug!(phase = ?Phase::Seeding, strategy = ?config.seed_strategy, "seeding");
        let seed = SeedRunner::run(config.seed_strategy, cities, &config.seed_config());
        if seed.tour.is_none() && config.seed_strategy != SeedStrategy::None {
            warn!(
                strategy = ?config.seed_strategy,
                "seeding found no feasible tour, searching without an upper bound"
            );
        }
        let seed_cost = seed.cost();
        let bssf = match seed.tour {
            Some(tour) => Bssf {
                cost: tour.cost,
                path: Some(tour.route),
            },
            None => Bssf {
                cost: f64::INFINITY,
                path: None,
            },
        };

        let costs = CostMatrix::build(cities)?;
        let mut search = Search {
            costs,
            frontier: SearchFrontier::new(config.pop_policy()),
            bssf,
            stats: SearchStats::default(),
            cost_history: vec![seed_cost],
            round: 0,
            phase: Phase::Seeding,
            deadline: start.checked_add(config.time_limit),
        };

        search.enter(Phase::ReducingRoot);
        let root = Subproblem::root(search.costs.clone(), config.start_city);
        debug!(bound = root.lower_bound, "root reduced");
        search.stats.created += 1;
        search.push(root);

        search.enter(Phase::Searching);
        search.search();

        let status = match (search.phase, search.bssf.cost.is_finite()) {
            (Phase::Exhausted, true) => BnbStatus::Optimal,
            (Phase::Exhausted, false) => BnbStatus::Infeasible,
            (_, true) => BnbStatus::Feasible,
            (_, false) => BnbStatus::Timeout,
        };

        let result = BnbResult {
            cost: search.bssf.cost,
            time: start.elapsed(),
            solution: search.bssf.path.unwrap_or_default(),
            status,
            seed_cost,
            stats: search.stats,
            cost_history: search.cost_history,
        };
        info!(
            ?status,
            timed_out = status.timed_out(),
            cost = result.cost,
            seed_cost,
            updates = result.count(),
            created = result.total_states_created(),
            pruned = result.pruned(),
            max_frontier = result.max_frontier_size(),
            elapsed = ?result.time,
            "branch and bound finished"
        );
        Ok(result)
    }
}
