//! Anytime branch-and-bound solver for the Traveling Salesperson Problem.
//!
//! Given cities with pairwise travel costs, finds a minimum-cost
//! Hamiltonian cycle within a wall-clock budget, returning the best tour
//! found so far if the budget runs out before optimality is proven.
//!
//! - **City model** ([`city`]): the `City` trait plus Euclidean and
//!   cost-table implementations.
//! - **Cost matrix** ([`matrix`]): square cost matrix with `+inf` for
//!   forbidden transitions, row/column reduction, copy-on-branch exclusion.
//! - **Lower bound** ([`bound`]): reduced-matrix bound for a partial tour.
//! - **Seeding** ([`seed`]): greedy nearest-neighbour and random tours that
//!   provide the initial upper bound.
//! - **Frontier** ([`frontier`]): live subproblems indexed best-bound-first
//!   and deepest-first, popped in a fixed alternation.
//! - **Branch and bound** ([`bnb`]): the search loop, time budget and
//!   result statistics.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use u_tsp::bnb::{BnbConfig, BnbRunner};
//! use u_tsp::city::EuclideanCity;
//!
//! let cities: Vec<EuclideanCity> = [(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &(x, y))| EuclideanCity::new(format!("C{i}"), x, y))
//!     .collect();
//!
//! let config = BnbConfig::default().with_time_limit(Duration::from_secs(1));
//! let result = BnbRunner::run(&cities, &config).unwrap();
//! assert!((result.cost - 14.0).abs() < 1e-9);
//! ```
//!
//! Logging goes through `tracing`; the crate never installs a subscriber.

pub mod bnb;
pub mod bound;
pub mod city;
pub mod error;
pub mod frontier;
pub mod matrix;
pub mod seed;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::TspError;
