//! Stand-alone seeding runs.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use super::config::SeedConfig;
use super::greedy::greedy_tour;
use super::random::random_tour;
use super::types::{SeedResult, SeedStrategy};
use crate::city::City;

/// Runs a seed constructor on its own, with timing and attempt counts.
///
/// # Examples
///
/// ```
/// use u_tsp::city::EuclideanCity;
/// use u_tsp::seed::{SeedConfig, SeedRunner};
///
/// let cities = vec![
///     EuclideanCity::new("A", 0.0, 0.0),
///     EuclideanCity::new("B", 1.0, 0.0),
///     EuclideanCity::new("C", 0.0, 1.0),
/// ];
/// let result = SeedRunner::greedy(&cities, &SeedConfig::default());
/// assert!(result.is_solution_found());
/// assert_eq!(result.attempts, 1);
/// ```
pub struct SeedRunner;

impl SeedRunner {
    /// Nearest-neighbour tour from `config.start_city`.
    pub fn greedy<C: City>(cities: &[C], config: &SeedConfig) -> SeedResult {
        Self::run(SeedStrategy::Greedy, cities, config)
    }

    /// First feasible uniform random permutation.
    pub fn random<C: City>(cities: &[C], config: &SeedConfig) -> SeedResult {
        Self::run(SeedStrategy::Random, cities, config)
    }

    /// Runs the constructor selected by `strategy`.
    pub fn run<C: City>(strategy: SeedStrategy, cities: &[C], config: &SeedConfig) -> SeedResult {
        let start = Instant::now();
        // None once the budget is too large to represent
        let deadline = start.checked_add(config.time_limit);

        let (tour, attempts) = match strategy {
            SeedStrategy::Greedy => (greedy_tour(cities, config.start_city, deadline), 1),
            SeedStrategy::Random => {
                let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
                let found = random_tour(cities, config.start_city, deadline, &mut rng);
                (found.tour, found.attempts)
            }
            SeedStrategy::None => return SeedResult::empty(),
        };

        let result = SeedResult {
            tour,
            time: start.elapsed(),
            attempts,
        };
        debug!(
            ?strategy,
            cost = result.cost(),
            attempts = result.attempts,
            elapsed = ?result.time,
            "seed tour constructed"
        );
        result
    }
}
