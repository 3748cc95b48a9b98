//! Random permutation tours.

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::city::{City, Tour};

/// Permutations tried by [`random_tour`] when it has no deadline.
pub const UNBOUNDED_ATTEMPTS: usize = 1_000_000;

/// Outcome of [`random_tour`].
#[derive(Debug, Clone)]
pub struct RandomSearch {
    /// First feasible tour sampled, if any.
    pub tour: Option<Tour>,
    /// Number of permutations tried.
    pub attempts: usize,
}

/// Samples uniform permutations until one forms a finite-cost cycle.
///
/// The returned route is rotated to begin at `start`; rotation does not
/// change the cycle or its cost. Stops with `tour: None` once `deadline`
/// passes, or after [`UNBOUNDED_ATTEMPTS`] permutations when there is no
/// deadline.
pub fn random_tour<C: City, R: Rng>(
    cities: &[C],
    start: usize,
    deadline: Option<Instant>,
    rng: &mut R,
) -> RandomSearch {
    let n = cities.len();
    let mut attempts = 0;
    if n < 2 || start >= n {
        return RandomSearch {
            tour: None,
            attempts,
        };
    }

    let mut perm: Vec<usize> = (0..n).collect();
    while match deadline {
        Some(d) => Instant::now() < d,
        None => attempts < UNBOUNDED_ATTEMPTS,
    } {
        perm.shuffle(rng);
        attempts += 1;
        let tour = Tour::from_route(cities, perm.clone());
        if tour.is_feasible() {
            let mut route = tour.route;
            if let Some(pos) = route.iter().position(|&c| c == start) {
                route.rotate_left(pos);
            }
            return RandomSearch {
                tour: Some(Tour {
                    route,
                    cost: tour.cost,
                }),
                attempts,
            };
        }
    }

    RandomSearch {
        tour: None,
        attempts,
    }
}
