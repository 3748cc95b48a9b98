//! Nearest-neighbour tour construction.

use std::time::Instant;

use crate::city::{City, Tour};

/// Builds a tour by always moving to the nearest unvisited city.
///
/// Starts at `start` and breaks distance ties by lower index. A `None`
/// deadline never expires. Returns `None` if the deadline passes before every city is placed, if some step
/// has no reachable unvisited city, or if the closing edge back to `start`
/// is unreachable.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use u_tsp::city::EuclideanCity;
/// use u_tsp::seed::greedy_tour;
///
/// let cities = vec![
///     EuclideanCity::new("A", 0.0, 0.0),
///     EuclideanCity::new("B", 5.0, 0.0),
///     EuclideanCity::new("C", 1.0, 0.0),
/// ];
/// let deadline = Instant::now().checked_add(Duration::from_secs(1));
/// let tour = greedy_tour(&cities, 0, deadline).unwrap();
/// assert_eq!(tour.route, vec![0, 2, 1]);
/// assert!((tour.cost - 10.0).abs() < 1e-12);
/// ```
pub fn greedy_tour<C: City>(
    cities: &[C],
    start: usize,
    deadline: Option<Instant>,
) -> Option<Tour> {
    let n = cities.len();
    if n < 2 || start >= n {
        return None;
    }

    let mut visited = vec![false; n];
    let mut route = Vec::with_capacity(n);
    visited[start] = true;
    route.push(start);
    let mut current = start;

    while route.len() < n {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            return None;
        }
        let (next, _) = (0..n)
            .filter(|&c| !visited[c])
            .map(|c| (c, cities[current].cost_to(&cities[c])))
            .filter(|&(_, cost)| cost.is_finite())
            .fold(None, |best: Option<(usize, f64)>, (c, cost)| match best {
                Some((_, best_cost)) if best_cost <= cost => best,
                _ => Some((c, cost)),
            })?;
        visited[next] = true;
        route.push(next);
        current = next;
    }

    let tour = Tour::from_route(cities, route);
    tour.is_feasible().then_some(tour)
}
