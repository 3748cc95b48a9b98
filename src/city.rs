//! City model consumed by the solver.
//!
//! The solver only ever asks a city for its name and for the cost of
//! travelling to another city of the same kind. Two concrete models are
//! provided: planar points with Euclidean cost and an explicit cost table
//! that can express asymmetric or missing edges.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A location that can report the cost of travelling to another location.
///
/// `cost_to` must return a non-negative value, or `f64::INFINITY` when the
/// destination is unreachable. Costs are read once per solve, when the
/// root cost matrix is built.
pub trait City {
    /// Stable display name of this city.
    fn name(&self) -> &str;

    /// Cost of travelling from `self` to `other`.
    fn cost_to(&self, other: &Self) -> f64;
}

/// A city on the plane, travel cost is the straight-line distance.
///
/// # Examples
///
/// ```
/// use u_tsp::city::{City, EuclideanCity};
///
/// let a = EuclideanCity::new("A", 0.0, 0.0);
/// let b = EuclideanCity::new("B", 3.0, 4.0);
/// assert!((a.cost_to(&b) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EuclideanCity {
    /// City name.
    pub name: String,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl EuclideanCity {
    /// Creates a city at `(x, y)`.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }
}

impl City for EuclideanCity {
    fn name(&self) -> &str {
        &self.name
    }

    fn cost_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An explicit, possibly asymmetric, table of travel costs.
///
/// `costs[i][j]` is the cost from city `i` to city `j`; `f64::INFINITY`
/// marks a missing edge. The table hands out [`TableCity`] handles that
/// share it.
///
/// # Examples
///
/// ```
/// use u_tsp::city::{City, CostTable};
///
/// let table = CostTable::new(vec![
///     vec![0.0, 2.0, f64::INFINITY],
///     vec![2.0, 0.0, 1.0],
///     vec![4.0, 1.0, 0.0],
/// ]);
/// let cities = table.cities();
/// assert_eq!(cities[0].name(), "A");
/// assert_eq!(cities[1].cost_to(&cities[2]), 1.0);
/// assert!(cities[0].cost_to(&cities[2]).is_infinite());
/// ```
#[derive(Debug, Clone)]
pub struct CostTable {
    costs: Arc<Vec<Vec<f64>>>,
}

impl CostTable {
    /// Wraps a square cost table.
    ///
    /// # Panics
    ///
    /// Panics if the table is not square.
    pub fn new(costs: Vec<Vec<f64>>) -> Self {
        let n = costs.len();
        assert!(
            costs.iter().all(|row| row.len() == n),
            "cost table must be square"
        );
        Self {
            costs: Arc::new(costs),
        }
    }

    /// Number of cities in the table.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Whether the table has no cities.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Returns one handle per row, named `A`, `B`, ..., `Z`, `AA`, ...
    pub fn cities(&self) -> Vec<TableCity> {
        (0..self.len())
            .map(|index| TableCity {
                index,
                name: city_label(index),
                costs: Arc::clone(&self.costs),
            })
            .collect()
    }
}

/// A city backed by a shared [`CostTable`].
#[derive(Debug, Clone)]
pub struct TableCity {
    index: usize,
    name: String,
    costs: Arc<Vec<Vec<f64>>>,
}

impl TableCity {
    /// Row of this city in its table.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl City for TableCity {
    fn name(&self) -> &str {
        &self.name
    }

    fn cost_to(&self, other: &Self) -> f64 {
        self.costs[self.index][other.index]
    }
}

/// Spreadsheet-style label for a city index: 0 -> `A`, 25 -> `Z`, 26 -> `AA`.
pub fn city_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}

/// A closed tour: visits every city in `route` order, then returns to
/// `route[0]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tour {
    /// City indices in visiting order.
    pub route: Vec<usize>,
    /// Total cycle cost, closing edge included.
    pub cost: f64,
}

impl Tour {
    /// Builds a tour and computes its cost against `cities`.
    pub fn from_route<C: City>(cities: &[C], route: Vec<usize>) -> Self {
        let cost = tour_cost(cities, &route);
        Self { route, cost }
    }

    /// Whether every leg of the cycle is reachable.
    pub fn is_feasible(&self) -> bool {
        self.cost.is_finite()
    }

    /// Resolves the route to city references.
    pub fn cities<'a, C>(&self, cities: &'a [C]) -> Vec<&'a C> {
        self.route.iter().map(|&i| &cities[i]).collect()
    }
}

/// Cost of the cycle `route[0] -> ... -> route[n-1] -> route[0]`.
///
/// Routes shorter than two cities are not cycles and cost `f64::INFINITY`.
pub fn tour_cost<C: City>(cities: &[C], route: &[usize]) -> f64 {
    if route.len() < 2 {
        return f64::INFINITY;
    }
    let legs: f64 = route
        .windows(2)
        .map(|w| cities[w[0]].cost_to(&cities[w[1]]))
        .sum();
    let closing = cities[route[route.len() - 1]].cost_to(&cities[route[0]]);
    legs + closing
}
