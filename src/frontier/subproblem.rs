//! A node of the branch-and-bound tree.

use crate::bound::compute_lower_bound_and_reduce;
use crate::matrix::CostMatrix;

/// A partial tour with its reduced matrix and lower bound.
///
/// Each subproblem exclusively owns its matrix and path; branching copies
/// them, so siblings never share state.
#[derive(Debug, Clone, PartialEq)]
pub struct Subproblem {
    /// Lower bound on every tour extending `path`.
    pub lower_bound: f64,
    /// Reduced matrix with departed rows and arrived columns forbidden.
    pub matrix: CostMatrix,
    /// Visited cities, starting at the root city. No repeats.
    pub path: Vec<usize>,
}

impl Subproblem {
    /// The root of the search: reduces the full cost matrix and starts the
    /// path at `start`.
    pub fn root(costs: CostMatrix, start: usize) -> Self {
        let reduction = compute_lower_bound_and_reduce(costs, &[]);
        Self {
            lower_bound: reduction.cost,
            matrix: reduction.matrix,
            path: vec![start],
        }
    }

    /// Number of cities on the path.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// City the path currently ends at.
    pub fn last(&self) -> usize {
        self.path[self.path.len() - 1]
    }

    /// Whether every city has been placed.
    pub fn is_complete(&self) -> bool {
        self.path.len() == self.matrix.size()
    }

    /// Unvisited cities reachable from the end of the path.
    pub fn successors(&self) -> impl Iterator<Item = usize> + '_ {
        let from = self.last();
        self.matrix
            .row(from)
            .iter()
            .enumerate()
            .filter(move |&(to, cost)| cost.is_finite() && !self.path.contains(&to))
            .map(|(to, _)| to)
    }

    /// Extends the path by `to`.
    ///
    /// The child bound is the parent bound plus the reduced cost of the new
    /// edge plus whatever the child matrix reduces by, so it never drops
    /// below the parent bound.
    ///
    /// # Panics
    ///
    /// Panics if `to` is already on the path or the edge is forbidden; both
    /// mean the matrix no longer matches the path.
    pub fn branch(&self, to: usize) -> Self {
        let from = self.last();
        assert!(
            !self.path.contains(&to),
            "city {to} revisited on path {:?}",
            self.path
        );
        let edge = self.matrix.get(from, to);
        assert!(edge.is_finite(), "branching on forbidden edge {from} -> {to}");

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(to);

        let excluded = self.matrix.exclude_edge_and_visited(from, to);
        let reduction = compute_lower_bound_and_reduce(excluded, &path);
        Self {
            lower_bound: self.lower_bound + edge + reduction.cost,
            matrix: reduction.matrix,
            path,
        }
    }
}
