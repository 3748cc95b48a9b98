//! Reduced-matrix lower bound.
//!
//! Every tour uses exactly one outgoing edge per row and one incoming edge
//! per column, so subtracting a row or column minimum lowers every tour by
//! the same amount. The subtracted total is therefore a valid addition to a
//! lower bound.
//!
//! # Reference
//!
//! Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//! Salesman Problem", *Operations Research* 11(6), 972-989.

use crate::matrix::CostMatrix;

/// Outcome of reducing a matrix for a partial path.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    /// Total subtracted from rows and columns.
    pub cost: f64,
    /// The fully reduced matrix.
    pub matrix: CostMatrix,
}

/// Reduces `matrix` for the partial tour `path`.
///
/// Rows of cities already departed from (every city of `path` but the
/// last) and columns of cities already arrived at (every city but the
/// first) are left alone; the matrix already forbids them. The root
/// column stays reducible because the tour must still close on it.
///
/// # Examples
///
/// ```
/// use u_tsp::bound::compute_lower_bound_and_reduce;
/// use u_tsp::matrix::CostMatrix;
///
/// let m = CostMatrix::from_rows(&[
///     vec![0.0, 4.0, 2.0],
///     vec![3.0, 0.0, 5.0],
///     vec![1.0, 6.0, 0.0],
/// ]).unwrap();
/// let root = compute_lower_bound_and_reduce(m, &[]);
/// assert_eq!(root.cost, 2.0 + 3.0 + 1.0 + 2.0);
/// ```
pub fn compute_lower_bound_and_reduce(mut matrix: CostMatrix, path: &[usize]) -> Reduction {
    let n = matrix.size();
    let mut departed = vec![false; n];
    let mut arrived = vec![false; n];
    if let Some((_, from)) = path.split_last() {
        for &c in from {
            departed[c] = true;
        }
    }
    for &c in path.iter().skip(1) {
        arrived[c] = true;
    }

    let rows = matrix.reduce_rows(&departed, &arrived);
    let cols = matrix.reduce_columns(&arrived);
    Reduction {
        cost: rows + cols,
        matrix,
    }
}
