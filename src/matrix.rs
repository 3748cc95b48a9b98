//! Square travel-cost matrix with `+inf` marking forbidden transitions.
//!
//! Every search node owns its own matrix. Branching copies the parent's
//! matrix, forbids the rows and columns that the new edge uses up, and
//! reduces what is left. The diagonal is always `+inf`.

use crate::city::City;
use crate::error::TspError;

/// Dense row-major cost matrix.
///
/// `get(i, j)` is the remaining cost of the edge `i -> j`, or `f64::INFINITY`
/// once that edge can no longer be part of a tour.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl CostMatrix {
    /// Builds the root matrix, `matrix[i][j] = cities[i].cost_to(cities[j])`.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::InvalidCost`] if any off-diagonal cost is
    /// negative or NaN.
    pub fn build<C: City>(cities: &[C]) -> Result<Self, TspError> {
        let n = cities.len();
        let mut cells = vec![f64::INFINITY; n * n];
        for (from, origin) in cities.iter().enumerate() {
            for (to, dest) in cities.iter().enumerate() {
                if from != to {
                    cells[from * n + to] = checked_cost(from, to, origin.cost_to(dest))?;
                }
            }
        }
        Ok(Self { n, cells })
    }

    /// Builds a matrix from explicit rows. Diagonal entries are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::InvalidConfig`] if the rows are not square and
    /// [`TspError::InvalidCost`] on negative or NaN costs.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, TspError> {
        let n = rows.len();
        if let Some(bad) = rows.iter().position(|r| r.len() != n) {
            return Err(TspError::InvalidConfig(format!(
                "row {bad} has {} entries, expected {n}",
                rows[bad].len()
            )));
        }
        let mut cells = vec![f64::INFINITY; n * n];
        for (from, row) in rows.iter().enumerate() {
            for (to, &cost) in row.iter().enumerate() {
                if from != to {
                    cells[from * n + to] = checked_cost(from, to, cost)?;
                }
            }
        }
        Ok(Self { n, cells })
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Cost of the edge `from -> to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.cells[from * self.n + to]
    }

    /// All outgoing costs of `from`.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.cells[from * self.n..(from + 1) * self.n]
    }

    /// Cost of the closed cycle through `route`, returning to `route[0]`.
    ///
    /// Only meaningful on an unreduced matrix.
    pub fn cycle_cost(&self, route: &[usize]) -> f64 {
        match (route.first(), route.last()) {
            (Some(&first), Some(&last)) if route.len() > 1 => {
                let legs: f64 = route.windows(2).map(|w| self.get(w[0], w[1])).sum();
                legs + self.get(last, first)
            }
            _ => f64::INFINITY,
        }
    }

    /// Returns a copy in which `from` can no longer be left, `to` can no
    /// longer be entered, and the immediate backtrack `to -> from` is
    /// forbidden.
    ///
    /// `self` is left untouched, so calling this twice with the same
    /// arguments yields equal matrices.
    pub fn exclude_edge_and_visited(&self, from: usize, to: usize) -> Self {
        let mut next = self.clone();
        let n = next.n;
        next.cells[from * n..(from + 1) * n].fill(f64::INFINITY);
        for row in 0..n {
            next.cells[row * n + to] = f64::INFINITY;
        }
        next.cells[to * n + from] = f64::INFINITY;
        next
    }

    /// Subtracts each row's minimum from its finite cells.
    ///
    /// Rows flagged in `excluded_rows` are skipped, and the minimum is taken
    /// only over columns not flagged in `arrived_cols`. A row with no finite
    /// candidate contributes nothing. Returns the sum of the subtracted
    /// minima.
    pub fn reduce_rows(&mut self, excluded_rows: &[bool], arrived_cols: &[bool]) -> f64 {
        let n = self.n;
        let mut reduction = 0.0;
        for r in (0..n).filter(|&r| !excluded_rows[r]) {
            let row = &mut self.cells[r * n..(r + 1) * n];
            let min = row
                .iter()
                .zip(arrived_cols)
                .filter(|&(_, &arrived)| !arrived)
                .map(|(&c, _)| c)
                .fold(f64::INFINITY, f64::min);
            if !min.is_finite() || min == 0.0 {
                continue;
            }
            for cell in row.iter_mut().filter(|c| c.is_finite()) {
                *cell -= min;
            }
            reduction += min;
        }
        reduction
    }

    /// Column counterpart of [`reduce_rows`](Self::reduce_rows): subtracts
    /// each non-excluded column's minimum from its finite cells.
    pub fn reduce_columns(&mut self, excluded_cols: &[bool]) -> f64 {
        let n = self.n;
        let mut reduction = 0.0;
        for c in (0..n).filter(|&c| !excluded_cols[c]) {
            let min = (0..n)
                .map(|r| self.cells[r * n + c])
                .fold(f64::INFINITY, f64::min);
            if !min.is_finite() || min == 0.0 {
                continue;
            }
            for r in 0..n {
                let cell = &mut self.cells[r * n + c];
                if cell.is_finite() {
                    *cell -= min;
                }
            }
            reduction += min;
        }
        reduction
    }
}

fn checked_cost(from: usize, to: usize, cost: f64) -> Result<f64, TspError> {
    if cost.is_nan() || cost < 0.0 {
        return Err(TspError::InvalidCost { from, to, cost });
    }
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::{CostTable, EuclideanCity};
    use crate::test_utils::arb_matrix;
    use proptest::prelude::*;

    const INF: f64 = f64::INFINITY;

    fn sample() -> CostMatrix {
        CostMatrix::from_rows(&[
            vec![0.0, 20.0, 30.0, 10.0],
            vec![15.0, 0.0, 16.0, 4.0],
            vec![3.0, 5.0, 0.0, 2.0],
            vec![19.0, 6.0, 18.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_build_sets_infinite_diagonal() {
        let cities = vec![
            EuclideanCity::new("A", 0.0, 0.0),
            EuclideanCity::new("B", 3.0, 4.0),
            EuclideanCity::new("C", 6.0, 8.0),
        ];
        let m = CostMatrix::build(&cities).unwrap();
        assert_eq!(m.size(), 3);
        for i in 0..3 {
            assert!(m.get(i, i).is_infinite());
        }
        assert!((m.get(0, 1) - 5.0).abs() < 1e-12);
        assert!((m.get(0, 2) - 10.0).abs() < 1e-12);
        assert!((m.get(2, 1) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_build_keeps_missing_edges_infinite() {
        let table = CostTable::new(vec![vec![0.0, INF], vec![1.0, 0.0]]);
        let m = CostMatrix::build(&table.cities()).unwrap();
        assert!(m.get(0, 1).is_infinite());
        assert_eq!(m.get(1, 0), 1.0);
    }

    #[test]
    fn test_build_rejects_negative_cost() {
        let table = CostTable::new(vec![vec![0.0, 1.0], vec![-2.0, 0.0]]);
        let err = CostMatrix::build(&table.cities()).unwrap_err();
        assert_eq!(
            err,
            TspError::InvalidCost {
                from: 1,
                to: 0,
                cost: -2.0
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = CostMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, TspError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_rows_rejects_nan() {
        let err = CostMatrix::from_rows(&[vec![0.0, f64::NAN], vec![1.0, 0.0]]).unwrap_err();
        assert!(matches!(err, TspError::InvalidCost { from: 0, to: 1, .. }));
    }

    #[test]
    fn test_cycle_cost() {
        let m = sample();
        assert_eq!(m.cycle_cost(&[0, 1, 2, 3]), 20.0 + 16.0 + 2.0 + 19.0);
        assert_eq!(m.cycle_cost(&[0, 3, 1, 2]), 10.0 + 6.0 + 16.0 + 3.0);
        assert!(m.cycle_cost(&[0]).is_infinite());
    }

    #[test]
    fn test_exclusion_blocks_row_column_and_backtrack() {
        let m = sample();
        let next = m.exclude_edge_and_visited(0, 3);
        assert!(next.row(0).iter().all(|c| c.is_infinite()));
        for r in 0..4 {
            assert!(next.get(r, 3).is_infinite());
        }
        assert!(next.get(3, 0).is_infinite());
        // untouched cells keep their values
        assert_eq!(next.get(1, 2), 16.0);
        assert_eq!(next.get(2, 0), 3.0);
        assert_eq!(next.get(3, 1), 6.0);
        // parent is unchanged
        assert_eq!(m, sample());
    }

    #[test]
    fn test_reduce_rows() {
        let mut m = sample();
        let none = [false; 4];
        let cost = m.reduce_rows(&none, &none);
        assert_eq!(cost, 10.0 + 4.0 + 2.0 + 6.0);
        assert_eq!(m.row(0), &[INF, 10.0, 20.0, 0.0]);
        assert_eq!(m.row(1), &[11.0, INF, 12.0, 0.0]);
        assert_eq!(m.row(2), &[1.0, 3.0, INF, 0.0]);
        assert_eq!(m.row(3), &[13.0, 0.0, 12.0, INF]);
    }

    #[test]
    fn test_reduce_columns_after_rows() {
        let mut m = sample();
        let none = [false; 4];
        let rows = m.reduce_rows(&none, &none);
        let cols = m.reduce_columns(&none);
        assert_eq!(rows, 22.0);
        // column 0 min is 1, column 2 min is 12, columns 1 and 3 already hold a zero
        assert_eq!(cols, 13.0);
        assert_eq!(m.get(2, 0), 0.0);
        assert_eq!(m.get(1, 2), 0.0);
        assert_eq!(m.get(0, 2), 8.0);
    }

    #[test]
    fn test_reduce_skips_excluded_and_empty_rows() {
        let mut m = sample().exclude_edge_and_visited(0, 3);
        let mut excluded = [false; 4];
        excluded[0] = true;
        let mut arrived = [false; 4];
        arrived[3] = true;
        let cost = m.reduce_rows(&excluded, &arrived);
        // row 1: min(15, 16) = 15, row 2: min(3, 5) = 3, row 3: min(6, 18) = 6
        assert_eq!(cost, 15.0 + 3.0 + 6.0);
        assert!(m.row(0).iter().all(|c| c.is_infinite()));
    }

    #[test]
    fn test_fully_excluded_row_contributes_nothing() {
        let mut m = CostMatrix::from_rows(&[vec![0.0, INF], vec![INF, 0.0]]).unwrap();
        let none = [false; 2];
        assert_eq!(m.reduce_rows(&none, &none), 0.0);
        assert_eq!(m.reduce_columns(&none), 0.0);
    }

    proptest! {
        #[test]
        fn prop_exclusion_is_pure(m in arb_matrix(3, 7), from in 0usize..7, to in 0usize..7) {
            let n = m.size();
            let (from, to) = (from % n, to % n);
            prop_assume!(from != to);
            let before = m.clone();
            let first = m.exclude_edge_and_visited(from, to);
            let second = m.exclude_edge_and_visited(from, to);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(&m, &before);
        }

        #[test]
        fn prop_reduction_leaves_zero_in_every_line(m in arb_matrix(3, 7)) {
            let n = m.size();
            let none = vec![false; n];
            let mut m = m;
            m.reduce_rows(&none, &none);
            m.reduce_columns(&none);
            for r in 0..n {
                let row = m.row(r);
                prop_assert!(row.iter().all(|&c| c >= 0.0));
                prop_assert!(row.iter().any(|&c| c == 0.0));
            }
            for c in 0..n {
                prop_assert!((0..n).any(|r| m.get(r, c) == 0.0));
            }
        }
    }
}
