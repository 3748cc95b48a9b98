use proptest::prelude::*;

use crate::city::{CostTable, EuclideanCity, TableCity};
use crate::matrix::CostMatrix;

/// Random square integer-valued cost rows, `n` in `min_n..=max_n`.
pub fn arb_cost_rows(min_n: usize, max_n: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
    (min_n..=max_n).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(0u8..100, n), n).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, r)| {
                    r.into_iter()
                        .enumerate()
                        .map(|(j, c)| if i == j { 0.0 } else { f64::from(c) })
                        .collect()
                })
                .collect()
        })
    })
}

pub fn arb_matrix(min_n: usize, max_n: usize) -> impl Strategy<Value = CostMatrix> {
    arb_cost_rows(min_n, max_n).prop_map(|rows| CostMatrix::from_rows(&rows).unwrap())
}

pub fn table_cities(rows: Vec<Vec<f64>>) -> Vec<TableCity> {
    CostTable::new(rows).cities()
}

pub fn unit_square() -> Vec<EuclideanCity> {
    vec![
        EuclideanCity::new("A", 0.0, 0.0),
        EuclideanCity::new("B", 1.0, 0.0),
        EuclideanCity::new("C", 1.0, 1.0),
        EuclideanCity::new("D", 0.0, 1.0),
    ]
}

/// Five cities where nearest-neighbour from `A` yields A-B-C-D-E (cost 20)
/// while the optimum is A-B-C-E-D (cost 17).
pub fn greedy_trap() -> Vec<TableCity> {
    let pairs = [
        (0, 1, 1.0),
        (0, 2, 10.0),
        (0, 3, 12.0),
        (0, 4, 16.0),
        (1, 2, 1.0),
        (1, 3, 10.0),
        (1, 4, 10.0),
        (2, 3, 1.0),
        (2, 4, 2.0),
        (3, 4, 1.0),
    ];
    let mut rows = vec![vec![0.0; 5]; 5];
    for (i, j, c) in pairs {
        rows[i][j] = c;
        rows[j][i] = c;
    }
    table_cities(rows)
}

/// Cheapest cost of closing a cycle that starts with `prefix`, by exhaustive
/// enumeration of the remaining cities.
pub fn brute_force_completion(matrix: &CostMatrix, prefix: &[usize]) -> f64 {
    let n = matrix.size();
    let mut visited = vec![false; n];
    let mut cost = 0.0;
    for &c in prefix {
        visited[c] = true;
    }
    for w in prefix.windows(2) {
        cost += matrix.get(w[0], w[1]);
    }
    let mut path = prefix.to_vec();
    extend(matrix, &mut path, &mut visited, cost)
}

/// Optimal tour cost rooted at city 0.
pub fn brute_force_optimum(matrix: &CostMatrix) -> f64 {
    brute_force_completion(matrix, &[0])
}

fn extend(matrix: &CostMatrix, path: &mut Vec<usize>, visited: &mut [bool], cost: f64) -> f64 {
    let n = matrix.size();
    let last = path[path.len() - 1];
    if path.len() == n {
        return cost + matrix.get(last, path[0]);
    }
    let mut best = f64::INFINITY;
    for next in 0..n {
        if visited[next] {
            continue;
        }
        visited[next] = true;
        path.push(next);
        best = best.min(extend(matrix, path, visited, cost + matrix.get(last, next)));
        path.pop();
        visited[next] = false;
    }
    best
}
