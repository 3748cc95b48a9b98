//! Single store of live subproblems behind two heap indexes.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use super::policy::{FrontierView, PopPolicy};
use super::subproblem::Subproblem;

/// Heap entry for the best-bound view: lowest bound, then oldest, on top.
#[derive(Debug, Clone, Copy)]
struct BoundKey {
    bound: f64,
    id: usize,
}

impl PartialEq for BoundKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BoundKey {}

impl PartialOrd for BoundKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BoundKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .bound
            .total_cmp(&self.bound)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Heap entry for the deepest view: longest path, then oldest, on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DepthKey {
    depth: usize,
    id: usize,
}

impl PartialOrd for DepthKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DepthKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.depth
            .cmp(&other.depth)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Stale heap entries tolerated before an index is rebuilt.
const COMPACT_SLACK: usize = 64;

/// The set of live subproblems, ordered two ways.
///
/// Subproblems live once, in a store keyed by insertion id. Each view is a
/// binary heap of `(key, id)` handles. Popping from one view removes the
/// subproblem from the store; its handle in the other view goes stale and is
/// skipped when it surfaces, so a subproblem is never handed out twice.
/// Both push and pop are O(log n) amortized.
///
/// Ties in either view go to the subproblem pushed first.
///
/// # Examples
///
/// ```
/// use u_tsp::frontier::{PopPolicy, SearchFrontier, Subproblem};
/// use u_tsp::matrix::CostMatrix;
///
/// let costs = CostMatrix::from_rows(&[
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ]).unwrap();
/// let root = Subproblem::root(costs, 0);
///
/// let mut frontier = SearchFrontier::new(PopPolicy::default());
/// frontier.push(root.branch(1));
/// frontier.push(root.branch(2));
/// assert_eq!(frontier.len(), 2);
///
/// let first = frontier.pop_next(0).unwrap();
/// assert_eq!(frontier.len(), 1);
/// assert_ne!(frontier.pop_next(1).unwrap().path, first.path);
/// assert!(frontier.is_empty());
/// ```
#[derive(Debug)]
pub struct SearchFrontier {
    store: HashMap<usize, Subproblem>,
    by_bound: BinaryHeap<BoundKey>,
    by_depth: BinaryHeap<DepthKey>,
    policy: PopPolicy,
    next_id: usize,
}

impl SearchFrontier {
    /// An empty frontier alternating views per `policy`.
    pub fn new(policy: PopPolicy) -> Self {
        Self {
            store: HashMap::new(),
            by_bound: BinaryHeap::new(),
            by_depth: BinaryHeap::new(),
            policy,
            next_id: 0,
        }
    }

    /// The view-selection policy.
    pub fn policy(&self) -> PopPolicy {
        self.policy
    }

    /// Inserts `sp` into both views and returns its handle.
    pub fn push(&mut self, sp: Subproblem) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.by_bound.push(BoundKey {
            bound: sp.lower_bound,
            id,
        });
        self.by_depth.push(DepthKey {
            depth: sp.depth(),
            id,
        });
        self.store.insert(id, sp);
        id
    }

    /// Removes and returns the next subproblem, taken from the view the
    /// policy assigns to `round`.
    pub fn pop_next(&mut self, round: usize) -> Option<Subproblem> {
        self.pop_from(self.policy.view(round))
    }

    /// Removes and returns the top of `view`.
    pub fn pop_from(&mut self, view: FrontierView) -> Option<Subproblem> {
        let popped = loop {
            let id = match view {
                FrontierView::BestBound => self.by_bound.pop()?.id,
                FrontierView::Deepest => self.by_depth.pop()?.id,
            };
            if let Some(sp) = self.store.remove(&id) {
                break sp;
            }
        };
        self.compact();
        Some(popped)
    }

    /// Number of live subproblems.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether no live subproblem remains.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Smallest lower bound among live subproblems.
    pub fn best_bound(&self) -> Option<f64> {
        self.store
            .values()
            .map(|sp| sp.lower_bound)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Drops stale handles once an index has grown well past the store.
    fn compact(&mut self) {
        let limit = 2 * self.store.len() + COMPACT_SLACK;
        if self.by_bound.len() > limit {
            let store = &self.store;
            self.by_bound.retain(|k| store.contains_key(&k.id));
        }
        if self.by_depth.len() > limit {
            let store = &self.store;
            self.by_depth.retain(|k| store.contains_key(&k.id));
        }
    }
}
