//! Alternation between the two frontier orderings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the two orderings over the live subproblems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FrontierView {
    /// Lowest lower bound first.
    BestBound,
    /// Longest partial path first.
    Deepest,
}

/// Round-robin selection of the frontier view.
///
/// With period `k`, round `r` (counting from 0) uses [`FrontierView::Deepest`]
/// when `r % k == k - 1` and [`FrontierView::BestBound`] otherwise, so one pop
/// in `k` goes deep. Period 0 never goes deep; period 1 always does.
///
/// # Examples
///
/// ```
/// use u_tsp::frontier::{FrontierView, PopPolicy};
///
/// let policy = PopPolicy::new(3);
/// let views: Vec<_> = (0..6).map(|r| policy.view(r)).collect();
/// assert_eq!(views, vec![
///     FrontierView::BestBound,
///     FrontierView::BestBound,
///     FrontierView::Deepest,
///     FrontierView::BestBound,
///     FrontierView::BestBound,
///     FrontierView::Deepest,
/// ]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PopPolicy {
    depth_first_period: usize,
}

impl Default for PopPolicy {
    fn default() -> Self {
        Self::new(3)
    }
}

impl PopPolicy {
    /// Goes deep once every `depth_first_period` rounds.
    pub fn new(depth_first_period: usize) -> Self {
        Self { depth_first_period }
    }

    /// Pure best-bound-first.
    pub fn best_bound_only() -> Self {
        Self::new(0)
    }

    /// The configured period.
    pub fn depth_first_period(&self) -> usize {
        self.depth_first_period
    }

    /// View to pop from in `round`.
    pub fn view(&self, round: usize) -> FrontierView {
        match self.depth_first_period {
            0 => FrontierView::BestBound,
            k if round % k == k - 1 => FrontierView::Deepest,
            _ => FrontierView::BestBound,
        }
    }
}
