//! Live search nodes and the frontier that orders them.
//!
//! A [`Subproblem`] is a partial tour together with its reduced cost matrix
//! and lower bound. The [`SearchFrontier`] holds every live subproblem once
//! and indexes it twice:
//!
//! - **best-bound-first**: ascending lower bound, drives toward a proof of
//!   optimality;
//! - **deepest-first**: descending path length, drives toward complete tours
//!   that tighten the pruning threshold.
//!
//! A [`PopPolicy`] decides which index serves each pop.

mod policy;
mod queue;
mod subproblem;

pub use policy::{FrontierView, PopPolicy};
pub use queue::SearchFrontier;
pub use subproblem::Subproblem;
