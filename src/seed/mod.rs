//! Initial tour construction.
//!
//! Branch and bound prunes against the best tour known so far, so it pays
//! to start with a cheap but feasible tour. Two constructors are provided:
//!
//! - **Greedy** nearest-neighbour: from the start city, always move to the
//!   closest unvisited city. O(n²) cost evaluations, usually within a few
//!   tens of percent of optimal.
//! - **Random**: sample uniform permutations until one closes into a
//!   finite-cost cycle. Useful as a baseline and on sparse cost tables.
//!
//! Both honour a deadline and report failure rather than returning an
//! infeasible tour.

mod config;
mod greedy;
mod random;
mod runner;
mod types;

pub use config::SeedConfig;
pub use greedy::greedy_tour;
pub use random::{random_tour, RandomSearch, UNBOUNDED_ATTEMPTS};
pub use runner::SeedRunner;
pub use types::{SeedResult, SeedStrategy};
