//! Branch and Bound (B&B) for the Traveling Salesperson Problem.
//!
//! An anytime exact solver: it keeps the best tour found so far, explores a
//! tree of partial tours, and discards every subtree whose reduced-matrix
//! lower bound cannot beat that tour. Given enough time the frontier empties
//! and the tour is optimal; otherwise the best tour found when the budget
//! expires is returned.
//!
//! # References
//!
//! - Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//!   Salesman Problem", *Operations Research* 11(6), 972-989.
//! - Lawler & Wood (1966), "Branch-and-Bound Methods: A Survey",
//!   *Operations Research* 14(4), 699-719.

mod config;
mod runner;
mod types;

pub use config::BnbConfig;
pub use runner::BnbRunner;
pub use types::{BnbResult, BnbStatus, SearchStats};
