//! Error type shared by the matrix builder and the solver entry points.
//!
//! Running out of time or finding no tour are regular outcomes and are
//! reported through [`BnbStatus`](crate::bnb::BnbStatus), never through
//! this type.

use thiserror::Error;

/// Errors raised before a search can start.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// A configuration value is unusable for the given city set.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A city reported a negative or NaN travel cost.
    ///
    /// Reduction bounds are only valid over non-negative costs.
    #[error("invalid cost {cost} from city {from} to city {to}")]
    InvalidCost {
        /// Index of the departure city.
        from: usize,
        /// Index of the arrival city.
        to: usize,
        /// The offending value.
        cost: f64,
    },
}
