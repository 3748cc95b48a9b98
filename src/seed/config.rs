//! Seeding configuration.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a stand-alone seeding run.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::seed::SeedConfig;
///
/// let config = SeedConfig::default()
///     .with_time_limit(Duration::from_millis(250))
///     .with_start_city(2)
///     .with_seed(7);
/// assert_eq!(config.start_city, 2);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeedConfig {
    /// Wall-clock budget for building a tour.
    pub time_limit: Duration,
    /// City every returned route starts from.
    pub start_city: usize,
    /// Random seed for the random constructor (None for random).
    pub seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(60),
            start_city: 0,
            seed: None,
        }
    }
}

impl SeedConfig {
    /// Sets the time budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Sets the start city.
    pub fn with_start_city(mut self, city: usize) -> Self {
        self.start_city = city;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
