//! Branch-and-bound configuration.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::TspError;
use crate::frontier::PopPolicy;
use crate::seed::{SeedConfig, SeedStrategy};

/// Configuration for [`BnbRunner`](super::BnbRunner).
///
/// # Defaults
///
/// ```
/// use std::time::Duration;
/// use u_tsp::bnb::BnbConfig;
/// use u_tsp::seed::SeedStrategy;
///
/// let config = BnbConfig::default();
/// assert_eq!(config.time_limit, Duration::from_secs(60));
/// assert_eq!(config.seed_strategy, SeedStrategy::Greedy);
/// assert_eq!(config.depth_first_period, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use std::time::Duration;
/// use u_tsp::bnb::BnbConfig;
/// use u_tsp::seed::SeedStrategy;
///
/// let config = BnbConfig::default()
///     .with_time_limit(Duration::from_secs(10))
///     .with_seed_time_limit(Duration::from_millis(500))
///     .with_seed_strategy(SeedStrategy::Random)
///     .with_depth_first_period(4)
///     .with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BnbConfig {
    /// Wall-clock budget for the whole solve, seeding included.
    ///
    /// Checked once per popped subproblem; a single expansion is never
    /// interrupted, so the run may overshoot by one expansion. Unless
    /// `seed_time_limit` is set, seeding shares this budget: a near-zero
    /// limit leaves no time to build a seed tour either.
    /// [`Duration::MAX`] means no limit.
    pub time_limit: Duration,

    /// Budget for building the seed tour.
    ///
    /// `None` gives seeding the whole `time_limit`. Seeding runs even when
    /// `time_limit` is zero if this is positive, so a slice longer than
    /// `time_limit` lets the run exceed it by up to the slice.
    pub seed_time_limit: Option<Duration>,

    /// How the initial best-so-far tour is built.
    pub seed_strategy: SeedStrategy,

    /// One pop in this many is taken deepest-first, the rest best-bound-first.
    ///
    /// 0 disables the deepest-first view.
    pub depth_first_period: usize,

    /// City every tour starts and ends at.
    pub start_city: usize,

    /// Random seed for [`SeedStrategy::Random`] (None for random).
    pub seed: Option<u64>,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(60),
            seed_time_limit: None,
            seed_strategy: SeedStrategy::default(),
            depth_first_period: 3,
            start_city: 0,
            seed: None,
        }
    }
}

impl BnbConfig {
    /// Sets the overall time budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Sets a separate budget for seeding.
    pub fn with_seed_time_limit(mut self, limit: Duration) -> Self {
        self.seed_time_limit = Some(limit);
        self
    }

    /// Sets the seeding strategy.
    pub fn with_seed_strategy(mut self, strategy: SeedStrategy) -> Self {
        self.seed_strategy = strategy;
        self
    }

    /// Sets how often the deepest-first view is used.
    pub fn with_depth_first_period(mut self, period: usize) -> Self {
        self.depth_first_period = period;
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

    /// Frontier view policy derived from `depth_first_period`.
    pub fn pop_policy(&self) -> PopPolicy {
        PopPolicy::new(self.depth_first_period)
    }

    /// Configuration handed to the seed constructor.
    pub fn seed_config(&self) -> SeedConfig {
        SeedConfig {
            time_limit: self.seed_time_limit.unwrap_or(self.time_limit),
            start_city: self.start_city,
            seed: self.seed,
        }
    }

    /// Checks the configuration against a city set of `city_count` cities.
    pub fn validate(&self, city_count: usize) -> Result<(), TspError> {
        if self.start_city >= city_count {
            return Err(TspError::InvalidConfig(format!(
                "start_city {} out of range for {city_count} cities",
                self.start_city
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = BnbConfig::default();
        assert_eq!(config.time_limit, Duration::from_secs(60));
        assert!(config.seed_time_limit.is_none());
        assert_eq!(config.seed_strategy, SeedStrategy::Greedy);
        assert_eq!(config.depth_first_period, 3);
        assert_eq!(config.start_city, 0);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = BnbConfig::default()
            .with_time_limit(Duration::from_millis(1500))
            .with_seed_time_limit(Duration::from_millis(10))
            .with_seed_strategy(SeedStrategy::None)
            .with_depth_first_period(0)
            .with_start_city(3)
            .with_seed(123);

        assert_eq!(config.time_limit, Duration::from_millis(1500));
        assert_eq!(config.seed_time_limit, Some(Duration::from_millis(10)));
        assert_eq!(config.seed_strategy, SeedStrategy::None);
        assert_eq!(config.pop_policy(), PopPolicy::best_bound_only());
        assert_eq!(config.start_city, 3);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_seed_slice_defaults_to_whole_budget() {
        let config = BnbConfig::default().with_time_limit(Duration::from_secs(2));
        assert_eq!(config.seed_config().time_limit, Duration::from_secs(2));

        let config = config.with_seed_time_limit(Duration::from_millis(5));
        assert_eq!(config.seed_config().time_limit, Duration::from_millis(5));
    }

    #[test]
    fn test_validate_start_city() {
        let config = BnbConfig::default().with_start_city(4);
        assert!(config.validate(5).is_ok());
        assert!(matches!(config.validate(4), Err(TspError::InvalidConfig(_))));
    }
}
