//! Configuration parameters for the route search.

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// How demand is charged against the van capacity while a route is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadAccounting {
    /// Only delivery demand is committed. The pickup is carried outside the
    /// accounted load, as if it went straight back to the depot.
    #[default]
    DeliveriesOnly,
    /// Delivery and pickup demand share the same capacity.
    Shared,
}

/// Configuration settings for the evolutionary search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of rounds of evolution
    pub generations: usize,
    /// Children spawned by every survivor in each generation
    pub spawn_rate: usize,
    /// Number of candidates kept from one generation to the next
    pub survival_rate: usize,
    /// Seed for the routing randomness; drawn from entropy when absent
    pub routing_seed: Option<u64>,
    pub load_accounting: LoadAccounting,
    /// Build children on the rayon thread pool
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            generations: 100,
            spawn_rate: 5,
            survival_rate: 10,
            routing_seed: None,
            load_accounting: LoadAccounting::DeliveriesOnly,
            parallel: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Set the number of children per survivor.
    pub fn with_spawn_rate(mut self, rate: usize) -> Self {
        self.spawn_rate = rate;
        self
    }

    /// Set the number of survivors per generation.
    pub fn with_survival_rate(mut self, rate: usize) -> Self {
        self.survival_rate = rate;
        self
    }

    /// Set the routing seed.
    pub fn with_routing_seed(mut self, seed: u64) -> Self {
        self.routing_seed = Some(seed);
        self
    }

    /// Set the load accounting policy.
    pub fn with_load_accounting(mut self, accounting: LoadAccounting) -> Self {
        self.load_accounting = accounting;
        self
    }

    /// Enable or disable parallel child construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check that the parameters describe a runnable search.
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.survival_rate == 0 {
            return Err(RouteError::InvalidConfig(
                "survival rate must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
