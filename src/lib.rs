//! # Salesmen
//!
//! Evolutionary search for a short route of a single delivery van that
//! serves a set of delivery points and exactly one pickup point, starting
//! and ending at the depot at (0, 0).
//!
//! Routes are grown stochastically, one nearby event at a time, under the
//! van capacity. The search mutates surviving routes by cutting them at a
//! random point and regrowing the tail, and keeps the shortest valid
//! candidates from one generation to the next.

pub mod builder;
pub mod candidate;
pub mod config;
pub mod error;
pub mod genetic;
pub mod population;
pub mod problem;
pub mod simulation;
pub mod solution;
pub mod utils;
pub mod validator;
pub mod weighting;

use crate::builder::RouteBuilder;
use crate::config::Config;
use crate::error::RouteError;
use crate::population::Population;
use crate::problem::Problem;
use crate::solution::Solution;
use crate::validator::simulate_load;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

/// The main search structure driving the population across generations.
pub struct SearchEngine {
    pub problem: Problem,
    pub population: Population,
    pub config: Config,
    pub best_solution: Option<Solution>,
    pub run_time: Duration,
    pub generation: usize,
    rng: ChaCha8Rng,
}

impl SearchEngine {
    /// Create a new search for the given problem and configuration.
    pub fn new(problem: Problem, config: Config) -> Result<Self, RouteError> {
        config.validate()?;

        let rng = match config.routing_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(SearchEngine {
            problem,
            population: Population::new(&config),
            config,
            best_solution: None,
            run_time: Duration::from_secs(0),
            generation: 0,
            rng,
        })
    }

    /// Initialize the population with routes built from scratch.
    pub fn initialize(&mut self) {
        let builder = RouteBuilder::new(&self.problem, self.config.load_accounting);
        self.population.initialize(&builder, &mut self.rng);
        self.generation = 0;
    }

    /// Run all generations and return the best route found.
    pub fn run(&mut self) -> Result<&Solution, RouteError> {
        let start_time = Instant::now();

        self.initialize();

        let builder = RouteBuilder::new(&self.problem, self.config.load_accounting);
        while self.generation < self.config.generations {
            self.population.evolve(&builder, &mut self.rng);
            self.generation += 1;

            if let Some(best) = self.population.get_best() {
                debug!(
                    "generation {}: best length {:.2} (valid: {})",
                    self.generation, best.length, best.is_valid
                );
            }
        }

        let best = self
            .population
            .get_best()
            .cloned()
            .ok_or(RouteError::EmptyPopulation)?;

        // A route breaking the capacity is a construction bug, never a search outcome
        simulate_load(&best.route, &self.problem, self.config.load_accounting)?;

        self.run_time = start_time.elapsed();
        info!(
            "best route after {} generations: {} stops, length {:.2}, valid: {}",
            self.generation,
            best.route.len(),
            best.length,
            best.is_valid
        );

        let solution = Solution {
            route: best.route,
            length: best.length,
            is_valid: best.is_valid,
            generations: self.generation,
            run_time: self.run_time,
        };
        Ok(&*self.best_solution.insert(solution))
    }
}

/// Search for the single best route of `problem` under `config`.
pub fn single_best(problem: &Problem, config: &Config) -> Result<Solution, RouteError> {
    let mut engine = SearchEngine::new(problem.clone(), config.clone())?;
    let solution = engine.run()?.clone();
    Ok(solution)
}
