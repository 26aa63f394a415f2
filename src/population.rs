//! Population management for the evolutionary search.

use log::trace;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::builder::RouteBuilder;
use crate::candidate::Candidate;
use crate::config::Config;
use crate::genetic::Genetic;

/// The candidates alive in the current generation.
pub struct Population {
    /// Survivors, best first after every selection
    pub candidates: Vec<Candidate>,
    /// Number of candidates kept per generation
    pub survival_rate: usize,
    /// Children spawned by each survivor
    pub spawn_rate: usize,
    /// Build candidates on the rayon thread pool
    pub parallel: bool,
}

impl Population {
    /// Create a new, empty population with the given configuration.
    pub fn new(config: &Config) -> Self {
        Population {
            candidates: Vec::with_capacity(config.survival_rate * (config.spawn_rate + 1)),
            survival_rate: config.survival_rate,
            spawn_rate: config.spawn_rate,
            parallel: config.parallel,
        }
    }

    /// Fill the population with routes built from scratch.
    pub fn initialize<R: Rng>(&mut self, builder: &RouteBuilder, rng: &mut R) {
        let seeds: Vec<u64> = (0..self.survival_rate).map(|_| rng.gen()).collect();

        self.candidates = self.build_all(seeds, |seed| {
            let mut stream = ChaCha8Rng::seed_from_u64(seed);
            Candidate::new(builder.build(&mut stream), builder.problem())
        });

        self.candidates.sort();
    }

    /// Run one generation: spawn children, then keep the best candidates.
    pub fn evolve<R: Rng>(&mut self, builder: &RouteBuilder, rng: &mut R) {
        self.spawn_children(builder, rng);
        self.select_survivors();
    }

    /// Let every survivor spawn `spawn_rate` mutated children.
    ///
    /// Each child gets its own random stream seeded from `rng` in a fixed
    /// order, so sequential and parallel runs produce the same children.
    pub fn spawn_children<R: Rng>(&mut self, builder: &RouteBuilder, rng: &mut R) {
        let jobs: Vec<(usize, u64)> = (0..self.candidates.len())
            .flat_map(|parent| (0..self.spawn_rate).map(move |_| parent))
            .map(|parent| (parent, rng.gen()))
            .collect();

        let parents = &self.candidates;
        let children = self.build_all(jobs, |(parent, seed)| {
            let mut stream = ChaCha8Rng::seed_from_u64(seed);
            let route = Genetic.rebuild_route(builder, &parents[parent].route, &mut stream);
            Candidate::new(route, builder.problem())
        });

        trace!("spawned {} children", children.len());
        self.candidates.extend(children);
    }

    /// Keep the `survival_rate` best candidates.
    ///
    /// The sort is stable: among equally fit candidates, the one met first
    /// survives.
    pub fn select_survivors(&mut self) {
        self.candidates.sort();
        self.candidates.truncate(self.survival_rate);
    }

    /// Get the best candidate in the population.
    pub fn get_best(&self) -> Option<&Candidate> {
        self.candidates.iter().min()
    }

    /// Get the best candidate holding exactly one pickup.
    pub fn get_best_valid(&self) -> Option<&Candidate> {
        self.candidates.iter().filter(|c| c.is_valid).min()
    }

    pub fn get_pop_size(&self) -> usize {
        self.candidates.len()
    }

    fn build_all<T, F>(&self, jobs: Vec<T>, build: F) -> Vec<Candidate>
    where
        T: Send,
        F: Fn(T) -> Candidate + Sync + Send,
    {
        if self.parallel {
            jobs.into_par_iter().map(build).collect()
        } else {
            jobs.into_iter().map(build).collect()
        }
    }
}
