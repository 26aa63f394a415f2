//! Scored routes competing in the population.

use std::cmp::Ordering;

use crate::problem::Problem;
use crate::solution::Route;
use crate::validator::validate_length_one_pickup;

/// A route together with its fitness.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub route: Route,
    /// Length of the route, depot to depot
    pub length: f64,
    /// Whether the route holds exactly one pickup
    pub is_valid: bool,
}

impl Candidate {
    /// Score a route against the problem.
    pub fn new(route: Route, problem: &Problem) -> Self {
        let (length, is_valid) =
            validate_length_one_pickup(&route, &problem.deliveries, &problem.pickups);
        Candidate {
            route,
            length,
            is_valid,
        }
    }

    /// Length if the route is valid, infinity otherwise.
    pub fn get_valid_length(&self) -> f64 {
        if self.is_valid {
            self.length
        } else {
            f64::INFINITY
        }
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    /// Valid candidates come first, shorter ones before longer ones.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .is_valid
            .cmp(&self.is_valid)
            .then_with(|| self.length.total_cmp(&other.length))
    }
}
