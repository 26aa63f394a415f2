//! Route and solution representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::problem::EventKind;

/// One visit of the van: an index into the delivery or pickup set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stop {
    pub index: usize,
    pub kind: EventKind,
}

impl Stop {
    pub fn delivery(index: usize) -> Self {
        Stop {
            index,
            kind: EventKind::Delivery,
        }
    }

    pub fn pickup(index: usize) -> Self {
        Stop {
            index,
            kind: EventKind::Pickup,
        }
    }
}

/// An ordered sequence of stops. The depot at both ends is implicit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub stops: Vec<Stop>,
}

impl Route {
    /// Create a new, empty route.
    pub fn new() -> Self {
        Route { stops: Vec::new() }
    }

    pub fn from_stops(stops: Vec<Stop>) -> Self {
        Route { stops }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn push(&mut self, stop: Stop) {
        self.stops.push(stop);
    }

    pub fn last(&self) -> Option<&Stop> {
        self.stops.last()
    }

    /// The prefix made of the first `len` stops.
    pub fn prefix(&self, len: usize) -> Route {
        Route::from_stops(self.stops[..len.min(self.stops.len())].to_vec())
    }

    /// The type sequence of the route, one kind per stop.
    pub fn kinds(&self) -> Vec<EventKind> {
        self.stops.iter().map(|stop| stop.kind).collect()
    }

    /// Indices already visited among events of the given kind, in visiting order.
    pub fn visited(&self, kind: EventKind) -> Vec<usize> {
        self.stops
            .iter()
            .filter(|stop| stop.kind == kind)
            .map(|stop| stop.index)
            .collect()
    }

    pub fn pickup_count(&self) -> usize {
        self.stops
            .iter()
            .filter(|stop| stop.kind == EventKind::Pickup)
            .count()
    }

    pub fn has_pickup(&self) -> bool {
        self.stops.iter().any(|stop| stop.kind == EventKind::Pickup)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "depot")?;
        for stop in &self.stops {
            write!(f, " -> {}{}", stop.kind.tag(), stop.index)?;
        }
        write!(f, " -> depot")
    }
}

/// The answer of a search run.
#[derive(Clone, Serialize, Deserialize)]
pub struct Solution {
    pub route: Route,
    /// Length of the route, depot to depot
    pub length: f64,
    /// Whether the route holds exactly one pickup
    pub is_valid: bool,
    /// Number of generations the search ran
    pub generations: usize,
    pub run_time: Duration,
}

impl Solution {
    /// Number of stops on the route.
    pub fn get_stop_count(&self) -> usize {
        self.route.len()
    }
}

impl fmt::Debug for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solution:")?;
        writeln!(f, "  Length: {:.2}", self.length)?;
        writeln!(f, "  Valid: {}", self.is_valid)?;
        writeln!(f, "  Stops: {}", self.route.len())?;
        writeln!(f, "  Generations: {}", self.generations)?;
        writeln!(f, "  Route: {}", self.route)?;

        Ok(())
    }
}
