//! Problem definition: delivery and pickup events served by a single van.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::RouteError;
use crate::solution::Stop;

/// Position of the depot every route starts from and returns to.
pub const DEPOT: (f64, f64) = (0.0, 0.0);

/// A delivery or pickup point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub x: f64,
    pub y: f64,
    /// Capacity consumed while the item is aboard the van. Always positive.
    pub demand: f64,
}

impl Event {
    /// Create a new event.
    pub fn new(x: f64, y: f64, demand: f64) -> Self {
        Event { x, y, demand }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Squared Euclidean distance to a point.
    pub fn squared_distance_to(&self, point: (f64, f64)) -> f64 {
        let dx = self.x - point.0;
        let dy = self.y - point.1;
        dx * dx + dy * dy
    }

    /// Euclidean distance to a point.
    pub fn distance_to(&self, point: (f64, f64)) -> f64 {
        self.squared_distance_to(point).sqrt()
    }
}

/// Which of the two event sets a stop refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Delivery,
    Pickup,
}

impl EventKind {
    /// Single character tag, `d` or `p`.
    pub fn tag(&self) -> char {
        match self {
            EventKind::Delivery => 'd',
            EventKind::Pickup => 'p',
        }
    }
}

/// A routing instance: the events to serve and the van serving them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub deliveries: Vec<Event>,
    pub pickups: Vec<Event>,
    pub van_capacity: f64,
}

impl Problem {
    /// Create a new problem.
    pub fn new(
        name: String,
        deliveries: Vec<Event>,
        pickups: Vec<Event>,
        van_capacity: f64,
    ) -> Self {
        Problem {
            name,
            deliveries,
            pickups,
            van_capacity,
        }
    }

    /// The event set for the given kind.
    pub fn events(&self, kind: EventKind) -> &[Event] {
        match kind {
            EventKind::Delivery => &self.deliveries,
            EventKind::Pickup => &self.pickups,
        }
    }

    /// Resolve a stop to its event, if the index exists in its event set.
    pub fn event(&self, stop: &Stop) -> Option<&Event> {
        self.events(stop.kind).get(stop.index)
    }

    /// Total number of events of both kinds.
    pub fn get_event_count(&self) -> usize {
        self.deliveries.len() + self.pickups.len()
    }

    /// Load a problem from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RouteError> {
        let reader = BufReader::new(File::open(path)?);
        let problem: Problem = serde_json::from_reader(reader)?;

        let all_positive = problem
            .deliveries
            .iter()
            .chain(problem.pickups.iter())
            .all(|event| event.demand > 0.0);
        if !all_positive {
            return Err(RouteError::InvalidConfig(
                "every event must have a positive demand".to_string(),
            ));
        }

        Ok(problem)
    }

    /// Save the problem as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RouteError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
