//! Error type shared by the routing library.

use std::fmt;
use std::io;

/// Errors raised while configuring a search, loading problems or checking routes.
#[derive(Debug)]
pub enum RouteError {
    /// The load carried by the van exceeded its capacity after serving `position` stops.
    /// A route coming out of the search must never trigger this.
    CapacityExceeded {
        position: usize,
        load: f64,
        capacity: f64,
    },
    /// A configuration or simulation parameter is out of range.
    InvalidConfig(String),
    /// The search ended without any candidate in its population.
    EmptyPopulation,
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::CapacityExceeded {
                position,
                load,
                capacity,
            } => write!(
                f,
                "load {:.2} exceeds van capacity {:.2} after {} stops",
                load, capacity, position
            ),
            RouteError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            RouteError::EmptyPopulation => write!(f, "population is empty"),
            RouteError::Io(err) => write!(f, "i/o error: {}", err),
            RouteError::Parse(err) => write!(f, "malformed problem file: {}", err),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::Io(err) => Some(err),
            RouteError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for RouteError {
    fn from(err: io::Error) -> Self {
        RouteError::Io(err)
    }
}

impl From<serde_json::Error> for RouteError {
    fn from(err: serde_json::Error) -> Self {
        RouteError::Parse(err)
    }
}
