//! Validation of finished routes: length, pickup count and load.

use itertools::Itertools;
use std::iter;

use crate::config::LoadAccounting;
use crate::error::RouteError;
use crate::problem::{Event, EventKind, Problem, DEPOT};
use crate::solution::Route;

/// Slack allowed when comparing accumulated demand against the capacity.
pub const CAPACITY_TOLERANCE: f64 = 1e-9;

/// Length of the route from the depot through every stop and back, and
/// whether the route holds exactly one pickup.
///
/// A stop whose index does not exist in its event set is skipped: it adds
/// no movement.
pub fn validate_length_one_pickup(
    route: &Route,
    deliveries: &[Event],
    pickups: &[Event],
) -> (f64, bool) {
    let positions = route.stops.iter().filter_map(|stop| {
        let events = match stop.kind {
            EventKind::Delivery => deliveries,
            EventKind::Pickup => pickups,
        };
        events.get(stop.index).map(Event::position)
    });

    let length = iter::once(DEPOT)
        .chain(positions)
        .chain(iter::once(DEPOT))
        .tuple_windows()
        .map(|(from, to)| distance(from, to))
        .sum();

    (length, route.pickup_count() == 1)
}

/// Drive the finished route and track the load aboard the van.
///
/// The van leaves the depot with every delivery of the route aboard and
/// drops each one at its stop. Under [`LoadAccounting::Shared`] the pickup
/// demand is taken aboard at the pickup stop. Returns the peak load, or
/// `CapacityExceeded` if the load ever goes above the van capacity.
pub fn simulate_load(
    route: &Route,
    problem: &Problem,
    accounting: LoadAccounting,
) -> Result<f64, RouteError> {
    let mut load: f64 = route
        .stops
        .iter()
        .filter(|stop| stop.kind == EventKind::Delivery)
        .filter_map(|stop| problem.event(stop))
        .map(|event| event.demand)
        .sum();
    check_load(0, load, problem.van_capacity)?;
    let mut peak = load;

    for (position, stop) in route.stops.iter().enumerate() {
        let Some(event) = problem.event(stop) else {
            continue;
        };
        match (stop.kind, accounting) {
            (EventKind::Delivery, _) => load -= event.demand,
            (EventKind::Pickup, LoadAccounting::Shared) => load += event.demand,
            (EventKind::Pickup, LoadAccounting::DeliveriesOnly) => {}
        }
        check_load(position + 1, load, problem.van_capacity)?;
        peak = peak.max(load);
    }

    Ok(peak)
}

fn check_load(position: usize, load: f64, capacity: f64) -> Result<(), RouteError> {
    if load > capacity + CAPACITY_TOLERANCE {
        return Err(RouteError::CapacityExceeded {
            position,
            load,
            capacity,
        });
    }
    Ok(())
}

fn distance(from: (f64, f64), to: (f64, f64)) -> f64 {
    let dx = from.0 - to.0;
    let dy = from.1 - to.1;
    (dx * dx + dy * dy).sqrt()
}
