//! Stochastic construction of routes under the van capacity.

use log::trace;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::config::LoadAccounting;
use crate::problem::{Event, EventKind, Problem, DEPOT};
use crate::solution::{Route, Stop};
use crate::weighting::distance_weights_exp;

/// Outcome of trying to pick the next event of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Index of the selected event in its event set
    Selected(usize),
    /// No unvisited event fits into the remaining capacity
    Exhausted,
}

/// Pick the next event to visit among `events`.
///
/// Events already in `visited` or with a demand above `remaining_capacity`
/// are dropped. One of the remaining events is drawn with probability
/// proportional to its [`distance_weights_exp`] weight seen from `origin`.
pub fn select_next_event<R: Rng>(
    origin: (f64, f64),
    visited: &[usize],
    events: &[Event],
    remaining_capacity: f64,
    rng: &mut R,
) -> Selection {
    let candidate_ids: Vec<usize> = events
        .iter()
        .enumerate()
        .filter(|(idx, event)| event.demand <= remaining_capacity && !visited.contains(idx))
        .map(|(idx, _)| idx)
        .collect();

    if candidate_ids.is_empty() {
        return Selection::Exhausted;
    }

    let candidates: Vec<Event> = candidate_ids.iter().map(|&idx| events[idx]).collect();
    let weights = distance_weights_exp(&candidates, origin);

    // All weights underflow to zero only for absurdly distant candidates
    let pick = match WeightedIndex::new(&weights) {
        Ok(dist) => dist.sample(rng),
        Err(_) => rng.gen_range(0..candidate_ids.len()),
    };

    Selection::Selected(candidate_ids[pick])
}

/// Grows routes for one problem under one load accounting policy.
#[derive(Debug, Clone, Copy)]
pub struct RouteBuilder<'a> {
    problem: &'a Problem,
    accounting: LoadAccounting,
}

impl<'a> RouteBuilder<'a> {
    /// Create a new builder.
    pub fn new(problem: &'a Problem, accounting: LoadAccounting) -> Self {
        RouteBuilder {
            problem,
            accounting,
        }
    }

    pub fn problem(&self) -> &'a Problem {
        self.problem
    }

    pub fn accounting(&self) -> LoadAccounting {
        self.accounting
    }

    /// Demand committed against the van capacity by the stops of `route`.
    pub fn committed_load(&self, route: &Route) -> f64 {
        route
            .stops
            .iter()
            .filter(|stop| self.counts_against_load(stop.kind))
            .filter_map(|stop| self.problem.event(stop))
            .map(|event| event.demand)
            .sum()
    }

    /// Build a fresh route starting at the depot.
    pub fn build<R: Rng>(&self, rng: &mut R) -> Route {
        self.build_route(0.0, Route::new(), rng)
    }

    /// Extend `route` one event at a time until nothing fits anymore.
    ///
    /// While the route has no pickup, a pickup is attempted with probability
    /// `load / van_capacity`, so that the pickup lands roughly uniformly
    /// along the route instead of early on. Otherwise a delivery is
    /// attempted. Growth stops as soon as the attempted kind is exhausted.
    pub fn build_route<R: Rng>(&self, mut load: f64, mut route: Route, rng: &mut R) -> Route {
        let capacity = self.problem.van_capacity;

        loop {
            let try_pickup =
                !route.has_pickup() && capacity > 0.0 && rng.gen::<f64>() < load / capacity;
            let kind = if try_pickup {
                EventKind::Pickup
            } else {
                EventKind::Delivery
            };

            let events = self.problem.events(kind);
            let visited = route.visited(kind);
            let origin = self.origin(&route);

            match select_next_event(origin, &visited, events, capacity - load, rng) {
                Selection::Selected(index) => {
                    if self.counts_against_load(kind) {
                        load += events[index].demand;
                    }
                    trace!("added {:?} {} (load {:.2})", kind, index, load);
                    route.push(Stop { index, kind });
                }
                Selection::Exhausted => break,
            }
        }

        route
    }

    /// Position the next draw is weighted from: the last stop, or the depot.
    fn origin(&self, route: &Route) -> (f64, f64) {
        route
            .last()
            .and_then(|stop| self.problem.event(stop))
            .map(Event::position)
            .unwrap_or(DEPOT)
    }

    fn counts_against_load(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::Delivery => true,
            EventKind::Pickup => self.accounting == LoadAccounting::Shared,
        }
    }
}
