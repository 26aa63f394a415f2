//! Draw weights for the random selection of the next event.
//!
//! Both functions take a batch of candidate events and a reference point
//! (the depot or the last visited stop) and return one weight per
//! candidate, in input order. Nearby candidates get larger weights.

use crate::problem::Event;

/// Length scale of the exponential fall-off in [`distance_weights_exp`].
pub const EXP_DISTANCE_SCALE: f64 = 100.0;

/// Weights inversely proportional to the distance from `origin`.
///
/// A candidate sitting exactly on `origin` is weighted as if it were at
/// distance 1.
pub fn distance_weights(events: &[Event], origin: (f64, f64)) -> Vec<f64> {
    events
        .iter()
        .map(|event| {
            let sq_dist = event.squared_distance_to(origin);
            let sq_dist = if sq_dist == 0.0 { 1.0 } else { sq_dist };
            sq_dist.powf(-0.5)
        })
        .collect()
}

/// Weights falling off exponentially with the distance from `origin`.
///
/// Far candidates are penalised much harder than by [`distance_weights`],
/// which keeps route growth locally clustered.
pub fn distance_weights_exp(events: &[Event], origin: (f64, f64)) -> Vec<f64> {
    events
        .iter()
        .map(|event| (-event.distance_to(origin) / EXP_DISTANCE_SCALE).exp())
        .collect()
}
