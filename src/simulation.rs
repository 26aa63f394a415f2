//! Random simulation of delivery and pickup events around the depot.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Poisson, Uniform};

use crate::error::RouteError;
use crate::problem::Event;

/// Mean of the Poisson draw behind event demands.
const DEMAND_MEAN: f64 = 2.5;
/// Demand units per Poisson count.
const DEMAND_STEP: f64 = 10.0;
/// Demand given to events whose draw came out as zero.
const MIN_DEMAND: f64 = 5.0;

/// Generate `n_events` events inside the box from `(-x_max, -y_max)` to
/// `(x_max, y_max)`.
///
/// Demands are ten times a Poisson draw of mean 2.5, so most events sit
/// around 20 and few go beyond 60. A zero draw is bumped to 5.
pub fn generate_sub_events<R: Rng>(
    n_events: usize,
    x_max: f64,
    y_max: f64,
    rng: &mut R,
) -> Result<Vec<Event>, RouteError> {
    if !(x_max > 0.0 && y_max > 0.0) {
        return Err(RouteError::InvalidConfig(format!(
            "region extent must be positive, got {} x {}",
            x_max, y_max
        )));
    }

    let xs = Uniform::new(-x_max, x_max);
    let ys = Uniform::new(-y_max, y_max);
    let counts = Poisson::new(DEMAND_MEAN)
        .map_err(|err| RouteError::InvalidConfig(format!("demand distribution: {}", err)))?;

    let events = (0..n_events)
        .map(|_| {
            let x = xs.sample(rng);
            let y = ys.sample(rng);
            let count: f64 = counts.sample(rng);
            let demand = if count == 0.0 {
                MIN_DEMAND
            } else {
                count * DEMAND_STEP
            };
            Event::new(x, y, demand)
        })
        .collect();

    Ok(events)
}

/// Generate delivery and pickup events in the same region from one seeded
/// stream: deliveries first, then pickups.
pub fn generate_events(
    n_deliveries: usize,
    n_pickups: usize,
    x_max: f64,
    y_max: f64,
    seed: Option<u64>,
) -> Result<(Vec<Event>, Vec<Event>), RouteError> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let deliveries = generate_sub_events(n_deliveries, x_max, y_max, &mut rng)?;
    let pickups = generate_sub_events(n_pickups, x_max, y_max, &mut rng)?;

    Ok((deliveries, pickups))
}
