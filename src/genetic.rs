//! Mutation operator: regrow a route from a random prefix.

use rand::Rng;

use crate::builder::RouteBuilder;
use crate::solution::Route;

/// Implements the mutation used by the search.
pub struct Genetic;

impl Genetic {
    /// Cut `route` at a uniformly random position and regrow the tail.
    ///
    /// The child keeps the parent's stops before the cut and diverges
    /// randomly afterwards. An empty parent is regrown from scratch.
    pub fn rebuild_route<R: Rng>(
        &self,
        builder: &RouteBuilder,
        route: &Route,
        rng: &mut R,
    ) -> Route {
        if route.is_empty() {
            return builder.build(rng);
        }

        let cut = rng.gen_range(0..route.len());
        self.rebuild_route_at(builder, route, cut, rng)
    }

    /// Keep the first `cut` stops of `route` and regrow the rest.
    pub fn rebuild_route_at<R: Rng>(
        &self,
        builder: &RouteBuilder,
        route: &Route,
        cut: usize,
        rng: &mut R,
    ) -> Route {
        let prefix = route.prefix(cut);
        let load = builder.committed_load(&prefix);

        builder.build_route(load, prefix, rng)
    }
}
