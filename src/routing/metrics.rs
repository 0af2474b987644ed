use serde::{Deserialize, Serialize};

use crate::{
    network::{city::City, route_graph::RouteGraph},
    routing::{RoutingError, RoutingResult},
};

/// Total distance and tariff of a route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    pub distance: f64,
    pub tariff: u64,
}

/// Sum edge distances and tariffs over consecutive pairs of `route`.
///
/// A single-city route costs nothing. Fails with `InvalidRoute` on the first pair
/// that has no edge in `graph`, and with `TariffOverflow` when the tariff total does
/// not fit in a `u64`.
pub fn aggregate(route: &[City], graph: &RouteGraph) -> RoutingResult<RouteMetrics> {
    if route.is_empty() {
        return Err(RoutingError::EmptyRoute);
    }

    route
        .windows(2)
        .try_fold(RouteMetrics::default(), |acc, pair| -> RoutingResult<RouteMetrics> {
            let (from, to) = (pair[0], pair[1]);
            let weight = graph
                .weight(from, to)
                .ok_or(RoutingError::InvalidRoute { from, to })?;
            let tariff = acc
                .tariff
                .checked_add(weight.tariff)
                .ok_or(RoutingError::TariffOverflow)?;
            Ok(RouteMetrics {
                distance: acc.distance + weight.distance,
                tariff,
            })
        })
}
