/*!
Route search over a `RouteGraph`.

This module defines:
- `metrics`: summing distance and tariff along a route.
- `greedy`: single-pass nearest-neighbor search under a tariff budget.
- `permutations`: lexicographic permutation iterator used by the exhaustive router.
- `exhaustive`: every full tour between two cities that fits the budget.
- `search`: request/outcome types and the dispatcher the GUI and CLI call.

A search that finds nothing is not an error: greedy returns `GreedyOutcome::NotFound`
and the exhaustive router returns an empty list. `RoutingError` is reserved for bad input
and for internal consistency failures.
*/

pub mod exhaustive;
pub mod greedy;
pub mod metrics;
pub mod permutations;
pub mod search;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::network::{city::City, route_graph::RouteGraph};

pub use exhaustive::exhaustive_routes;
pub use greedy::greedy_route;
pub use metrics::RouteMetrics;
pub use search::{SearchMode, SearchOutcome, SearchRequest, search};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    #[error("Unknown city: {0}")]
    UnknownNode(String),
    #[error("Unknown search mode: {0} (expected \"greedy\" or \"exhaustive\")")]
    UnknownMode(String),
    #[error("Route is empty")]
    EmptyRoute,
    #[error("Route uses missing edge {from} -> {to}")]
    InvalidRoute { from: City, to: City },
    #[error("Route tariff total does not fit in 64 bits")]
    TariffOverflow,
    #[error("Exhaustive search refuses {nodes} cities (limit is {limit})")]
    GraphTooLarge { nodes: usize, limit: usize },
}

pub type RoutingResult<T> = Result<T, RoutingError>;

/// A route together with its aggregate distance and tariff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub route: Vec<City>,
    pub distance: f64,
    pub tariff: u64,
}

impl RouteResult {
    pub fn new(route: Vec<City>, metrics: RouteMetrics) -> Self {
        RouteResult {
            route,
            distance: metrics.distance,
            tariff: metrics.tariff,
        }
    }

    /// Inclusive: a route costing exactly `max_tariff` is within budget.
    pub fn within_budget(&self, max_tariff: u64) -> bool {
        self.tariff <= max_tariff
    }

    /// Consecutive city pairs along the route.
    pub fn legs(&self) -> impl Iterator<Item = (City, City)> + '_ {
        self.route.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn path_string(&self) -> String {
        self.route
            .iter()
            .map(City::label)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

pub(crate) fn ensure_known(graph: &RouteGraph, city: City) -> RoutingResult<()> {
    if graph.contains(city) {
        Ok(())
    } else {
        Err(RoutingError::UnknownNode(city.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use City::*;

    #[test]
    fn test_route_result_helpers() {
        let result = RouteResult::new(
            vec![A, B, E],
            RouteMetrics {
                distance: 6.0,
                tariff: 6000,
            },
        );
        assert_eq!(result.path_string(), "A -> B -> E");
        assert_eq!(result.legs().collect::<Vec<_>>(), vec![(A, B), (B, E)]);
        assert!(result.within_budget(6000));
        assert!(!result.within_budget(5999));
    }

    #[test]
    fn test_unknown_city_in_partial_graph() {
        let graph = RouteGraph::new([A, B], []).unwrap();
        assert!(ensure_known(&graph, A).is_ok());
        assert_eq!(
            ensure_known(&graph, E),
            Err(RoutingError::UnknownNode("E".to_string()))
        );
    }
}
