use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::{
    network::{city::City, edge::EdgeWeight, route_graph::RouteGraph},
    routing::{RouteResult, RoutingResult, ensure_known, metrics::aggregate},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GreedyOutcome {
    Found(RouteResult),
    /// The search hit a city with no unvisited neighbor left inside the budget.
    NotFound,
}

impl GreedyOutcome {
    pub fn into_route(self) -> Option<RouteResult> {
        match self {
            GreedyOutcome::Found(result) => Some(result),
            GreedyOutcome::NotFound => None,
        }
    }
}

/// Walk from `start` towards `end`, always taking the closest unvisited neighbor
/// whose tariff still fits into `max_tariff`.
///
/// Never backtracks, so it can miss routes the exhaustive search finds.
/// Ties on distance go to `end` first, then to the lowest city label.
pub fn greedy_route(
    graph: &RouteGraph,
    start: City,
    end: City,
    max_tariff: u64,
) -> RoutingResult<GreedyOutcome> {
    ensure_known(graph, start)?;
    ensure_known(graph, end)?;

    let mut route = vec![start];
    let mut current = start;
    let mut spent: u64 = 0;

    while current != end {
        let next = graph
            .neighbors(current)
            .filter(|(city, _)| !route.contains(city))
            .filter_map(|(city, weight)| {
                // Overflowing the running total counts as over budget
                let total = spent.checked_add(weight.tariff)?;
                (total <= max_tariff).then_some((city, weight, total))
            })
            .min_by(|a, b| candidate_order(a, b, end));

        let Some((city, weight, total)) = next else {
            debug!(%current, spent, max_tariff, "Greedy search reached a dead end");
            return Ok(GreedyOutcome::NotFound);
        };

        spent = total;
        route.push(city);
        debug!(from = %current, to = %city, distance = weight.distance, spent, "Greedy step");
        current = city;
    }

    let metrics = aggregate(&route, graph)?;
    Ok(GreedyOutcome::Found(RouteResult::new(route, metrics)))
}

/// Candidates are `(neighbor, edge, tariff spent after taking it)`.
fn candidate_order(
    a: &(City, EdgeWeight, u64),
    b: &(City, EdgeWeight, u64),
    end: City,
) -> Ordering {
    a.1.distance
        .total_cmp(&b.1.distance)
        .then_with(|| (a.0 != end).cmp(&(b.0 != end)))
        .then_with(|| a.0.cmp(&b.0))
}
