use std::{
    fmt::Display,
    str::FromStr,
    time::{Duration, Instant},
};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    network::{city::City, route_graph::RouteGraph},
    routing::{RouteResult, RoutingError, RoutingResult, exhaustive_routes, greedy_route},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Greedy,
    Exhaustive,
}

impl SearchMode {
    pub const ALL: [SearchMode; 2] = [SearchMode::Greedy, SearchMode::Exhaustive];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Greedy => "greedy",
            SearchMode::Exhaustive => "exhaustive",
        }
    }
}

impl Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SearchMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RoutingError::UnknownMode(s.to_string()))
    }
}

/// What the user asked for: endpoints, strategy, and the tariff budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub start: City,
    pub end: City,
    pub mode: SearchMode,
    pub max_tariff: u64,
}

/// Routes found for a request. Greedy contributes at most one route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub request: SearchRequest,
    pub routes: Vec<RouteResult>,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Human readable result, one line per route.
    pub fn summary_lines(&self) -> Vec<String> {
        let max_tariff = self.request.max_tariff;
        if self.routes.is_empty() {
            return vec![format!(
                "No valid route found within the maximum tariff of {max_tariff}"
            )];
        }

        let mut lines = Vec::with_capacity(self.routes.len() + 1);
        lines.push(format!("Routes within the maximum tariff of {max_tariff}:"));
        for result in &self.routes {
            lines.push(format!(
                "Route: {} | Distance: {} | Total Tarif: {}",
                result.path_string(),
                result.distance,
                result.tariff
            ));
        }
        lines
    }
}

/// Run the strategy named in `request` against `graph`.
pub fn search(graph: &RouteGraph, request: &SearchRequest) -> RoutingResult<SearchOutcome> {
    let started = Instant::now();
    let SearchRequest {
        start,
        end,
        mode,
        max_tariff,
    } = *request;

    let routes = match mode {
        SearchMode::Greedy => greedy_route(graph, start, end, max_tariff)?
            .into_route()
            .into_iter()
            .collect(),
        SearchMode::Exhaustive => exhaustive_routes(graph, start, end, max_tariff)?,
    };

    let elapsed = started.elapsed();
    info!(
        %start,
        %end,
        %mode,
        max_tariff,
        routes = routes.len(),
        elapsed = %humantime::format_duration(elapsed),
        "Route search finished"
    );

    Ok(SearchOutcome {
        request: *request,
        routes,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use City::*;

    fn request(start: City, end: City, mode: SearchMode, max_tariff: u64) -> SearchRequest {
        SearchRequest {
            start,
            end,
            mode,
            max_tariff,
        }
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("greedy".parse::<SearchMode>().unwrap(), SearchMode::Greedy);
        assert_eq!("Exhaustive".parse::<SearchMode>().unwrap(), SearchMode::Exhaustive);
        assert_eq!(
            "dijkstra".parse::<SearchMode>(),
            Err(RoutingError::UnknownMode("dijkstra".to_string()))
        );
    }

    #[test]
    fn test_greedy_dispatch() {
        let graph = RouteGraph::demo();
        let outcome = search(&graph, &request(A, E, SearchMode::Greedy, 3000)).unwrap();
        assert_eq!(outcome.routes.len(), 1);
        assert_eq!(outcome.routes[0].route, vec![A, E]);
        assert_eq!(
            outcome.summary_lines(),
            vec![
                "Routes within the maximum tariff of 3000:".to_string(),
                "Route: A -> E | Distance: 3 | Total Tarif: 3000".to_string(),
            ]
        );

        let outcome = search(&graph, &request(A, E, SearchMode::Greedy, 2000)).unwrap();
        assert!(outcome.is_empty());
        assert_eq!(
            outcome.summary_lines(),
            vec!["No valid route found within the maximum tariff of 2000".to_string()]
        );
    }

    #[test]
    fn test_exhaustive_dispatch() {
        let graph = RouteGraph::demo();
        let outcome = search(&graph, &request(A, E, SearchMode::Exhaustive, 20000)).unwrap();
        assert_eq!(outcome.routes.len(), 6);
        assert_eq!(outcome.summary_lines().len(), 7);
        assert_eq!(
            outcome.summary_lines()[1],
            "Route: A -> B -> C -> D -> E | Distance: 15 | Total Tarif: 15000"
        );

        let outcome = search(&graph, &request(A, E, SearchMode::Exhaustive, 1)).unwrap();
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_errors_propagate() {
        let graph = RouteGraph::new([A, B], []).unwrap();
        for mode in SearchMode::ALL {
            assert_eq!(
                search(&graph, &request(A, C, mode, 10)),
                Err(RoutingError::UnknownNode("C".to_string()))
            );
        }
    }

    #[test]
    fn test_outcome_serializes_without_timing() {
        let graph = RouteGraph::demo();
        let outcome = search(&graph, &request(A, E, SearchMode::Greedy, 3000)).unwrap();
        let json: serde_json::Value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["request"]["mode"], "greedy");
        assert_eq!(json["routes"][0]["route"], serde_json::json!(["A", "E"]));
        assert_eq!(json["routes"][0]["tariff"], 3000);
        assert!(json.get("elapsed").is_none());
    }
}
