use tracing::debug;

use crate::{
    network::{city::City, route_graph::RouteGraph},
    routing::{
        RouteResult, RoutingError, RoutingResult, ensure_known, metrics::aggregate,
        permutations::Permutations,
    },
};

/// Largest graph the exhaustive router accepts. The search visits `n!` permutations.
///
/// `City` currently has five variants, so graphs built from it stay below the limit.
pub const MAX_EXHAUSTIVE_NODES: usize = 10;

/// Every tour that starts at `start`, ends at `end`, visits each city of the graph
/// exactly once, and costs at most `max_tariff`.
///
/// Results come in lexicographic order of the tour (cities compared by label), so the
/// first entry is the smallest qualifying tour in that order, not the cheapest one.
/// Permutations that would use a missing edge are skipped. Returns an empty list when
/// nothing qualifies.
pub fn exhaustive_routes(
    graph: &RouteGraph,
    start: City,
    end: City,
    max_tariff: u64,
) -> RoutingResult<Vec<RouteResult>> {
    ensure_known(graph, start)?;
    ensure_known(graph, end)?;

    let cities = graph.cities();
    check_enumerable(cities.len())?;

    let mut candidates = 0usize;
    let mut results = Vec::new();
    for tour in Permutations::new(cities) {
        if tour.first() != Some(&start) || tour.last() != Some(&end) {
            continue;
        }
        if !is_walkable(graph, &tour) {
            continue;
        }
        candidates += 1;

        let metrics = match aggregate(&tour, graph) {
            Ok(metrics) => metrics,
            // A total past u64::MAX is over any budget
            Err(RoutingError::TariffOverflow) => continue,
            Err(e) => return Err(e),
        };
        if metrics.tariff <= max_tariff {
            results.push(RouteResult::new(tour, metrics));
        }
    }

    debug!(
        %start,
        %end,
        max_tariff,
        candidates,
        accepted = results.len(),
        "Exhaustive search finished"
    );
    Ok(results)
}

fn check_enumerable(nodes: usize) -> RoutingResult<()> {
    if nodes > MAX_EXHAUSTIVE_NODES {
        return Err(RoutingError::GraphTooLarge {
            nodes,
            limit: MAX_EXHAUSTIVE_NODES,
        });
    }
    Ok(())
}

fn is_walkable(graph: &RouteGraph, tour: &[City]) -> bool {
    tour.windows(2)
        .all(|pair| graph.weight(pair[0], pair[1]).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::edge::EdgeSpec;
    use crate::routing::{greedy_route, metrics::aggregate};
    use City::*;

    #[test]
    fn test_generous_budget_lists_all_tours() {
        let graph = RouteGraph::demo();
        let results = exhaustive_routes(&graph, A, E, 20000).unwrap();
        // B, C, D in any order between A and E
        assert_eq!(results.len(), 6);

        let first = &results[0];
        assert_eq!(first.route, vec![A, B, C, D, E]);
        assert_eq!(first.distance, 15.0);
        assert_eq!(first.tariff, 15000);

        for result in &results {
            assert_eq!(result.route.len(), 5);
            assert_eq!(result.route.first(), Some(&A));
            assert_eq!(result.route.last(), Some(&E));
            let metrics = aggregate(&result.route, &graph).unwrap();
            assert_eq!(result.distance, metrics.distance);
            assert_eq!(result.tariff, metrics.tariff);
        }

        let routes: Vec<_> = results.iter().map(|r| r.route.clone()).collect();
        let mut sorted = routes.clone();
        sorted.sort();
        assert_eq!(routes, sorted);
    }

    #[test]
    fn test_budget_filter_is_inclusive_and_complete() {
        let graph = RouteGraph::demo();
        // Tour tariffs from A to E: ABCDE 15000, ABDCE 16000, ACBDE 19000,
        // ACDBE 16000, ADBCE 21000, ADCBE 17000
        let results = exhaustive_routes(&graph, A, E, 16000).unwrap();
        let routes: Vec<_> = results.iter().map(|r| r.route.clone()).collect();
        assert_eq!(
            routes,
            vec![
                vec![A, B, C, D, E],
                vec![A, B, D, C, E],
                vec![A, C, D, B, E]
            ]
        );

        let results = exhaustive_routes(&graph, A, E, 15000).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].route, vec![A, B, C, D, E]);
        assert_eq!(results[0].tariff, 15000);

        assert!(exhaustive_routes(&graph, A, E, 14999).unwrap().is_empty());
    }

    #[test]
    fn test_every_tour_accounted_for() {
        let graph = RouteGraph::demo();
        let budget = 17000;
        let all = exhaustive_routes(&graph, A, E, u64::MAX).unwrap();
        let within = exhaustive_routes(&graph, A, E, budget).unwrap();
        let expected: Vec<_> = all.into_iter().filter(|r| r.tariff <= budget).collect();
        assert_eq!(within, expected);
    }

    #[test]
    fn test_tiny_budget_is_empty() {
        let graph = RouteGraph::demo();
        assert!(exhaustive_routes(&graph, A, E, 1).unwrap().is_empty());
    }

    #[test]
    fn test_same_start_and_end_has_no_tour() {
        let graph = RouteGraph::demo();
        assert!(exhaustive_routes(&graph, C, C, u64::MAX).unwrap().is_empty());
    }

    #[test]
    fn test_full_length_greedy_route_is_a_candidate() {
        let graph = RouteGraph::demo();
        for start in City::ALL {
            for end in City::ALL {
                let Some(greedy) = greedy_route(&graph, start, end, u64::MAX)
                    .unwrap()
                    .into_route()
                else {
                    continue;
                };
                if greedy.route.len() != graph.node_count() {
                    continue;
                }
                let tours = exhaustive_routes(&graph, start, end, u64::MAX).unwrap();
                assert!(tours.iter().any(|tour| tour.route == greedy.route));
            }
        }
    }

    #[test]
    fn test_skips_tours_over_missing_edges() {
        // A - B - C chain, no A - C edge
        let edges = EdgeSpec::both_ways(A, B, 1.0, 10)
            .into_iter()
            .chain(EdgeSpec::both_ways(B, C, 2.0, 20));
        let graph = RouteGraph::new([A, B, C], edges).unwrap();

        let results = exhaustive_routes(&graph, A, C, 100).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].route, vec![A, B, C]);
        assert!(exhaustive_routes(&graph, A, B, 100).unwrap().is_empty());
    }

    #[test]
    fn test_tariff_overflow_excludes_tour() {
        let huge = 1u64 << 63;
        let edges = EdgeSpec::both_ways(A, B, 1.0, huge)
            .into_iter()
            .chain(EdgeSpec::both_ways(B, C, 1.0, huge))
            .chain(EdgeSpec::both_ways(A, C, 1.0, 1));
        let graph = RouteGraph::new([A, B, C], edges).unwrap();

        // A -> B -> C costs 2^64, A -> C -> B costs 2^63 + 1
        assert!(exhaustive_routes(&graph, A, C, u64::MAX).unwrap().is_empty());
        let results = exhaustive_routes(&graph, A, B, u64::MAX).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].route, vec![A, C, B]);
        assert_eq!(results[0].tariff, huge + 1);
    }

    #[test]
    fn test_size_limit() {
        assert!(check_enumerable(City::ALL.len()).is_ok());
        assert!(check_enumerable(MAX_EXHAUSTIVE_NODES).is_ok());
        assert_eq!(
            check_enumerable(MAX_EXHAUSTIVE_NODES + 1),
            Err(RoutingError::GraphTooLarge {
                nodes: MAX_EXHAUSTIVE_NODES + 1,
                limit: MAX_EXHAUSTIVE_NODES,
            })
        );
    }

    #[test]
    fn test_unknown_city_is_an_error() {
        let graph = RouteGraph::new([A, B], EdgeSpec::both_ways(A, B, 1.0, 1)).unwrap();
        assert_eq!(
            exhaustive_routes(&graph, A, C, 10),
            Err(RoutingError::UnknownNode("C".to_string()))
        );
    }
}
