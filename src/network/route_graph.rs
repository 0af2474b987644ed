use petgraph::graphmap::DiGraphMap;
use thiserror::Error;
use tracing::debug;

use crate::network::{
    city::City,
    edge::{EdgeSpec, EdgeWeight},
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("Graph has no cities")]
    Empty,
    #[error("City {0} is declared more than once")]
    DuplicateCity(City),
    #[error("Edge {0} -> {0} is a self loop")]
    SelfLoop(City),
    #[error("Edge {0} -> {1} is declared more than once")]
    DuplicateEdge(City, City),
    #[error("Edge {from} -> {to} references undeclared city {missing}")]
    UndeclaredCity { from: City, to: City, missing: City },
    #[error("Edge {0} -> {1} has a non-positive or non-finite distance {2}")]
    InvalidDistance(City, City, f64),
    #[error("Edge {0} -> {1} has a zero tariff")]
    ZeroTariff(City, City),
}

/// Immutable city graph searched by the routers.
///
/// Every edge is directed; an undirected connection is two edges. Once built the
/// graph is never mutated, so it can be shared freely between searches.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    graph: DiGraphMap<City, EdgeWeight>,
}

impl RouteGraph {
    /// Build a graph from declared cities and directed edges, validating every edge.
    pub fn new<C, E>(cities: C, edges: E) -> Result<Self, GraphError>
    where
        C: IntoIterator<Item = City>,
        E: IntoIterator<Item = EdgeSpec>,
    {
        let mut graph = DiGraphMap::new();
        for city in cities {
            if graph.contains_node(city) {
                return Err(GraphError::DuplicateCity(city));
            }
            graph.add_node(city);
        }
        if graph.node_count() == 0 {
            return Err(GraphError::Empty);
        }

        for spec in edges {
            let (from, to) = (spec.from, spec.to);
            if from == to {
                return Err(GraphError::SelfLoop(from));
            }
            for endpoint in [from, to] {
                if !graph.contains_node(endpoint) {
                    return Err(GraphError::UndeclaredCity { from, to, missing: endpoint });
                }
            }
            if !spec.distance.is_finite() || spec.distance <= 0.0 {
                return Err(GraphError::InvalidDistance(from, to, spec.distance));
            }
            if spec.tariff == 0 {
                return Err(GraphError::ZeroTariff(from, to));
            }
            if graph.add_edge(from, to, spec.weight()).is_some() {
                return Err(GraphError::DuplicateEdge(from, to));
            }
        }

        debug!(
            cities = graph.node_count(),
            edges = graph.edge_count(),
            "Built route graph"
        );
        Ok(RouteGraph { graph })
    }

    /// The five-city dataset the demo ships with. Complete and symmetric.
    pub fn demo() -> Self {
        use City::*;
        let connections = [
            (A, B, 3.0, 3000),
            (A, C, 4.0, 4000),
            (A, D, 5.0, 5000),
            (A, E, 3.0, 3000),
            (B, C, 6.0, 6000),
            (B, D, 6.0, 6000),
            (B, E, 3.0, 3000),
            (C, D, 3.0, 3000),
            (C, E, 4.0, 4000),
            (D, E, 3.0, 3000),
        ];
        let edges = connections
            .into_iter()
            .flat_map(|(a, b, distance, tariff)| EdgeSpec::both_ways(a, b, distance, tariff));

        let mut graph = DiGraphMap::new();
        for city in City::ALL {
            graph.add_node(city);
        }
        for spec in edges {
            graph.add_edge(spec.from, spec.to, spec.weight());
        }
        RouteGraph { graph }
    }

    pub fn contains(&self, city: City) -> bool {
        self.graph.contains_node(city)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Cities in ascending order.
    pub fn cities(&self) -> Vec<City> {
        let mut cities: Vec<City> = self.graph.nodes().collect();
        cities.sort();
        cities
    }

    pub fn weight(&self, from: City, to: City) -> Option<EdgeWeight> {
        self.graph.edge_weight(from, to).copied()
    }

    /// Outgoing edges of `city` as `(neighbor, weight)` pairs.
    pub fn neighbors(&self, city: City) -> impl Iterator<Item = (City, EdgeWeight)> + '_ {
        self.graph.edges(city).map(|(_, to, weight)| (to, *weight))
    }

    /// All directed edges, used by the canvas and by config export.
    pub fn edges(&self) -> impl Iterator<Item = (City, City, EdgeWeight)> + '_ {
        self.graph.all_edges().map(|(from, to, weight)| (from, to, *weight))
    }

    pub fn edge_specs(&self) -> Vec<EdgeSpec> {
        self.edges()
            .map(|(from, to, weight)| EdgeSpec::new(from, to, weight.distance, weight.tariff))
            .collect()
    }
}
