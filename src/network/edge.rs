use serde::{Deserialize, Serialize};

use crate::network::city::City;

/// Weight of a directed edge: travel distance and the tariff charged for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeWeight {
    pub distance: f64,
    pub tariff: u64,
}

impl EdgeWeight {
    pub fn new(distance: f64, tariff: u64) -> Self {
        EdgeWeight { distance, tariff }
    }
}

/// Wire form of an edge as it appears in graph configuration files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: City,
    pub to: City,
    pub distance: f64,
    pub tariff: u64,
}

impl EdgeSpec {
    pub fn new(from: City, to: City, distance: f64, tariff: u64) -> Self {
        EdgeSpec { from, to, distance, tariff }
    }

    pub fn weight(&self) -> EdgeWeight {
        EdgeWeight::new(self.distance, self.tariff)
    }

    /// Both directions of an undirected connection.
    pub fn both_ways(a: City, b: City, distance: f64, tariff: u64) -> [EdgeSpec; 2] {
        [
            EdgeSpec::new(a, b, distance, tariff),
            EdgeSpec::new(b, a, distance, tariff),
        ]
    }
}
