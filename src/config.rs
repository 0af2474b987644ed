/*!
Graph configuration.

A graph file lists the cities with their canvas positions and the directed edges between
them. Without a file the demo dataset is used.
*/

use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::network::{
    city::City,
    edge::EdgeSpec,
    route_graph::{GraphError, RouteGraph},
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read graph file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse graph file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid graph: {0}")]
    Graph(#[from] GraphError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityConfig {
    pub id: City,
    pub x: f32,
    pub y: f32,
}

/// On-disk form of a graph and its canvas layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default = "default_canvas_size")]
    pub canvas: [f32; 2],
    pub cities: Vec<CityConfig>,
    pub edges: Vec<EdgeSpec>,
}

fn default_canvas_size() -> [f32; 2] {
    [800.0, 600.0]
}

/// Where each city sits on the canvas, in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CityLayout {
    pub size: [f32; 2],
    pub positions: BTreeMap<City, [f32; 2]>,
}

impl CityLayout {
    pub fn position(&self, city: City) -> Option<[f32; 2]> {
        self.positions.get(&city).copied()
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        let positions = [
            (City::A, 400.0, 100.0),
            (City::B, 200.0, 300.0),
            (City::C, 600.0, 300.0),
            (City::D, 200.0, 500.0),
            (City::E, 600.0, 500.0),
        ];
        GraphConfig {
            canvas: default_canvas_size(),
            cities: positions
                .into_iter()
                .map(|(id, x, y)| CityConfig { id, x, y })
                .collect(),
            edges: RouteGraph::demo().edge_specs(),
        }
    }
}

impl GraphConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            cities = config.cities.len(),
            edges = config.edges.len(),
            "Loaded graph configuration"
        );
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to the demo dataset.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration and split it into the searchable graph and its layout.
    pub fn build(&self) -> Result<(RouteGraph, CityLayout), ConfigError> {
        let graph = RouteGraph::new(
            self.cities.iter().map(|city| city.id),
            self.edges.iter().cloned(),
        )?;
        let layout = CityLayout {
            size: self.canvas,
            positions: self
                .cities
                .iter()
                .map(|city| (city.id, [city.x, city.y]))
                .collect(),
        };
        Ok((graph, layout))
    }
}
