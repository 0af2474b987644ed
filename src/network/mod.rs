/*
 * This module defines the city graph searched by the routers.
 * It provides the closed set of cities, edge weights, and the immutable graph built from them.
 */

pub mod city;
pub mod edge;
pub mod route_graph;
