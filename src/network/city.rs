use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::routing::RoutingError;

/// A city in the route graph. The set is closed; graphs may contain any subset of it.
///
/// Ordering is lexicographic on the label, which the greedy tie-break and the
/// permutation generator both rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum City {
    A,
    B,
    C,
    D,
    E,
}

impl City {
    pub const ALL: [City; 5] = [City::A, City::B, City::C, City::D, City::E];

    pub fn label(&self) -> &'static str {
        match self {
            City::A => "A",
            City::B => "B",
            City::C => "C",
            City::D => "D",
            City::E => "E",
        }
    }
}

impl Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for City {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        City::ALL
            .into_iter()
            .find(|city| city.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RoutingError::UnknownNode(s.to_string()))
    }
}
