//! Splitting a path into per-line legs.

use crate::domain::{EvaluationError, LineId, Vertex};
use crate::graph::Graph;

/// A stretch of a route ridden on one line.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    /// Line ridden.
    pub line: LineId,

    /// Stations from boarding to alighting, both inclusive.
    pub stations: Vec<Vertex>,
}

impl RouteLeg {
    /// Station where the leg starts.
    pub fn board(&self) -> Vertex {
        self.stations[0]
    }

    /// Station where the leg ends.
    pub fn alight(&self) -> Vertex {
        self.stations[self.stations.len() - 1]
    }
}

/// A path grouped into consecutive legs on the same line.
///
/// Consecutive legs share a station: the transfer point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Itinerary {
    legs: Vec<RouteLeg>,
}

impl Itinerary {
    /// Group `path` by the line of each edge it uses.
    ///
    /// A path of one station has no legs.
    pub fn from_path(graph: &Graph, path: &[Vertex]) -> Result<Self, EvaluationError> {
        let mut legs: Vec<RouteLeg> = Vec::new();

        for pair in path.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let line = graph
                .find_edge(from, to)?
                .and_then(|e| e.line.clone())
                .ok_or(EvaluationError::NotConnected { from, to })?;

            match legs.last_mut() {
                Some(leg) if leg.line == line => leg.stations.push(to),
                _ => legs.push(RouteLeg {
                    line,
                    stations: vec![from, to],
                }),
            }
        }

        Ok(Self { legs })
    }

    /// The legs in travel order.
    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    /// Line of the first leg, if the route goes anywhere.
    pub fn first_line(&self) -> Option<&LineId> {
        self.legs.first().map(|leg| &leg.line)
    }

    /// Stations where the rider changes line.
    pub fn transfer_points(&self) -> Vec<Vertex> {
        self.legs.iter().skip(1).map(RouteLeg::board).collect()
    }

    /// Number of line changes.
    pub fn transfers(&self) -> usize {
        self.legs.len().saturating_sub(1)
    }
}
