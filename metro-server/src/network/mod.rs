//! The transit network: graph, station names and line state together.
//!
//! A [`Network`] is built once from a [`Topology`] and then lives for the
//! whole process. Line closures are applied to it in place and accumulate
//! until reopened or reset.

mod names;
mod topology;

use std::collections::BTreeSet;
use std::path::Path;

use tracing::info;

use crate::domain::{LineId, Vertex};
use crate::graph::{self, Graph};

pub use names::{StationIndex, best_match, rank_matches};
pub use topology::{LinkRecord, LoadError, StationRecord, Topology};

/// Build the graph for `topology`; every edge starts active.
///
/// Stations get vertices in the topology's (name) order.
pub fn build_graph(topology: &Topology) -> Result<(Graph, StationIndex), LoadError> {
    topology.validate()?;

    let stations = StationIndex::new(topology.stations().map(|(name, _)| name));
    let mut graph = Graph::with_vertices(stations.len());

    for (index, (name, record)) in topology.stations().enumerate() {
        let from = Vertex(index);
        for link in &record.links {
            let to = stations
                .vertex(&link.station)
                .ok_or_else(|| unknown(name, &link.station))?;
            graph.add_edge(from, to, link.time, link.distance, link.line.clone(), true)?;
        }
    }

    Ok((graph, stations))
}

fn unknown(from: &str, to: &str) -> LoadError {
    LoadError::UnknownStation {
        from: from.to_string(),
        to: to.to_string(),
    }
}

/// A line and whether it is currently running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStatus {
    pub line: LineId,
    pub open: bool,
}

/// Graph plus name lookup plus closed-line bookkeeping.
#[derive(Debug, Clone)]
pub struct Network {
    graph: Graph,
    stations: StationIndex,
    lines: BTreeSet<LineId>,
    closed: BTreeSet<LineId>,
}

impl Network {
    /// Build a network from a topology.
    pub fn from_topology(topology: &Topology) -> Result<Self, LoadError> {
        let (graph, stations) = build_graph(topology)?;

        // Lines named by stations count even if no link uses them.
        let mut lines = graph::line_ids(&graph);
        for (_, record) in topology.stations() {
            lines.extend(record.lines.iter().cloned());
        }

        info!(
            stations = stations.len(),
            edges = graph.edge_count(),
            lines = lines.len(),
            "network built"
        );

        Ok(Self {
            graph,
            stations,
            lines,
            closed: BTreeSet::new(),
        })
    }

    /// Load the station file at `path` and build a network from it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::from_topology(&Topology::load(path)?)
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Station name lookup.
    pub fn stations(&self) -> &StationIndex {
        &self.stations
    }

    /// Name of a station, or its index if the vertex is unknown.
    pub fn station_name(&self, vertex: Vertex) -> String {
        self.stations
            .name(vertex)
            .map(str::to_string)
            .unwrap_or_else(|| vertex.to_string())
    }

    /// Resolve a typed station name.
    pub fn resolve_station(&self, query: &str) -> Option<Vertex> {
        self.stations.resolve(query)
    }

    /// Resolve a typed line name against the known lines.
    pub fn resolve_line(&self, query: &str) -> Option<LineId> {
        if let Ok(exact) = LineId::parse(query) {
            if self.lines.contains(&exact) {
                return Some(exact);
            }
        }
        let name = best_match(query, self.lines.iter().map(LineId::as_str))?;
        LineId::parse(name).ok()
    }

    /// Every known line, with its current state.
    pub fn lines(&self) -> Vec<LineStatus> {
        self.lines
            .iter()
            .map(|line| LineStatus {
                line: line.clone(),
                open: !self.closed.contains(line),
            })
            .collect()
    }

    /// Returns true if `line` has been closed.
    pub fn is_closed(&self, line: &LineId) -> bool {
        self.closed.contains(line)
    }

    /// Take a line out of service. Returns the number of edges affected.
    pub fn close_line(&mut self, line: &LineId) -> usize {
        self.closed.insert(line.clone());
        let edges = graph::deactivate_line(&mut self.graph, line);
        info!(line = %line, edges, "line closed");
        edges
    }

    /// Put a line back into service. Returns the number of edges affected.
    pub fn open_line(&mut self, line: &LineId) -> usize {
        self.closed.remove(line);
        let edges = graph::activate_line(&mut self.graph, line);
        info!(line = %line, edges, "line opened");
        edges
    }

    /// Reopen every line.
    pub fn reset(&mut self) {
        self.graph.activate_all();
        self.closed.clear();
        info!("all lines reopened");
    }
}
