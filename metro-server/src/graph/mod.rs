//! Adjacency-list graph of the transit network.
//!
//! Vertices are stations identified by position; each directed edge carries
//! travel time, distance, the line it belongs to and an active flag. The
//! active flag is the only field mutated after construction (see [`lines`]).

pub mod lines;

use crate::domain::{GraphError, LineId, Vertex};

pub use lines::{activate_line, deactivate_line, line_ids, set_line_active};

/// A directed connection between two stations on a specific line.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Station this edge leads to.
    pub target: Vertex,

    /// Travel time in seconds. Infinite on the missing-edge sentinel.
    pub time: f64,

    /// Distance in meters. Infinite on the missing-edge sentinel.
    pub distance: f64,

    /// Line the edge belongs to. `None` only on the missing-edge sentinel.
    pub line: Option<LineId>,

    /// Whether the edge is currently in service.
    pub active: bool,
}

impl Edge {
    /// Create an active edge on `line`.
    pub fn new(target: Vertex, time: f64, distance: f64, line: LineId) -> Self {
        Self {
            target,
            time,
            distance,
            line: Some(line),
            active: true,
        }
    }

    /// The value returned by [`Graph::edge`] when no edge exists.
    pub fn missing(target: Vertex) -> Self {
        Self {
            target,
            time: f64::INFINITY,
            distance: f64::INFINITY,
            line: None,
            active: false,
        }
    }

    /// Returns true for the missing-edge sentinel.
    pub fn is_missing(&self) -> bool {
        self.line.is_none()
    }

    /// Returns true if this edge belongs to `line`.
    pub fn is_on(&self, line: &LineId) -> bool {
        self.line.as_ref() == Some(line)
    }
}

/// Directed graph stored as one target-sorted adjacency list per vertex.
///
/// Within one adjacency list there is at most one edge per target.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with `count` vertices and no edges.
    pub fn with_vertices(count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); count],
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges, active or not.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Append a vertex with no outgoing edges and return its index.
    pub fn add_vertex(&mut self) -> Vertex {
        self.adjacency.push(Vec::new());
        Vertex(self.adjacency.len() - 1)
    }

    /// Iterate over every vertex index.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        (0..self.adjacency.len()).map(Vertex)
    }

    /// Returns true if `v` names a vertex of this graph.
    pub fn contains(&self, v: Vertex) -> bool {
        v.0 < self.adjacency.len()
    }

    /// Insert the edge `vi -> vj`, or overwrite it if one already exists.
    ///
    /// The adjacency list of `vi` stays sorted by target.
    pub fn add_edge(
        &mut self,
        vi: Vertex,
        vj: Vertex,
        time: f64,
        distance: f64,
        line: LineId,
        active: bool,
    ) -> Result<(), GraphError> {
        self.validate(vi)?;
        self.validate(vj)?;

        let edge = Edge {
            target: vj,
            time,
            distance,
            line: Some(line),
            active,
        };

        let row = &mut self.adjacency[vi.0];
        match row.binary_search_by_key(&vj, |e| e.target) {
            Ok(pos) => row[pos] = edge,
            Err(pos) => row.insert(pos, edge),
        }
        Ok(())
    }

    /// Look up the edge `vi -> vj` without the sentinel.
    pub fn find_edge(&self, vi: Vertex, vj: Vertex) -> Result<Option<&Edge>, GraphError> {
        self.validate(vi)?;
        self.validate(vj)?;

        let row = &self.adjacency[vi.0];
        Ok(row
            .binary_search_by_key(&vj, |e| e.target)
            .ok()
            .map(|pos| &row[pos]))
    }

    /// Look up the edge `vi -> vj`.
    ///
    /// Returns [`Edge::missing`] when the vertices are valid but not
    /// connected; only bad indices are an error.
    pub fn edge(&self, vi: Vertex, vj: Vertex) -> Result<Edge, GraphError> {
        Ok(self
            .find_edge(vi, vj)?
            .cloned()
            .unwrap_or_else(|| Edge::missing(vj)))
    }

    /// All edges leaving `vi`, including inactive ones.
    pub fn out_edges(&self, vi: Vertex) -> Result<&[Edge], GraphError> {
        self.validate(vi)?;
        Ok(&self.adjacency[vi.0])
    }

    /// Mark every edge active again.
    ///
    /// Time and distance are never touched by activation, so this restores
    /// the graph to its freshly-built state.
    pub fn activate_all(&mut self) {
        for edge in self.adjacency.iter_mut().flatten() {
            edge.active = true;
        }
    }

    /// Iterate mutably over every edge of the graph.
    pub(crate) fn edges_mut(&mut self) -> impl Iterator<Item = &mut Edge> + '_ {
        self.adjacency.iter_mut().flatten()
    }

    /// Iterate over every edge of the graph.
    pub(crate) fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency.iter().flatten()
    }

    /// Fail with [`GraphError::InvalidVertex`] unless `v` is in range.
    pub fn validate(&self, v: Vertex) -> Result<(), GraphError> {
        if self.contains(v) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: v,
                vertex_count: self.vertex_count(),
            })
        }
    }
}
