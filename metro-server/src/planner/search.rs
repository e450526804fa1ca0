//! Bounded k-path search over the transit graph.
//!
//! Both variants share one skeleton: a priority frontier of partial paths,
//! expanded best-first under a [`Ranking`], bounded by the number of
//! candidates wanted and by the length of the partial path. The visited set
//! is keyed by `(vertex, prefix length)`, so a station may be passed again at
//! a different depth; this enumerates alternatives rather than computing a
//! single shortest path.

use std::collections::{BinaryHeap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::domain::{GraphError, Vertex};
use crate::graph::Graph;

use super::config::SearchConfig;
use super::ranking::{Label, Queued, Ranking, TimeFirst, TransferFirst};

/// Which criterion a route query optimizes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteMode {
    /// Least travel time, fewest transfers as tie-break.
    #[default]
    Fastest,

    /// Fewest transfers, least travel time as tie-break.
    FewestTransfers,
}

/// One complete route from source to destination.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCandidate {
    path: Vec<Vertex>,
    time: f64,
    distance: f64,
    transfers: usize,
}

impl PathCandidate {
    /// Create a candidate from its parts.
    pub fn new(path: Vec<Vertex>, time: f64, distance: f64, transfers: usize) -> Self {
        Self {
            path,
            time,
            distance,
            transfers,
        }
    }

    /// Vertices from source to destination, both inclusive.
    pub fn path(&self) -> &[Vertex] {
        &self.path
    }

    /// Travel time in seconds, including transfer penalties.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Distance in meters.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Number of line changes.
    pub fn transfers(&self) -> usize {
        self.transfers
    }

    /// Number of edges travelled.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Result of a k-path search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Candidates in the variant's primary order, at most `k` of them.
    pub candidates: Vec<PathCandidate>,

    /// Number of frontier entries dequeued.
    pub states_explored: usize,
}

/// Route search over a borrowed graph.
pub struct PathSearch<'a> {
    graph: &'a Graph,
    config: &'a SearchConfig,
}

impl<'a> PathSearch<'a> {
    /// Create a new search.
    pub fn new(graph: &'a Graph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Search using the ranking selected by `mode`.
    pub fn find(
        &self,
        mode: RouteMode,
        start: Vertex,
        end: Vertex,
    ) -> Result<SearchResult, GraphError> {
        match mode {
            RouteMode::Fastest => self.time_optimal(start, end),
            RouteMode::FewestTransfers => self.transfer_optimal(start, end),
        }
    }

    /// Up to `k` paths, fewest transfers first.
    pub fn transfer_optimal(&self, start: Vertex, end: Vertex) -> Result<SearchResult, GraphError> {
        self.run::<TransferFirst>(start, end)
    }

    /// Up to `k` paths, least time first.
    pub fn time_optimal(&self, start: Vertex, end: Vertex) -> Result<SearchResult, GraphError> {
        self.run::<TimeFirst>(start, end)
    }

    fn run<R: Ranking>(&self, start: Vertex, end: Vertex) -> Result<SearchResult, GraphError> {
        self.graph.validate(start)?;
        self.graph.validate(end)?;

        let k = self.config.max_results;
        let penalty = self.config.transfer_penalty_secs as f64;

        let mut frontier: BinaryHeap<Queued<R>> = BinaryHeap::new();
        frontier.push(Queued::new(Label::origin(start)));

        let mut visited: HashMap<(Vertex, usize), R::Score> = HashMap::new();
        let mut candidates = Vec::new();
        let mut states_explored = 0;

        while candidates.len() < k {
            let Some(queued) = frontier.pop() else {
                break;
            };
            let label = queued.label;
            states_explored += 1;

            if label.prefix.len() > self.config.max_path_length {
                continue;
            }

            if label.vertex == end {
                trace!(
                    ranking = R::NAME,
                    time = label.time,
                    transfers = label.transfers,
                    "candidate found"
                );
                candidates.push(label.into_candidate());
                continue;
            }

            let key = (label.vertex, label.prefix.len());
            let score = R::score(&label);
            if visited.get(&key).is_some_and(|best| *best <= score) {
                continue;
            }
            visited.insert(key, score);

            // Line of the edge that brought us here; `None` at the origin.
            let arrived_on = match label.prefix.last() {
                Some(&prev) => Some(self.graph.edge(prev, label.vertex)?.line),
                None => None,
            };

            for edge in self.graph.out_edges(label.vertex)? {
                if !edge.active {
                    continue;
                }

                let mut prefix = Vec::with_capacity(label.prefix.len() + 1);
                prefix.extend_from_slice(&label.prefix);
                prefix.push(label.vertex);

                let mut next = Label {
                    time: label.time + edge.time,
                    transfers: label.transfers,
                    distance: label.distance + edge.distance,
                    vertex: edge.target,
                    prefix,
                };

                if let Some(previous_line) = &arrived_on {
                    if *previous_line != edge.line {
                        next.transfers += 1;
                        next.time += penalty;
                    }
                }

                frontier.push(Queued::new(next));
            }
        }

        candidates.sort_by(R::compare_candidates);
        candidates.truncate(k);

        debug!(
            ranking = R::NAME,
            start = %start,
            end = %end,
            candidates = candidates.len(),
            states_explored,
            "k-path search complete"
        );

        Ok(SearchResult {
            candidates,
            states_explored,
        })
    }
}

/// Up to `k` paths from `start` to `end`, ordered by transfer count.
///
/// Paths whose prefix exceeds `max_len` stations are not expanded.
pub fn find_transfer_optimal_paths(
    graph: &Graph,
    start: Vertex,
    end: Vertex,
    k: usize,
    max_len: usize,
) -> Result<Vec<PathCandidate>, GraphError> {
    let config = SearchConfig::bounded(k, max_len);
    Ok(PathSearch::new(graph, &config)
        .transfer_optimal(start, end)?
        .candidates)
}

/// Up to `k` paths from `start` to `end`, ordered by travel time.
///
/// Paths whose prefix exceeds `max_len` stations are not expanded.
pub fn find_time_optimal_paths(
    graph: &Graph,
    start: Vertex,
    end: Vertex,
    k: usize,
    max_len: usize,
) -> Result<Vec<PathCandidate>, GraphError> {
    let config = SearchConfig::bounded(k, max_len);
    Ok(PathSearch::new(graph, &config)
        .time_optimal(start, end)?
        .candidates)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
